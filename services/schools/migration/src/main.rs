use sea_orm_migration::prelude::*;

use elimu_schools_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
