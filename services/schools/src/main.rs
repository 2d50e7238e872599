use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use sea_orm::Database;
use serde_json::json;

use elimu_core::config::Config;
use elimu_core::tracing::init_tracing;
use elimu_schools::cli::{self, Cli};
use elimu_schools::config::SchoolsConfig;
use elimu_schools::error::SchoolServiceError;
use elimu_schools::service::SchoolService;
use elimu_schools::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = SchoolsConfig::from_env().context("failed to load configuration")?;
    init_tracing(config.log_format);

    let db = Database::connect(config.connect_options())
        .await
        .context("failed to connect to database")?;

    let service = SchoolService::new(AppState {
        db,
        student_cascade: config.student_cascade,
    });

    match cli::run(cli.command, &service).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        // Domain failures are reported as JSON; anything else bubbles up.
        Err(err) => match err.downcast_ref::<SchoolServiceError>() {
            Some(domain) => {
                let report = json!({ "error": domain.kind(), "message": domain.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&report)?);
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}
