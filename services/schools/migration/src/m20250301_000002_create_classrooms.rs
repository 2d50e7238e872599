use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classrooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classrooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classrooms::SchoolId).integer().not_null())
                    .col(ColumnDef::new(Classrooms::Name).string().not_null())
                    .col(ColumnDef::new(Classrooms::Grade).small_integer().not_null())
                    .col(ColumnDef::new(Classrooms::Capacity).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classrooms::Table, Classrooms::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classrooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Classrooms {
    Table,
    Id,
    SchoolId,
    Name,
    Grade,
    Capacity,
}

#[derive(Iden)]
enum Schools {
    Table,
    Id,
}
