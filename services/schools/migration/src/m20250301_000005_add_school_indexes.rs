use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Employees::Table)
                    .col(Employees::SchoolId)
                    .name("idx_employees_school_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Classrooms::Table)
                    .col(Classrooms::SchoolId)
                    .name("idx_classrooms_school_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Students::Table)
                    .col(Students::SchoolId)
                    .col(Students::ClassroomId)
                    .name("idx_students_school_id_classroom_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_school_id_classroom_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_classrooms_school_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_employees_school_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    SchoolId,
}

#[derive(Iden)]
enum Classrooms {
    Table,
    SchoolId,
}

#[derive(Iden)]
enum Students {
    Table,
    SchoolId,
    ClassroomId,
}
