use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use elimu_domain::employee::EmployeePosition;
use elimu_domain::id::SchoolId;
use elimu_schools::domain::types::{
    Classroom, NewClassroom, NewEmployee, NewSchool, NewStudent, School, StudentCascade,
};
use elimu_schools::service::SchoolService;
use elimu_schools::state::AppState;
use elimu_schools_migration::Migrator;

/// Fresh in-memory SQLite database with every migration applied.
///
/// The pool holds a single connection so every query sees the same memory
/// database.
pub async fn migrated_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn service_with(cascade: StudentCascade) -> SchoolService {
    SchoolService::new(AppState {
        db: migrated_db().await,
        student_cascade: cascade,
    })
}

pub async fn service() -> SchoolService {
    service_with(StudentCascade::default()).await
}

pub fn new_school(name: &str) -> NewSchool {
    NewSchool {
        name: name.to_owned(),
        address: Some("12 Harambee Avenue".to_owned()),
    }
}

pub fn new_teacher(first_name: &str) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_owned(),
        last_name: "Otieno".to_owned(),
        position: EmployeePosition::Teacher,
    }
}

pub fn new_student(first_name: &str) -> NewStudent {
    NewStudent {
        first_name: first_name.to_owned(),
        last_name: "Achieng".to_owned(),
    }
}

pub async fn seed_school(service: &SchoolService, name: &str) -> School {
    service.register_school(new_school(name)).await.unwrap()
}

pub async fn seed_classroom(service: &SchoolService, school_id: SchoolId) -> Classroom {
    service
        .register_classroom(
            NewClassroom {
                name: "Form 1 East".to_owned(),
                grade: 9,
                capacity: 45,
            },
            school_id,
        )
        .await
        .unwrap()
}
