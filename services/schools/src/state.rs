use sea_orm::DatabaseConnection;

use crate::domain::types::StudentCascade;
use crate::infra::db::{
    DbClassroomRepository, DbEmployeeRepository, DbSchoolRepository, DbStudentRepository,
};

/// Shared application state handed to the service facade.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub student_cascade: StudentCascade,
}

impl AppState {
    pub fn school_repo(&self) -> DbSchoolRepository {
        DbSchoolRepository {
            db: self.db.clone(),
        }
    }

    pub fn classroom_repo(&self) -> DbClassroomRepository {
        DbClassroomRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn student_repo(&self) -> DbStudentRepository {
        DbStudentRepository {
            db: self.db.clone(),
        }
    }
}
