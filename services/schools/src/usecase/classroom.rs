use elimu_domain::id::SchoolId;

use crate::domain::repository::{ClassroomRepository, SchoolRepository};
use crate::domain::types::{Classroom, NewClassroom, validate_name};
use crate::error::SchoolServiceError;

// ── RegisterClassroom ────────────────────────────────────────────────────────

pub struct RegisterClassroomUseCase<R: SchoolRepository, C: ClassroomRepository> {
    pub schools: R,
    pub classrooms: C,
}

impl<R: SchoolRepository, C: ClassroomRepository> RegisterClassroomUseCase<R, C> {
    pub async fn execute(
        &self,
        classroom: NewClassroom,
        school_id: SchoolId,
    ) -> Result<Classroom, SchoolServiceError> {
        validate_name("classroom name", &classroom.name)
            .map_err(SchoolServiceError::InvalidInput)?;
        if classroom.capacity <= 0 {
            return Err(SchoolServiceError::InvalidInput(
                "classroom capacity must be positive".into(),
            ));
        }
        if self.schools.find_by_id(school_id).await?.is_none() {
            return Err(SchoolServiceError::SchoolNotFound);
        }
        self.classrooms.create(school_id, &classroom).await
    }
}

// ── RetrieveAllClassrooms ────────────────────────────────────────────────────

pub struct RetrieveAllClassroomsUseCase<C: ClassroomRepository> {
    pub repo: C,
}

impl<C: ClassroomRepository> RetrieveAllClassroomsUseCase<C> {
    pub async fn execute(&self, school_id: SchoolId) -> Result<Vec<Classroom>, SchoolServiceError> {
        self.repo.list_by_school(school_id).await
    }
}
