use elimu_domain::id::SchoolId;

use crate::domain::repository::SchoolRepository;
use crate::domain::types::{NewSchool, School, SchoolRemoval, StudentCascade, validate_name};
use crate::error::SchoolServiceError;

// ── CountSchools ─────────────────────────────────────────────────────────────

pub struct CountSchoolsUseCase<R: SchoolRepository> {
    pub repo: R,
}

impl<R: SchoolRepository> CountSchoolsUseCase<R> {
    pub async fn execute(&self) -> Result<u64, SchoolServiceError> {
        self.repo.count().await
    }
}

// ── RegisterSchool ───────────────────────────────────────────────────────────

pub struct RegisterSchoolUseCase<R: SchoolRepository> {
    pub repo: R,
}

impl<R: SchoolRepository> RegisterSchoolUseCase<R> {
    pub async fn execute(&self, school: NewSchool) -> Result<School, SchoolServiceError> {
        validate_name("school name", &school.name).map_err(SchoolServiceError::InvalidInput)?;
        self.repo.create(&school).await
    }
}

// ── UpdateSchoolInformation ──────────────────────────────────────────────────

pub struct UpdateSchoolInformationUseCase<R: SchoolRepository> {
    pub repo: R,
}

impl<R: SchoolRepository> UpdateSchoolInformationUseCase<R> {
    pub async fn execute(&self, school: School) -> Result<School, SchoolServiceError> {
        validate_name("school name", &school.name).map_err(SchoolServiceError::InvalidInput)?;
        self.repo
            .update(&school)
            .await?
            .ok_or(SchoolServiceError::SchoolNotFound)
    }
}

// ── FindSchool ───────────────────────────────────────────────────────────────

pub struct FindSchoolUseCase<R: SchoolRepository> {
    pub repo: R,
}

impl<R: SchoolRepository> FindSchoolUseCase<R> {
    /// An unregistered id yields `Ok(None)`, not an error.
    pub async fn execute(&self, id: SchoolId) -> Result<Option<School>, SchoolServiceError> {
        self.repo.find_by_id(id).await
    }
}

// ── RetrieveAllSchools ───────────────────────────────────────────────────────

pub struct RetrieveAllSchoolsUseCase<R: SchoolRepository> {
    pub repo: R,
}

impl<R: SchoolRepository> RetrieveAllSchoolsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<School>, SchoolServiceError> {
        self.repo.list().await
    }
}

// ── UnregisterSchool ─────────────────────────────────────────────────────────

pub struct UnregisterSchoolUseCase<R: SchoolRepository> {
    pub repo: R,
    pub cascade: StudentCascade,
}

impl<R: SchoolRepository> UnregisterSchoolUseCase<R> {
    pub async fn execute(&self, id: SchoolId) -> Result<(), SchoolServiceError> {
        match self.repo.delete_with_dependents(id, self.cascade).await? {
            SchoolRemoval::Removed => Ok(()),
            SchoolRemoval::Missing => Err(SchoolServiceError::SchoolNotFound),
            SchoolRemoval::HasStudents => Err(SchoolServiceError::SchoolHasStudents),
        }
    }
}
