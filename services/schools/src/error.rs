/// Schools service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum SchoolServiceError {
    #[error("school not found")]
    SchoolNotFound,
    #[error("classroom not found")]
    ClassroomNotFound,
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("student not found")]
    StudentNotFound,
    /// A record points at a school row that no longer exists.
    #[error("referenced school no longer exists")]
    ReferencedSchoolMissing,
    #[error("school still has students")]
    SchoolHasStudents,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl SchoolServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SchoolNotFound => "SCHOOL_NOT_FOUND",
            Self::ClassroomNotFound => "CLASSROOM_NOT_FOUND",
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::StudentNotFound => "STUDENT_NOT_FOUND",
            Self::ReferencedSchoolMissing => "ENTITY_NOT_FOUND",
            Self::SchoolHasStudents => "SCHOOL_HAS_STUDENTS",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Identifier absent, or present but not attached to the requested school.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SchoolNotFound
                | Self::ClassroomNotFound
                | Self::EmployeeNotFound
                | Self::StudentNotFound
        )
    }
}
