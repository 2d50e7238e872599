use elimu_domain::id::{ClassroomId, SchoolId, StudentId};

use crate::domain::repository::{ClassroomRepository, SchoolRepository, StudentRepository};
use crate::domain::types::{NewStudent, Student, validate_name};
use crate::error::SchoolServiceError;

// ── RegisterStudent ──────────────────────────────────────────────────────────

pub struct RegisterStudentUseCase<S: SchoolRepository, C: ClassroomRepository, T: StudentRepository>
{
    pub schools: S,
    pub classrooms: C,
    pub students: T,
}

impl<S: SchoolRepository, C: ClassroomRepository, T: StudentRepository>
    RegisterStudentUseCase<S, C, T>
{
    /// The classroom must be attached to the same school.
    pub async fn execute(
        &self,
        student: NewStudent,
        school_id: SchoolId,
        classroom_id: ClassroomId,
    ) -> Result<Student, SchoolServiceError> {
        validate_name("first name", &student.first_name)
            .and_then(|()| validate_name("last name", &student.last_name))
            .map_err(SchoolServiceError::InvalidInput)?;
        if self.schools.find_by_id(school_id).await?.is_none() {
            return Err(SchoolServiceError::SchoolNotFound);
        }
        if self
            .classrooms
            .find_in_school(school_id, classroom_id)
            .await?
            .is_none()
        {
            return Err(SchoolServiceError::ClassroomNotFound);
        }
        self.students.create(school_id, classroom_id, &student).await
    }
}

// ── UnregisterStudent ────────────────────────────────────────────────────────

pub struct UnregisterStudentUseCase<S: SchoolRepository, T: StudentRepository> {
    pub schools: S,
    pub students: T,
}

impl<S: SchoolRepository, T: StudentRepository> UnregisterStudentUseCase<S, T> {
    pub async fn execute(
        &self,
        school_id: SchoolId,
        student_id: StudentId,
    ) -> Result<(), SchoolServiceError> {
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .filter(|s| s.school_id == school_id)
            .ok_or(SchoolServiceError::StudentNotFound)?;

        if self.schools.find_by_id(student.school_id).await?.is_none() {
            return Err(SchoolServiceError::ReferencedSchoolMissing);
        }

        if !self.students.delete(&student).await? {
            return Err(SchoolServiceError::StudentNotFound);
        }
        Ok(())
    }
}

// ── RetrieveAllStudents ──────────────────────────────────────────────────────

pub struct RetrieveAllStudentsUseCase<T: StudentRepository> {
    pub repo: T,
}

impl<T: StudentRepository> RetrieveAllStudentsUseCase<T> {
    pub async fn execute(
        &self,
        school_id: SchoolId,
        classroom_id: Option<ClassroomId>,
    ) -> Result<Vec<Student>, SchoolServiceError> {
        self.repo.list_by_school(school_id, classroom_id).await
    }
}

// ── CountStudents ────────────────────────────────────────────────────────────

pub struct CountStudentsUseCase<T: StudentRepository> {
    pub repo: T,
}

impl<T: StudentRepository> CountStudentsUseCase<T> {
    pub async fn execute(
        &self,
        school_id: SchoolId,
        classroom_id: Option<ClassroomId>,
    ) -> Result<u64, SchoolServiceError> {
        self.repo.count_by_school(school_id, classroom_id).await
    }
}
