#![allow(async_fn_in_trait)]

use elimu_domain::id::{ClassroomId, EmployeeId, SchoolId, StudentId};

use crate::domain::types::{
    Classroom, Employee, NewClassroom, NewEmployee, NewSchool, NewStudent, School, Student,
    SchoolRemoval, StudentCascade,
};
use crate::error::SchoolServiceError;

/// Repository for schools.
pub trait SchoolRepository: Send + Sync {
    async fn count(&self) -> Result<u64, SchoolServiceError>;
    async fn find_by_id(&self, id: SchoolId) -> Result<Option<School>, SchoolServiceError>;
    async fn list(&self) -> Result<Vec<School>, SchoolServiceError>;
    async fn create(&self, school: &NewSchool) -> Result<School, SchoolServiceError>;

    /// Merge `school` into the stored school with the same id. Returns `None`
    /// if no such school is stored.
    async fn update(&self, school: &School) -> Result<Option<School>, SchoolServiceError>;

    /// Atomically delete a school with its employees and classrooms, and with
    /// its students when `cascade` is [`StudentCascade::Delete`]. Under
    /// [`StudentCascade::Restrict`] the student check runs in the same
    /// transaction as the deletes.
    async fn delete_with_dependents(
        &self,
        id: SchoolId,
        cascade: StudentCascade,
    ) -> Result<SchoolRemoval, SchoolServiceError>;
}

/// Repository for classrooms.
pub trait ClassroomRepository: Send + Sync {
    async fn create(
        &self,
        school_id: SchoolId,
        classroom: &NewClassroom,
    ) -> Result<Classroom, SchoolServiceError>;

    /// Find a classroom only if it is attached to `school_id`.
    async fn find_in_school(
        &self,
        school_id: SchoolId,
        classroom_id: ClassroomId,
    ) -> Result<Option<Classroom>, SchoolServiceError>;

    async fn list_by_school(&self, school_id: SchoolId)
    -> Result<Vec<Classroom>, SchoolServiceError>;
}

/// Repository for school employees.
pub trait EmployeeRepository: Send + Sync {
    async fn create(
        &self,
        school_id: SchoolId,
        employee: &NewEmployee,
    ) -> Result<Employee, SchoolServiceError>;
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, SchoolServiceError>;
    async fn list_by_school(&self, school_id: SchoolId)
    -> Result<Vec<Employee>, SchoolServiceError>;
    async fn count_by_school(&self, school_id: SchoolId) -> Result<u64, SchoolServiceError>;

    /// Delete an employee. Returns `true` if a row was deleted.
    async fn delete(&self, employee: &Employee) -> Result<bool, SchoolServiceError>;
}

/// Repository for students.
pub trait StudentRepository: Send + Sync {
    async fn create(
        &self,
        school_id: SchoolId,
        classroom_id: ClassroomId,
        student: &NewStudent,
    ) -> Result<Student, SchoolServiceError>;
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, SchoolServiceError>;

    /// Students of a school, narrowed to one classroom when `classroom_id` is set.
    async fn list_by_school(
        &self,
        school_id: SchoolId,
        classroom_id: Option<ClassroomId>,
    ) -> Result<Vec<Student>, SchoolServiceError>;

    async fn count_by_school(
        &self,
        school_id: SchoolId,
        classroom_id: Option<ClassroomId>,
    ) -> Result<u64, SchoolServiceError>;

    /// Delete a student. Returns `true` if a row was deleted.
    async fn delete(&self, student: &Student) -> Result<bool, SchoolServiceError>;
}
