use tracing::{debug, error, info};

use elimu_domain::id::{ClassroomId, EmployeeId, SchoolId, StudentId};

use crate::domain::types::{
    Classroom, Employee, NewClassroom, NewEmployee, NewSchool, NewStudent, School, Student,
};
use crate::error::SchoolServiceError;
use crate::state::AppState;
use crate::usecase::classroom::{RegisterClassroomUseCase, RetrieveAllClassroomsUseCase};
use crate::usecase::employee::{
    CountEmployeesUseCase, RegisterEmployeeUseCase, RetrieveAllEmployeesUseCase,
    UnregisterEmployeeUseCase,
};
use crate::usecase::school::{
    CountSchoolsUseCase, FindSchoolUseCase, RegisterSchoolUseCase, RetrieveAllSchoolsUseCase,
    UnregisterSchoolUseCase, UpdateSchoolInformationUseCase,
};
use crate::usecase::student::{
    CountStudentsUseCase, RegisterStudentUseCase, RetrieveAllStudentsUseCase,
    UnregisterStudentUseCase,
};

/// Entry point for school administration. Wires each use case to the
/// database-backed repositories of [`AppState`].
#[derive(Clone)]
pub struct SchoolService {
    pub state: AppState,
}

/// Log internal failures once; domain errors pass through silently.
fn logged<T>(
    operation: &'static str,
    result: Result<T, SchoolServiceError>,
) -> Result<T, SchoolServiceError> {
    if let Err(SchoolServiceError::Internal(err)) = &result {
        error!(operation, error = ?err, "school service operation failed");
    }
    result
}

impl SchoolService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    // ── Schools ──────────────────────────────────────────────────────────────

    pub async fn count_schools(&self) -> Result<u64, SchoolServiceError> {
        let usecase = CountSchoolsUseCase {
            repo: self.state.school_repo(),
        };
        logged("count_schools", usecase.execute().await)
    }

    pub async fn register_school(&self, school: NewSchool) -> Result<School, SchoolServiceError> {
        let usecase = RegisterSchoolUseCase {
            repo: self.state.school_repo(),
        };
        let school = logged("register_school", usecase.execute(school).await)?;
        info!(school_id = %school.id, name = %school.name, "school registered");
        Ok(school)
    }

    pub async fn update_school_information(
        &self,
        school: School,
    ) -> Result<School, SchoolServiceError> {
        let usecase = UpdateSchoolInformationUseCase {
            repo: self.state.school_repo(),
        };
        let school = logged("update_school_information", usecase.execute(school).await)?;
        info!(school_id = %school.id, "school information updated");
        Ok(school)
    }

    pub async fn find_school(&self, id: SchoolId) -> Result<Option<School>, SchoolServiceError> {
        let usecase = FindSchoolUseCase {
            repo: self.state.school_repo(),
        };
        logged("find_school", usecase.execute(id).await)
    }

    pub async fn retrieve_all_schools(&self) -> Result<Vec<School>, SchoolServiceError> {
        let usecase = RetrieveAllSchoolsUseCase {
            repo: self.state.school_repo(),
        };
        logged("retrieve_all_schools", usecase.execute().await)
    }

    /// Deletes the school with its employees and classrooms. Students follow
    /// the configured [`StudentCascade`](crate::domain::types::StudentCascade).
    pub async fn unregister_school(&self, id: SchoolId) -> Result<(), SchoolServiceError> {
        let usecase = UnregisterSchoolUseCase {
            repo: self.state.school_repo(),
            cascade: self.state.student_cascade,
        };
        logged("unregister_school", usecase.execute(id).await)?;
        info!(school_id = %id, cascade = ?self.state.student_cascade, "school unregistered");
        Ok(())
    }

    // ── Classrooms ───────────────────────────────────────────────────────────

    pub async fn register_classroom(
        &self,
        classroom: NewClassroom,
        school_id: SchoolId,
    ) -> Result<Classroom, SchoolServiceError> {
        let usecase = RegisterClassroomUseCase {
            schools: self.state.school_repo(),
            classrooms: self.state.classroom_repo(),
        };
        let classroom = logged(
            "register_classroom",
            usecase.execute(classroom, school_id).await,
        )?;
        info!(school_id = %school_id, classroom_id = %classroom.id, "classroom registered");
        Ok(classroom)
    }

    pub async fn retrieve_all_classrooms(
        &self,
        school_id: SchoolId,
    ) -> Result<Vec<Classroom>, SchoolServiceError> {
        let usecase = RetrieveAllClassroomsUseCase {
            repo: self.state.classroom_repo(),
        };
        logged("retrieve_all_classrooms", usecase.execute(school_id).await)
    }

    // ── Employees ────────────────────────────────────────────────────────────

    pub async fn register_employee(
        &self,
        employee: NewEmployee,
        school_id: SchoolId,
    ) -> Result<Employee, SchoolServiceError> {
        let usecase = RegisterEmployeeUseCase {
            schools: self.state.school_repo(),
            employees: self.state.employee_repo(),
        };
        let employee = logged(
            "register_employee",
            usecase.execute(employee, school_id).await,
        )?;
        info!(
            school_id = %school_id,
            employee_id = %employee.id,
            position = %employee.position,
            "employee registered"
        );
        Ok(employee)
    }

    pub async fn unregister_employee(
        &self,
        school_id: SchoolId,
        employee_id: EmployeeId,
    ) -> Result<(), SchoolServiceError> {
        let usecase = UnregisterEmployeeUseCase {
            schools: self.state.school_repo(),
            employees: self.state.employee_repo(),
        };
        logged(
            "unregister_employee",
            usecase.execute(school_id, employee_id).await,
        )?;
        info!(school_id = %school_id, employee_id = %employee_id, "employee unregistered");
        Ok(())
    }

    pub async fn retrieve_all_employees(
        &self,
        school_id: SchoolId,
    ) -> Result<Vec<Employee>, SchoolServiceError> {
        let usecase = RetrieveAllEmployeesUseCase {
            repo: self.state.employee_repo(),
        };
        let employees = logged("retrieve_all_employees", usecase.execute(school_id).await)?;
        debug!(school_id = %school_id, count = employees.len(), "employees retrieved");
        Ok(employees)
    }

    pub async fn count_employees(&self, school_id: SchoolId) -> Result<u64, SchoolServiceError> {
        let usecase = CountEmployeesUseCase {
            repo: self.state.employee_repo(),
        };
        logged("count_employees", usecase.execute(school_id).await)
    }

    // ── Students ─────────────────────────────────────────────────────────────

    pub async fn register_student(
        &self,
        student: NewStudent,
        school_id: SchoolId,
        classroom_id: ClassroomId,
    ) -> Result<Student, SchoolServiceError> {
        let usecase = RegisterStudentUseCase {
            schools: self.state.school_repo(),
            classrooms: self.state.classroom_repo(),
            students: self.state.student_repo(),
        };
        let student = logged(
            "register_student",
            usecase.execute(student, school_id, classroom_id).await,
        )?;
        info!(
            school_id = %school_id,
            classroom_id = %classroom_id,
            student_id = %student.id,
            "student registered"
        );
        Ok(student)
    }

    pub async fn unregister_student(
        &self,
        school_id: SchoolId,
        student_id: StudentId,
    ) -> Result<(), SchoolServiceError> {
        let usecase = UnregisterStudentUseCase {
            schools: self.state.school_repo(),
            students: self.state.student_repo(),
        };
        logged(
            "unregister_student",
            usecase.execute(school_id, student_id).await,
        )?;
        info!(school_id = %school_id, student_id = %student_id, "student unregistered");
        Ok(())
    }

    pub async fn retrieve_all_students(
        &self,
        school_id: SchoolId,
        classroom_id: Option<ClassroomId>,
    ) -> Result<Vec<Student>, SchoolServiceError> {
        let usecase = RetrieveAllStudentsUseCase {
            repo: self.state.student_repo(),
        };
        let students = logged(
            "retrieve_all_students",
            usecase.execute(school_id, classroom_id).await,
        )?;
        debug!(school_id = %school_id, count = students.len(), "students retrieved");
        Ok(students)
    }

    pub async fn count_students(
        &self,
        school_id: SchoolId,
        classroom_id: Option<ClassroomId>,
    ) -> Result<u64, SchoolServiceError> {
        let usecase = CountStudentsUseCase {
            repo: self.state.student_repo(),
        };
        logged("count_students", usecase.execute(school_id, classroom_id).await)
    }
}
