use elimu_domain::id::{EmployeeId, SchoolId};

use crate::domain::repository::{EmployeeRepository, SchoolRepository};
use crate::domain::types::{Employee, NewEmployee, validate_name};
use crate::error::SchoolServiceError;

// ── RegisterEmployee ─────────────────────────────────────────────────────────

pub struct RegisterEmployeeUseCase<S: SchoolRepository, E: EmployeeRepository> {
    pub schools: S,
    pub employees: E,
}

impl<S: SchoolRepository, E: EmployeeRepository> RegisterEmployeeUseCase<S, E> {
    pub async fn execute(
        &self,
        employee: NewEmployee,
        school_id: SchoolId,
    ) -> Result<Employee, SchoolServiceError> {
        validate_name("first name", &employee.first_name)
            .and_then(|()| validate_name("last name", &employee.last_name))
            .map_err(SchoolServiceError::InvalidInput)?;
        if self.schools.find_by_id(school_id).await?.is_none() {
            return Err(SchoolServiceError::SchoolNotFound);
        }
        self.employees.create(school_id, &employee).await
    }
}

// ── UnregisterEmployee ───────────────────────────────────────────────────────

pub struct UnregisterEmployeeUseCase<S: SchoolRepository, E: EmployeeRepository> {
    pub schools: S,
    pub employees: E,
}

impl<S: SchoolRepository, E: EmployeeRepository> UnregisterEmployeeUseCase<S, E> {
    /// The employee must belong to `school_id`; an employee of another school
    /// is reported as not found.
    pub async fn execute(
        &self,
        school_id: SchoolId,
        employee_id: EmployeeId,
    ) -> Result<(), SchoolServiceError> {
        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .filter(|e| e.school_id == school_id)
            .ok_or(SchoolServiceError::EmployeeNotFound)?;

        if self.schools.find_by_id(employee.school_id).await?.is_none() {
            return Err(SchoolServiceError::ReferencedSchoolMissing);
        }

        if !self.employees.delete(&employee).await? {
            return Err(SchoolServiceError::EmployeeNotFound);
        }
        Ok(())
    }
}

// ── RetrieveAllEmployees ─────────────────────────────────────────────────────

pub struct RetrieveAllEmployeesUseCase<E: EmployeeRepository> {
    pub repo: E,
}

impl<E: EmployeeRepository> RetrieveAllEmployeesUseCase<E> {
    pub async fn execute(&self, school_id: SchoolId) -> Result<Vec<Employee>, SchoolServiceError> {
        self.repo.list_by_school(school_id).await
    }
}

// ── CountEmployees ───────────────────────────────────────────────────────────

pub struct CountEmployeesUseCase<E: EmployeeRepository> {
    pub repo: E,
}

impl<E: EmployeeRepository> CountEmployeesUseCase<E> {
    pub async fn execute(&self, school_id: SchoolId) -> Result<u64, SchoolServiceError> {
        self.repo.count_by_school(school_id).await
    }
}
