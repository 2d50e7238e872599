use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use elimu_domain::employee::EmployeePosition;
use elimu_domain::id::{ClassroomId, EmployeeId, SchoolId, StudentId};

/// A school registered into Elimu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Draft of a school not yet registered; the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewSchool {
    pub name: String,
    pub address: Option<String>,
}

/// A classroom of one school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classroom {
    pub id: ClassroomId,
    pub school_id: SchoolId,
    pub name: String,
    pub grade: i16,
    pub capacity: i32,
}

#[derive(Debug, Clone)]
pub struct NewClassroom {
    pub name: String,
    pub grade: i16,
    pub capacity: i32,
}

/// An employee working for exactly one school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub school_id: SchoolId,
    pub first_name: String,
    pub last_name: String,
    pub position: EmployeePosition,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub position: EmployeePosition,
}

/// A student enrolled in one classroom of one school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub school_id: SchoolId,
    pub classroom_id: ClassroomId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
}

/// What happens to a school's students when the school is unregistered.
///
/// Employees and classrooms always go with their school.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentCascade {
    /// Refuse to unregister a school that still has students.
    #[default]
    Restrict,
    /// Delete the school's students together with the school.
    Delete,
}

/// Outcome of deleting a school together with its dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolRemoval {
    Removed,
    Missing,
    /// Nothing was deleted: students remain under [`StudentCascade::Restrict`].
    HasStudents,
}

/// Reject blank person or school names.
pub fn validate_name(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}
