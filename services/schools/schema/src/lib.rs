//! sea-orm entities backing the schools service.

pub mod classrooms;
pub mod employees;
pub mod schools;
pub mod students;
