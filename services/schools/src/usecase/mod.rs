pub mod classroom;
pub mod employee;
pub mod school;
pub mod student;
