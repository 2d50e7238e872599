use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};

use elimu_domain::employee::EmployeePosition;
use elimu_domain::id::{ClassroomId, EmployeeId, SchoolId, StudentId};
use elimu_schools_migration::Migrator;

use crate::domain::types::{NewClassroom, NewEmployee, NewSchool, NewStudent, School};
use crate::error::SchoolServiceError;
use crate::service::SchoolService;

/// Command-line administration of schools, their staff and their students.
#[derive(Debug, Parser)]
#[command(name = "elimu", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply pending database migrations.
    Migrate,
    School {
        #[command(subcommand)]
        action: SchoolCommand,
    },
    Classroom {
        #[command(subcommand)]
        action: ClassroomCommand,
    },
    Employee {
        #[command(subcommand)]
        action: EmployeeCommand,
    },
    Student {
        #[command(subcommand)]
        action: StudentCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum SchoolCommand {
    Count,
    List,
    Show {
        id: SchoolId,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// Change the name or address of a school; omitted fields keep their value.
    Update {
        id: SchoolId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    Unregister {
        id: SchoolId,
    },
}

#[derive(Debug, Subcommand)]
pub enum ClassroomCommand {
    List {
        #[arg(long)]
        school: SchoolId,
    },
    Register {
        #[arg(long)]
        school: SchoolId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        grade: i16,
        #[arg(long)]
        capacity: i32,
    },
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    List {
        #[arg(long)]
        school: SchoolId,
    },
    Count {
        #[arg(long)]
        school: SchoolId,
    },
    Register {
        #[arg(long)]
        school: SchoolId,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, default_value = "teacher")]
        position: EmployeePosition,
    },
    Unregister {
        #[arg(long)]
        school: SchoolId,
        id: EmployeeId,
    },
}

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    List {
        #[arg(long)]
        school: SchoolId,
        #[arg(long)]
        classroom: Option<ClassroomId>,
    },
    Count {
        #[arg(long)]
        school: SchoolId,
        #[arg(long)]
        classroom: Option<ClassroomId>,
    },
    Register {
        #[arg(long)]
        school: SchoolId,
        #[arg(long)]
        classroom: ClassroomId,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    Unregister {
        #[arg(long)]
        school: SchoolId,
        id: StudentId,
    },
}

/// Execute one command and render its outcome as JSON.
pub async fn run(command: Command, service: &SchoolService) -> anyhow::Result<Value> {
    let output = match command {
        Command::Migrate => {
            Migrator::up(&service.state.db, None).await?;
            json!({ "migrated": true })
        }
        Command::School { action } => run_school(action, service).await?,
        Command::Classroom { action } => run_classroom(action, service).await?,
        Command::Employee { action } => run_employee(action, service).await?,
        Command::Student { action } => run_student(action, service).await?,
    };
    Ok(output)
}

async fn run_school(command: SchoolCommand, service: &SchoolService) -> anyhow::Result<Value> {
    let output = match command {
        SchoolCommand::Count => json!({ "count": service.count_schools().await? }),
        SchoolCommand::List => serde_json::to_value(service.retrieve_all_schools().await?)?,
        SchoolCommand::Show { id } => serde_json::to_value(service.find_school(id).await?)?,
        SchoolCommand::Register { name, address } => {
            serde_json::to_value(service.register_school(NewSchool { name, address }).await?)?
        }
        SchoolCommand::Update { id, name, address } => {
            let current = service
                .find_school(id)
                .await?
                .ok_or(SchoolServiceError::SchoolNotFound)?;
            let school = School {
                name: name.unwrap_or(current.name),
                address: address.or(current.address),
                ..current
            };
            serde_json::to_value(service.update_school_information(school).await?)?
        }
        SchoolCommand::Unregister { id } => {
            service.unregister_school(id).await?;
            json!({ "unregistered": id })
        }
    };
    Ok(output)
}

async fn run_classroom(
    command: ClassroomCommand,
    service: &SchoolService,
) -> anyhow::Result<Value> {
    let output = match command {
        ClassroomCommand::List { school } => {
            serde_json::to_value(service.retrieve_all_classrooms(school).await?)?
        }
        ClassroomCommand::Register {
            school,
            name,
            grade,
            capacity,
        } => {
            let classroom = NewClassroom {
                name,
                grade,
                capacity,
            };
            serde_json::to_value(service.register_classroom(classroom, school).await?)?
        }
    };
    Ok(output)
}

async fn run_employee(command: EmployeeCommand, service: &SchoolService) -> anyhow::Result<Value> {
    let output = match command {
        EmployeeCommand::List { school } => {
            serde_json::to_value(service.retrieve_all_employees(school).await?)?
        }
        EmployeeCommand::Count { school } => {
            json!({ "count": service.count_employees(school).await? })
        }
        EmployeeCommand::Register {
            school,
            first_name,
            last_name,
            position,
        } => {
            let employee = NewEmployee {
                first_name,
                last_name,
                position,
            };
            serde_json::to_value(service.register_employee(employee, school).await?)?
        }
        EmployeeCommand::Unregister { school, id } => {
            service.unregister_employee(school, id).await?;
            json!({ "unregistered": id })
        }
    };
    Ok(output)
}

async fn run_student(command: StudentCommand, service: &SchoolService) -> anyhow::Result<Value> {
    let output = match command {
        StudentCommand::List { school, classroom } => {
            serde_json::to_value(service.retrieve_all_students(school, classroom).await?)?
        }
        StudentCommand::Count { school, classroom } => {
            json!({ "count": service.count_students(school, classroom).await? })
        }
        StudentCommand::Register {
            school,
            classroom,
            first_name,
            last_name,
        } => {
            let student = NewStudent {
                first_name,
                last_name,
            };
            serde_json::to_value(service.register_student(student, school, classroom).await?)?
        }
        StudentCommand::Unregister { school, id } => {
            service.unregister_student(school, id).await?;
            json!({ "unregistered": id })
        }
    };
    Ok(output)
}
