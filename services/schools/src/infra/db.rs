use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, DbErr, TransactionTrait,
};

use elimu_core::record_store::RecordStore;
use elimu_domain::employee::EmployeePosition;
use elimu_domain::id::{ClassroomId, EmployeeId, SchoolId, StudentId};
use elimu_schools_schema::{classrooms, employees, schools, students};

use crate::domain::repository::{
    ClassroomRepository, EmployeeRepository, SchoolRepository, StudentRepository,
};
use crate::domain::types::{
    Classroom, Employee, NewClassroom, NewEmployee, NewSchool, NewStudent, School, Student,
    SchoolRemoval, StudentCascade,
};
use crate::error::SchoolServiceError;

type Schools<'c, C> = RecordStore<'c, schools::ActiveModel, C>;
type Classrooms<'c, C> = RecordStore<'c, classrooms::ActiveModel, C>;
type Employees<'c, C> = RecordStore<'c, employees::ActiveModel, C>;
type Students<'c, C> = RecordStore<'c, students::ActiveModel, C>;

// ── School repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSchoolRepository {
    pub db: DatabaseConnection,
}

impl SchoolRepository for DbSchoolRepository {
    async fn count(&self) -> Result<u64, SchoolServiceError> {
        let count = Schools::new(&self.db)
            .count()
            .await
            .context("count schools")?;
        Ok(count)
    }

    async fn find_by_id(&self, id: SchoolId) -> Result<Option<School>, SchoolServiceError> {
        let model = Schools::new(&self.db)
            .find_by_id(id.get())
            .await
            .context("find school by id")?;
        Ok(model.map(school_from_model))
    }

    async fn list(&self) -> Result<Vec<School>, SchoolServiceError> {
        let models = Schools::new(&self.db)
            .find_all()
            .await
            .context("list schools")?;
        Ok(models.into_iter().map(school_from_model).collect())
    }

    async fn create(&self, school: &NewSchool) -> Result<School, SchoolServiceError> {
        let now = Utc::now();
        let model = Schools::new(&self.db)
            .save(schools::ActiveModel {
                id: NotSet,
                name: Set(school.name.clone()),
                address: Set(school.address.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            })
            .await
            .context("create school")?;
        Ok(school_from_model(model))
    }

    async fn update(&self, school: &School) -> Result<Option<School>, SchoolServiceError> {
        let model = schools::Model {
            id: school.id.get(),
            name: school.name.clone(),
            address: school.address.clone(),
            created_at: school.created_at,
            updated_at: Utc::now(),
        };
        match Schools::new(&self.db).update(model).await {
            Ok(model) => Ok(Some(school_from_model(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err).context("update school").into()),
        }
    }

    async fn delete_with_dependents(
        &self,
        id: SchoolId,
        cascade: StudentCascade,
    ) -> Result<SchoolRemoval, SchoolServiceError> {
        let school_id = id.get();
        let removal = self
            .db
            .transaction::<_, SchoolRemoval, DbErr>(move |txn| {
                Box::pin(async move {
                    let enrolled = students::Column::SchoolId.eq(school_id);
                    match cascade {
                        StudentCascade::Delete => {
                            Students::new(txn).delete_where(enrolled).await?;
                        }
                        StudentCascade::Restrict => {
                            if Students::new(txn).count_where(enrolled).await? > 0 {
                                return Ok(SchoolRemoval::HasStudents);
                            }
                        }
                    }
                    Employees::new(txn)
                        .delete_where(employees::Column::SchoolId.eq(school_id))
                        .await?;
                    Classrooms::new(txn)
                        .delete_where(classrooms::Column::SchoolId.eq(school_id))
                        .await?;
                    let removed = Schools::new(txn)
                        .delete_where(schools::Column::Id.eq(school_id))
                        .await?;
                    Ok(if removed > 0 {
                        SchoolRemoval::Removed
                    } else {
                        SchoolRemoval::Missing
                    })
                })
            })
            .await
            .context("delete school with dependents")?;
        Ok(removal)
    }
}

fn school_from_model(model: schools::Model) -> School {
    School {
        id: SchoolId(model.id),
        name: model.name,
        address: model.address,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Classroom repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClassroomRepository {
    pub db: DatabaseConnection,
}

impl ClassroomRepository for DbClassroomRepository {
    async fn create(
        &self,
        school_id: SchoolId,
        classroom: &NewClassroom,
    ) -> Result<Classroom, SchoolServiceError> {
        let model = Classrooms::new(&self.db)
            .save(classrooms::ActiveModel {
                id: NotSet,
                school_id: Set(school_id.get()),
                name: Set(classroom.name.clone()),
                grade: Set(classroom.grade),
                capacity: Set(classroom.capacity),
            })
            .await
            .context("create classroom")?;
        Ok(classroom_from_model(model))
    }

    async fn find_in_school(
        &self,
        school_id: SchoolId,
        classroom_id: ClassroomId,
    ) -> Result<Option<Classroom>, SchoolServiceError> {
        let model = Classrooms::new(&self.db)
            .find_one_where(
                Condition::all()
                    .add(classrooms::Column::Id.eq(classroom_id.get()))
                    .add(classrooms::Column::SchoolId.eq(school_id.get())),
            )
            .await
            .context("find classroom in school")?;
        Ok(model.map(classroom_from_model))
    }

    async fn list_by_school(
        &self,
        school_id: SchoolId,
    ) -> Result<Vec<Classroom>, SchoolServiceError> {
        let models = Classrooms::new(&self.db)
            .find_where(classrooms::Column::SchoolId.eq(school_id.get()))
            .await
            .context("list classrooms by school")?;
        Ok(models.into_iter().map(classroom_from_model).collect())
    }
}

fn classroom_from_model(model: classrooms::Model) -> Classroom {
    Classroom {
        id: ClassroomId(model.id),
        school_id: SchoolId(model.school_id),
        name: model.name,
        grade: model.grade,
        capacity: model.capacity,
    }
}

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn create(
        &self,
        school_id: SchoolId,
        employee: &NewEmployee,
    ) -> Result<Employee, SchoolServiceError> {
        let model = Employees::new(&self.db)
            .save(employees::ActiveModel {
                id: NotSet,
                school_id: Set(school_id.get()),
                first_name: Set(employee.first_name.clone()),
                last_name: Set(employee.last_name.clone()),
                position: Set(employee.position.as_i16()),
                created_at: Set(Utc::now()),
            })
            .await
            .context("create employee")?;
        employee_from_model(model)
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, SchoolServiceError> {
        let model = Employees::new(&self.db)
            .find_by_id(id.get())
            .await
            .context("find employee by id")?;
        model.map(employee_from_model).transpose()
    }

    async fn list_by_school(
        &self,
        school_id: SchoolId,
    ) -> Result<Vec<Employee>, SchoolServiceError> {
        let models = Employees::new(&self.db)
            .find_where(employees::Column::SchoolId.eq(school_id.get()))
            .await
            .context("list employees by school")?;
        models.into_iter().map(employee_from_model).collect()
    }

    async fn count_by_school(&self, school_id: SchoolId) -> Result<u64, SchoolServiceError> {
        let count = Employees::new(&self.db)
            .count_where(employees::Column::SchoolId.eq(school_id.get()))
            .await
            .context("count employees by school")?;
        Ok(count)
    }

    async fn delete(&self, employee: &Employee) -> Result<bool, SchoolServiceError> {
        let deleted = Employees::new(&self.db)
            .delete(employee_to_model(employee))
            .await
            .context("delete employee")?;
        Ok(deleted)
    }
}

fn employee_from_model(model: employees::Model) -> Result<Employee, SchoolServiceError> {
    let position = EmployeePosition::from_i16(model.position).ok_or_else(|| {
        anyhow::anyhow!(
            "employee {} has unknown position {}",
            model.id,
            model.position
        )
    })?;
    Ok(Employee {
        id: EmployeeId(model.id),
        school_id: SchoolId(model.school_id),
        first_name: model.first_name,
        last_name: model.last_name,
        position,
        created_at: model.created_at,
    })
}

fn employee_to_model(employee: &Employee) -> employees::Model {
    employees::Model {
        id: employee.id.get(),
        school_id: employee.school_id.get(),
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        position: employee.position.as_i16(),
        created_at: employee.created_at,
    }
}

// ── Student repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStudentRepository {
    pub db: DatabaseConnection,
}

impl StudentRepository for DbStudentRepository {
    async fn create(
        &self,
        school_id: SchoolId,
        classroom_id: ClassroomId,
        student: &NewStudent,
    ) -> Result<Student, SchoolServiceError> {
        let model = Students::new(&self.db)
            .save(students::ActiveModel {
                id: NotSet,
                school_id: Set(school_id.get()),
                classroom_id: Set(classroom_id.get()),
                first_name: Set(student.first_name.clone()),
                last_name: Set(student.last_name.clone()),
                created_at: Set(Utc::now()),
            })
            .await
            .context("create student")?;
        Ok(student_from_model(model))
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, SchoolServiceError> {
        let model = Students::new(&self.db)
            .find_by_id(id.get())
            .await
            .context("find student by id")?;
        Ok(model.map(student_from_model))
    }

    async fn list_by_school(
        &self,
        school_id: SchoolId,
        classroom_id: Option<ClassroomId>,
    ) -> Result<Vec<Student>, SchoolServiceError> {
        let models = Students::new(&self.db)
            .find_where(student_scope(school_id, classroom_id))
            .await
            .context("list students by school")?;
        Ok(models.into_iter().map(student_from_model).collect())
    }

    async fn count_by_school(
        &self,
        school_id: SchoolId,
        classroom_id: Option<ClassroomId>,
    ) -> Result<u64, SchoolServiceError> {
        let count = Students::new(&self.db)
            .count_where(student_scope(school_id, classroom_id))
            .await
            .context("count students by school")?;
        Ok(count)
    }

    async fn delete(&self, student: &Student) -> Result<bool, SchoolServiceError> {
        let deleted = Students::new(&self.db)
            .delete(students::Model {
                id: student.id.get(),
                school_id: student.school_id.get(),
                classroom_id: student.classroom_id.get(),
                first_name: student.first_name.clone(),
                last_name: student.last_name.clone(),
                created_at: student.created_at,
            })
            .await
            .context("delete student")?;
        Ok(deleted)
    }
}

fn student_scope(school_id: SchoolId, classroom_id: Option<ClassroomId>) -> Condition {
    Condition::all()
        .add(students::Column::SchoolId.eq(school_id.get()))
        .add_option(classroom_id.map(|id| students::Column::ClassroomId.eq(id.get())))
}

fn student_from_model(model: students::Model) -> Student {
    Student {
        id: StudentId(model.id),
        school_id: SchoolId(model.school_id),
        classroom_id: ClassroomId(model.classroom_id),
        first_name: model.first_name,
        last_name: model.last_name,
        created_at: model.created_at,
    }
}
