use sea_orm::ConnectionTrait;

use elimu_core::record_store::RecordStore;
use elimu_domain::employee::EmployeePosition;
use elimu_domain::id::{EmployeeId, SchoolId};
use elimu_schools::domain::types::NewEmployee;
use elimu_schools::error::SchoolServiceError;
use elimu_schools_schema::{employees, schools};

use crate::helpers::{new_teacher, seed_school, service};

#[tokio::test]
async fn should_register_employee_under_school() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;

    let employee = service
        .register_employee(
            NewEmployee {
                first_name: "Wanjiru".into(),
                last_name: "Mwangi".into(),
                position: EmployeePosition::Principal,
            },
            school.id,
        )
        .await
        .unwrap();

    let listed = service.retrieve_all_employees(school.id).await.unwrap();
    assert_eq!(listed, vec![employee.clone()]);
    assert_eq!(listed[0].position, EmployeePosition::Principal);
}

#[tokio::test]
async fn should_not_write_employee_under_unknown_school() {
    let service = service().await;

    let result = service
        .register_employee(new_teacher("Wanjiru"), SchoolId(42))
        .await;
    assert!(matches!(result, Err(SchoolServiceError::SchoolNotFound)));

    let stored = RecordStore::<employees::ActiveModel, _>::new(&service.state.db)
        .count()
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn should_not_unregister_employee_of_another_school() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let other = seed_school(&service, "Starehe Boys").await;
    let employee = service
        .register_employee(new_teacher("Wanjiru"), other.id)
        .await
        .unwrap();

    let result = service.unregister_employee(school.id, employee.id).await;
    assert!(matches!(result, Err(SchoolServiceError::EmployeeNotFound)));

    assert_eq!(service.count_employees(other.id).await.unwrap(), 1);
    assert_eq!(service.count_employees(school.id).await.unwrap(), 0);
}

#[tokio::test]
async fn should_return_employee_not_found_for_unknown_employee() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;

    let result = service.unregister_employee(school.id, EmployeeId(7)).await;
    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.kind(), "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn should_report_referenced_school_missing_for_orphaned_employee() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let employee = service
        .register_employee(new_teacher("Wanjiru"), school.id)
        .await
        .unwrap();

    // Drop the school row behind the employee's back.
    let db = &service.state.db;
    db.execute_unprepared("PRAGMA foreign_keys = OFF")
        .await
        .unwrap();
    let store = RecordStore::<schools::ActiveModel, _>::new(db);
    let row = store.find_by_id(school.id.get()).await.unwrap().unwrap();
    assert!(store.delete(row).await.unwrap());

    let result = service.unregister_employee(school.id, employee.id).await;
    let err = result.unwrap_err();
    assert!(matches!(err, SchoolServiceError::ReferencedSchoolMissing));
    assert_eq!(err.kind(), "ENTITY_NOT_FOUND");
    assert!(!err.is_not_found());
    assert_eq!(service.count_employees(school.id).await.unwrap(), 1);
}

#[tokio::test]
async fn should_count_employees_across_school_lifecycle() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let employee = service
        .register_employee(new_teacher("Wanjiru"), school.id)
        .await
        .unwrap();

    assert_eq!(service.count_employees(school.id).await.unwrap(), 1);

    service.unregister_school(school.id).await.unwrap();

    assert_eq!(service.count_employees(school.id).await.unwrap(), 0);
    let stored = RecordStore::<employees::ActiveModel, _>::new(&service.state.db)
        .find_by_id(employee.id.get())
        .await
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn should_unregister_employee() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let kept = service
        .register_employee(new_teacher("Kamau"), school.id)
        .await
        .unwrap();
    let leaving = service
        .register_employee(new_teacher("Wanjiru"), school.id)
        .await
        .unwrap();

    service
        .unregister_employee(school.id, leaving.id)
        .await
        .unwrap();

    assert_eq!(
        service.retrieve_all_employees(school.id).await.unwrap(),
        vec![kept]
    );
}
