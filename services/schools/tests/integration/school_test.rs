use elimu_domain::id::SchoolId;
use elimu_schools::domain::repository::SchoolRepository;
use elimu_schools::domain::types::{School, SchoolRemoval, StudentCascade};
use elimu_schools::error::SchoolServiceError;

use crate::helpers::{
    new_student, new_teacher, seed_classroom, seed_school, service, service_with,
};

#[tokio::test]
async fn should_find_registered_school_by_its_id() {
    let service = service().await;
    let created = seed_school(&service, "Alliance High").await;

    let found = service.find_school(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn should_return_none_for_unregistered_school() {
    let service = service().await;
    assert_eq!(service.find_school(SchoolId(404)).await.unwrap(), None);
}

#[tokio::test]
async fn should_count_as_many_schools_as_listed() {
    let service = service().await;
    assert_eq!(service.count_schools().await.unwrap(), 0);

    for name in ["Alliance High", "Moi Forces Academy", "Starehe Boys"] {
        seed_school(&service, name).await;
    }

    let listed = service.retrieve_all_schools().await.unwrap();
    assert_eq!(service.count_schools().await.unwrap(), listed.len() as u64);
    assert_eq!(listed.len(), 3);
}

#[tokio::test]
async fn should_reject_blank_school_name() {
    let service = service().await;
    let result = service
        .register_school(elimu_schools::domain::types::NewSchool {
            name: String::new(),
            address: None,
        })
        .await;
    assert!(matches!(result, Err(SchoolServiceError::InvalidInput(_))));
    assert_eq!(service.count_schools().await.unwrap(), 0);
}

#[tokio::test]
async fn should_merge_updated_school_information() {
    let service = service().await;
    let created = seed_school(&service, "Alliance High").await;

    let updated = service
        .update_school_information(School {
            name: "Alliance High School".into(),
            address: None,
            ..created.clone()
        })
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.address, None);
    assert!(updated.updated_at >= created.updated_at);

    let stored = service.find_school(created.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Alliance High School");
    assert_eq!(stored.address, None);
    assert_eq!(stored.created_at, created.created_at);
}

#[tokio::test]
async fn should_reject_blank_name_when_updating_school() {
    let service = service().await;
    let created = seed_school(&service, "Alliance High").await;

    let result = service
        .update_school_information(School {
            name: "   ".into(),
            ..created.clone()
        })
        .await;
    assert!(matches!(result, Err(SchoolServiceError::InvalidInput(_))));

    let stored = service.find_school(created.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Alliance High");
}

#[tokio::test]
async fn should_return_school_not_found_when_updating_unknown_school() {
    let service = service().await;
    let created = seed_school(&service, "Alliance High").await;

    let result = service
        .update_school_information(School {
            id: SchoolId(created.id.get() + 1),
            ..created
        })
        .await;
    assert!(matches!(result, Err(SchoolServiceError::SchoolNotFound)));
    assert_eq!(service.count_schools().await.unwrap(), 1);
}

#[tokio::test]
async fn should_unregister_school_with_its_employees_and_classrooms() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let other = seed_school(&service, "Starehe Boys").await;
    seed_classroom(&service, school.id).await;
    for name in ["Wanjiru", "Kamau"] {
        service
            .register_employee(new_teacher(name), school.id)
            .await
            .unwrap();
    }
    service
        .register_employee(new_teacher("Mutua"), other.id)
        .await
        .unwrap();

    service.unregister_school(school.id).await.unwrap();

    assert_eq!(service.find_school(school.id).await.unwrap(), None);
    let remaining = service.retrieve_all_schools().await.unwrap();
    assert_eq!(remaining, vec![other.clone()]);
    assert_eq!(service.count_employees(school.id).await.unwrap(), 0);
    assert!(
        service
            .retrieve_all_classrooms(school.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(service.count_employees(other.id).await.unwrap(), 1);
}

#[tokio::test]
async fn should_return_school_not_found_when_unregistering_unknown_school() {
    let service = service().await;
    let result = service.unregister_school(SchoolId(1)).await;
    assert!(matches!(result, Err(SchoolServiceError::SchoolNotFound)));
}

#[tokio::test]
async fn should_keep_school_with_students_under_restrict_policy() {
    let service = service_with(StudentCascade::Restrict).await;
    let school = seed_school(&service, "Alliance High").await;
    let classroom = seed_classroom(&service, school.id).await;
    service
        .register_employee(new_teacher("Wanjiru"), school.id)
        .await
        .unwrap();
    service
        .register_student(new_student("Akinyi"), school.id, classroom.id)
        .await
        .unwrap();

    let result = service.unregister_school(school.id).await;
    assert!(matches!(result, Err(SchoolServiceError::SchoolHasStudents)));

    assert!(service.find_school(school.id).await.unwrap().is_some());
    assert_eq!(service.count_employees(school.id).await.unwrap(), 1);
    assert_eq!(service.count_students(school.id, None).await.unwrap(), 1);
}

#[tokio::test]
async fn should_remove_students_under_delete_policy() {
    let service = service_with(StudentCascade::Delete).await;
    let school = seed_school(&service, "Alliance High").await;
    let classroom = seed_classroom(&service, school.id).await;
    service
        .register_student(new_student("Akinyi"), school.id, classroom.id)
        .await
        .unwrap();

    service.unregister_school(school.id).await.unwrap();

    assert_eq!(service.find_school(school.id).await.unwrap(), None);
    assert_eq!(service.count_students(school.id, None).await.unwrap(), 0);
}

#[tokio::test]
async fn should_check_enrolled_students_inside_the_delete_transaction() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let classroom = seed_classroom(&service, school.id).await;
    service
        .register_student(new_student("Akinyi"), school.id, classroom.id)
        .await
        .unwrap();

    // Straight to the adapter, skipping any check the use case could make.
    let removal = service
        .state
        .school_repo()
        .delete_with_dependents(school.id, StudentCascade::Restrict)
        .await
        .unwrap();
    assert_eq!(removal, SchoolRemoval::HasStudents);

    assert!(service.find_school(school.id).await.unwrap().is_some());
    assert_eq!(
        service.retrieve_all_classrooms(school.id).await.unwrap(),
        vec![classroom]
    );
    assert_eq!(service.count_students(school.id, None).await.unwrap(), 1);
}

#[tokio::test]
async fn should_report_missing_school_from_the_delete_transaction() {
    let service = service().await;
    let removal = service
        .state
        .school_repo()
        .delete_with_dependents(SchoolId(77), StudentCascade::Restrict)
        .await
        .unwrap();
    assert_eq!(removal, SchoolRemoval::Missing);
}
