use elimu_domain::id::{ClassroomId, StudentId};
use elimu_schools::domain::types::NewClassroom;
use elimu_schools::error::SchoolServiceError;

use crate::helpers::{new_student, seed_classroom, seed_school, service};

#[tokio::test]
async fn should_register_student_into_classroom_of_school() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let classroom = seed_classroom(&service, school.id).await;

    let student = service
        .register_student(new_student("Akinyi"), school.id, classroom.id)
        .await
        .unwrap();

    assert_eq!(student.school_id, school.id);
    assert_eq!(student.classroom_id, classroom.id);
    assert_eq!(
        service.retrieve_all_students(school.id, None).await.unwrap(),
        vec![student]
    );
}

#[tokio::test]
async fn should_reject_classroom_of_another_school() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let other = seed_school(&service, "Starehe Boys").await;
    let foreign_classroom = seed_classroom(&service, other.id).await;

    let result = service
        .register_student(new_student("Akinyi"), school.id, foreign_classroom.id)
        .await;
    assert!(matches!(result, Err(SchoolServiceError::ClassroomNotFound)));

    let result = service
        .register_student(new_student("Akinyi"), school.id, ClassroomId(999))
        .await;
    assert!(matches!(result, Err(SchoolServiceError::ClassroomNotFound)));
    assert_eq!(service.count_students(school.id, None).await.unwrap(), 0);
}

#[tokio::test]
async fn should_narrow_students_to_classroom() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let east = seed_classroom(&service, school.id).await;
    let west = service
        .register_classroom(
            NewClassroom {
                name: "Form 1 West".into(),
                grade: 9,
                capacity: 45,
            },
            school.id,
        )
        .await
        .unwrap();

    for name in ["Akinyi", "Baraka"] {
        service
            .register_student(new_student(name), school.id, east.id)
            .await
            .unwrap();
    }
    service
        .register_student(new_student("Chebet"), school.id, west.id)
        .await
        .unwrap();

    assert_eq!(service.count_students(school.id, None).await.unwrap(), 3);
    assert_eq!(
        service
            .count_students(school.id, Some(east.id))
            .await
            .unwrap(),
        2
    );
    let west_students = service
        .retrieve_all_students(school.id, Some(west.id))
        .await
        .unwrap();
    assert_eq!(west_students.len(), 1);
    assert_eq!(west_students[0].first_name, "Chebet");
}

#[tokio::test]
async fn should_unregister_student() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;
    let classroom = seed_classroom(&service, school.id).await;
    let student = service
        .register_student(new_student("Akinyi"), school.id, classroom.id)
        .await
        .unwrap();

    service
        .unregister_student(school.id, student.id)
        .await
        .unwrap();

    assert_eq!(service.count_students(school.id, None).await.unwrap(), 0);
    let again = service.unregister_student(school.id, student.id).await;
    assert!(matches!(again, Err(SchoolServiceError::StudentNotFound)));
}

#[tokio::test]
async fn should_return_student_not_found_for_unknown_student() {
    let service = service().await;
    let school = seed_school(&service, "Alliance High").await;

    let result = service.unregister_student(school.id, StudentId(3)).await;
    assert!(matches!(result, Err(SchoolServiceError::StudentNotFound)));
}
