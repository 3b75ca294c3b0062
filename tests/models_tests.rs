//! Data model unit tests

use schoolcore_client::models::auth::{LoginCredentials, LoginReply, UserProfile};
use schoolcore_client::models::school::*;
use schoolcore_client::models::{ApiErrorBody, ListReply, Page};
use serde_json::json;

#[test]
fn test_login_credentials_serialization() {
    let credentials = LoginCredentials {
        email: "anoushka@school.test".to_string(),
        password: "admin123".to_string(),
        role: "admin".to_string(),
    };

    let value = serde_json::to_value(&credentials).unwrap();
    assert_eq!(
        value,
        json!({
            "email": "anoushka@school.test",
            "password": "admin123",
            "role": "admin",
        })
    );

    let roundtrip: LoginCredentials = serde_json::from_value(value).unwrap();
    assert_eq!(roundtrip, credentials);
}

#[test]
fn test_login_reply_deserialization() {
    let body = json!({
        "access_token": "jwt-token",
        "user": {
            "id": 3,
            "email": "anoushka@school.test",
            "role": "admin",
            "is_active": true,
            "is_staff": true,
        },
    });

    let reply: LoginReply = serde_json::from_value(body).unwrap();
    assert_eq!(reply.access_token, "jwt-token");
    assert_eq!(reply.user.role, "admin");
    assert_eq!(reply.user.is_staff, Some(true));
}

#[test]
fn test_user_profile_tolerates_minimal_shape() {
    let profile: UserProfile =
        serde_json::from_value(json!({"email": "a@school.test", "role": "student"})).unwrap();

    assert!(profile.id.is_none());
    assert!(profile.is_active.is_none());
}

#[test]
fn test_student_deserialization_full_shape() {
    let body = json!({
        "student_id": 7,
        "user": 11,
        "name": "Some Student",
        "guardian_name": "A Guardian",
        "guardian_contact": "1234567890",
        "student_contact": "0987654321",
        "class_name": "10-B",
        "semester": "Fall 2024",
        "enrollments": [
            {"student": 7, "course": 1, "grade": "A"},
            {"student": 7, "course": 2, "grade": null},
        ],
        "created_date": "2024-05-14T09:30:00Z",
        "created_by": 1,
        "updated_date": null,
        "updated_by": null,
        "deleted_date": null,
        "deleted_by": null,
    });

    let student: Student = serde_json::from_value(body).unwrap();
    assert_eq!(student.student_id, 7);
    assert_eq!(student.class_name.as_deref(), Some("10-B"));
    assert_eq!(student.enrollments.len(), 2);
    assert_eq!(student.enrollments[0].grade.as_deref(), Some("A"));
    assert!(student.enrollments[1].grade.is_none());
    assert!(student.created_date.is_some());
    assert!(student.updated_date.is_none());
}

#[test]
fn test_student_deserialization_minimal_shape() {
    let body = json!({
        "student_id": 7,
        "user": 11,
        "name": "Some Student",
        "guardian_name": "A Guardian",
        "guardian_contact": "1234567890",
        "student_contact": "0987654321",
    });

    let student: Student = serde_json::from_value(body).unwrap();
    assert!(student.class_name.is_none());
    assert!(student.enrollments.is_empty());
}

#[test]
fn test_student_requires_core_fields() {
    let body = json!({"student_id": 7, "user": 11});
    assert!(serde_json::from_value::<Student>(body).is_err());
}

#[test]
fn test_page_envelope_deserialization() {
    let body = json!({
        "count": 23,
        "page": 2,
        "page_size": 10,
        "results": [{"principal_id": 1, "user": 2, "name": "The Principal"}],
    });

    let page: Page<Principal> = serde_json::from_value(body).unwrap();
    assert_eq!(page.count, 23);
    assert_eq!(page.page, 2);
    assert_eq!(page.results.len(), 1);
}

#[test]
fn test_list_reply_accepts_both_shapes() {
    let envelope = json!({
        "count": 0,
        "page": 1,
        "page_size": 10,
        "results": [],
    });
    let reply: ListReply<Student> = serde_json::from_value(envelope).unwrap();
    assert!(matches!(reply, ListReply::Page(_)));

    let error = json!({
        "has_error": true,
        "error": "page size of page number cannot be less than 1",
    });
    let reply: ListReply<Student> = serde_json::from_value(error).unwrap();
    match reply {
        ListReply::Error(body) => {
            assert_eq!(body.has_error, Some(true));
            assert!(body.message().unwrap().contains("less than 1"));
        }
        ListReply::Page(_) => panic!("Expected error shape"),
    }
}

#[test]
fn test_student_update_omits_unset_fields() {
    let empty = StudentUpdate::default();
    assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");

    let patch = StudentUpdate {
        name: Some("Renamed".to_string()),
        address: Some("12 School Lane".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(
        value,
        json!({"name": "Renamed", "address": "12 School Lane"})
    );
}

#[test]
fn test_page_query_parameter_names() {
    let query = PageQuery {
        page: Some(2),
        page_size: Some(25),
    };
    assert_eq!(
        query.to_query(),
        vec![("page", "2".to_string()), ("page-size", "25".to_string())]
    );

    assert!(PageQuery::default().to_query().is_empty());

    let page_only = PageQuery {
        page: Some(4),
        page_size: None,
    };
    assert_eq!(page_only.to_query(), vec![("page", "4".to_string())]);
}

#[test]
fn test_api_error_body_message_precedence() {
    let detail_shape: ApiErrorBody =
        serde_json::from_value(json!({"detail": "Not found."})).unwrap();
    assert_eq!(detail_shape.message(), Some("Not found."));

    let pagination_shape: ApiErrorBody =
        serde_json::from_value(json!({"has_error": true, "error": "bad page"})).unwrap();
    assert_eq!(pagination_shape.message(), Some("bad page"));

    let both: ApiErrorBody =
        serde_json::from_value(json!({"detail": "first", "error": "second"})).unwrap();
    assert_eq!(both.message(), Some("first"));

    let neither: ApiErrorBody = serde_json::from_value(json!({})).unwrap();
    assert!(neither.message().is_none());
}

#[test]
fn test_teacher_with_course_summary() {
    let body = json!({
        "faculty_id": 4,
        "user": 9,
        "name": "A Teacher",
        "subject": "Mathematics",
        "courses": {
            "course_id": 2,
            "course_name": "Algebra",
            "students": [
                {"student": {"name": "First Student", "student_id": 1}, "grade": "B"},
                {"student": {"name": "Second Student", "student_id": 2}},
            ],
        },
    });

    let teacher: Teacher = serde_json::from_value(body).unwrap();
    let course = teacher.courses.unwrap();
    assert_eq!(course.students.len(), 2);
    assert_eq!(course.students[0].grade.as_deref(), Some("B"));
    assert!(course.students[1].grade.is_none());
}

#[test]
fn test_teacher_without_course_summary() {
    let body = json!({
        "faculty_id": 4,
        "user": 9,
        "name": "A Teacher",
        "subject": "Mathematics",
    });

    let teacher: Teacher = serde_json::from_value(body).unwrap();
    assert!(teacher.courses.is_none());
}
