//! Roster data models
//!
//! Record shapes for the students, teachers and principal resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Student record as served by the listing and detail routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i64,
    /// Backing account id
    pub user: i64,
    pub name: String,
    pub guardian_name: String,
    pub guardian_contact: String,
    pub student_contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    /// Course enrollments with grades
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<i64>,
}

/// A student's enrollment in a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// Student primary key
    pub student: i64,
    /// Course primary key
    pub course: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// Teacher record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub faculty_id: i64,
    /// Backing account id
    pub user: i64,
    pub name: String,
    pub subject: String,
    /// Course taught by this teacher, with per-student grades
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<CourseSummary>,
}

/// Course summary embedded in teacher records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    pub course_id: i64,
    pub course_name: String,
    #[serde(default)]
    pub students: Vec<CourseEnrollment>,
}

/// Enrollment entry embedded in course summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEnrollment {
    pub student: StudentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// Short student reference used inside course summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRef {
    pub name: String,
    pub student_id: i64,
}

/// Principal record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub principal_id: i64,
    /// Backing account id
    pub user: i64,
    pub name: String,
}

/// Partial update payload for a student record
///
/// Fields left as `None` are omitted from the request body and stay
/// untouched on the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Page selection for listing routes
///
/// Maps onto the backend's `page` and `page-size` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Query pairs in the parameter names the backend expects
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("page-size", size.to_string()));
        }
        pairs
    }
}
