//! Typed roster service
//!
//! Interprets backend responses on top of the raw forwarding client:
//! status codes are mapped onto error variants and bodies decoded into
//! typed records. Listing routes go through the retrying client.

use crate::models::school::{PageQuery, Principal, Student, StudentUpdate, Teacher};
use crate::models::{ApiErrorBody, ListReply, Page};
use crate::services::client::RetryableCoreClient;
use crate::utils::error::{AppError, AppResult};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

/// Typed access to the students, teachers and principal resources
#[derive(Debug, Clone)]
pub struct RosterService {
    client: RetryableCoreClient,
}

impl RosterService {
    pub fn new(client: RetryableCoreClient) -> Self {
        Self { client }
    }

    /// List students, optionally selecting a page
    pub async fn list_students(&self, query: Option<&PageQuery>) -> AppResult<Page<Student>> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, "Listing students");

        let response = match query {
            Some(query) => self.client.get_students_page_with_retry(query).await?,
            None => self.client.get_students_with_retry().await?,
        };

        let page = Self::read_page(response).await?;
        debug!(%request_id, count = page.count, "Student listing completed");
        Ok(page)
    }

    /// Fetch a single student record
    pub async fn student(&self, student_id: i64) -> AppResult<Student> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, student_id, "Fetching student");

        let response = self.client.get_student_with_retry(student_id).await?;
        Self::read_json(response).await
    }

    /// Register a new student account
    ///
    /// The payload is forwarded as-is and the created record returned as
    /// raw JSON; the backend decides what a valid registration looks like.
    pub async fn register_student(&self, data: &serde_json::Value) -> AppResult<serde_json::Value> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, "Registering student");

        let response = self.client.inner().register_student(data).await?;
        Self::read_json(response).await
    }

    /// Apply a partial update to a student record
    pub async fn update_student(
        &self,
        student_id: i64,
        patch: &StudentUpdate,
    ) -> AppResult<Student> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, student_id, "Updating student");

        let response = self.client.inner().update_student(student_id, patch).await?;
        Self::read_json(response).await
    }

    /// Delete a student record
    pub async fn delete_student(&self, student_id: i64) -> AppResult<()> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, student_id, "Deleting student");

        let response = self.client.inner().delete_student(student_id).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// List teachers
    pub async fn list_teachers(&self) -> AppResult<Page<Teacher>> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, "Listing teachers");

        let response = self.client.get_teachers_with_retry().await?;
        Self::read_page(response).await
    }

    /// List principals
    pub async fn list_principals(&self) -> AppResult<Page<Principal>> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, "Listing principals");

        let response = self.client.get_principals_with_retry().await?;
        Self::read_page(response).await
    }

    /// Decode a success body, or map the status onto an error variant
    async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if response.status().is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Decode a listing body
    ///
    /// Bad page parameters come back as a 200 response carrying an error
    /// object instead of an envelope; surface those as validation errors.
    async fn read_page<T: DeserializeOwned>(response: Response) -> AppResult<Page<T>> {
        match Self::read_json::<ListReply<T>>(response).await? {
            ListReply::Page(page) => Ok(page),
            ListReply::Error(body) => Err(AppError::Validation(
                body.message().unwrap_or("invalid page parameters").to_string(),
            )),
        }
    }

    /// Build an error from a non-success response, preferring the
    /// backend's own message when the body parses
    async fn error_from_response(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message().map(str::to_string))
            .unwrap_or(body);

        warn!("Backend request failed: {} - {}", status, message);
        AppError::from_status(status, message)
    }
}
