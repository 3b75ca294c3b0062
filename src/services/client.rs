//! HTTP client service
//!
//! Thin forwarding wrapper around the schoolcore backend API

use crate::config::Settings;
use crate::models::auth::LoginCredentials;
use crate::models::school::PageQuery;
use crate::utils::logging::credentials_log_summary;
use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backend API client
///
/// Each method builds the route URL, delegates to the underlying HTTP
/// client and hands the raw response back. Status codes are not inspected
/// here; callers (or the typed roster layer) decide what a given status
/// means. Nothing is sent until the returned future is awaited.
#[derive(Debug, Clone)]
pub struct CoreClient {
    client: Client,
    settings: Settings,
}

impl CoreClient {
    /// Create a new client instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout))
            .user_agent(concat!("schoolcore-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.settings.api.base_url, route)
    }

    /// Start a request for the given route, attaching the configured
    /// bearer token when there is one
    fn request(&self, method: Method, route: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, self.url(route));
        if let Some(token) = &self.settings.api.auth_token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder
    }

    /// Send login request
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Response> {
        debug!(payload = %credentials_log_summary(credentials), "Sending login request");

        self.request(Method::POST, "/auth/login/")
            .json(credentials)
            .send()
            .await
            .context("Failed to send login request")
    }

    /// Send student registration request
    ///
    /// The payload is forwarded verbatim; no schema is enforced client-side.
    pub async fn register_student<T>(&self, data: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        debug!("Sending student registration request");

        self.request(Method::POST, "/admin/register/")
            .json(data)
            .send()
            .await
            .context("Failed to send registration request")
    }

    /// Fetch the student listing
    pub async fn get_students(&self) -> Result<Response> {
        debug!("Sending student listing request");

        self.request(Method::GET, "/students/")
            .send()
            .await
            .context("Failed to send student listing request")
    }

    /// Fetch one page of the student listing
    pub async fn get_students_page(&self, query: &PageQuery) -> Result<Response> {
        debug!(page = ?query.page, page_size = ?query.page_size, "Sending paged student listing request");

        self.request(Method::GET, "/students/")
            .query(&query.to_query())
            .send()
            .await
            .context("Failed to send student listing request")
    }

    /// Fetch a single student record
    pub async fn get_student(&self, student_id: i64) -> Result<Response> {
        debug!(student_id, "Sending student detail request");

        self.request(Method::GET, &format!("/students/{}/", student_id))
            .send()
            .await
            .context("Failed to send student detail request")
    }

    /// Send a partial student update
    pub async fn update_student<T>(&self, student_id: i64, data: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        debug!(student_id, "Sending student update request");

        self.request(Method::PATCH, &format!("/students/{}/", student_id))
            .json(data)
            .send()
            .await
            .context("Failed to send student update request")
    }

    /// Delete a student record
    pub async fn delete_student(&self, student_id: i64) -> Result<Response> {
        debug!(student_id, "Sending student delete request");

        self.request(Method::DELETE, &format!("/students/{}/", student_id))
            .send()
            .await
            .context("Failed to send student delete request")
    }

    /// Fetch the teacher listing
    pub async fn get_teachers(&self) -> Result<Response> {
        debug!("Sending teacher listing request");

        self.request(Method::GET, "/teachers/")
            .send()
            .await
            .context("Failed to send teacher listing request")
    }

    /// Fetch the principal listing
    pub async fn get_principals(&self) -> Result<Response> {
        debug!("Sending principal listing request");

        self.request(Method::GET, "/principal/")
            .send()
            .await
            .context("Failed to send principal listing request")
    }

    /// Get configuration reference
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum retry attempts
    pub max_retries: u32,
    /// Base delay time (milliseconds)
    pub base_delay_ms: u64,
    /// Maximum delay time (milliseconds)
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_ms: 10000,
        }
    }
}

/// Client wrapper with retry functionality
///
/// Only idempotent GET operations are retried; login, registration,
/// updates and deletes always go out exactly once. A delivered non-2xx
/// response is not an error at this layer and is never re-sent.
#[derive(Debug, Clone)]
pub struct RetryableCoreClient {
    client: CoreClient,
    retry_config: RetryConfig,
}

impl RetryableCoreClient {
    /// Create client with retry functionality
    pub fn new(settings: Settings, retry_config: Option<RetryConfig>) -> Result<Self> {
        let client = CoreClient::new(settings)?;
        let retry_config = retry_config.unwrap_or_default();

        Ok(Self {
            client,
            retry_config,
        })
    }

    /// Student listing with retry
    pub async fn get_students_with_retry(&self) -> Result<Response> {
        self.get_with_retry(|| self.client.get_students()).await
    }

    /// Paged student listing with retry
    pub async fn get_students_page_with_retry(&self, query: &PageQuery) -> Result<Response> {
        self.get_with_retry(|| self.client.get_students_page(query))
            .await
    }

    /// Student detail with retry
    pub async fn get_student_with_retry(&self, student_id: i64) -> Result<Response> {
        self.get_with_retry(|| self.client.get_student(student_id))
            .await
    }

    /// Teacher listing with retry
    pub async fn get_teachers_with_retry(&self) -> Result<Response> {
        self.get_with_retry(|| self.client.get_teachers()).await
    }

    /// Principal listing with retry
    pub async fn get_principals_with_retry(&self) -> Result<Response> {
        self.get_with_retry(|| self.client.get_principals()).await
    }

    /// Retry loop for idempotent requests; retries transport failures only
    async fn get_with_retry<F, Fut>(&self, mut send: F) -> Result<Response>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Response>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.retry_config.max_retries {
            match send().await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    last_error = Some(e);

                    if attempt < self.retry_config.max_retries {
                        let delay = std::cmp::min(
                            self.retry_config.base_delay_ms * (2_u64.pow(attempt)),
                            self.retry_config.max_delay_ms,
                        );

                        warn!(
                            "Request failed, retrying after {}ms (attempt {}/{})",
                            delay,
                            attempt + 1,
                            self.retry_config.max_retries
                        );
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    /// Get inner client reference
    pub fn inner(&self) -> &CoreClient {
        &self.client
    }
}
