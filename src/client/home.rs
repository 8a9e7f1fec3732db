//! HTTP client for the course home API
//!
//! One method per upstream endpoint, with the response-status branching the
//! view layer relies on: 404 and 401 become typed errors the caller can
//! turn into redirects, and the proctoring endpoint's 404 is a domain
//! value, not a failure.

use chrono::Utc;
use reqwest::{header, Client, StatusCode};
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::outline::{OutlineTabData, TracingSink};
use crate::tabs::{CourseHomeMetadata, DatesTabData, ProctoringInfo, ProgressTabData};
use crate::time::time_offset_millis;

/// HTTP client for the course home API
///
/// # Example
///
/// ```rust,no_run
/// use course_home_client::{ClientConfig, CourseHomeClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CourseHomeClient::new(ClientConfig {
///     lms_base_url: "https://lms.example.com".into(),
///     ..Default::default()
/// });
///
/// let outline = client.outline_tab("course-v1:edX+Demo+run").await?;
/// let metadata = client.course_metadata("course-v1:edX+Demo+run").await?;
/// # Ok(())
/// # }
/// ```
pub struct CourseHomeClient {
    config: ClientConfig,
    client: Client,
}

impl CourseHomeClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Self {
        let mut headers = header::HeaderMap::new();
        if let Some(ref api_key) = config.api_key {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .expect("Invalid API key"),
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { config, client }
    }

    // ==================== Course home reads ====================

    /// Fetch course-level metadata (title, enrollment, tabs)
    pub async fn course_metadata(&self, course_id: &str) -> Result<CourseHomeMetadata> {
        let url = self.with_timezone(format!(
            "{}/api/course_home/v1/course_metadata/{}",
            self.config.lms_base_url,
            urlencoding::encode(course_id)
        ));

        debug!("Fetching course metadata from {url}");
        let response = self.client.get(&url).send().await?;
        let data: JsonValue = self.handle_response(response).await?;
        CourseHomeMetadata::from_response(data)
    }

    /// Fetch and normalize the outline tab.
    ///
    /// Captures instants around the request so the page can correct for
    /// server-clock skew using the response's Date header.
    pub async fn outline_tab(&self, course_id: &str) -> Result<OutlineTabData> {
        let url = format!(
            "{}/api/course_home/v1/outline/{}",
            self.config.lms_base_url,
            urlencoding::encode(course_id)
        );

        debug!("Fetching outline from {url}");
        let request_time = Utc::now().timestamp_millis();
        let response = self.client.get(&url).send().await?;
        let response_time = Utc::now().timestamp_millis();

        let header_date = response
            .headers()
            .get(header::DATE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let data: JsonValue = self.handle_response(response).await?;
        let offset = time_offset_millis(header_date.as_deref(), request_time, response_time);

        OutlineTabData::from_response(course_id, data, offset, &TracingSink)
    }

    /// Fetch the dates tab timeline
    pub async fn dates_tab(&self, course_id: &str) -> Result<DatesTabData> {
        let url = format!(
            "{}/api/course_home/v1/dates/{}",
            self.config.lms_base_url,
            urlencoding::encode(course_id)
        );

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Fetch the progress tab (grades, completion, grading policy)
    pub async fn progress_tab(&self, course_id: &str) -> Result<ProgressTabData> {
        let url = format!(
            "{}/api/course_home/v1/progress/{}",
            self.config.lms_base_url,
            urlencoding::encode(course_id)
        );

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Fetch proctoring onboarding status.
    ///
    /// A 404 means the course has no proctored exams and yields the default
    /// value rather than an error.
    pub async fn proctoring_info(
        &self,
        course_id: &str,
        username: Option<&str>,
    ) -> Result<ProctoringInfo> {
        let mut url = format!(
            "{}/api/edx_proctoring/v1/user_onboarding/status?course_id={}",
            self.config.lms_base_url,
            urlencoding::encode(course_id)
        );
        if let Some(username) = username {
            url.push_str("&username=");
            url.push_str(&urlencoding::encode(username));
        }

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("No proctored exam for {course_id}");
            return Ok(ProctoringInfo::default());
        }
        self.handle_response(response).await
    }

    // ==================== Course home writes ====================

    /// Reset all expired deadlines for the course.
    ///
    /// `model` names the tab the learner acted from and is recorded with
    /// the research event (e.g. "outline" or "dates").
    pub async fn reset_course_deadlines(&self, course_id: &str, model: &str) -> Result<()> {
        let url = format!(
            "{}/api/course_experience/v1/reset_course_deadlines",
            self.config.lms_base_url
        );
        let body = serde_json::json!({
            "course_key": course_id,
            "research_event_data": { "location": format!("{model}-tab") },
        });

        let response = self.client.post(&url).json(&body).send().await?;
        self.check_status(response).await
    }

    /// Save the learner's course goal
    pub async fn save_course_goal(&self, course_id: &str, goal_key: &str) -> Result<()> {
        let url = format!(
            "{}/api/course_home/v1/save_course_goal",
            self.config.lms_base_url
        );
        let body = serde_json::json!({ "course_id": course_id, "goal_key": goal_key });

        let response = self.client.post(&url).json(&body).send().await?;
        self.check_status(response).await
    }

    /// Dismiss the course welcome message
    pub async fn dismiss_welcome_message(&self, course_id: &str) -> Result<()> {
        let url = format!(
            "{}/api/course_home/v1/dismiss_welcome_message",
            self.config.lms_base_url
        );
        let body = serde_json::json!({ "course_id": course_id });

        let response = self.client.post(&url).json(&body).send().await?;
        self.check_status(response).await
    }

    /// Request generation of the learner's certificate
    pub async fn request_certificate(&self, course_id: &str) -> Result<()> {
        let url = format!(
            "{}/courses/{}/generate_user_cert",
            self.config.lms_base_url,
            urlencoding::encode(course_id)
        );

        let response = self.client.post(&url).send().await?;
        self.check_status(response).await
    }

    // ==================== Helper methods ====================

    /// Append the configured browser timezone so the server localizes dates
    fn with_timezone(&self, mut url: String) -> String {
        if let Some(ref timezone) = self.config.browser_timezone {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str("browser_timezone=");
            url.push_str(&urlencoding::encode(timezone));
        }
        url
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let url = response.url().to_string();

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url));
        }

        // Returned for anonymous users and users who are not enrolled; the
        // caller decides where to send them.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthenticated(url));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Server { status, message });
        }

        let body = response.json().await?;
        Ok(body)
    }

    async fn check_status(&self, response: reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Server { status, message });
        }
        Ok(())
    }
}
