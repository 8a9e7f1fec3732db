//! Client configuration

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the LMS (e.g. "https://lms.example.com")
    pub lms_base_url: String,
    /// Optional API token sent as a bearer header
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// IANA timezone name appended to requests that localize dates
    pub browser_timezone: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lms_base_url: "http://localhost:8000".to_string(),
            api_key: None,
            timeout_secs: 30,
            browser_timezone: None,
        }
    }
}
