use chrono::NaiveDate;
use gloo::net::http::Request;
use shared::routes::day_path;
use shared::DaySnapshot;
use thiserror::Error;

const DEFAULT_DAY_PATH: &str = "/api/dados/{data}/";

/// Why a day snapshot could not be loaded
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("failed to parse day snapshot: {0}")]
    Parse(String),
}

/// API client for the day snapshot read endpoint
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    day_path: String,
}

impl ApiClient {
    /// Create a client talking to the page's own origin
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            day_path: DEFAULT_DAY_PATH.to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::new()
        }
    }

    /// Use a different path template for the read endpoint
    pub fn with_day_path(mut self, template: &str) -> Self {
        self.day_path = template.to_string();
        self
    }

    pub fn day_url(&self, date: NaiveDate) -> String {
        format!("{}{}", self.base_url, day_path(&self.day_path, date))
    }

    /// Fetch one day. Any non-2xx status is a failure for that load.
    pub async fn get_day(&self, date: NaiveDate) -> Result<DaySnapshot, ApiError> {
        let url = self.day_url(date);

        let response = match Request::get(&url).send().await {
            Ok(response) => response,
            Err(e) => return Err(ApiError::Network(e.to_string())),
        };

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }

        match response.json::<DaySnapshot>().await {
            Ok(day) => Ok(day),
            Err(e) => Err(ApiError::Parse(e.to_string())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
