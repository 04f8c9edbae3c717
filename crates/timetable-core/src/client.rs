//! Access to the student's enrolled-term schedule.
//!
//! The conflict engine never fetches anything itself; it is handed completed
//! lists of [`CurrentTermEntry`]. This module provides the sources of those
//! lists:
//!
//! - [`ApiClient`]: `GET {base}/users/me/schedule` against the planning API
//! - [`JsonFileSource`]: the same payload read from a file
//!
//! Credentials travel in a caller-owned [`Session`] passed to every call.

use std::{future::Future, path::PathBuf, time::Duration};

use log::{debug, warn};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client,
};
use serde::de::DeserializeOwned;

use crate::{
    error::{Result, ScheduleError},
    models::CurrentTermEntry,
};

/// Path of the enrolled-term schedule endpoint, relative to the API base.
pub const SCHEDULE_PATH: &str = "/users/me/schedule";

/// Base URL and optional bearer token for API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    token: Option<String>,
}

impl Session {
    /// Creates a session. A trailing slash on `base_url` is dropped.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Joins an API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Anything that can produce the student's enrolled-term schedule.
pub trait CurrentTermSource {
    fn fetch_current_term(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Vec<CurrentTermEntry>>> + Send;
}

/// HTTP client for the planning API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScheduleError::network("Failed to build HTTP client", e))?;
        Ok(Self { client })
    }

    /// Performs an authenticated `GET` and decodes the JSON body.
    ///
    /// A non-success status becomes [`ScheduleError::Api`], carrying the
    /// body's `message` field when there is one.
    pub async fn request<T: DeserializeOwned>(&self, session: &Session, path: &str) -> Result<T> {
        let url = session.url(path);
        debug!("GET {url}");

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json");
        if let Some(token) = session.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ScheduleError::network(format!("Request to {path} failed"), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body)
                .unwrap_or_else(|| format!("Request to {path} failed with status {}", status.as_u16()));
            warn!("{path} answered {status}: {message}");
            return Err(ScheduleError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ScheduleError::network(format!("Invalid response from {path}"), e))
    }
}

fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

impl CurrentTermSource for ApiClient {
    async fn fetch_current_term(&self, session: &Session) -> Result<Vec<CurrentTermEntry>> {
        self.request(session, SCHEDULE_PATH).await
    }
}

/// Reads the enrolled-term payload from a JSON file. The session is ignored.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CurrentTermSource for JsonFileSource {
    async fn fetch_current_term(&self, _session: &Session) -> Result<Vec<CurrentTermEntry>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ScheduleError::FileSystem {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(serde_json::from_str(&json)?)
    }
}
