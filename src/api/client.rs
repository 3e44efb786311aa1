//! HTTP client for the AlQuran.cloud REST API.
//!
//! Two read-only endpoints, both wrapping their payload in `{ "data": ... }`:
//! - `GET {base}/v1/surah` → chapter index
//! - `GET {base}/v1/surah/{ordinal}` → one chapter with its verses
//!
//! No retries and no auth. The ordinal is interpolated into the path as-is;
//! an invalid one surfaces as an upstream error.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::types::{ChapterDetail, ChapterSummary, Envelope};

pub const DEFAULT_BASE_URL: &str = "https://api.alquran.cloud";

/// Errors that can occur while fetching from the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, timeout).
    Network(String),
    /// The API answered with a non-success status.
    Status { status: u16, message: String },
    /// The body was not JSON of the expected shape (includes empty bodies).
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Anything that can serve the chapter index and chapter details.
#[async_trait]
pub trait ChapterSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches the complete chapter index in one request.
    async fn list_chapters(&self) -> Result<Vec<ChapterSummary>, ApiError>;

    /// Fetches a single chapter, verses sorted by in-chapter ordinal.
    async fn get_chapter(&self, ordinal: &str) -> Result<ChapterDetail, ApiError>;
}

/// reqwest-backed [`ChapterSource`] for api.alquran.cloud (or a compatible mirror).
pub struct AlQuranClient {
    base_url: String,
    client: reqwest::Client,
}

impl AlQuranClient {
    /// `timeout` of `None` leaves reqwest's default (no overall deadline).
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), falling back to defaults", e);
            reqwest::Client::new()
        });

        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `path` and unwraps the `data` field of the envelope.
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} -> {}", url, status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("API error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            warn!("Unexpected response body from {} ({} bytes): {}", url, body.len(), e);
            ApiError::Parse(e.to_string())
        })?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl ChapterSource for AlQuranClient {
    fn name(&self) -> &str {
        "alquran.cloud"
    }

    async fn list_chapters(&self) -> Result<Vec<ChapterSummary>, ApiError> {
        let chapters: Vec<ChapterSummary> = self.get_data("/v1/surah").await?;
        info!("Fetched chapter index: {} chapters", chapters.len());
        Ok(chapters)
    }

    async fn get_chapter(&self, ordinal: &str) -> Result<ChapterDetail, ApiError> {
        let mut detail: ChapterDetail = self.get_data(&format!("/v1/surah/{ordinal}")).await?;
        detail.sort_verses();

        if let Ok(requested) = ordinal.parse::<u32>()
            && requested != detail.number
        {
            warn!(
                "Requested chapter {} but API returned chapter {}",
                requested, detail.number
            );
        }

        info!(
            "Fetched chapter {} ({}): {} verses",
            detail.number,
            detail.english_name,
            detail.verses.len()
        );
        Ok(detail)
    }
}
