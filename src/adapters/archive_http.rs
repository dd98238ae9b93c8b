//! Archive download implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::domain::{AppError, ArchiveConfig};
use crate::ports::ArchiveSource;

const USER_AGENT: &str = concat!("botstrap/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for archive downloads.
///
/// This client performs a single GET per call. There is no retry layer.
#[derive(Debug, Clone)]
pub struct HttpArchiveSource {
    client: Client,
}

impl HttpArchiveSource {
    /// Create a new HTTP client from archive settings.
    pub fn new(config: &ArchiveConfig) -> Result<Self, AppError> {
        // The blocking client otherwise applies its own 30s total timeout.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Download {
                url: config.url.clone(),
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { client })
    }
}

impl ArchiveSource for HttpArchiveSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        debug!(%url, "sending archive request");

        let response = self.client.get(url.clone()).send().map_err(|e| AppError::Download {
            url: url.to_string(),
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("request failed");
            return Err(AppError::Download {
                url: url.to_string(),
                message: format!("HTTP {} {}", status.as_u16(), reason),
                status: Some(status.as_u16()),
            });
        }

        let bytes = response.bytes().map_err(|e| AppError::Download {
            url: url.to_string(),
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;

        Ok(bytes.to_vec())
    }
}
