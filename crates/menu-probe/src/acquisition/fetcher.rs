//! Single-shot HTTP GET with a bounded timeout.
//!
//! The whole body is buffered and decoded into a [`Document`]. There are no
//! retries and no redirect handling beyond the client's defaults; every
//! failure is returned as a [`FetchError`] for the caller to report.

use crate::acquisition::document::{DecodePolicy, Document};
use std::string::FromUtf8Error;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// Page probed when no URL is given.
pub const DEFAULT_URL: &str = "http://127.0.0.1:3000/";

/// Upper bound on the whole request, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetch settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub decode_policy: DecodePolicy,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            decode_policy: DecodePolicy::Replace,
            user_agent: format!("menu-probe/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Why a page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, malformed URL, or body read failure.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {}s", timeout.as_secs_f64())]
    Timeout { url: String, timeout: Duration },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// Only raised under [`DecodePolicy::Strict`].
    #[error("response from {url} is not valid UTF-8")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    fn from_reqwest(url: &str, timeout: Duration, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// GET `url` and decode the body.
///
/// Non-success statuses are errors; the body of such a response is dropped.
pub async fn fetch(url: &str, config: &FetchConfig) -> Result<Document, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)?;

    debug!(url, timeout_ms = config.timeout.as_millis() as u64, "fetching page");
    let start = Instant::now();

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url, config.timeout, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    if response.url().as_str() != url {
        debug!(final_url = %response.url(), "request was redirected");
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::from_reqwest(url, config.timeout, e))?;

    let doc = Document::decode(url, status.as_u16(), bytes.to_vec(), config.decode_policy)
        .map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;

    debug!(
        status = doc.status,
        bytes = doc.byte_len,
        chars = doc.char_len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "page fetched"
    );
    if doc.lossy {
        warn!(url, "response contained invalid UTF-8; replaced with U+FFFD");
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert_eq!(config.decode_policy, DecodePolicy::Replace);
        assert!(config.user_agent.starts_with("menu-probe/"));
    }

    #[test]
    fn test_error_messages_name_the_url() {
        let err = FetchError::Timeout {
            url: "http://127.0.0.1:3000/".to_string(),
            timeout: Duration::from_secs(20),
        };
        assert_eq!(
            err.to_string(),
            "request to http://127.0.0.1:3000/ timed out after 20s"
        );

        let err = FetchError::Status {
            url: "http://127.0.0.1:3000/".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "http://127.0.0.1:3000/ answered with HTTP 503");
    }

    #[tokio::test]
    async fn test_malformed_url_is_transport_error() {
        let err = fetch("not a url", &FetchConfig::default()).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
