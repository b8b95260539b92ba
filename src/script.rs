//! Single-script fetch collaborator.
//!
//! One attempt per call, one settled outcome per attempt. The loader treats
//! any error the same way - append to the failure list and move on - so every
//! failure mode collapses into [`FetchError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::loader::LoaderConfig;

/// Errors from a single script fetch attempt.
///
/// The loader never distinguishes between these; they exist so hosts reading
/// logs can tell a refused connection from a 404.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Fetches one script resource and reports whether the attempt succeeded.
///
/// Execution of the fetched script is the host's concern; implementations
/// only guarantee that by the time `fetch` returns, the attempt has settled.
#[async_trait]
pub trait ScriptFetcher: Send + Sync {
    /// Fetch a single script. `Err` of any kind means non-success.
    async fn fetch(&self, uri: &Url) -> Result<(), FetchError>;
}

/// HTTP script fetcher backed by reqwest.
#[derive(Clone)]
pub struct HttpScriptFetcher {
    client: Client,
}

impl HttpScriptFetcher {
    /// Create a fetcher from loader configuration.
    pub fn new(config: &LoaderConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }

    /// Create a fetcher with default configuration.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Self::new(&LoaderConfig {
            request_timeout: timeout,
            ..LoaderConfig::default()
        })
    }
}

#[async_trait]
impl ScriptFetcher for HttpScriptFetcher {
    async fn fetch(&self, uri: &Url) -> Result<(), FetchError> {
        let response = self.client.get(uri.clone()).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        // Drain the body so the attempt has fully settled before reporting
        // success. A truncated transfer is a failure, not a success.
        response.bytes().await?;
        Ok(())
    }
}
