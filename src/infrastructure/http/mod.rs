// SPDX-License-Identifier: MPL-2.0
//! Blocking HTTP adapter built on `reqwest`.
//!
//! Implements [`Fetcher`] with a single GET per call. Redirects are followed up
//! to the configured limit; no retries are attempted.

use crate::application::port::fetch::{FetchError, FetchedResource, Fetcher};
use crate::error::Result;
use reqwest::header::LAST_MODIFIED;
use std::time::Duration;

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub user_agent: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub max_redirects: usize,
}

/// [`Fetcher`] backed by a `reqwest` blocking client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestFetcher {
    /// Builds a client from the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::error::Error::Http) if the TLS backend
    /// cannot be initialized.
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for ReqwestFetcher {
    fn fetch(&self, url: &str) -> std::result::Result<FetchedResource, FetchError> {
        let url = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        tracing::debug!(%url, "sending GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .to_vec();

        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(FetchedResource {
            status,
            last_modified,
            body,
        })
    }
}
