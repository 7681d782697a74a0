// SPDX-License-Identifier: MPL-2.0
//! Remote fetching port definition.
//!
//! The extractor only needs a blocking GET that reports the final status, the
//! `Last-Modified` header and the raw body. [`Fetcher`] captures exactly that
//! so the HTTP client can be swapped out (or stubbed in tests).

use std::fmt;

// =============================================================================
// FetchError
// =============================================================================

/// Errors raised before any response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The URL could not be parsed.
    InvalidUrl(String),

    /// The request failed in transport (DNS, connect, TLS, timeout, body read).
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            FetchError::Transport(msg) => write!(f, "Transport error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// FetchedResource
// =============================================================================

/// A completed HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedResource {
    /// Final status code, after redirects.
    pub status: u16,

    /// Raw `Last-Modified` header value, if present.
    pub last_modified: Option<String>,

    /// Response body.
    pub body: Vec<u8>,
}

impl FetchedResource {
    /// Returns `true` for the one status the extractor accepts.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

// =============================================================================
// Fetcher Trait
// =============================================================================

/// Port for blocking HTTP GET requests.
///
/// Non-success statuses are not errors at this level; they come back in
/// [`FetchedResource::status`] for the caller to judge.
pub trait Fetcher {
    /// Performs a GET and returns the full response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if no response could be obtained.
    fn fetch(&self, url: &str) -> Result<FetchedResource, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<FetchedResource, FetchError> {
        (**self).fetch(url)
    }
}
