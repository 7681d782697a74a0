// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Extract(ExtractError),
}

/// Reasons an extraction produced no metadata at all.
///
/// Notices that still yield a populated record (unsupported format, missing
/// EXIF) are not errors; they are reported through
/// [`ExifOutcome`](crate::domain::metadata::ExifOutcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The locator string was empty.
    EmptyLocator,

    /// The locator looked like an http(s) URL but could not be parsed.
    InvalidUrl { url: String, reason: String },

    /// The request never produced a response (DNS, connect, TLS, body read).
    Request { url: String, reason: String },

    /// The server answered with a status other than 200.
    Fetch { url: String, status: u16 },

    /// The source could not be opened or is not a decodable image.
    Decode { locator: String, reason: String },
}

impl ExtractError {
    /// Returns `true` if the failure happened while talking to a remote server.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ExtractError::Request { .. } | ExtractError::Fetch { .. }
        )
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::EmptyLocator => write!(f, "Image locator is empty"),
            ExtractError::InvalidUrl { url, reason } => {
                write!(f, "Invalid image URL {url}: {reason}")
            }
            ExtractError::Request { url, reason } => {
                write!(f, "Request for {url} failed: {reason}")
            }
            ExtractError::Fetch { url, status } => {
                write!(f, "Error fetching image from {url} (HTTP {status})")
            }
            ExtractError::Decode { locator, reason } => {
                write!(f, "Error opening image file {locator}: {reason}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Extract(e) => write!(f, "Extraction Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ExtractError> for Error {
    fn from(err: ExtractError) -> Self {
        Error::Extract(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
