// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Extraction**: sample locator and default tag selection
//! - **HTTP**: client identity and redirect policy

// ==========================================================================
// Extraction Defaults
// ==========================================================================

/// Locator used when none is given on the command line.
pub const DEFAULT_LOCATOR: &str =
    "https://upload.wikimedia.org/wikipedia/commons/3/38/JPEG_example_JPG_RIP_001.jpg";

/// EXIF tags extracted when neither the settings file nor the command line
/// name any.
pub const DEFAULT_DESIRED_TAGS: &[&str] = &["DateTime"];

// ==========================================================================
// HTTP Defaults
// ==========================================================================

/// User agent sent with remote requests.
pub const DEFAULT_USER_AGENT: &str = concat!("exif_probe/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed for one request.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Request timeout. `None` waits indefinitely.
pub const DEFAULT_TIMEOUT_SECS: Option<u64> = None;
