// SPDX-License-Identifier: MPL-2.0
//! Image locators: a local filesystem path or an absolute HTTP(S) URL.

use std::path::{Path, PathBuf};

const REMOTE_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Where an image is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocator {
    /// An `http://` or `https://` URL, kept verbatim.
    Remote(String),
    /// Anything else is treated as a filesystem path.
    Local(PathBuf),
}

impl ImageLocator {
    /// Classifies a locator string by its scheme prefix.
    ///
    /// Returns `None` for an empty string.
    #[must_use]
    pub fn parse(locator: &str) -> Option<Self> {
        if locator.is_empty() {
            return None;
        }
        if REMOTE_PREFIXES.iter().any(|p| locator.starts_with(p)) {
            Some(ImageLocator::Remote(locator.to_string()))
        } else {
            Some(ImageLocator::Local(PathBuf::from(locator)))
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageLocator::Remote(_))
    }

    /// Base name of a local path, lossily converted.
    #[must_use]
    pub fn local_file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Lowercase extension of a local path without the dot.
    #[must_use]
    pub fn local_extension(path: &Path) -> String {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}
