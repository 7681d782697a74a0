// SPDX-License-Identifier: MPL-2.0
//! Plain-text rendering of an extraction for standard output.

use crate::domain::metadata::Extraction;
use crate::error::ExtractError;

/// Line printed when an extraction produced nothing.
pub const NO_DATA_MESSAGE: &str = "No data found or extracted from the image.";

/// Renders one `Key: Value` line per entry, or [`NO_DATA_MESSAGE`] on failure.
#[must_use]
pub fn render(result: &Result<Extraction, ExtractError>) -> String {
    match result {
        Ok(extraction) => extraction
            .info
            .entries()
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect(),
        Err(_) => format!("{NO_DATA_MESSAGE}\n"),
    }
}
