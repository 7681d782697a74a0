// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types.
//!
//! Nothing here performs I/O; `chrono` is the only external crate used, for
//! timestamps.
//!
//! # Modules
//!
//! - [`locator`]: [`ImageLocator`](locator::ImageLocator) classification
//! - [`metadata`]: the extracted record ([`FileInfo`](metadata::FileInfo),
//!   [`ExifOutcome`](metadata::ExifOutcome), [`Extraction`](metadata::Extraction))

pub mod locator;
pub mod metadata;
