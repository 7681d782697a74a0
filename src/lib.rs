// SPDX-License-Identifier: MPL-2.0
//! `exif_probe` reads a single image, from disk or over HTTP, and reports its
//! basic file information together with a caller-selected subset of EXIF tags.
//!
//! ```no_run
//! use exif_probe::media::metadata::MetadataExtractor;
//!
//! let extractor = MetadataExtractor::with_defaults()?;
//! let extraction = extractor.extract("photo.jpg", &["DateTime"])?;
//! for (key, value) in extraction.info.entries() {
//!     println!("{key}: {value}");
//! }
//! # Ok::<(), exif_probe::error::Error>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod report;

pub use domain::metadata::{ExifOutcome, ExifValue, Extraction, FileInfo, FileType, ModifyDate};
pub use error::{Error, ExtractError, Result};
pub use media::metadata::MetadataExtractor;
