// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! This module provides the record an extraction produces:
//! - [`FileInfo`]: base file fields plus the requested EXIF entries
//! - [`FileType`] and [`ModifyDate`]: fields whose meaning depends on the source
//! - [`ExifOutcome`] / [`Extraction`]: what happened to the EXIF step

mod types;

pub use types::{
    megabytes, ExifOutcome, ExifValue, Extraction, FileInfo, FileType, ImageSize, ModifyDate,
    BINARY_DATA, FILE_MODIFY_DATE, FILE_NAME, FILE_SIZE, FILE_TYPE, IMAGE_SIZE, NO_LAST_MODIFIED,
};
