// SPDX-License-Identifier: MPL-2.0
//! Image inspection: format detection, EXIF reading, and the extractor that
//! combines them into one record.

pub mod exif_reader;
pub mod image;
pub mod metadata;
