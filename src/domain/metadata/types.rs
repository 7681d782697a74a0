// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure value types describing the record produced for one image.

use chrono::NaiveDateTime;
use std::fmt;

/// Key of the file name entry.
pub const FILE_NAME: &str = "FileName";
/// Key of the file size entry (megabytes).
pub const FILE_SIZE: &str = "FileSize";
/// Key of the file type entry.
pub const FILE_TYPE: &str = "FileType";
/// Key of the pixel dimensions entry.
pub const IMAGE_SIZE: &str = "ImageSize";
/// Key of the modification date entry.
pub const FILE_MODIFY_DATE: &str = "FileModifyDate";

/// Text shown in place of binary EXIF payloads.
pub const BINARY_DATA: &str = "Binary Data";

/// Text shown when a remote response carries no `Last-Modified` header.
pub const NO_LAST_MODIFIED: &str = "No Last-Modified header";

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Converts a byte count to megabytes rounded to two decimal places.
#[must_use]
pub fn megabytes(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MEGABYTE * 100.0).round() / 100.0
}

// =============================================================================
// FileType
// =============================================================================

/// The reported file type.
///
/// Local files report their path extension while remote files report the
/// format the decoder detected, so the two sources are kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileType {
    /// Lowercase path extension without the leading dot (may be empty).
    Extension(String),
    /// Lowercase decoder format name, e.g. `jpeg`.
    Format(String),
}

impl FileType {
    /// Returns the type text regardless of where it came from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            FileType::Extension(s) | FileType::Format(s) => s,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ModifyDate
// =============================================================================

/// Last modification date of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifyDate {
    /// A known point in time (local time for files, UTC for HTTP headers).
    Timestamp(NaiveDateTime),
    /// The remote response carried no `Last-Modified` header.
    Unavailable,
    /// A `Last-Modified` header was present but is not an HTTP date.
    Unparsed(String),
}

impl ModifyDate {
    /// Returns the timestamp, if one is known.
    #[must_use]
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            ModifyDate::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl fmt::Display for ModifyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifyDate::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            ModifyDate::Unavailable => f.write_str(NO_LAST_MODIFIED),
            ModifyDate::Unparsed(raw) => f.write_str(raw),
        }
    }
}

// =============================================================================
// ImageSize
// =============================================================================

/// Pixel dimensions of the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

// =============================================================================
// ExifValue
// =============================================================================

/// A text-safe EXIF value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExifValue {
    Text(String),
    /// Raw byte payload, never exposed.
    Binary,
}

impl fmt::Display for ExifValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifValue::Text(s) => f.write_str(s),
            ExifValue::Binary => f.write_str(BINARY_DATA),
        }
    }
}

// =============================================================================
// FileInfo
// =============================================================================

/// Normalized metadata record for one image.
///
/// Base fields are always present; EXIF entries are appended in directory
/// order for the requested tags that were found.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub file_name: String,
    /// Size in megabytes, rounded to two decimals.
    pub file_size: f64,
    pub file_type: FileType,
    pub image_size: ImageSize,
    pub modify_date: ModifyDate,
    exif: Vec<(String, ExifValue)>,
}

impl FileInfo {
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        file_size: f64,
        file_type: FileType,
        image_size: ImageSize,
        modify_date: ModifyDate,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            file_size,
            file_type,
            image_size,
            modify_date,
            exif: Vec::new(),
        }
    }

    /// Adds an EXIF entry. A repeated name replaces the earlier value in place.
    pub fn insert_exif(&mut self, name: impl Into<String>, value: ExifValue) {
        let name = name.into();
        match self.exif.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.exif.push((name, value)),
        }
    }

    /// EXIF entries in insertion order.
    #[must_use]
    pub fn exif(&self) -> &[(String, ExifValue)] {
        &self.exif
    }

    /// Looks up an EXIF entry by tag name.
    #[must_use]
    pub fn exif_value(&self, name: &str) -> Option<&ExifValue> {
        self.exif
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the record carries at least one EXIF entry.
    #[must_use]
    pub fn has_exif(&self) -> bool {
        !self.exif.is_empty()
    }

    /// Flattens the record into `(key, value)` text pairs.
    ///
    /// Base fields come first. An EXIF entry whose name matches a base key
    /// overwrites that value without moving it.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            (FILE_NAME.to_string(), self.file_name.clone()),
            (FILE_SIZE.to_string(), format!("{:?}", self.file_size)),
            (FILE_TYPE.to_string(), self.file_type.to_string()),
            (IMAGE_SIZE.to_string(), self.image_size.to_string()),
            (FILE_MODIFY_DATE.to_string(), self.modify_date.to_string()),
        ];

        for (name, value) in &self.exif {
            match entries.iter_mut().find(|(key, _)| key == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => entries.push((name.clone(), value.to_string())),
            }
        }

        entries
    }

    /// Looks up any entry, base or EXIF, by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// All keys in output order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries().into_iter().map(|(k, _)| k).collect()
    }
}

// =============================================================================
// Extraction
// =============================================================================

/// What happened to the EXIF step of an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExifOutcome {
    /// EXIF was read; `matched` requested tags were found.
    Extracted { matched: usize },
    /// The format cannot carry EXIF (only JPEG and TIFF are read).
    UnsupportedFormat { format: String },
    /// The image carries no EXIF data.
    NoExif,
    /// An EXIF block exists but could not be parsed.
    Unreadable { reason: String },
}

impl ExifOutcome {
    /// Returns `true` if the EXIF directory was read.
    #[must_use]
    pub fn is_extracted(&self) -> bool {
        matches!(self, ExifOutcome::Extracted { .. })
    }
}

/// A successful extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub info: FileInfo,
    pub exif: ExifOutcome,
}

// =============================================================================
// Tests
// =============================================================================
