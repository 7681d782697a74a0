// SPDX-License-Identifier: MPL-2.0
//! EXIF directory reading and tag selection.
//!
//! Wraps `kamadak-exif`: tag ids are resolved to their standard names, only
//! primary-image fields are considered, and binary payloads are replaced with
//! a placeholder so the result is always printable.

use crate::domain::metadata::ExifValue;
use exif::{Field, In, Tag, Value};
use std::io::Cursor;

/// Conventional names that differ from the library's own tag names.
const TAG_ALIASES: [(Tag, &str); 4] = [
    (Tag::ExifIFDPointer, "ExifOffset"),
    (Tag::GPSInfoIFDPointer, "GPSInfo"),
    (Tag::InteropIFDPointer, "ExifInteroperabilityOffset"),
    (Tag::PhotographicSensitivity, "ISOSpeedRatings"),
];

/// Result of looking for an EXIF directory in an image.
pub enum ExifRead {
    Found(ExifDirectory),
    /// No EXIF block, or one with no primary-image fields.
    Absent,
    /// An EXIF block exists but is too malformed to yield any field.
    Unreadable(String),
}

/// A parsed EXIF directory.
pub struct ExifDirectory {
    exif: exif::Exif,
}

impl ExifDirectory {
    fn primary_fields(&self) -> impl Iterator<Item = &Field> {
        self.exif.fields().filter(|f| f.ifd_num == In::PRIMARY)
    }

    /// Number of primary-image fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary_fields().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolved names of every primary-image field, in directory order.
    #[must_use]
    pub fn tag_names(&self) -> Vec<String> {
        self.primary_fields().map(|f| resolve_tag_name(f.tag)).collect()
    }

    /// Returns the fields whose resolved name is in `desired`, in directory
    /// order, with values made text-safe.
    #[must_use]
    pub fn select<S: AsRef<str>>(&self, desired: &[S]) -> Vec<(String, ExifValue)> {
        self.primary_fields()
            .filter_map(|field| {
                let name = resolve_tag_name(field.tag);
                desired
                    .iter()
                    .any(|d| d.as_ref() == name)
                    .then(|| (name, coerce_value(field)))
            })
            .collect()
    }
}

/// Reads the EXIF directory embedded in a JPEG or TIFF byte stream.
///
/// Malformed entries are skipped with a warning; the remaining fields are
/// still returned.
#[must_use]
pub fn read_exif(bytes: &[u8]) -> ExifRead {
    let mut cursor = Cursor::new(bytes);
    let result = exif::Reader::new()
        .continue_on_error(true)
        .read_from_container(&mut cursor)
        .or_else(|err| {
            err.distill_partial_result(|errors| {
                for error in &errors {
                    tracing::warn!("Skipping malformed Exif entry: {error}");
                }
            })
        });

    match result {
        Ok(exif) => {
            let directory = ExifDirectory { exif };
            if directory.is_empty() {
                ExifRead::Absent
            } else {
                ExifRead::Found(directory)
            }
        }
        Err(exif::Error::NotFound(_)) | Err(exif::Error::BlankValue(_)) => ExifRead::Absent,
        Err(other) => ExifRead::Unreadable(other.to_string()),
    }
}

/// Standard name of a tag, or its decimal id when the tag is unknown.
#[must_use]
pub fn resolve_tag_name(tag: Tag) -> String {
    if let Some((_, alias)) = TAG_ALIASES.iter().find(|(t, _)| *t == tag) {
        return (*alias).to_string();
    }
    if tag.description().is_some() {
        tag.to_string()
    } else {
        tag.number().to_string()
    }
}

/// Converts a field value to printable form.
#[must_use]
pub fn coerce_value(field: &Field) -> ExifValue {
    match &field.value {
        Value::Undefined(..) | Value::Unknown(..) => ExifValue::Binary,
        Value::Ascii(strings) => ExifValue::Text(
            strings
                .iter()
                .map(|s| {
                    String::from_utf8_lossy(s)
                        .trim_end_matches(['\0', ' '])
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => ExifValue::Text(field.display_value().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exif::Context;

    fn field(tag: Tag, value: Value) -> Field {
        Field {
            tag,
            ifd_num: In::PRIMARY,
            value,
        }
    }

    #[test]
    fn known_tags_resolve_to_standard_names() {
        assert_eq!(resolve_tag_name(Tag::DateTime), "DateTime");
        assert_eq!(resolve_tag_name(Tag::Orientation), "Orientation");
        assert_eq!(resolve_tag_name(Tag::ImageDescription), "ImageDescription");
        assert_eq!(resolve_tag_name(Tag::YCbCrPositioning), "YCbCrPositioning");
    }

    #[test]
    fn pointer_tags_use_conventional_names() {
        assert_eq!(resolve_tag_name(Tag::GPSInfoIFDPointer), "GPSInfo");
        assert_eq!(resolve_tag_name(Tag::ExifIFDPointer), "ExifOffset");
        assert_eq!(
            resolve_tag_name(Tag::PhotographicSensitivity),
            "ISOSpeedRatings"
        );
    }

    #[test]
    fn unknown_tags_fall_back_to_numeric_id() {
        assert_eq!(resolve_tag_name(Tag(Context::Tiff, 0xC7FE)), "51198");
    }

    #[test]
    fn ascii_values_are_decoded_and_trimmed() {
        let f = field(
            Tag::DateTime,
            Value::Ascii(vec![b"2023:01:15 10:30:00".to_vec()]),
        );
        assert_eq!(
            coerce_value(&f),
            ExifValue::Text("2023:01:15 10:30:00".into())
        );

        let padded = field(Tag::Make, Value::Ascii(vec![b"Canon  ".to_vec()]));
        assert_eq!(coerce_value(&padded), ExifValue::Text("Canon".into()));
    }

    #[test]
    fn undefined_values_become_binary() {
        let f = field(Tag::MakerNote, Value::Undefined(vec![1, 2, 3, 4], 0));
        assert_eq!(coerce_value(&f), ExifValue::Binary);
        assert_eq!(coerce_value(&f).to_string(), "Binary Data");
    }

    #[test]
    fn numeric_values_use_display_form() {
        let f = field(Tag::Orientation, Value::Short(vec![1]));
        match coerce_value(&f) {
            ExifValue::Text(text) => assert!(!text.is_empty()),
            ExifValue::Binary => panic!("short values are not binary"),
        }
    }

    #[test]
    fn truncated_tiff_header_is_unreadable() {
        assert!(matches!(read_exif(b"MM\0*\0\0"), ExifRead::Unreadable(_)));
    }

    #[test]
    fn non_image_bytes_have_no_exif() {
        assert!(matches!(
            read_exif(b"plain text, no markers"),
            ExifRead::Absent | ExifRead::Unreadable(_)
        ));
    }
}
