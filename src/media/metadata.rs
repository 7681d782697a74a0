// SPDX-License-Identifier: MPL-2.0
//! Metadata extraction for a single image, local or remote.
//!
//! [`MetadataExtractor::extract`] builds the base [`FileInfo`] for the
//! source, then merges in the requested EXIF tags when the decoded format is
//! JPEG or TIFF. Non-fatal anomalies are logged through `tracing` and reported
//! in [`ExifOutcome`]; total failures come back as [`ExtractError`].

use crate::application::port::fetch::{FetchError, Fetcher};
use crate::config::Config;
use crate::domain::locator::ImageLocator;
use crate::domain::metadata::{
    megabytes, ExifOutcome, Extraction, FileInfo, FileType, ModifyDate,
};
use crate::error::{ExtractError, Result};
use crate::infrastructure::http::ReqwestFetcher;
use crate::media::exif_reader::{read_exif, ExifRead};
use crate::media::image::{probe_image, ImageProbe};
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::Path;

/// HTTP date layout used as a fallback when a header is not strict RFC 2822.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Base record plus the bytes it was built from.
struct LoadedSource {
    info: FileInfo,
    bytes: Vec<u8>,
    probe: ImageProbe,
}

/// Extracts file information and selected EXIF tags from one image.
///
/// Each call is independent: nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct MetadataExtractor<F = ReqwestFetcher> {
    fetcher: F,
}

impl MetadataExtractor<ReqwestFetcher> {
    /// Creates an extractor whose HTTP client follows `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(&config.http_settings())?;
        Ok(Self { fetcher })
    }

    /// Creates an extractor with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&Config::default())
    }
}

impl<F: Fetcher> MetadataExtractor<F> {
    /// Creates an extractor that fetches remote images through `fetcher`.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Extracts metadata for `locator`, keeping only the EXIF tags named in
    /// `desired_tags`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] when no record can be produced: empty locator,
    /// unusable URL, failed request, non-200 status, or an unreadable or
    /// undecodable image.
    pub fn extract<S: AsRef<str>>(
        &self,
        locator: &str,
        desired_tags: &[S],
    ) -> std::result::Result<Extraction, ExtractError> {
        let source = ImageLocator::parse(locator).ok_or(ExtractError::EmptyLocator)?;

        let loaded = match source {
            ImageLocator::Remote(url) => self.load_remote(&url),
            ImageLocator::Local(path) => load_local(&path, locator),
        }
        .inspect_err(|err| tracing::warn!(locator, "{err}"))?;

        let LoadedSource {
            mut info,
            bytes,
            probe,
        } = loaded;
        let exif = merge_exif(&mut info, &bytes, &probe, desired_tags, locator);

        Ok(Extraction { info, exif })
    }

    fn load_remote(&self, url: &str) -> std::result::Result<LoadedSource, ExtractError> {
        let response = self.fetcher.fetch(url).map_err(|err| match err {
            FetchError::InvalidUrl(reason) => ExtractError::InvalidUrl {
                url: url.to_string(),
                reason,
            },
            FetchError::Transport(reason) => ExtractError::Request {
                url: url.to_string(),
                reason,
            },
        })?;

        if !response.is_ok() {
            return Err(ExtractError::Fetch {
                url: url.to_string(),
                status: response.status,
            });
        }

        let probe = probe_image(&response.body).map_err(|e| ExtractError::Decode {
            locator: url.to_string(),
            reason: e.to_string(),
        })?;

        let info = FileInfo::new(
            remote_file_name(url),
            megabytes(response.body.len() as u64),
            FileType::Format(probe.format_name().to_lowercase()),
            probe.size,
            parse_last_modified(response.last_modified.as_deref()),
        );

        Ok(LoadedSource {
            info,
            bytes: response.body,
            probe,
        })
    }
}

fn load_local(path: &Path, locator: &str) -> std::result::Result<LoadedSource, ExtractError> {
    let decode_error = |reason: String| ExtractError::Decode {
        locator: locator.to_string(),
        reason,
    };

    let fs_metadata = fs::metadata(path).map_err(|e| decode_error(e.to_string()))?;
    let modified = fs_metadata
        .modified()
        .map_err(|e| decode_error(e.to_string()))?;
    let bytes = fs::read(path).map_err(|e| decode_error(e.to_string()))?;
    let probe = probe_image(&bytes).map_err(|e| decode_error(e.to_string()))?;

    let info = FileInfo::new(
        ImageLocator::local_file_name(path),
        megabytes(fs_metadata.len()),
        FileType::Extension(ImageLocator::local_extension(path)),
        probe.size,
        ModifyDate::Timestamp(DateTime::<Local>::from(modified).naive_local()),
    );

    Ok(LoadedSource { info, bytes, probe })
}

/// Reads the EXIF directory and merges the requested tags into `info`.
fn merge_exif<S: AsRef<str>>(
    info: &mut FileInfo,
    bytes: &[u8],
    probe: &ImageProbe,
    desired_tags: &[S],
    locator: &str,
) -> ExifOutcome {
    if !probe.supports_exif() {
        let format = probe.format_name();
        tracing::info!("Image format '{format}' does not support Exif data.");
        return ExifOutcome::UnsupportedFormat { format };
    }

    match read_exif(bytes) {
        ExifRead::Absent => {
            tracing::info!("No Exif data found in image: {locator}");
            ExifOutcome::NoExif
        }
        ExifRead::Unreadable(reason) => {
            tracing::warn!(locator, "Unreadable Exif data: {reason}");
            ExifOutcome::Unreadable { reason }
        }
        ExifRead::Found(directory) => {
            tracing::debug!(tags = ?directory.tag_names(), "Exif directory read");
            for (name, value) in directory.select(desired_tags) {
                info.insert_exif(name, value);
            }
            ExifOutcome::Extracted {
                matched: info.exif().len(),
            }
        }
    }
}

/// Last non-empty path segment of a URL, or its host when the path is empty.
fn remote_file_name(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string)
            .or_else(|| parsed.host_str().map(str::to_string))
            .unwrap_or_default(),
        Err(_) => url.rsplit('/').next().unwrap_or_default().to_string(),
    }
}

/// Interprets a `Last-Modified` header value.
fn parse_last_modified(header: Option<&str>) -> ModifyDate {
    let Some(raw) = header else {
        return ModifyDate::Unavailable;
    };
    let raw = raw.trim();

    DateTime::parse_from_rfc2822(raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, HTTP_DATE_FORMAT))
        .map(ModifyDate::Timestamp)
        .unwrap_or_else(|_| ModifyDate::Unparsed(raw.to_string()))
}
