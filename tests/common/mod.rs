// SPDX-License-Identifier: MPL-2.0
//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use exif_probe::application::port::fetch::{FetchError, FetchedResource, Fetcher};
use image_rs::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// `DateTime` value embedded by [`exif_block`].
pub const FIXTURE_DATE_TIME: &str = "2023:01:15 10:30:00";

pub fn encode(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([90, 140, 200])));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .expect("failed to encode fixture image");
    buffer.into_inner()
}

fn ifd_entry(buf: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]) {
    buf.extend_from_slice(&tag.to_be_bytes());
    buf.extend_from_slice(&kind.to_be_bytes());
    buf.extend_from_slice(&count.to_be_bytes());
    buf.extend_from_slice(&value);
}

/// Big-endian TIFF structure holding:
/// - IFD0: Orientation (SHORT), DateTime (ASCII), Exif IFD pointer
/// - Exif IFD: MakerNote (UNDEFINED, 4 bytes)
pub fn exif_block() -> Vec<u8> {
    tiff_block(false)
}

/// [`exif_block`] with an extra IFD0 `Artist` entry whose value offset points
/// far past the end of the block.
pub fn exif_block_with_truncated_entry() -> Vec<u8> {
    tiff_block(true)
}

fn tiff_block(truncated_artist: bool) -> Vec<u8> {
    const SHORT: u16 = 3;
    const ASCII: u16 = 2;
    const LONG: u16 = 4;
    const UNDEFINED: u16 = 7;

    let ifd0_entries: u16 = if truncated_artist { 4 } else { 3 };
    let date_offset = 8 + 2 + 12 * u32::from(ifd0_entries) + 4;
    let exif_ifd_offset = date_offset + 20;

    let mut buf = b"MM\0*".to_vec();
    buf.extend_from_slice(&8u32.to_be_bytes());

    buf.extend_from_slice(&ifd0_entries.to_be_bytes());
    ifd_entry(&mut buf, 0x0112, SHORT, 1, [0, 1, 0, 0]);
    ifd_entry(&mut buf, 0x0132, ASCII, 20, date_offset.to_be_bytes());
    if truncated_artist {
        ifd_entry(&mut buf, 0x013B, ASCII, 16, 0xFFFF_0000u32.to_be_bytes());
    }
    ifd_entry(&mut buf, 0x8769, LONG, 1, exif_ifd_offset.to_be_bytes());
    buf.extend_from_slice(&0u32.to_be_bytes());
    assert_eq!(buf.len(), date_offset as usize);

    buf.extend_from_slice(FIXTURE_DATE_TIME.as_bytes());
    buf.push(0);
    assert_eq!(buf.len(), exif_ifd_offset as usize);

    buf.extend_from_slice(&1u16.to_be_bytes());
    ifd_entry(&mut buf, 0x927C, UNDEFINED, 4, *b"ABCD");
    buf.extend_from_slice(&0u32.to_be_bytes());
    buf
}

/// A baseline JPEG with an APP1 EXIF segment inserted right after SOI.
pub fn jpeg_with_exif(width: u32, height: u32) -> Vec<u8> {
    jpeg_with_exif_payload(width, height, &exif_block())
}

/// A baseline JPEG whose APP1 segment carries `Exif\0\0` followed by `tiff`.
pub fn jpeg_with_exif_payload(width: u32, height: u32, tiff: &[u8]) -> Vec<u8> {
    let jpeg = encode(ImageFormat::Jpeg, width, height);

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(tiff);
    let segment_len = u16::try_from(payload.len() + 2).expect("segment fits in u16");

    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// A [`Fetcher`] that always returns the same canned response.
pub struct StubFetcher {
    response: Result<FetchedResource, FetchError>,
}

impl StubFetcher {
    pub fn ok(body: Vec<u8>, last_modified: Option<&str>) -> Self {
        Self::status(200, body, last_modified)
    }

    pub fn status(status: u16, body: Vec<u8>, last_modified: Option<&str>) -> Self {
        Self {
            response: Ok(FetchedResource {
                status,
                last_modified: last_modified.map(str::to_string),
                body,
            }),
        }
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<FetchedResource, FetchError> {
        self.response.clone()
    }
}
