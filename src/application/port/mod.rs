// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`fetch`]: blocking HTTP GET used for remote images
//!
//! # Design Notes
//!
//! - Traits use plain data types only (no `reqwest` types leak through)
//! - Methods return `Result` with port-specific error types
//! - Everything is synchronous; one call blocks until it completes

pub mod fetch;

pub use fetch::{FetchError, FetchedResource, Fetcher};
