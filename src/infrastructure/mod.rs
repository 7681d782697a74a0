// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: blocking HTTP via `reqwest` (implements [`Fetcher`])
//!
//! [`Fetcher`]: crate::application::port::Fetcher

pub mod http;

pub use http::{HttpSettings, ReqwestFetcher};
