// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the extractor depends on.
//!
//! - [`port`]: Trait definitions (interfaces) implemented by `infrastructure`
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - `media::metadata` drives the ports

pub mod port;
