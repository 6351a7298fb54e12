//! Platform identification.
//!
//! The options crate needs exactly one fact about its environment: which
//! operating system it runs on. This module models that as the
//! [`PlatformProbe`] capability so callers and tests can supply their own
//! answer.
//!
//! # Overview
//!
//! - [`OperatingSystem`] - closed set of platform identifiers
//! - [`PlatformProbe`] - the query consulted when options are created
//! - [`CurrentPlatform`] - probe answering with the build target

pub mod probe;

pub use probe::{CurrentPlatform, OperatingSystem, PlatformProbe};
