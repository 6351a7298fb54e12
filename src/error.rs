//! Error handling for the options crate.
//!
//! Setting an option never fails: out-of-range values are replaced by the
//! option's default. The errors below only come from the helpers that parse
//! names or turn an option into something a transport can use.

use thiserror::Error;

/// Errors that can happen when parsing or converting options.
#[derive(Error, Debug)]
pub enum Error {
    /// The name does not match any [`VideoCodec`](crate::VideoCodec).
    #[error("Unknown video codec: {0}")]
    UnknownVideoCodec(String),

    /// The name does not match any [`Browser`](crate::Browser).
    #[error("Unknown browser: {0}")]
    UnknownBrowser(String),

    /// The name does not match any [`OperatingSystem`](crate::OperatingSystem).
    #[error("Unknown operating system: {0}")]
    UnknownOperatingSystem(String),

    /// Error from the Reqwest library, e.g. a proxy URL it cannot use.
    #[error("Reqwest Error")]
    Reqwest {
        /// The underlying reqwest error.
        #[from]
        source: reqwest::Error,
    },
}

/// Result type alias for fallible option helpers.
pub type Result<T> = std::result::Result<T, Error>;
