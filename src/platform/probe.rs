//! Operating system identification and the probe used to seed defaults.
//!
//! # Examples
//!
//! ```rust
//! use mediadl_options::platform::{OperatingSystem, PlatformProbe};
//!
//! // Any closure returning an `OperatingSystem` is a probe.
//! let probe = || OperatingSystem::Windows;
//! assert!(probe.operating_system().limits_characters());
//! ```

use crate::error::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// The operating systems the options know how to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOS,
    /// Linux, any distribution.
    Linux,
    /// Anything else (BSDs, wasm, ...).
    Other,
}

impl OperatingSystem {
    /// Every variant, in declaration order.
    pub const ALL: [OperatingSystem; 4] = [
        OperatingSystem::Windows,
        OperatingSystem::MacOS,
        OperatingSystem::Linux,
        OperatingSystem::Other,
    ];

    /// The operating system this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OperatingSystem::Windows
        } else if cfg!(target_os = "macos") {
            OperatingSystem::MacOS
        } else if cfg!(target_os = "linux") {
            OperatingSystem::Linux
        } else {
            OperatingSystem::Other
        }
    }

    /// Stable lowercase name, matching `std::env::consts::OS` where one exists.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOS => "macos",
            OperatingSystem::Linux => "linux",
            OperatingSystem::Other => "other",
        }
    }

    /// Whether file names written on this platform must avoid reserved characters.
    ///
    /// Only Windows restricts file names enough to warrant it.
    pub fn limits_characters(&self) -> bool {
        matches!(self, OperatingSystem::Windows)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "windows" => Ok(OperatingSystem::Windows),
            "macos" | "mac" | "darwin" => Ok(OperatingSystem::MacOS),
            "linux" => Ok(OperatingSystem::Linux),
            "other" => Ok(OperatingSystem::Other),
            _ => Err(Error::UnknownOperatingSystem(s.to_string())),
        }
    }
}

/// Answers "which operating system are we on?".
///
/// [`DownloaderOptions`](crate::DownloaderOptions) asks this once, at
/// construction, to pick its `limit_characters` default. Tests inject a fixed
/// answer instead of relying on the build target.
pub trait PlatformProbe {
    /// The operating system the process runs on.
    fn operating_system(&self) -> OperatingSystem;
}

/// Probe backed by the compile-time target.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentPlatform;

impl PlatformProbe for CurrentPlatform {
    fn operating_system(&self) -> OperatingSystem {
        OperatingSystem::current()
    }
}

impl PlatformProbe for OperatingSystem {
    fn operating_system(&self) -> OperatingSystem {
        *self
    }
}

impl<F> PlatformProbe for F
where
    F: Fn() -> OperatingSystem,
{
    fn operating_system(&self) -> OperatingSystem {
        self()
    }
}
