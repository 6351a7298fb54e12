//! Numeric options with a valid range and a fallback.
//!
//! A [`Setting`] describes one ranged option: its inclusive bounds and the
//! value used whenever a caller asks for something outside of them. The
//! fallback is the recommended default, not the nearest bound.
//!
//! # Examples
//!
//! ```rust
//! use mediadl_options::options::SPEED_LIMIT;
//!
//! assert_eq!(SPEED_LIMIT.normalize(2048), 2048);
//! assert_eq!(SPEED_LIMIT.normalize(10241), SPEED_LIMIT.default);
//! assert_eq!(SPEED_LIMIT.normalize(511), 1024);
//! ```

use std::fmt::Display;
use tracing::debug;

/// Inclusive range and fallback value of a numeric option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting<T> {
    /// Name of the option, used in log events.
    pub name: &'static str,
    /// Smallest accepted value.
    pub min: T,
    /// Largest accepted value.
    pub max: T,
    /// Value stored on construction and whenever a value is out of range.
    pub default: T,
}

impl<T> Setting<T>
where
    T: Copy + PartialOrd + Display,
{
    /// Returns `true` when `value` lies within `min..=max`.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns `value` if it is in range, otherwise the default.
    pub fn normalize(&self, value: T) -> T {
        if self.contains(value) {
            value
        } else {
            debug!(
                option = self.name,
                rejected = %value,
                fallback = %self.default,
                "Value out of range [{}, {}], using default",
                self.min,
                self.max
            );
            self.default
        }
    }
}

/// Number of downloads allowed to run at the same time.
pub const MAX_ACTIVE_DOWNLOADS: Setting<i32> = Setting {
    name: "max_number_of_active_downloads",
    min: 1,
    max: 10,
    default: 5,
};

/// aria2 `--max-connection-per-server`.
pub const ARIA_MAX_CONNECTIONS_PER_SERVER: Setting<i32> = Setting {
    name: "aria_max_connections_per_server",
    min: 1,
    max: 16,
    default: 16,
};

/// aria2 `--min-split-size`, in MiB.
pub const ARIA_MIN_SPLIT_SIZE: Setting<i32> = Setting {
    name: "aria_min_split_size",
    min: 1,
    max: 1024,
    default: 20,
};

/// Download speed limit, in KiB/s.
pub const SPEED_LIMIT: Setting<u32> = Setting {
    name: "speed_limit",
    min: 512,
    max: 10240,
    default: 1024,
};
