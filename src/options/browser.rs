//! Browser to borrow cookies from.

use crate::error::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// A browser whose cookie store can be read for authenticated downloads.
///
/// [`Browser::None`] means cookies are not taken from any browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Browser {
    /// No browser; cookies come from `cookies_path` or nowhere.
    #[default]
    None,
    /// Brave.
    Brave,
    /// Google Chrome.
    Chrome,
    /// Chromium.
    Chromium,
    /// Microsoft Edge.
    Edge,
    /// Mozilla Firefox.
    Firefox,
    /// Opera.
    Opera,
    /// Apple Safari.
    Safari,
    /// Vivaldi.
    Vivaldi,
    /// Naver Whale.
    Whale,
}

impl Browser {
    /// Every variant, in declaration order.
    pub const ALL: [Browser; 10] = [
        Browser::None,
        Browser::Brave,
        Browser::Chrome,
        Browser::Chromium,
        Browser::Edge,
        Browser::Firefox,
        Browser::Opera,
        Browser::Safari,
        Browser::Vivaldi,
        Browser::Whale,
    ];

    /// Lowercase name as accepted by `--cookies-from-browser`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::None => "none",
            Browser::Brave => "brave",
            Browser::Chrome => "chrome",
            Browser::Chromium => "chromium",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Opera => "opera",
            Browser::Safari => "safari",
            Browser::Vivaldi => "vivaldi",
            Browser::Whale => "whale",
        }
    }

    /// Returns `true` when cookies are not taken from a browser.
    pub fn is_none(&self) -> bool {
        matches!(self, Browser::None)
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Browser::ALL
            .into_iter()
            .find(|browser| browser.as_str() == name)
            .ok_or_else(|| Error::UnknownBrowser(s.to_string()))
    }
}
