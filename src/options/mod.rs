//! Download and conversion options.
//!
//! # Overview
//!
//! - `downloader_options` - the [`DownloaderOptions`] entity with one getter and setter per option
//! - `builder` - [`DownloaderOptionsBuilder`] for chained construction
//! - `setting` - ranges and fallbacks of the numeric options
//! - `codec` / `browser` - the enumerated option values
//!
//! # Examples
//!
//! ```rust
//! use mediadl_options::options::{DownloaderOptions, SPEED_LIMIT};
//!
//! let mut options = DownloaderOptions::new();
//! options.set_speed_limit(SPEED_LIMIT.max + 1);
//! assert_eq!(options.speed_limit(), SPEED_LIMIT.default);
//! ```

pub mod browser;
pub mod builder;
pub mod codec;
pub mod downloader_options;
pub mod setting;

pub use browser::Browser;
pub use builder::DownloaderOptionsBuilder;
pub use codec::VideoCodec;
pub use downloader_options::DownloaderOptions;
pub use setting::{
    Setting, ARIA_MAX_CONNECTIONS_PER_SERVER, ARIA_MIN_SPLIT_SIZE, MAX_ACTIVE_DOWNLOADS,
    SPEED_LIMIT,
};
