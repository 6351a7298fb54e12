//! Validated options for a media download engine.
//!
//! The crate holds the user-tunable parameters a download engine reads when it
//! configures jobs: concurrency, bandwidth, the aria2 backend, cookies, proxy
//! and post-processing toggles. Numeric options never hold an out-of-range
//! value; setting one resets it to its default instead.
//!
//! # Quick Start
//!
//! ```rust
//! use mediadl_options::{DownloaderOptions, VideoCodec};
//!
//! let mut options = DownloaderOptions::new();
//! options.set_preferred_video_codec(VideoCodec::Vp9);
//! options.set_speed_limit(4096);
//! options.set_ffmpeg_args("-movflags +faststart");
//!
//! assert_eq!(options.speed_limit(), 4096);
//! options.set_speed_limit(100);
//! assert_eq!(options.speed_limit(), 1024);
//! ```
//!
//! # Module Organization
//!
//! - [`options`] - the `DownloaderOptions` entity, its builder and value types
//! - [`platform`] - operating system probe used to seed platform defaults
//! - [`error`] - error type for the fallible parsing and conversion helpers

#![warn(missing_docs)]

pub mod error;
pub mod options;
pub mod platform;

pub use error::{Error, Result};
pub use options::{Browser, DownloaderOptions, DownloaderOptionsBuilder, Setting, VideoCodec};
pub use platform::{CurrentPlatform, OperatingSystem, PlatformProbe};
