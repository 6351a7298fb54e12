//! Builder pattern implementation for creating [`DownloaderOptions`].
//!
//! Every builder method goes through the matching setter, so the same
//! range rules apply: out-of-range numbers end up as the option's default.
//!
//! # Examples
//!
//! ```rust
//! use mediadl_options::{Browser, DownloaderOptionsBuilder, VideoCodec};
//!
//! let options = DownloaderOptionsBuilder::new()
//!     .max_number_of_active_downloads(3)
//!     .preferred_video_codec(VideoCodec::Av01)
//!     .use_aria(true)
//!     .aria_max_connections_per_server(8)
//!     .cookies_browser(Browser::Firefox)
//!     .build();
//!
//! assert_eq!(options.max_number_of_active_downloads(), 3);
//! assert_eq!(options.aria_max_connections_per_server(), 8);
//! ```
//!
//! ## Injecting the Platform
//!
//! ```rust
//! use mediadl_options::{DownloaderOptionsBuilder, OperatingSystem};
//!
//! let options = DownloaderOptionsBuilder::with_platform(&OperatingSystem::Windows).build();
//! assert!(options.limit_characters());
//! ```

use super::browser::Browser;
use super::codec::VideoCodec;
use super::downloader_options::DownloaderOptions;
use crate::platform::PlatformProbe;

use std::path::PathBuf;

/// A builder used to create [`DownloaderOptions`].
#[derive(Debug, Clone, Default)]
pub struct DownloaderOptionsBuilder {
    options: DownloaderOptions,
}

impl DownloaderOptionsBuilder {
    /// Creates a builder with the default options for the current platform.
    pub fn new() -> Self {
        DownloaderOptionsBuilder::default()
    }

    /// Creates a builder whose platform-dependent defaults come from `probe`.
    pub fn with_platform<P: PlatformProbe + ?Sized>(probe: &P) -> Self {
        Self {
            options: DownloaderOptions::with_platform(probe),
        }
    }

    /// Set whether to overwrite existing files.
    pub fn overwrite_existing_files(mut self, overwrite: bool) -> Self {
        self.options.set_overwrite_existing_files(overwrite);
        self
    }

    /// Set the number of concurrent downloads. Outside `1..=10` this becomes `5`.
    pub fn max_number_of_active_downloads(mut self, max: i32) -> Self {
        self.options.set_max_number_of_active_downloads(max);
        self
    }

    /// Override the platform-derived file name restriction.
    pub fn limit_characters(mut self, limit: bool) -> Self {
        self.options.set_limit_characters(limit);
        self
    }

    /// Set whether automatically generated subtitles are downloaded.
    pub fn include_auto_generated_subtitles(mut self, include: bool) -> Self {
        self.options.set_include_auto_generated_subtitles(include);
        self
    }

    /// Set the preferred video codec.
    pub fn preferred_video_codec(mut self, codec: VideoCodec) -> Self {
        self.options.set_preferred_video_codec(codec);
        self
    }

    /// Set whether transfers go through aria2.
    pub fn use_aria(mut self, use_aria: bool) -> Self {
        self.options.set_use_aria(use_aria);
        self
    }

    /// Set aria2's connections per server. Outside `1..=16` this becomes `16`.
    pub fn aria_max_connections_per_server(mut self, max_connections: i32) -> Self {
        self.options
            .set_aria_max_connections_per_server(max_connections);
        self
    }

    /// Set aria2's minimum split size in MiB. Outside `1..=1024` this becomes `20`.
    pub fn aria_min_split_size(mut self, min_split_size: i32) -> Self {
        self.options.set_aria_min_split_size(min_split_size);
        self
    }

    /// Set the speed limit in KiB/s. Outside `512..=10240` this becomes `1024`.
    pub fn speed_limit(mut self, speed_limit: u32) -> Self {
        self.options.set_speed_limit(speed_limit);
        self
    }

    /// Set the proxy URL, stored verbatim.
    pub fn proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.options.set_proxy_url(proxy_url);
        self
    }

    /// Set the browser to read cookies from.
    pub fn cookies_browser(mut self, browser: Browser) -> Self {
        self.options.set_cookies_browser(browser);
        self
    }

    /// Set the path of a cookies file.
    pub fn cookies_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.set_cookies_path(path);
        self
    }

    /// Set whether SponsorBlock is used.
    pub fn youtube_sponsor_block(mut self, sponsor_block: bool) -> Self {
        self.options.set_youtube_sponsor_block(sponsor_block);
        self
    }

    /// Set whether metadata is embedded.
    pub fn embed_metadata(mut self, embed_metadata: bool) -> Self {
        self.options.set_embed_metadata(embed_metadata);
        self
    }

    /// Set whether audio thumbnails are cropped.
    pub fn crop_audio_thumbnails(mut self, crop: bool) -> Self {
        self.options.set_crop_audio_thumbnails(crop);
        self
    }

    /// Set whether intermediate files are deleted.
    pub fn remove_source_data(mut self, remove: bool) -> Self {
        self.options.set_remove_source_data(remove);
        self
    }

    /// Set whether chapters are embedded.
    pub fn embed_chapters(mut self, embed_chapters: bool) -> Self {
        self.options.set_embed_chapters(embed_chapters);
        self
    }

    /// Set whether subtitles are embedded.
    pub fn embed_subtitles(mut self, embed_subtitles: bool) -> Self {
        self.options.set_embed_subtitles(embed_subtitles);
        self
    }

    /// Set extra FFmpeg arguments, stored verbatim.
    pub fn ffmpeg_args(mut self, ffmpeg_args: impl Into<String>) -> Self {
        self.options.set_ffmpeg_args(ffmpeg_args);
        self
    }

    /// Create the [`DownloaderOptions`].
    pub fn build(self) -> DownloaderOptions {
        self.options
    }
}
