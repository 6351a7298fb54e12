//! The options entity read by the download engine.

use super::browser::Browser;
use super::codec::VideoCodec;
use super::setting::{
    ARIA_MAX_CONNECTIONS_PER_SERVER, ARIA_MIN_SPLIT_SIZE, MAX_ACTIVE_DOWNLOADS, SPEED_LIMIT,
};
use crate::error::Result;
use crate::platform::{CurrentPlatform, PlatformProbe};

use reqwest::Proxy;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Download and conversion options.
///
/// Every field is private and has a getter and a setter. Setters for numeric
/// fields never fail: a value outside the field's range is replaced by the
/// field's default (see [`crate::options::setting`]).
///
/// ```rust
/// use mediadl_options::DownloaderOptions;
///
/// let mut options = DownloaderOptions::new();
/// options.set_max_number_of_active_downloads(8);
/// assert_eq!(options.max_number_of_active_downloads(), 8);
///
/// options.set_max_number_of_active_downloads(42);
/// assert_eq!(options.max_number_of_active_downloads(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloaderOptions {
    overwrite_existing_files: bool,
    max_number_of_active_downloads: i32,
    limit_characters: bool,
    include_auto_generated_subtitles: bool,
    preferred_video_codec: VideoCodec,
    use_aria: bool,
    aria_max_connections_per_server: i32,
    aria_min_split_size: i32,
    /// KiB/s.
    speed_limit: u32,
    proxy_url: String,
    cookies_browser: Browser,
    cookies_path: PathBuf,
    youtube_sponsor_block: bool,
    embed_metadata: bool,
    crop_audio_thumbnails: bool,
    remove_source_data: bool,
    embed_chapters: bool,
    embed_subtitles: bool,
    ffmpeg_args: String,
}

impl Default for DownloaderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloaderOptions {
    /// Creates options with every default, asking the build target whether
    /// file name characters must be limited.
    pub fn new() -> Self {
        Self::with_platform(&CurrentPlatform)
    }

    /// Creates options with every default, asking `probe` whether file name
    /// characters must be limited. The probe is queried once.
    pub fn with_platform<P: PlatformProbe + ?Sized>(probe: &P) -> Self {
        let os = probe.operating_system();
        trace!(os = %os, "Seeding limit_characters from platform");
        Self::with_limit_characters(os.limits_characters())
    }

    fn with_limit_characters(limit_characters: bool) -> Self {
        Self {
            overwrite_existing_files: true,
            max_number_of_active_downloads: MAX_ACTIVE_DOWNLOADS.default,
            limit_characters,
            include_auto_generated_subtitles: true,
            preferred_video_codec: VideoCodec::Any,
            use_aria: false,
            aria_max_connections_per_server: ARIA_MAX_CONNECTIONS_PER_SERVER.default,
            aria_min_split_size: ARIA_MIN_SPLIT_SIZE.default,
            speed_limit: SPEED_LIMIT.default,
            proxy_url: String::new(),
            cookies_browser: Browser::None,
            cookies_path: PathBuf::new(),
            youtube_sponsor_block: false,
            embed_metadata: true,
            crop_audio_thumbnails: false,
            remove_source_data: false,
            embed_chapters: false,
            embed_subtitles: true,
            ffmpeg_args: String::new(),
        }
    }

    /// Puts every option back to its default.
    ///
    /// `limit_characters` keeps its current value: its default depends on the
    /// platform, and the platform is only queried at construction.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::with_limit_characters(self.limit_characters);
    }

    /// Whether an existing file at the destination is replaced.
    pub fn overwrite_existing_files(&self) -> bool {
        self.overwrite_existing_files
    }

    /// Sets whether existing files are replaced.
    pub fn set_overwrite_existing_files(&mut self, overwrite: bool) {
        self.overwrite_existing_files = overwrite;
    }

    /// Number of downloads allowed to run concurrently, in `1..=10`.
    pub fn max_number_of_active_downloads(&self) -> i32 {
        self.max_number_of_active_downloads
    }

    /// Values outside `1..=10` store `5`.
    pub fn set_max_number_of_active_downloads(&mut self, max: i32) {
        self.max_number_of_active_downloads = MAX_ACTIVE_DOWNLOADS.normalize(max);
    }

    /// Whether file names are restricted to characters valid on Windows.
    pub fn limit_characters(&self) -> bool {
        self.limit_characters
    }

    /// Overrides the platform-derived file name restriction.
    pub fn set_limit_characters(&mut self, limit: bool) {
        self.limit_characters = limit;
    }

    /// Whether automatically generated subtitles are downloaded too.
    pub fn include_auto_generated_subtitles(&self) -> bool {
        self.include_auto_generated_subtitles
    }

    /// Sets whether automatically generated subtitles are downloaded.
    pub fn set_include_auto_generated_subtitles(&mut self, include: bool) {
        self.include_auto_generated_subtitles = include;
    }

    /// Codec preferred when several video formats are offered.
    pub fn preferred_video_codec(&self) -> VideoCodec {
        self.preferred_video_codec
    }

    /// Sets the preferred video codec.
    pub fn set_preferred_video_codec(&mut self, codec: VideoCodec) {
        self.preferred_video_codec = codec;
    }

    /// Whether transfers go through aria2 instead of the built-in downloader.
    pub fn use_aria(&self) -> bool {
        self.use_aria
    }

    /// Sets whether transfers go through aria2.
    pub fn set_use_aria(&mut self, use_aria: bool) {
        self.use_aria = use_aria;
    }

    /// Connections aria2 may open to one server, in `1..=16`.
    pub fn aria_max_connections_per_server(&self) -> i32 {
        self.aria_max_connections_per_server
    }

    /// Values outside `1..=16` store `16`.
    pub fn set_aria_max_connections_per_server(&mut self, max_connections: i32) {
        self.aria_max_connections_per_server =
            ARIA_MAX_CONNECTIONS_PER_SERVER.normalize(max_connections);
    }

    /// Minimum segment size aria2 splits a file into, in MiB.
    pub fn aria_min_split_size(&self) -> i32 {
        self.aria_min_split_size
    }

    /// Values outside `1..=1024` store `20`.
    pub fn set_aria_min_split_size(&mut self, min_split_size: i32) {
        self.aria_min_split_size = ARIA_MIN_SPLIT_SIZE.normalize(min_split_size);
    }

    /// Speed limit in KiB/s.
    pub fn speed_limit(&self) -> u32 {
        self.speed_limit
    }

    /// Values outside `512..=10240` store `1024`.
    pub fn set_speed_limit(&mut self, speed_limit: u32) {
        self.speed_limit = SPEED_LIMIT.normalize(speed_limit);
    }

    /// Speed limit converted to bytes per second.
    pub fn speed_limit_bytes_per_sec(&self) -> u64 {
        u64::from(self.speed_limit) * 1024
    }

    /// Proxy URL as entered; empty when no proxy is used.
    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    /// Stored as given; no parsing happens here.
    pub fn set_proxy_url(&mut self, proxy_url: impl Into<String>) {
        self.proxy_url = proxy_url.into();
    }

    /// Returns `true` when a non-blank proxy URL is set.
    pub fn has_proxy(&self) -> bool {
        !self.proxy_url.trim().is_empty()
    }

    /// Builds a proxy applying to every scheme from [`proxy_url`](Self::proxy_url).
    ///
    /// Returns `Ok(None)` when no proxy is configured.
    ///
    /// ```rust
    /// use mediadl_options::DownloaderOptions;
    ///
    /// # fn main() -> Result<(), mediadl_options::Error> {
    /// let mut options = DownloaderOptions::new();
    /// assert!(options.proxy()?.is_none());
    ///
    /// options.set_proxy_url("socks5://127.0.0.1:9050");
    /// assert!(options.proxy()?.is_some());
    /// # Ok(())
    /// # }
    /// ```
    pub fn proxy(&self) -> Result<Option<Proxy>> {
        if !self.has_proxy() {
            return Ok(None);
        }
        let proxy = Proxy::all(self.proxy_url.trim())?;
        Ok(Some(proxy))
    }

    /// Browser whose cookies are sent with requests.
    pub fn cookies_browser(&self) -> Browser {
        self.cookies_browser
    }

    /// Sets the browser to read cookies from.
    pub fn set_cookies_browser(&mut self, browser: Browser) {
        self.cookies_browser = browser;
    }

    /// Path to a Netscape-format cookies file; empty when unset.
    pub fn cookies_path(&self) -> &Path {
        &self.cookies_path
    }

    /// Sets the cookies file path. The path is not checked.
    pub fn set_cookies_path(&mut self, path: impl Into<PathBuf>) {
        self.cookies_path = path.into();
    }

    /// Returns `true` when a cookies file path is set.
    pub fn has_cookies_file(&self) -> bool {
        !self.cookies_path.as_os_str().is_empty()
    }

    /// Whether SponsorBlock segments are removed from YouTube videos.
    pub fn youtube_sponsor_block(&self) -> bool {
        self.youtube_sponsor_block
    }

    /// Sets whether SponsorBlock is used.
    pub fn set_youtube_sponsor_block(&mut self, sponsor_block: bool) {
        self.youtube_sponsor_block = sponsor_block;
    }

    /// Whether metadata is written into the output file.
    pub fn embed_metadata(&self) -> bool {
        self.embed_metadata
    }

    /// Sets whether metadata is embedded.
    pub fn set_embed_metadata(&mut self, embed_metadata: bool) {
        self.embed_metadata = embed_metadata;
    }

    /// Whether thumbnails embedded in audio files are cropped to a square.
    pub fn crop_audio_thumbnails(&self) -> bool {
        self.crop_audio_thumbnails
    }

    /// Sets whether audio thumbnails are cropped.
    pub fn set_crop_audio_thumbnails(&mut self, crop_audio_thumbnails: bool) {
        self.crop_audio_thumbnails = crop_audio_thumbnails;
    }

    /// Whether intermediate files are deleted after post-processing.
    pub fn remove_source_data(&self) -> bool {
        self.remove_source_data
    }

    /// Sets whether intermediate files are deleted.
    pub fn set_remove_source_data(&mut self, remove_source_data: bool) {
        self.remove_source_data = remove_source_data;
    }

    /// Whether chapter markers are written into the output file.
    pub fn embed_chapters(&self) -> bool {
        self.embed_chapters
    }

    /// Sets whether chapters are embedded.
    pub fn set_embed_chapters(&mut self, embed_chapters: bool) {
        self.embed_chapters = embed_chapters;
    }

    /// Whether subtitles are muxed into the output file.
    pub fn embed_subtitles(&self) -> bool {
        self.embed_subtitles
    }

    /// Sets whether subtitles are embedded.
    pub fn set_embed_subtitles(&mut self, embed_subtitles: bool) {
        self.embed_subtitles = embed_subtitles;
    }

    /// Extra arguments handed to FFmpeg, as raw command line text.
    pub fn ffmpeg_args(&self) -> &str {
        &self.ffmpeg_args
    }

    /// Sets the extra FFmpeg arguments, stored verbatim.
    pub fn set_ffmpeg_args(&mut self, ffmpeg_args: impl Into<String>) {
        self.ffmpeg_args = ffmpeg_args.into();
    }

    /// [`ffmpeg_args`](Self::ffmpeg_args) split on whitespace.
    ///
    /// Quoting is not interpreted.
    pub fn ffmpeg_args_list(&self) -> Vec<&str> {
        self.ffmpeg_args.split_whitespace().collect()
    }
}
