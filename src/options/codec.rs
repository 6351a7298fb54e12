//! Preferred video codec.

use crate::error::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// The video codec to prefer when several formats are offered.
///
/// ```rust
/// use mediadl_options::VideoCodec;
///
/// let codec: VideoCodec = "AV01".parse().unwrap();
/// assert_eq!(codec, VideoCodec::Av01);
/// assert_eq!(codec.to_string(), "av01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VideoCodec {
    /// No preference.
    #[default]
    Any,
    /// VP9.
    Vp9,
    /// AV1.
    Av01,
    /// H.264 / AVC.
    H264,
    /// H.265 / HEVC.
    H265,
}

impl VideoCodec {
    /// Every variant, in declaration order.
    pub const ALL: [VideoCodec; 5] = [
        VideoCodec::Any,
        VideoCodec::Vp9,
        VideoCodec::Av01,
        VideoCodec::H264,
        VideoCodec::H265,
    ];

    /// Lowercase name as used in yt-dlp format sorting.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoCodec::Any => "any",
            VideoCodec::Vp9 => "vp9",
            VideoCodec::Av01 => "av01",
            VideoCodec::H264 => "h264",
            VideoCodec::H265 => "h265",
        }
    }

    /// Returns `true` when no codec is preferred.
    pub fn is_any(&self) -> bool {
        matches!(self, VideoCodec::Any)
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoCodec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "any" => Ok(VideoCodec::Any),
            "vp9" => Ok(VideoCodec::Vp9),
            "av01" | "av1" => Ok(VideoCodec::Av01),
            "h264" | "avc" => Ok(VideoCodec::H264),
            "h265" | "hevc" => Ok(VideoCodec::H265),
            _ => Err(Error::UnknownVideoCodec(s.to_string())),
        }
    }
}
