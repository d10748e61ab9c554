//! Media playback - substitutable media kinds behind a base playback capability.
//!
//! Anything that implements `MediaFile` must be usable wherever a `MediaFile`
//! is expected. In particular `duration_seconds` never fails and is never
//! negative; a static GIF reports zero instead of refusing the call.

use tracing::info;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Resolution {
    /// Creates a resolution.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Base playback capability.
pub trait MediaFile {
    /// Starts playback.
    fn play(&self);
    /// Playback length in seconds.
    fn duration_seconds(&self) -> u32;
}

/// Playback capability for media with a picture.
pub trait VideoMediaFile: MediaFile {
    /// Frame size.
    fn resolution(&self) -> Resolution;
}

/// Sums playback length over any mix of media.
#[must_use]
pub fn total_duration(files: &[&dyn MediaFile]) -> u64 {
    files.iter().map(|f| u64::from(f.duration_seconds())).sum()
}

/// Video file.
#[derive(Debug, Clone)]
pub struct VideoFile {
    filename: String,
    duration: u32,
    resolution: Resolution,
}

impl VideoFile {
    /// Creates a video file.
    pub fn new(filename: impl Into<String>, duration: u32, resolution: Resolution) -> Self {
        Self {
            filename: filename.into(),
            duration,
            resolution,
        }
    }
}

impl MediaFile for VideoFile {
    fn play(&self) {
        info!("Playing video: {}", self.filename);
    }

    fn duration_seconds(&self) -> u32 {
        self.duration
    }
}

impl VideoMediaFile for VideoFile {
    fn resolution(&self) -> Resolution {
        self.resolution
    }
}

/// Audio file. No picture, so only the base capability.
#[derive(Debug, Clone)]
pub struct AudioFile {
    filename: String,
    duration: u32,
}

impl AudioFile {
    /// Creates an audio file.
    pub fn new(filename: impl Into<String>, duration: u32) -> Self {
        Self {
            filename: filename.into(),
            duration,
        }
    }
}

impl MediaFile for AudioFile {
    fn play(&self) {
        info!("Playing audio: {}", self.filename);
    }

    fn duration_seconds(&self) -> u32 {
        self.duration
    }
}

/// GIF image, animated or static.
#[derive(Debug, Clone)]
pub struct GifFile {
    filename: String,
    resolution: Resolution,
    is_animated: bool,
    // ignored unless animated
    duration: u32,
}

impl GifFile {
    /// Creates a GIF.
    pub fn new(
        filename: impl Into<String>,
        resolution: Resolution,
        is_animated: bool,
        duration: u32,
    ) -> Self {
        Self {
            filename: filename.into(),
            resolution,
            is_animated,
            duration,
        }
    }

    /// Whether the GIF has more than one frame.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        self.is_animated
    }
}

impl MediaFile for GifFile {
    fn play(&self) {
        if self.is_animated {
            info!("Playing animated GIF: {}", self.filename);
        } else {
            info!("Displaying static GIF: {}", self.filename);
        }
    }

    fn duration_seconds(&self) -> u32 {
        if !self.is_animated {
            return 0;
        }
        self.duration
    }
}

impl VideoMediaFile for GifFile {
    fn resolution(&self) -> Resolution {
        self.resolution
    }
}
