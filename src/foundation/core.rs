use std::fmt;

use crate::foundation::error::{SlideError, SlideResult};

/// Positive integer frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Fps(u32);

impl Fps {
    /// Create a validated frame rate. Zero is rejected.
    pub fn new(fps: u32) -> SlideResult<Self> {
        if fps == 0 {
            return Err(SlideError::input("fps must be a positive integer"));
        }
        Ok(Self(fps))
    }

    /// Frames per second.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Play time in seconds of `frames` frames at this rate.
    pub fn duration_secs(self, frames: u64) -> f64 {
        frames as f64 / f64::from(self.0)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for Fps {
    type Error = SlideError;

    fn try_from(v: u32) -> SlideResult<Self> {
        Self::new(v)
    }
}

impl From<Fps> for u32 {
    fn from(v: Fps) -> Self {
        v.0
    }
}

impl fmt::Display for Fps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based position of a slide in its batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct SequenceIndex(u32);

impl SequenceIndex {
    /// First index of every batch.
    pub const FIRST: Self = Self(1);

    /// Create an index from a 1-based value. Zero is rejected.
    pub fn new(index: u32) -> SlideResult<Self> {
        if index == 0 {
            return Err(SlideError::input("sequence index is 1-based"));
        }
        Ok(Self(index))
    }

    /// Index for the slide at 0-based `position` in document order.
    pub fn from_position(position: usize) -> SlideResult<Self> {
        u32::try_from(position)
            .ok()
            .and_then(|p| p.checked_add(1))
            .map(Self)
            .ok_or_else(|| SlideError::input("slide position does not fit a sequence index"))
    }

    /// The 1-based value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SequenceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Raster surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Canvas {
    /// Validate the canvas for raster and yuv420p output.
    pub fn validate(&self) -> SlideResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SlideError::config("canvas width/height must be non-zero"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(SlideError::config("canvas width/height must fit in u16"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(SlideError::config(
                "canvas width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }
}

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The color as opaque RGBA8.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
