//! Video assembly: ordered slide images into an H.264 MP4.

/// Image sequence assembler and the resulting artifact.
pub mod assemble;
/// `ffmpeg` process plumbing (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
