use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::encode::ffmpeg::{FfmpegProcess, ensure_parent_dir, is_ffmpeg_on_path};
use crate::foundation::core::{Fps, Rgb8};
use crate::foundation::error::{SlideError, SlideResult};
use crate::foundation::math::flatten_straight_over_bg;

/// An encoded slideshow video.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VideoArtifact {
    /// Final MP4 path.
    pub path: PathBuf,
    /// Number of encoded frames, one per input image.
    pub frame_count: u64,
    /// Frame rate of the stream.
    pub fps: Fps,
}

impl VideoArtifact {
    /// Play time in seconds (`frame_count / fps`).
    pub fn duration_secs(&self) -> f64 {
        self.fps.duration_secs(self.frame_count)
    }
}

/// Options for [`Assembler`].
#[derive(Clone, Copy, Debug)]
pub struct AssembleOpts {
    /// Replace an existing output file.
    pub overwrite: bool,
    /// Color used to flatten transparent input images.
    pub background: Rgb8,
}

impl Default for AssembleOpts {
    fn default() -> Self {
        Self {
            overwrite: true,
            background: Rgb8::new(0, 0, 0),
        }
    }
}

/// Assembles an ordered image sequence into an H.264 MP4 via the system `ffmpeg`.
#[derive(Clone, Debug, Default)]
pub struct Assembler {
    opts: AssembleOpts,
}

impl Assembler {
    /// Create an assembler.
    pub fn new(opts: AssembleOpts) -> Self {
        Self { opts }
    }

    /// Encode `image_paths` in the given order, each image held for exactly `1/fps` seconds.
    ///
    /// An empty list fails with an input error before any encoder work. All images must share
    /// the first image's (even) dimensions. The video is encoded into a sibling partial file and
    /// only moved onto `output_path` once `ffmpeg` succeeded; on any failure the partial file is
    /// removed and `output_path` is left as it was.
    #[tracing::instrument(skip(self, image_paths), fields(frames = image_paths.len()))]
    pub fn assemble<P: AsRef<Path>>(
        &self,
        image_paths: &[P],
        output_path: &Path,
        fps: Fps,
    ) -> SlideResult<VideoArtifact> {
        if image_paths.is_empty() {
            return Err(SlideError::input("no frames"));
        }
        if !self.opts.overwrite && output_path.exists() {
            return Err(SlideError::input(format!(
                "output file '{}' already exists",
                output_path.display()
            )));
        }
        if let Some(missing) = image_paths.iter().map(|p| p.as_ref()).find(|p| !p.is_file()) {
            return Err(SlideError::encode(format!(
                "frame image '{}' does not exist",
                missing.display()
            )));
        }

        let first = self.load_frame(image_paths[0].as_ref())?;
        let (width, height) = (first.width, first.height);
        if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(SlideError::encode(format!(
                "frame size {width}x{height} must be even (required for yuv420p mp4 output)"
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(SlideError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }
        ensure_parent_dir(output_path)?;

        let partial = PartialOutput::new(output_path)?;
        let mut encoder = FfmpegProcess::spawn(width, height, fps, partial.path())?;

        let mut pending = Some(first);
        for path in image_paths {
            let path = path.as_ref();
            let frame = match pending.take() {
                Some(f) => Ok(f),
                None => self.load_frame(path),
            };
            let written = frame.and_then(|f| {
                if (f.width, f.height) != (width, height) {
                    return Err(SlideError::encode(format!(
                        "frame '{}' is {}x{}, expected {width}x{height}",
                        path.display(),
                        f.width,
                        f.height
                    )));
                }
                encoder.write_frame(&f.rgba)
            });
            if let Err(e) = written {
                return Err(encoder.abort(e));
            }
            tracing::debug!(path = %path.display(), "frame queued");
        }

        encoder.finish()?;
        partial.commit()?;

        let artifact = VideoArtifact {
            path: output_path.to_path_buf(),
            frame_count: image_paths.len() as u64,
            fps,
        };
        tracing::info!(
            path = %artifact.path.display(),
            frames = artifact.frame_count,
            %fps,
            "video assembled"
        );
        Ok(artifact)
    }

    fn load_frame(&self, path: &Path) -> SlideResult<DecodedFrame> {
        let img = image::open(path).map_err(|e| {
            SlideError::encode(format!("failed to decode frame '{}': {e}", path.display()))
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgba = rgba.into_raw();
        flatten_straight_over_bg(&mut rgba, self.opts.background.to_rgba())?;
        Ok(DecodedFrame {
            width,
            height,
            rgba,
        })
    }
}

struct DecodedFrame {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

/// Scoped partial output: removed on drop unless committed onto its target.
struct PartialOutput {
    path: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl PartialOutput {
    fn new(target: &Path) -> SlideResult<Self> {
        let name = target
            .file_name()
            .ok_or_else(|| {
                SlideError::input(format!(
                    "output path '{}' has no file name",
                    target.display()
                ))
            })?
            .to_string_lossy();
        let path = target.with_file_name(format!(".{name}.partial"));
        Ok(Self {
            path,
            target: target.to_path_buf(),
            committed: false,
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    /// Move the partial file onto the target. `rename` replaces an existing target in one step;
    /// the target is only removed first on platforms where that rename fails.
    fn commit(mut self) -> SlideResult<()> {
        if let Err(first) = std::fs::rename(&self.path, &self.target) {
            if !self.path.is_file() || !self.target.exists() {
                return Err(SlideError::encode(format!(
                    "failed to move encoded video to '{}': {first}",
                    self.target.display()
                )));
            }
            std::fs::remove_file(&self.target).map_err(|e| {
                SlideError::encode(format!(
                    "failed to replace '{}': {e}",
                    self.target.display()
                ))
            })?;
            std::fs::rename(&self.path, &self.target).map_err(|e| {
                SlideError::encode(format!(
                    "failed to move encoded video to '{}': {e}",
                    self.target.display()
                ))
            })?;
        }
        self.committed = true;
        Ok(())
    }
}

impl Drop for PartialOutput {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/assemble.rs"]
mod tests;
