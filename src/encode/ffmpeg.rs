use std::io::{Read, Write as _};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::foundation::core::Fps;
use crate::foundation::error::{SlideError, SlideResult};

/// A running `ffmpeg` that encodes raw RGBA8 frames from stdin into an H.264 MP4.
///
/// Dropping an unfinished process kills it, so an aborted encode never keeps writing.
pub(crate) struct FfmpegProcess {
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
    frame_len: usize,
}

impl FfmpegProcess {
    /// Spawn `ffmpeg` writing MP4 to `out_path`. Dimensions must already be validated as even.
    pub(crate) fn spawn(width: u32, height: u32, fps: Fps, out_path: &Path) -> SlideResult<Self> {
        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        // Input: raw straight-alpha RGBA8 frames, already flattened to opaque.
        cmd.args([
            "-y",
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{width}x{height}"),
            "-r",
            &fps.to_string(),
            "-i",
            "pipe:0",
        ]);
        // Output: h264 + yuv420p for broad compatibility, no audio.
        cmd.args([
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
            "-f",
            "mp4",
        ])
        .arg(out_path);

        let mut child = cmd.spawn().map_err(|e| {
            SlideError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SlideError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| SlideError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        Ok(Self {
            child: Some(child),
            stdin: Some(stdin),
            stderr_drain: Some(stderr_drain),
            frame_len: (width as usize) * (height as usize) * 4,
        })
    }

    /// Write one opaque RGBA8 frame.
    pub(crate) fn write_frame(&mut self, rgba: &[u8]) -> SlideResult<()> {
        if rgba.len() != self.frame_len {
            return Err(SlideError::encode(
                "frame data size mismatch with width*height*4",
            ));
        }
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(SlideError::encode("ffmpeg encoder is already finalized"));
        };
        stdin.write_all(rgba).map_err(|e| {
            SlideError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })
    }

    /// Close stdin, wait for `ffmpeg` and fail with its stderr if it did not succeed.
    pub(crate) fn finish(mut self) -> SlideResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| SlideError::encode("ffmpeg encoder is already finalized"))?;

        let status = child.wait().map_err(|e| {
            SlideError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = self.collect_stderr()?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(SlideError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    /// Stop early after `err`, preferring ffmpeg's own diagnostics when it already failed.
    pub(crate) fn abort(self, err: SlideError) -> SlideError {
        match self.finish() {
            Err(ffmpeg_err) => ffmpeg_err,
            Ok(()) => err,
        }
    }

    fn collect_stderr(&mut self) -> SlideResult<Vec<u8>> {
        match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| SlideError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| SlideError::encode(format!("ffmpeg stderr read failed: {e}"))),
            None => Ok(Vec::new()),
        }
    }
}

impl Drop for FfmpegProcess {
    fn drop(&mut self) {
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Ensure the parent directory of `path` exists.
pub(crate) fn ensure_parent_dir(path: &Path) -> SlideResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            SlideError::encode(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
