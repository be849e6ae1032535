use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::core::Fps;
use crate::foundation::error::{SlideError, SlideResult};
use crate::render::font::FontConfig;
use crate::render::style::SlideStyle;
use crate::segment::Dialect;

/// Pipeline configuration, passed to [`crate::Pipeline::new`] at startup.
///
/// Every field has a default, so a JSON config only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Directory that relative input file names resolve against.
    pub input_dir: PathBuf,
    /// Directory receiving slide images and videos.
    pub output_dir: PathBuf,
    /// Frame rate of the assembled video; each slide is one frame.
    pub fps: Fps,
    /// Input dialect for text segmentation.
    pub dialect: Dialect,
    /// Slide layout.
    pub style: SlideStyle,
    /// Scalable font overrides.
    pub fonts: FontConfig,
    /// Rasterize slides on a worker pool.
    pub parallel: bool,
    /// Worker count for parallel rasterization.
    pub threads: Option<usize>,
    /// Replace existing videos.
    pub overwrite: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("workspace").join("input"),
            output_dir: PathBuf::from("workspace").join("output"),
            fps: Fps::default(),
            dialect: Dialect::default(),
            style: SlideStyle::default(),
            fonts: FontConfig::default(),
            parallel: false,
            threads: None,
            overwrite: true,
        }
    }
}

impl PipelineConfig {
    /// Load a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> SlideResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SlideError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            SlideError::config(format!("parse config JSON '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> SlideResult<()> {
        self.style.validate()?;
        if self.threads == Some(0) {
            return Err(SlideError::config("'threads' must be >= 1 when set"));
        }
        if self.input_dir.as_os_str().is_empty() || self.output_dir.as_os_str().is_empty() {
            return Err(SlideError::config(
                "input_dir and output_dir must be non-empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
