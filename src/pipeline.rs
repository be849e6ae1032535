use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::encode::assemble::{AssembleOpts, Assembler, VideoArtifact};
use crate::foundation::error::{SlideError, SlideResult};
use crate::render::batch::{RasterOpts, render_all};
use crate::render::font::ResolvedFonts;
use crate::render::frame::{RenderedFrame, ordered_image_paths};
use crate::segment::record::SlideRecord;
use crate::segment::segment_with;

/// Result of a full text-to-video run.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineOutput {
    /// Parsed slides.
    pub slides: Vec<SlideRecord>,
    /// Rendered frames in sequence order.
    pub frames: Vec<RenderedFrame>,
    /// The encoded video.
    pub video: VideoArtifact,
}

/// Orchestrates segmentation, rasterization and assembly for one configuration.
///
/// Construction validates the config, creates the input/output directories and resolves fonts
/// once; each run reuses them.
pub struct Pipeline {
    cfg: PipelineConfig,
    fonts: ResolvedFonts,
}

impl Pipeline {
    /// Validate `cfg`, create its directories and resolve fonts.
    pub fn new(cfg: PipelineConfig) -> SlideResult<Self> {
        cfg.validate()?;
        for dir in [&cfg.input_dir, &cfg.output_dir] {
            std::fs::create_dir_all(dir).map_err(|e| {
                SlideError::config(format!("create directory '{}': {e}", dir.display()))
            })?;
        }
        let fonts = ResolvedFonts::resolve(&cfg.fonts);
        tracing::info!(
            input_dir = %cfg.input_dir.display(),
            output_dir = %cfg.output_dir.display(),
            title_bitmap = fonts.title.is_bitmap(),
            body_bitmap = fonts.body.is_bitmap(),
            "pipeline ready"
        );
        Ok(Self { cfg, fonts })
    }

    /// Active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.cfg
    }

    /// Fonts resolved at construction.
    pub fn fonts(&self) -> &ResolvedFonts {
        &self.fonts
    }

    /// Resolve `name` against the input directory; absolute paths pass through.
    pub fn input_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.cfg.input_dir.join(name)
    }

    /// Read a UTF-8 text file, relative to the input directory.
    pub fn read_input(&self, name: impl AsRef<Path>) -> SlideResult<String> {
        let path = self.input_path(name);
        std::fs::read_to_string(&path).map_err(|e| {
            SlideError::input(format!("read input text '{}': {e}", path.display()))
        })
    }

    /// Segment raw text with the configured dialect.
    pub fn parse_text(&self, raw_text: &str) -> SlideResult<Vec<SlideRecord>> {
        segment_with(raw_text, self.cfg.dialect)
    }

    /// Render records into `output_dir/slide_NNN.png`.
    pub fn render_slides(&self, records: Vec<SlideRecord>) -> SlideResult<Vec<RenderedFrame>> {
        render_all(
            records,
            &self.cfg.output_dir,
            &self.cfg.style,
            &self.fonts,
            RasterOpts {
                parallel: self.cfg.parallel,
                threads: self.cfg.threads,
            },
        )
    }

    /// Assemble rendered frames, in sequence order, into `video_name` under the output directory.
    pub fn assemble(
        &self,
        frames: &[RenderedFrame],
        video_name: impl AsRef<Path>,
    ) -> SlideResult<VideoArtifact> {
        let assembler = Assembler::new(AssembleOpts {
            overwrite: self.cfg.overwrite,
            background: self.cfg.style.background,
        });
        let out = self.cfg.output_dir.join(video_name);
        assembler.assemble(&ordered_image_paths(frames), &out, self.cfg.fps)
    }

    /// Run every stage on `raw_text`, producing `video_name` under the output directory.
    ///
    /// Any stage failure aborts the run; no video path is returned for a failed run.
    #[tracing::instrument(skip_all, fields(video = %video_name.as_ref().display()))]
    pub fn generate(
        &self,
        raw_text: &str,
        video_name: impl AsRef<Path>,
    ) -> SlideResult<PipelineOutput> {
        let slides = self.parse_text(raw_text)?;
        self.generate_from_slides(slides, video_name)
    }

    /// Render and assemble already segmented slides.
    pub fn generate_from_slides(
        &self,
        slides: Vec<SlideRecord>,
        video_name: impl AsRef<Path>,
    ) -> SlideResult<PipelineOutput> {
        let frames = self.render_slides(slides.clone())?;
        let video = self.assemble(&frames, video_name)?;
        Ok(PipelineOutput {
            slides,
            frames,
            video,
        })
    }
}

/// Default video file name for an input file: `<stem>.mp4`.
pub fn video_name_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "presentation_video".to_string());
    PathBuf::from(format!("{stem}.mp4"))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
