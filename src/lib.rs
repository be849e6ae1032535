//! Slidereel turns marker-delimited slide text into a slideshow video.
//!
//! Three stages run in sequence:
//!
//! - [`segment`] splits raw text into immutable [`SlideRecord`]s
//! - [`render`] lays out and rasterizes each record into a 1280x720 PNG
//! - [`encode`] assembles the ordered PNGs into an H.264 MP4 through the system `ffmpeg`
//!
//! [`Pipeline`] wires the stages together from a [`PipelineConfig`].
#![forbid(unsafe_code)]

mod foundation;

/// Pipeline configuration.
pub mod config;
/// Video assembly.
pub mod encode;
/// Orchestration of all stages.
pub mod pipeline;
/// Slide rasterization.
pub mod render;
/// Text segmentation.
pub mod segment;

pub use crate::foundation::core::{Canvas, Fps, Rgb8, SequenceIndex};
pub use crate::foundation::error::{SlideError, SlideResult};

pub use crate::config::PipelineConfig;
pub use crate::encode::assemble::{AssembleOpts, Assembler, VideoArtifact};
pub use crate::encode::ffmpeg::is_ffmpeg_on_path;
pub use crate::pipeline::{Pipeline, PipelineOutput, video_name_for};
pub use crate::render::batch::{RasterOpts, render_all};
pub use crate::render::font::{FontChoice, FontConfig, ResolvedFonts, Weight};
pub use crate::render::frame::{RenderedFrame, frame_file_name, frame_path, ordered_image_paths};
pub use crate::render::raster::{PlacedLine, SlideRasterizer, layout_slide};
pub use crate::render::style::{SlideStyle, TextStyle};
pub use crate::render::wrap::wrap_words;
pub use crate::segment::record::{LegacyBody, LegacySlide, SlideRecord};
pub use crate::segment::{Dialect, segment, segment_with};
