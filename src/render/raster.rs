use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Rgb8, SequenceIndex};
use crate::foundation::error::{SlideError, SlideResult};
use crate::foundation::math::flatten_premul_to_rgb8;
use crate::render::bitmap;
use crate::render::font::{FontChoice, ResolvedFonts, Weight};
use crate::render::frame::RenderedFrame;
use crate::render::style::{SlideStyle, TextStyle};
use crate::render::text::TextFace;
use crate::render::wrap::wrap_words;
use crate::segment::record::SlideRecord;

/// A wrapped text line positioned on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// Weight the line is drawn with.
    pub weight: Weight,
    /// Line text.
    pub text: String,
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub top: f64,
}

/// Position every title and body line of `record`.
///
/// Title lines stack from the top margin; body paragraphs follow after the title gap, each wrapped
/// independently and separated by the paragraph gap. Lines starting below the canvas are dropped.
pub fn layout_slide(record: &SlideRecord, style: &SlideStyle) -> Vec<PlacedLine> {
    let x = f64::from(style.margin_left_px);
    let bottom = f64::from(style.canvas.height);
    let mut y = f64::from(style.margin_top_px);
    let mut placed = Vec::new();

    let title_lines = wrap_words(record.title(), style.title.wrap_chars);
    for text in &title_lines {
        placed.push(PlacedLine {
            weight: Weight::Title,
            text: text.clone(),
            x,
            top: y,
        });
        y += f64::from(style.title.line_pitch_px);
    }
    if !title_lines.is_empty() {
        y += f64::from(style.title_gap_px);
    }

    for (i, paragraph) in record.body_lines().iter().enumerate() {
        if i > 0 {
            y += f64::from(style.paragraph_gap_px);
        }
        for text in wrap_words(paragraph, style.body.wrap_chars) {
            placed.push(PlacedLine {
                weight: Weight::Body,
                text,
                x,
                top: y,
            });
            y += f64::from(style.body.line_pitch_px);
        }
    }

    let total = placed.len();
    placed.retain(|l| l.top < bottom);
    if placed.len() < total {
        tracing::warn!(
            clipped = total - placed.len(),
            "slide text overflows the canvas; trailing lines clipped"
        );
    }
    placed
}

enum Face {
    Scalable(Box<TextFace>),
    Bitmap,
}

impl Face {
    fn build(weight: Weight, choice: &FontChoice) -> Self {
        match choice {
            FontChoice::Scalable { source, bytes, .. } => match TextFace::from_bytes(bytes) {
                Ok(face) => Face::Scalable(Box::new(face)),
                Err(e) => {
                    tracing::warn!(%weight, path = %source.display(), error = %e, "font rejected; using bitmap font");
                    Face::Bitmap
                }
            },
            FontChoice::Bitmap => Face::Bitmap,
        }
    }

    fn draw_line(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        line: &PlacedLine,
        style: &TextStyle,
    ) {
        match self {
            Face::Scalable(face) => face.draw_line(
                ctx,
                &line.text,
                line.x,
                line.top,
                style.size_px,
                style.color,
            ),
            Face::Bitmap => bitmap::draw_line(
                ctx,
                &line.text,
                line.x,
                line.top,
                style.size_px,
                style.color,
            ),
        }
    }
}

/// Renders slide records into fixed-size PNG images.
///
/// A rasterizer holds per-weight font and layout state; it is not shared between threads. Parallel batches build one rasterizer per worker.
pub struct SlideRasterizer {
    style: SlideStyle,
    title: Face,
    body: Face,
}

impl SlideRasterizer {
    /// Create a rasterizer for `style` using already resolved fonts.
    pub fn new(style: SlideStyle, fonts: &ResolvedFonts) -> SlideResult<Self> {
        style.validate()?;
        Ok(Self::from_validated(style, fonts))
    }

    pub(crate) fn from_validated(style: SlideStyle, fonts: &ResolvedFonts) -> Self {
        Self {
            title: Face::build(Weight::Title, &fonts.title),
            body: Face::build(Weight::Body, &fonts.body),
            style,
        }
    }

    /// Layout in use.
    pub fn style(&self) -> &SlideStyle {
        &self.style
    }

    /// Rasterize `record` and write it as a PNG at `output_path`.
    ///
    /// Parent directories are created as needed. Fails with a render error when the record has no
    /// visible text or the file cannot be written.
    #[tracing::instrument(skip_all, fields(index = %sequence_index))]
    pub fn render(
        &mut self,
        record: SlideRecord,
        sequence_index: SequenceIndex,
        output_path: &Path,
    ) -> SlideResult<RenderedFrame> {
        let rgb = self.rasterize(&record)?;
        write_png(
            output_path,
            &rgb,
            self.style.canvas.width,
            self.style.canvas.height,
        )
        .map_err(|e| SlideError::render(format!("slide {sequence_index}: {e:#}")))?;

        tracing::debug!(path = %output_path.display(), "slide written");
        Ok(RenderedFrame {
            sequence_index,
            image_path: output_path.to_path_buf(),
        })
    }

    /// Rasterize `record` into packed RGB8 pixels without touching the filesystem.
    pub fn rasterize(&mut self, record: &SlideRecord) -> SlideResult<Vec<u8>> {
        if record.is_blank() {
            return Err(SlideError::render("slide has neither title nor body"));
        }

        let lines = layout_slide(record, &self.style);
        let canvas = self.style.canvas;
        // Canvas dimensions were validated to fit u16.
        let (w, h) = (canvas.width as u16, canvas.height as u16);
        let bg = self.style.background;

        let mut ctx = vello_cpu::RenderContext::new(w, h);

        fill_background(&mut ctx, bg, f64::from(canvas.width), f64::from(canvas.height));
        for line in &lines {
            match line.weight {
                Weight::Title => self.title.draw_line(&mut ctx, line, &self.style.title),
                Weight::Body => self.body.draw_line(&mut ctx, line, &self.style.body),
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        flatten_premul_to_rgb8(pixmap.data_as_u8_slice(), bg.to_rgba())
    }
}

fn fill_background(ctx: &mut vello_cpu::RenderContext, bg: Rgb8, w: f64, h: f64) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
}

fn write_png(path: &Path, rgb: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        rgb,
        width,
        height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
