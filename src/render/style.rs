use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{SlideError, SlideResult};

/// Metrics and colors of one text weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size_px: f32,
    /// Text color.
    pub color: Rgb8,
    /// Maximum characters per wrapped line.
    pub wrap_chars: usize,
    /// Vertical distance between consecutive wrapped lines.
    pub line_pitch_px: f32,
}

/// Fixed slide layout: canvas, margins and the two text weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideStyle {
    /// Output raster size.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Rgb8,
    /// Left margin of every text line.
    pub margin_left_px: f32,
    /// Top of the first title line.
    pub margin_top_px: f32,
    /// Gap between the last title line and the first body line.
    pub title_gap_px: f32,
    /// Extra gap between body paragraphs.
    pub paragraph_gap_px: f32,
    /// Title weight.
    pub title: TextStyle,
    /// Body weight.
    pub body: TextStyle,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Rgb8::new(30, 30, 30),
            margin_left_px: 100.0,
            margin_top_px: 80.0,
            title_gap_px: 40.0,
            paragraph_gap_px: 20.0,
            title: TextStyle {
                size_px: 60.0,
                color: Rgb8::new(255, 255, 255),
                wrap_chars: 30,
                line_pitch_px: 72.0,
            },
            body: TextStyle {
                size_px: 40.0,
                color: Rgb8::new(200, 200, 200),
                wrap_chars: 46,
                line_pitch_px: 52.0,
            },
        }
    }
}

impl SlideStyle {
    /// Reject layouts that cannot be rendered or encoded.
    pub fn validate(&self) -> SlideResult<()> {
        self.canvas.validate()?;
        for (name, t) in [("title", &self.title), ("body", &self.body)] {
            if !t.size_px.is_finite() || t.size_px <= 0.0 {
                return Err(SlideError::config(format!(
                    "{name} size_px must be finite and > 0"
                )));
            }
            if t.wrap_chars == 0 {
                return Err(SlideError::config(format!("{name} wrap_chars must be > 0")));
            }
            if !t.line_pitch_px.is_finite() || t.line_pitch_px <= 0.0 {
                return Err(SlideError::config(format!(
                    "{name} line_pitch_px must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}
