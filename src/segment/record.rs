use serde::{Deserialize, Serialize};

use crate::foundation::error::{SlideError, SlideResult};

/// One slide to render: a title and its body paragraphs in document order.
///
/// Records are immutable once built; the rasterizer consumes them by value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlideRecord {
    title: String,
    #[serde(rename = "body")]
    body_lines: Vec<String>,
}

impl SlideRecord {
    /// Build a record from a title and body lines.
    pub fn new(title: impl Into<String>, body_lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body_lines,
        }
    }

    /// Slide title, possibly empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body lines in document order.
    pub fn body_lines(&self) -> &[String] {
        &self.body_lines
    }

    /// `true` when neither the title nor any body line carries visible text.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.body_lines.iter().all(|l| l.trim().is_empty())
    }

    /// Convert a legacy slide shape into a record.
    pub fn from_legacy(slide: LegacySlide) -> SlideResult<Self> {
        let record = match slide {
            LegacySlide::Text(text) => {
                let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
                let title = lines.next().unwrap_or_default().to_string();
                Self::new(title, lines.map(str::to_string).collect())
            }
            LegacySlide::Fields {
                title,
                body,
                content,
            } => {
                let body_lines = match (body, content) {
                    (Some(_), Some(_)) => {
                        return Err(SlideError::input(
                            "slide has both 'body' and 'content'; expected one",
                        ));
                    }
                    (Some(b), None) | (None, Some(b)) => b.into_lines(),
                    (None, None) => Vec::new(),
                };
                Self::new(title.unwrap_or_default().trim(), body_lines)
            }
        };

        if record.is_blank() {
            return Err(SlideError::input("slide has neither title nor body"));
        }
        Ok(record)
    }

    /// Convert a list of legacy slides, failing on the first bad one.
    pub fn from_legacy_list(slides: Vec<LegacySlide>) -> SlideResult<Vec<Self>> {
        slides
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                Self::from_legacy(s)
                    .map_err(|e| SlideError::input(format!("slide #{}: {e}", i + 1)))
            })
            .collect()
    }
}

/// Slide shapes accepted at the system boundary.
///
/// - a plain string: first non-empty line is the title, remaining lines the body
/// - `{ "title", "content" }` with a single content string
/// - `{ "title", "body" }` with a string or a list of strings
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum LegacySlide {
    /// Whole slide as one text block.
    Text(String),
    /// Mapping with optional fields.
    Fields {
        /// Slide title.
        #[serde(default)]
        title: Option<String>,
        /// Body as text or lines.
        #[serde(default)]
        body: Option<LegacyBody>,
        /// Body as a single text.
        #[serde(default)]
        content: Option<LegacyBody>,
    },
}

/// Body given either as one text or as a list of lines.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum LegacyBody {
    /// One text, split into paragraphs on blank lines.
    Text(String),
    /// Already split lines.
    Lines(Vec<String>),
}

impl LegacyBody {
    fn into_lines(self) -> Vec<String> {
        match self {
            Self::Text(text) => super::split_paragraphs(&text),
            Self::Lines(lines) => lines
                .into_iter()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segment/record.rs"]
mod tests;
