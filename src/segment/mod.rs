//! Text segmentation: raw document text into ordered [`SlideRecord`]s.
//!
//! Two input dialects exist. [`Dialect::Marker`] is canonical and the default; the blank-line
//! dialect is kept only as an explicitly selected alternative and is never tried as a fallback.

mod blank_line;
mod marker;
/// Slide record model and boundary conversions.
pub mod record;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SlideError, SlideResult};
use record::SlideRecord;

/// Input dialect understood by [`segment_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// `[SLIDE_START]...[SLIDE_END]` blocks with an optional `[TITLE_START]...[TITLE_END]` pair.
    #[default]
    Marker,
    /// Blocks split on runs of two or more newlines; first line title, remaining lines body.
    BlankLine,
}

/// Segment `raw_text` using the canonical marker dialect.
pub fn segment(raw_text: &str) -> SlideResult<Vec<SlideRecord>> {
    segment_with(raw_text, Dialect::Marker)
}

/// Segment `raw_text` using an explicit dialect.
///
/// Fails with a parse error when the text contains no slide blocks.
#[tracing::instrument(skip(raw_text), fields(len = raw_text.len()))]
pub fn segment_with(raw_text: &str, dialect: Dialect) -> SlideResult<Vec<SlideRecord>> {
    let text = normalize_newlines(raw_text);
    let slides = match dialect {
        Dialect::Marker => marker::parse(&text),
        Dialect::BlankLine => blank_line::parse(&text),
    };

    if slides.is_empty() {
        return Err(SlideError::parse(match dialect {
            Dialect::Marker => "no [SLIDE_START]...[SLIDE_END] blocks found",
            Dialect::BlankLine => "no non-empty blank-line separated blocks found",
        }));
    }

    tracing::info!(count = slides.len(), ?dialect, "parsed slides");
    Ok(slides)
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split text on runs of two or more consecutive newlines, dropping blocks that are empty once
/// trimmed. A line holding only spaces is not a separator.
pub(crate) fn split_blocks(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a body text into trimmed, non-empty paragraphs.
///
/// Unlike [`split_blocks`], whitespace-only lines also end a paragraph.
pub(crate) fn split_paragraphs(text: &str) -> Vec<String> {
    let text = normalize_newlines(text);
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }
    paragraphs
}

#[cfg(test)]
#[path = "../../tests/unit/segment/mod.rs"]
mod tests;
