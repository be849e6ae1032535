use super::record::SlideRecord;
use super::split_paragraphs;

const SLIDE_START: &str = "[SLIDE_START]";
const SLIDE_END: &str = "[SLIDE_END]";
const TITLE_START: &str = "[TITLE_START]";
const TITLE_END: &str = "[TITLE_END]";

/// Collect every `[SLIDE_START]...[SLIDE_END]` block in order.
///
/// Text outside blocks is ignored. A start marker without a matching end marker closes nothing
/// and is dropped.
pub(super) fn parse(text: &str) -> Vec<SlideRecord> {
    let mut slides = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(SLIDE_START) {
        let after_start = &rest[start + SLIDE_START.len()..];
        let Some(end) = after_start.find(SLIDE_END) else {
            tracing::warn!("unterminated {SLIDE_START} block ignored");
            break;
        };

        let record = parse_block(&after_start[..end]);
        if record.is_blank() {
            tracing::debug!(index = slides.len(), "dropping empty slide block");
        } else {
            slides.push(record);
        }
        rest = &after_start[end + SLIDE_END.len()..];
    }

    slides
}

fn parse_block(block: &str) -> SlideRecord {
    let mut title: Option<String> = None;
    let mut body = String::with_capacity(block.len());
    let mut rest = block;

    while let Some(start) = rest.find(TITLE_START) {
        let after_start = &rest[start + TITLE_START.len()..];
        let Some(end) = after_start.find(TITLE_END) else {
            break;
        };
        body.push_str(&rest[..start]);
        if title.is_none() {
            title = Some(after_start[..end].trim().to_string());
        }
        rest = &after_start[end + TITLE_END.len()..];
    }
    body.push_str(rest);

    SlideRecord::new(title.unwrap_or_default(), split_paragraphs(body.trim()))
}

#[cfg(test)]
#[path = "../../tests/unit/segment/marker.rs"]
mod tests;
