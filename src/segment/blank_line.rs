use super::record::SlideRecord;
use super::split_blocks;

/// Each blank-line separated block is one slide: first line title, other lines body.
pub(super) fn parse(text: &str) -> Vec<SlideRecord> {
    split_blocks(text)
        .iter()
        .filter_map(|block| {
            let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
            let title = lines.next()?;
            Some(SlideRecord::new(title, lines.map(str::to_string).collect()))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/segment/blank_line.rs"]
mod tests;
