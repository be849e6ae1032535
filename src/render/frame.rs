use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::foundation::core::SequenceIndex;

/// One rasterized slide on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedFrame {
    /// 1-based position of the slide in its batch.
    pub sequence_index: SequenceIndex,
    /// PNG written for the slide.
    pub image_path: PathBuf,
}

/// `slide_NNN.png` for a sequence index (padding widens past 999).
pub fn frame_file_name(index: SequenceIndex) -> String {
    format!("slide_{index}.png")
}

/// Output path of the frame with `index` inside `output_dir`.
pub fn frame_path(output_dir: &Path, index: SequenceIndex) -> PathBuf {
    output_dir.join(frame_file_name(index))
}

/// Image paths of `frames` ordered by sequence index, regardless of input order.
pub fn ordered_image_paths(frames: &[RenderedFrame]) -> Vec<PathBuf> {
    let mut sorted: Vec<&RenderedFrame> = frames.iter().collect();
    sorted.sort_by_key(|f| f.sequence_index);
    sorted.into_iter().map(|f| f.image_path.clone()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
