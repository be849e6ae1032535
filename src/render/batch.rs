use std::path::Path;

use rayon::prelude::*;

use crate::foundation::core::SequenceIndex;
use crate::foundation::error::{SlideError, SlideResult};
use crate::render::font::ResolvedFonts;
use crate::render::frame::{RenderedFrame, frame_path};
use crate::render::raster::SlideRasterizer;
use crate::render::style::SlideStyle;
use crate::segment::record::SlideRecord;

/// Threading options for [`render_all`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterOpts {
    /// Rasterize slides on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Override the number of worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Render every record to `output_dir/slide_NNN.png`.
///
/// Frames come back ordered by sequence index whatever the completion order. The first failing
/// slide aborts the batch.
#[tracing::instrument(skip(records, style, fonts), fields(count = records.len()))]
pub fn render_all(
    records: Vec<SlideRecord>,
    output_dir: &Path,
    style: &SlideStyle,
    fonts: &ResolvedFonts,
    opts: RasterOpts,
) -> SlideResult<Vec<RenderedFrame>> {
    style.validate()?;

    let jobs = records
        .into_iter()
        .enumerate()
        .map(|(pos, rec)| {
            let idx = SequenceIndex::from_position(pos)?;
            Ok((rec, idx, frame_path(output_dir, idx)))
        })
        .collect::<SlideResult<Vec<_>>>()?;

    let frames = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        let results: Vec<SlideResult<RenderedFrame>> = pool.install(|| {
            jobs.into_par_iter()
                .map_init(
                    || SlideRasterizer::from_validated(style.clone(), fonts),
                    |r, (rec, idx, path)| r.render(rec, idx, &path),
                )
                .collect()
        });
        results.into_iter().collect::<SlideResult<Vec<_>>>()?
    } else {
        let mut r = SlideRasterizer::from_validated(style.clone(), fonts);
        jobs.into_iter()
            .map(|(rec, idx, path)| r.render(rec, idx, &path))
            .collect::<SlideResult<Vec<_>>>()?
    };

    tracing::info!(count = frames.len(), dir = %output_dir.display(), "slides rendered");
    Ok(frames)
}

fn build_thread_pool(threads: Option<usize>) -> SlideResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SlideError::config("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SlideError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/batch.rs"]
mod tests;
