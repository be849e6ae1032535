//! Slide rasterization: layout, font resolution and PNG output.

/// Batch rendering, sequential or on a rayon pool.
pub mod batch;
mod bitmap;
/// Font resolution with bitmap fallback.
pub mod font;
/// Rendered frame model and file naming.
pub mod frame;
/// Single-slide rasterizer.
pub mod raster;
/// Fixed slide layout parameters.
pub mod style;
mod text;
/// Character-count word wrapping.
pub mod wrap;
