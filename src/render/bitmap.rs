use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts as _};

use crate::foundation::core::Rgb8;

const CELL: u32 = 8;

/// Integer scale that brings the 8px bitmap font closest to `size_px`.
pub(crate) fn scale_for(size_px: f32) -> u32 {
    ((size_px / CELL as f32).round() as u32).max(1)
}

/// Row bitmaps for `ch`, falling back to `?` for characters the font lacks.
pub(crate) fn glyph_rows(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Horizontal pixel runs `(start_col, len)` set in one glyph row. Bit 0 is the leftmost column.
pub(crate) fn row_runs(row: u8) -> Vec<(u32, u32)> {
    let mut runs = Vec::new();
    let mut col = 0u32;
    while col < CELL {
        if row & (1 << col) == 0 {
            col += 1;
            continue;
        }
        let start = col;
        while col < CELL && row & (1 << col) != 0 {
            col += 1;
        }
        runs.push((start, col - start));
    }
    runs
}

/// Draw `text` with the built-in bitmap font, cell top-left at `(x, top)`.
pub(crate) fn draw_line(
    ctx: &mut vello_cpu::RenderContext,
    text: &str,
    x: f64,
    top: f64,
    size_px: f32,
    color: Rgb8,
) {
    let scale = f64::from(scale_for(size_px));
    let advance = f64::from(CELL) * scale;
    // Center the cell in the em box so both fonts share the same line top.
    let top = top + ((f64::from(size_px) - advance) / 2.0).max(0.0);

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, 255,
    ));

    for (i, ch) in text.chars().enumerate() {
        let cell_x = x + advance * i as f64;
        for (row_i, row) in glyph_rows(ch).into_iter().enumerate() {
            let y0 = top + scale * row_i as f64;
            for (start, len) in row_runs(row) {
                let x0 = cell_x + scale * f64::from(start);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    x0,
                    y0,
                    x0 + scale * f64::from(len),
                    y0 + scale,
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
