use crate::foundation::error::{SlideError, SlideResult};

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Composite premultiplied RGBA8 over an opaque background, producing packed RGB8.
pub(crate) fn flatten_premul_to_rgb8(src_premul: &[u8], bg: [u8; 4]) -> SlideResult<Vec<u8>> {
    if !src_premul.len().is_multiple_of(4) {
        return Err(SlideError::render(
            "flatten_premul_to_rgb8 expects an rgba8 buffer",
        ));
    }

    let mut out = Vec::with_capacity(src_premul.len() / 4 * 3);
    for s in src_premul.chunks_exact(4) {
        let inv = 255u16 - u16::from(s[3]);
        for c in 0..3 {
            let v = u16::from(s[c]) + mul_div255_u16(u16::from(bg[c]), inv);
            out.push(v.min(255) as u8);
        }
    }
    Ok(out)
}

/// Composite straight-alpha RGBA8 over an opaque background in place.
pub(crate) fn flatten_straight_over_bg(rgba: &mut [u8], bg: [u8; 4]) -> SlideResult<()> {
    if !rgba.len().is_multiple_of(4) {
        return Err(SlideError::encode(
            "flatten_straight_over_bg expects an rgba8 buffer",
        ));
    }

    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        let inv = 255u16 - a;
        for c in 0..3 {
            let v = mul_div255_u16(u16::from(px[c]), a) + mul_div255_u16(u16::from(bg[c]), inv);
            px[c] = v.min(255) as u8;
        }
        px[3] = 255;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
