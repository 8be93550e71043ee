//! Outlined text by stamping the glyph run over a filled disc of offsets.

use image::{Rgba, RgbaImage};
use imageproc::pixelops::weighted_sum;

use crate::font::GlyphMask;
use crate::style::Color;

/// Integer offsets `(dx, dy)` with `dx² + dy² <= radius²`.
///
/// A disc rather than a square keeps the corners of the outline round.
pub fn disc_offsets(radius: u32) -> Vec<(i32, i32)> {
    let r = i32::try_from(radius).unwrap_or(i32::MAX);
    let r2 = i64::from(r) * i64::from(r);
    let mut offsets = Vec::new();
    for dx in -r..=r {
        for dy in -r..=r {
            let (x, y) = (i64::from(dx), i64::from(dy));
            if x * x + y * y <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Coverage-weighted blend of `color` into the canvas, clipped to its bounds.
fn stamp(canvas: &mut RgbaImage, inked: &[(i32, i32, u8)], x: i32, y: i32, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    for &(px, py, coverage) in inked {
        let cx = x + px;
        let cy = y + py;
        if cx < 0 || cy < 0 || cx as u32 >= width || cy as u32 >= height {
            continue;
        }
        let pixel = canvas.get_pixel_mut(cx as u32, cy as u32);
        *pixel = if coverage == u8::MAX {
            color
        } else {
            let weight = f32::from(coverage) / 255.0;
            weighted_sum(*pixel, color, 1.0 - weight, weight)
        };
    }
}

/// Draws the run at every disc offset in `outline`, then once at `(x, y)` in `fill`.
pub fn draw_outlined(
    canvas: &mut RgbaImage,
    mask: &GlyphMask,
    x: i32,
    y: i32,
    fill: Color,
    outline: Color,
    outline_width: u32,
) {
    let inked = mask.inked();
    let outline = outline.to_rgba();

    for (dx, dy) in disc_offsets(outline_width) {
        stamp(canvas, &inked, x + dx, y + dy, outline);
    }
    stamp(canvas, &inked, x, y, fill.to_rgba());
}
