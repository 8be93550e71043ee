//! Fixed-size bitmap font used when no scalable font is installed.

use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, LATIN_FONTS};
use image::{GrayImage, Luma};

use super::face::{FaceSource, GlyphMask, TextFace, TextMetrics};
use crate::constants::{BUILTIN_GLYPH_SCALE, BUILTIN_GLYPH_SIZE};
use crate::error::{RenderError, Result};

/// Drawn for characters the bitmap tables do not cover.
const MISSING_GLYPH: [u8; 8] = [0x00, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

const CELL: u32 = BUILTIN_GLYPH_SIZE * BUILTIN_GLYPH_SCALE;

fn glyph_rows(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .unwrap_or(MISSING_GLYPH)
}

/// 8x8 bitmap glyphs drawn at a fixed integer scale.
///
/// Every character occupies one square cell, so metrics come from the cell
/// grid rather than from inked pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFace;

impl BuiltinFace {
    fn glyphs(text: &str) -> Vec<[u8; 8]> {
        text.chars()
            .filter(|c| !c.is_control())
            .map(glyph_rows)
            .collect()
    }
}

impl TextFace for BuiltinFace {
    fn size_px(&self) -> u32 {
        CELL
    }

    fn measure(&self, text: &str) -> Result<TextMetrics> {
        let count = text.chars().filter(|c| !c.is_control()).count() as u32;
        if count == 0 {
            return Err(RenderError::Measurement {
                text: text.to_string(),
                reason: "no drawable characters".into(),
            });
        }
        Ok(TextMetrics {
            left: 0,
            top: 0,
            width: count * CELL,
            height: CELL,
        })
    }

    fn rasterize(&self, text: &str) -> Result<GlyphMask> {
        let metrics = self.measure(text)?;
        let mut coverage = GrayImage::new(metrics.width, metrics.height);

        for (index, rows) in Self::glyphs(text).iter().enumerate() {
            let cell_x = index as u32 * CELL;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..BUILTIN_GLYPH_SIZE {
                    // Bit 0 is the leftmost pixel.
                    if *bits & (1u8 << col) == 0 {
                        continue;
                    }
                    for sy in 0..BUILTIN_GLYPH_SCALE {
                        for sx in 0..BUILTIN_GLYPH_SCALE {
                            coverage.put_pixel(
                                cell_x + col * BUILTIN_GLYPH_SCALE + sx,
                                row as u32 * BUILTIN_GLYPH_SCALE + sy,
                                Luma([255]),
                            );
                        }
                    }
                }
            }
        }

        Ok(GlyphMask {
            left: metrics.left,
            top: metrics.top,
            coverage,
        })
    }
}

impl FaceSource for BuiltinFace {
    fn is_scalable(&self) -> bool {
        false
    }

    fn face_at(&self, _size_px: u32) -> Box<dyn TextFace + '_> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_uses_cell_grid() {
        let m = BuiltinFace.measure("AB").unwrap();
        assert_eq!(m.width, 2 * CELL);
        assert_eq!(m.height, CELL);
    }

    #[test]
    fn test_measure_ignores_requested_size() {
        let small = BuiltinFace.face_at(10).measure("Hi").unwrap();
        let large = BuiltinFace.face_at(400).measure("Hi").unwrap();
        assert_eq!(small, large);
        assert!(!BuiltinFace.is_scalable());
    }

    #[test]
    fn test_rasterize_inks_letter() {
        let mask = BuiltinFace.rasterize("A").unwrap();
        assert!(!mask.inked().is_empty());
    }

    #[test]
    fn test_space_has_no_ink_but_keeps_width() {
        let mask = BuiltinFace.rasterize(" ").unwrap();
        assert!(mask.inked().is_empty());
        assert_eq!(mask.coverage.width(), CELL);
    }

    #[test]
    fn test_uncovered_script_draws_box() {
        let mask = BuiltinFace.rasterize("ก").unwrap();
        // Top edge of the box: row 1 (scaled), columns 1..=6.
        let y = BUILTIN_GLYPH_SCALE;
        for col in 1..=6 {
            assert_eq!(mask.coverage.get_pixel(col * BUILTIN_GLYPH_SCALE, y).0[0], 255);
        }
        // Centre of the box stays empty.
        assert_eq!(mask.coverage.get_pixel(CELL / 2, CELL / 2).0[0], 0);
    }

    #[test]
    fn test_empty_text_is_measurement_error() {
        assert!(matches!(
            BuiltinFace.measure(""),
            Err(RenderError::Measurement { .. })
        ));
    }
}
