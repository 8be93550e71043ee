use image::GrayImage;

use crate::error::Result;

/// Ink bounding box of a glyph run, relative to the run's draw origin.
///
/// The draw origin is the top-left of the line box: `left` and `top` are the
/// offsets from that point to the first inked column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// 8-bit coverage of one rasterized glyph run.
#[derive(Debug, Clone)]
pub struct GlyphMask {
    pub left: i32,
    pub top: i32,
    pub coverage: GrayImage,
}

impl GlyphMask {
    pub fn metrics(&self) -> TextMetrics {
        TextMetrics {
            left: self.left,
            top: self.top,
            width: self.coverage.width(),
            height: self.coverage.height(),
        }
    }

    /// Inked pixels as `(x, y, coverage)` relative to the draw origin.
    pub fn inked(&self) -> Vec<(i32, i32, u8)> {
        self.coverage
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] > 0)
            .map(|(x, y, p)| (self.left + x as i32, self.top + y as i32, p.0[0]))
            .collect()
    }
}

/// A font at one concrete pixel size.
pub trait TextFace {
    fn size_px(&self) -> u32;
    fn measure(&self, text: &str) -> Result<TextMetrics>;
    fn rasterize(&self, text: &str) -> Result<GlyphMask>;
}

/// Something that can produce a [`TextFace`] at a requested size.
pub trait FaceSource {
    /// Whether `face_at` honours the requested size.
    fn is_scalable(&self) -> bool;
    fn face_at(&self, size_px: u32) -> Box<dyn TextFace + '_>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_inked_skips_empty_pixels_and_applies_offset() {
        let mut coverage = GrayImage::new(3, 2);
        coverage.put_pixel(1, 0, Luma([200]));
        coverage.put_pixel(2, 1, Luma([10]));
        let mask = GlyphMask {
            left: 4,
            top: -1,
            coverage,
        };

        assert_eq!(mask.inked(), vec![(5, -1, 200), (6, 0, 10)]);
        assert_eq!(
            mask.metrics(),
            TextMetrics {
                left: 4,
                top: -1,
                width: 3,
                height: 2
            }
        );
    }
}
