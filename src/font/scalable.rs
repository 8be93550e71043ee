use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, Rect, ScaleFont};
use image::{GrayImage, Luma};

use super::face::{FaceSource, GlyphMask, TextFace, TextMetrics};
use crate::error::{RenderError, Result};

/// A parsed font file that can be instantiated at any pixel size.
pub struct FontHandle {
    path: PathBuf,
    font: FontVec,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle").field("path", &self.path).finish()
    }
}

impl FontHandle {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| RenderError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(path, data)
    }

    pub fn from_bytes(path: &Path, data: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(data).map_err(|e| RenderError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::debug!("Loaded font {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            font,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn at_size(&self, size_px: u32) -> ScalableFace<'_> {
        ScalableFace {
            font: &self.font,
            scale: PxScale::from(size_px as f32),
            size_px,
        }
    }
}

impl FaceSource for FontHandle {
    fn is_scalable(&self) -> bool {
        true
    }

    fn face_at(&self, size_px: u32) -> Box<dyn TextFace + '_> {
        Box::new(self.at_size(size_px))
    }
}

/// Outline font at a fixed pixel size.
///
/// Glyphs sit on a baseline `ascent` pixels below the draw origin, so the
/// origin is the top-left of the line box.
pub struct ScalableFace<'a> {
    font: &'a FontVec,
    scale: PxScale,
    size_px: u32,
}

impl ScalableFace<'_> {
    fn outlined_glyphs(&self, text: &str) -> Vec<OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = scaled.ascent();

        let mut caret = 0.0f32;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::new();

        for c in text.chars().filter(|c| !c.is_control()) {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
        }

        glyphs
    }

    fn ink_metrics(&self, text: &str, glyphs: &[OutlinedGlyph]) -> Result<TextMetrics> {
        let bounds = glyphs
            .iter()
            .map(OutlinedGlyph::px_bounds)
            .reduce(|a, b| Rect {
                min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
                max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
            })
            .ok_or_else(|| RenderError::Measurement {
                text: text.to_string(),
                reason: "no glyph in the run has an outline".into(),
            })?;

        let width = (bounds.max.x - bounds.min.x).max(0.0) as u32;
        let height = (bounds.max.y - bounds.min.y).max(0.0) as u32;
        if width == 0 || height == 0 {
            return Err(RenderError::Measurement {
                text: text.to_string(),
                reason: format!("empty bounding box {width}x{height}"),
            });
        }

        Ok(TextMetrics {
            left: bounds.min.x as i32,
            top: bounds.min.y as i32,
            width,
            height,
        })
    }
}

impl TextFace for ScalableFace<'_> {
    fn size_px(&self) -> u32 {
        self.size_px
    }

    fn measure(&self, text: &str) -> Result<TextMetrics> {
        let glyphs = self.outlined_glyphs(text);
        self.ink_metrics(text, &glyphs)
    }

    fn rasterize(&self, text: &str) -> Result<GlyphMask> {
        let glyphs = self.outlined_glyphs(text);
        let metrics = self.ink_metrics(text, &glyphs)?;
        let mut coverage = GrayImage::new(metrics.width, metrics.height);

        for glyph in &glyphs {
            let bounds = glyph.px_bounds();
            let offset_x = bounds.min.x as i32 - metrics.left;
            let offset_y = bounds.min.y as i32 - metrics.top;

            glyph.draw(|gx, gy, v| {
                let x = offset_x + gx as i32;
                let y = offset_y + gy as i32;
                if x < 0 || y < 0 || x as u32 >= metrics.width || y as u32 >= metrics.height {
                    return;
                }
                let value = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                let pixel = coverage.get_pixel_mut(x as u32, y as u32);
                // Marks stacked on a base glyph overlap; keep the stronger coverage.
                if value > pixel.0[0] {
                    *pixel = Luma([value]);
                }
            });
        }

        Ok(GlyphMask {
            left: metrics.left,
            top: metrics.top,
            coverage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_font_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");
        let err = FontHandle::load(&path).unwrap_err();
        assert!(matches!(err, RenderError::FontLoad { path: p, .. } if p == path));
    }

    #[test]
    fn test_load_corrupt_file_is_font_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        assert!(matches!(
            FontHandle::load(&path),
            Err(RenderError::FontLoad { .. })
        ));
    }
}
