//! Two lines of text in, outlined PNG out.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{RenderError, Result};
use crate::fit::{fit_font_size, Fit};
use crate::font::{FaceSource, FontResolver, FontSource, LoadedFont, TextMetrics};
use crate::layout::Layout;
use crate::outline::draw_outlined;
use crate::style::StyleConfig;

/// A finished canvas plus the decisions that produced it.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub canvas: RgbaImage,
    pub source: FontSource,
    pub fit: Fit,
    pub metrics: [TextMetrics; 2],
    pub layout: Layout,
}

impl RenderedImage {
    /// Serializes the canvas as an RGBA8 PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf).write_image(
            self.canvas.as_raw(),
            self.canvas.width(),
            self.canvas.height(),
            ExtendedColorType::Rgba8,
        )?;
        log::debug!(
            "Encoded {}x{} canvas into {} PNG bytes",
            self.canvas.width(),
            self.canvas.height(),
            buf.len()
        );
        Ok(buf)
    }
}

/// Renders both lines with the default font candidates and returns PNG bytes.
pub fn generate_text_image(line1: &str, line2: &str, style: &StyleConfig) -> Result<Vec<u8>> {
    generate_text_image_with(&FontResolver::default(), line1, line2, style)
}

/// Like [`generate_text_image`], searching fonts through `resolver`.
pub fn generate_text_image_with(
    resolver: &FontResolver,
    line1: &str,
    line2: &str,
    style: &StyleConfig,
) -> Result<Vec<u8>> {
    render(resolver, line1, line2, style)?.to_png()
}

/// Fully transparent canvas, or `Encoding` when the pixel buffer can't be allocated.
fn blank_canvas(layout: &Layout) -> Result<RgbaImage> {
    let too_large = || {
        RenderError::Encoding(format!(
            "cannot allocate a {}x{} canvas",
            layout.width, layout.height
        ))
    };
    let len = (layout.width as usize)
        .checked_mul(layout.height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(too_large)?;

    let mut raw = Vec::new();
    raw.try_reserve_exact(len).map_err(|_| too_large())?;
    raw.resize(len, 0);
    RgbaImage::from_raw(layout.width, layout.height, raw).ok_or_else(too_large)
}

fn non_empty<'a>(line: &'a str, which: &str) -> Result<&'a str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(RenderError::InvalidInput(format!("{which} line is empty")));
    }
    Ok(trimmed)
}

/// Resolves a font, fits the size, lays out and draws both lines.
pub fn render(
    resolver: &FontResolver,
    line1: &str,
    line2: &str,
    style: &StyleConfig,
) -> Result<RenderedImage> {
    let line1 = non_empty(line1, "first")?;
    let line2 = non_empty(line2, "second")?;
    style.validate()?;

    let source = resolver.resolve();
    let font = LoadedFont::load(&source)?;
    let fit = fit_font_size(&font, line1, line2, style)?;

    let face = font.face_at(fit.font_size);
    let masks = [face.rasterize(line1)?, face.rasterize(line2)?];
    let metrics = [masks[0].metrics(), masks[1].metrics()];
    let layout = Layout::compute(&metrics[0], &metrics[1], fit.outline_width, fit.line_spacing)?;

    let mut canvas = blank_canvas(&layout)?;
    let fills = [style.line1_color, style.line2_color];
    for ((mask, placement), fill) in masks.iter().zip(layout.lines).zip(fills) {
        draw_outlined(
            &mut canvas,
            mask,
            placement.x,
            placement.y,
            fill,
            style.outline_color,
            fit.outline_width,
        );
    }

    log::info!(
        "Rendered {}x{} image at {}px",
        layout.width,
        layout.height,
        face.size_px()
    );

    Ok(RenderedImage {
        canvas,
        source,
        fit,
        metrics,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::FitOutcome;

    #[test]
    fn test_empty_line_is_invalid_input() {
        let resolver = FontResolver::builtin_only();
        let style = StyleConfig::default();
        assert!(matches!(
            render(&resolver, "  ", "B", &style),
            Err(RenderError::InvalidInput(_))
        ));
        assert!(matches!(
            render(&resolver, "A", "\n", &style),
            Err(RenderError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_style_rejected_before_font_lookup() {
        let style = StyleConfig {
            min_font_size: 500,
            ..Default::default()
        };
        assert!(matches!(
            render(&FontResolver::builtin_only(), "A", "B", &style),
            Err(RenderError::InvalidStyle(_))
        ));
    }

    #[test]
    fn test_builtin_render_has_transparent_corners() {
        let image = render(&FontResolver::builtin_only(), "A", "B", &StyleConfig::default()).unwrap();
        assert_eq!(image.source, FontSource::Builtin);
        assert_eq!(image.fit.outcome, FitOutcome::Unchecked);

        let canvas = &image.canvas;
        let (w, h) = canvas.dimensions();
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(canvas.get_pixel(x, y).0[3], 0);
        }
        assert!(canvas.pixels().any(|p| p.0[3] > 0));
    }

    #[test]
    fn test_lines_are_trimmed_before_measuring() {
        let resolver = FontResolver::builtin_only();
        let style = StyleConfig::default();
        let padded = render(&resolver, "  AB  ", "C", &style).unwrap();
        let bare = render(&resolver, "AB", "C", &style).unwrap();
        assert_eq!(padded.metrics, bare.metrics);
    }

    #[test]
    fn test_long_line_renders_wide_canvas() {
        let long = "a".repeat(1100);
        let image = render(&FontResolver::builtin_only(), &long, "b", &StyleConfig::default()).unwrap();
        assert_eq!(image.canvas.width(), 1100 * 16 + 64);
        assert!(image.canvas.width() > 16_384);

        let png = image.to_png().unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_huge_outline_is_an_error_not_a_panic() {
        let style = StyleConfig {
            outline_width: 1 << 30,
            ..Default::default()
        };
        assert!(matches!(
            render(&FontResolver::builtin_only(), "A", "B", &style),
            Err(RenderError::Encoding(_))
        ));
    }

    #[test]
    fn test_png_signature() {
        let png = generate_text_image_with(
            &FontResolver::builtin_only(),
            "A",
            "B",
            &StyleConfig::default(),
        )
        .unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
