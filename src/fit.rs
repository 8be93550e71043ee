//! Font-size fitting against the maximum image width.

use crate::error::Result;
use crate::font::FaceSource;
use crate::layout::side_padding;
use crate::style::StyleConfig;

/// How the chosen size relates to the width budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitOutcome {
    /// Both lines fit within `max_width`.
    Fits,
    /// Nothing fit down to `min_font_size`; the floor was taken anyway.
    Floor,
    /// The face is not scalable, so the width was never checked.
    Unchecked,
}

/// Size and stroke parameters chosen for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    pub font_size: u32,
    pub outline_width: u32,
    pub line_spacing: u32,
    pub outcome: FitOutcome,
}

/// Picks the largest font size, stepping down from `style.font_size`, at
/// which both lines plus side padding fit within `style.max_width`.
///
/// Outline width and line spacing shrink in proportion when the size drops.
pub fn fit_font_size(
    source: &dyn FaceSource,
    line1: &str,
    line2: &str,
    style: &StyleConfig,
) -> Result<Fit> {
    if !source.is_scalable() {
        log::debug!("Face is not scalable; skipping width fitting");
        return Ok(Fit {
            font_size: style.font_size,
            outline_width: style.outline_width,
            line_spacing: style.line_spacing,
            outcome: FitOutcome::Unchecked,
        });
    }

    let padding = 2 * side_padding(style.outline_width);
    let mut size = style.font_size;

    let outcome = loop {
        let face = source.face_at(size);
        let width1 = face.measure(line1)?.width;
        let width2 = face.measure(line2)?.width;
        let widest = width1.max(width2);
        log::debug!(
            "Trying font size {}: widths {} / {}, budget {}",
            size,
            width1,
            width2,
            style.max_width
        );

        if u64::from(widest) + padding <= u64::from(style.max_width) {
            break FitOutcome::Fits;
        }
        if size <= style.min_font_size {
            log::warn!(
                "Text does not fit in {}px even at minimum font size {}",
                style.max_width,
                style.min_font_size
            );
            break FitOutcome::Floor;
        }
        size = size.saturating_sub(style.fit_step).max(style.min_font_size);
    };

    let (outline_width, line_spacing) = if size < style.font_size {
        (
            scale_proportionally(style.outline_width, size, style.font_size, style.min_outline_width),
            scale_proportionally(style.line_spacing, size, style.font_size, style.min_line_spacing),
        )
    } else {
        (style.outline_width, style.line_spacing)
    };

    log::info!(
        "Chose font size {} (outline {}, spacing {}, {:?})",
        size,
        outline_width,
        line_spacing,
        outcome
    );

    Ok(Fit {
        font_size: size,
        outline_width,
        line_spacing,
        outcome,
    })
}

/// `max(floor, round(value * size / base))`. The floor wins even over a smaller `value`.
pub fn scale_proportionally(value: u32, size: u32, base: u32, floor: u32) -> u32 {
    if base == 0 {
        return value;
    }
    let scaled = (f64::from(value) * f64::from(size) / f64::from(base)).round() as u32;
    scaled.max(floor)
}
