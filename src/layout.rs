//! Canvas geometry for the two stacked lines.

use crate::constants::{
    BOTTOM_PADDING_FACTOR, MAX_CANVAS_SIDE, SIDE_PADDING_FACTOR, TOP_PADDING_EXTRA,
};
use crate::error::{RenderError, Result};
use crate::font::TextMetrics;

pub fn top_padding(outline_width: u32) -> u64 {
    u64::from(outline_width) + u64::from(TOP_PADDING_EXTRA)
}

/// Extra room below the baseline for descenders and below-base vowel marks.
pub fn bottom_padding(outline_width: u32) -> u64 {
    u64::from(outline_width) * u64::from(BOTTOM_PADDING_FACTOR)
}

pub fn side_padding(outline_width: u32) -> u64 {
    u64::from(outline_width) * u64::from(SIDE_PADDING_FACTOR)
}

/// Draw origin of one line on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub lines: [Placement; 2],
}

impl Layout {
    /// Centers each line horizontally and stacks the second below the first.
    pub fn compute(
        first: &TextMetrics,
        second: &TextMetrics,
        outline_width: u32,
        line_spacing: u32,
    ) -> Result<Self> {
        let top = top_padding(outline_width);
        let bottom = bottom_padding(outline_width);
        let side = side_padding(outline_width);

        let width = u64::from(first.width.max(second.width)) + 2 * side;
        let height = u64::from(first.height)
            + u64::from(second.height)
            + u64::from(line_spacing)
            + top
            + bottom;

        if width == 0 || height == 0 {
            return Err(RenderError::Encoding(format!(
                "canvas would be empty ({width}x{height})"
            )));
        }
        let too_large = || {
            RenderError::Encoding(format!(
                "canvas {width}x{height} exceeds the {MAX_CANVAS_SIDE}px PNG side limit"
            ))
        };
        // Every coordinate below fits in i32 once both sides pass this check.
        let width = u32::try_from(width)
            .ok()
            .filter(|&w| w <= MAX_CANVAS_SIDE)
            .ok_or_else(too_large)?;
        let height = u32::try_from(height)
            .ok()
            .filter(|&h| h <= MAX_CANVAS_SIDE)
            .ok_or_else(too_large)?;

        let center = |line_width: u32| ((width - line_width) / 2) as i32;
        let y1 = top as i32;
        let y2 = y1 + first.height as i32 + line_spacing as i32;

        Ok(Self {
            width,
            height,
            lines: [
                Placement {
                    x: center(first.width),
                    y: y1,
                },
                Placement {
                    x: center(second.width),
                    y: y2,
                },
            ],
        })
    }
}
