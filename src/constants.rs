pub const DEFAULT_FONT_SIZE: u32 = 200;
pub const DEFAULT_MIN_FONT_SIZE: u32 = 60;
pub const DEFAULT_MAX_WIDTH: u32 = 1200;
pub const DEFAULT_OUTLINE_WIDTH: u32 = 16;
pub const DEFAULT_LINE_SPACING: u32 = 20;

pub const DEFAULT_LINE1_COLOR: u32 = 0xF5A623;
pub const DEFAULT_LINE2_COLOR: u32 = 0xFFFFFF;
pub const DEFAULT_OUTLINE_COLOR: u32 = 0x000000;

// Fitting policy
pub const DEFAULT_FIT_STEP: u32 = 10;
pub const MIN_SCALED_OUTLINE_WIDTH: u32 = 8;
pub const MIN_SCALED_LINE_SPACING: u32 = 10;

// Layout
pub const TOP_PADDING_EXTRA: u32 = 5;
pub const BOTTOM_PADDING_FACTOR: u32 = 4;
pub const SIDE_PADDING_FACTOR: u32 = 2;
// PNG stores each side as a 31-bit value.
pub const MAX_CANVAS_SIDE: u32 = i32::MAX as u32;

// Builtin bitmap font
pub const BUILTIN_GLYPH_SIZE: u32 = 8;
pub const BUILTIN_GLYPH_SCALE: u32 = 2;
