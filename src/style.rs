use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_FIT_STEP, DEFAULT_FONT_SIZE, DEFAULT_LINE1_COLOR, DEFAULT_LINE2_COLOR,
    DEFAULT_LINE_SPACING, DEFAULT_MAX_WIDTH, DEFAULT_MIN_FONT_SIZE, DEFAULT_OUTLINE_COLOR,
    DEFAULT_OUTLINE_WIDTH, MIN_SCALED_LINE_SPACING, MIN_SCALED_OUTLINE_WIDTH,
};
use crate::error::{RenderError, Result};

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert a packed RGB u32 color (0xRRGGBB) to an opaque color.
    pub const fn from_u32(color: u32) -> Self {
        Self::from_rgb(
            ((color >> 16) & 0xFF) as u8,
            ((color >> 8) & 0xFF) as u8,
            (color & 0xFF) as u8,
        )
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 255 },
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Rendering parameters for one image.
///
/// All sizes are in pixels. The fitting policy (`fit_step` and the two
/// scaled-value floors) is configuration rather than a hardcoded literal so
/// tests can drive the fitting loop with small synthetic bounds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_size: u32,
    pub line1_color: Color,
    pub line2_color: Color,
    pub outline_color: Color,
    pub outline_width: u32,
    pub line_spacing: u32,
    pub max_width: u32,
    pub min_font_size: u32,
    pub fit_step: u32,
    pub min_outline_width: u32,
    pub min_line_spacing: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            line1_color: Color::from_u32(DEFAULT_LINE1_COLOR),
            line2_color: Color::from_u32(DEFAULT_LINE2_COLOR),
            outline_color: Color::from_u32(DEFAULT_OUTLINE_COLOR),
            outline_width: DEFAULT_OUTLINE_WIDTH,
            line_spacing: DEFAULT_LINE_SPACING,
            max_width: DEFAULT_MAX_WIDTH,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            fit_step: DEFAULT_FIT_STEP,
            min_outline_width: MIN_SCALED_OUTLINE_WIDTH,
            min_line_spacing: MIN_SCALED_LINE_SPACING,
        }
    }
}

impl StyleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_font_size == 0 {
            return Err(RenderError::InvalidStyle(
                "min_font_size must be greater than zero".into(),
            ));
        }
        if self.min_font_size > self.font_size {
            return Err(RenderError::InvalidStyle(format!(
                "min_font_size ({}) exceeds font_size ({})",
                self.min_font_size, self.font_size
            )));
        }
        if self.fit_step == 0 {
            return Err(RenderError::InvalidStyle(
                "fit_step must be greater than zero".into(),
            ));
        }
        if self.max_width == 0 {
            return Err(RenderError::InvalidStyle(
                "max_width must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleConfig::default();
        assert_eq!(style.font_size, 200);
        assert_eq!(style.min_font_size, 60);
        assert_eq!(style.max_width, 1200);
        assert_eq!(style.outline_width, 16);
        assert_eq!(style.line_spacing, 20);
        assert_eq!(style.line1_color, Color::from_rgb(0xF5, 0xA6, 0x23));
        assert_eq!(style.line2_color, Color::from_rgb(255, 255, 255));
        assert_eq!(style.outline_color, Color::from_rgb(0, 0, 0));
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("#F5A623".parse(), Ok(Color::from_rgb(0xF5, 0xA6, 0x23)));
        assert_eq!("f5a623".parse(), Ok(Color::from_rgb(0xF5, 0xA6, 0x23)));
        assert_eq!(
            "#00000080".parse(),
            Ok(Color {
                r: 0,
                g: 0,
                b: 0,
                a: 0x80
            })
        );
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert!("#F5A6".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#ก12345".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_display_roundtrips_through_hex() {
        let c = Color::from_u32(0xF5A623);
        assert_eq!(c.to_string(), "#F5A623");
    }

    #[test]
    fn test_validate_rejects_floor_above_base() {
        let style = StyleConfig {
            font_size: 50,
            min_font_size: 60,
            ..Default::default()
        };
        assert!(matches!(
            style.validate(),
            Err(RenderError::InvalidStyle(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let style = StyleConfig {
            fit_step: 0,
            ..Default::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_parse_partial_style() {
        let toml = r##"
            font_size = 120
            line1_color = "#FF0000"
        "##;
        let style: StyleConfig = toml::from_str(toml).unwrap();
        assert_eq!(style.font_size, 120);
        assert_eq!(style.line1_color, Color::from_rgb(255, 0, 0));
        assert_eq!(style.max_width, 1200);
    }
}
