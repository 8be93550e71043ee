//! Error types for the renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while turning two lines of text into a PNG.
///
/// Each variant names the stage that failed so callers can log it and
/// translate it into a user-facing message.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A line was empty after trimming.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The style parameters violate their invariants.
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// A candidate font file exists but could not be read or parsed.
    #[error("Failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    /// The text could not be measured with the chosen face.
    #[error("Failed to measure text {text:?}: {reason}")]
    Measurement { text: String, reason: String },

    /// The canvas could not be allocated or serialized to PNG.
    #[error("Failed to encode image: {0}")]
    Encoding(String),
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_stage() {
        let err = RenderError::Measurement {
            text: "abc".into(),
            reason: "no inked glyphs".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to measure text \"abc\": no inked glyphs"
        );
    }

    #[test]
    fn test_font_load_display_includes_path() {
        let err = RenderError::FontLoad {
            path: PathBuf::from("/tmp/x.ttf"),
            reason: "bad magic".into(),
        };
        assert!(err.to_string().contains("/tmp/x.ttf"));
    }
}
