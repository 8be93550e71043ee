//! Splitting an inbound multi-line message into the two lines to render.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("send two lines of text, e.g.\nฟองสบู่จัดเต็ม\nเหมือนอยู่ในฝัน!")]
    TooFewLines,
    #[error("both lines must contain text")]
    EmptyLine,
}

/// Returns the first two trimmed lines of `text`.
///
/// Lines after the second are ignored. A blank first or second line is
/// rejected rather than skipped.
pub fn parse_message(text: &str) -> Result<(String, String), MessageError> {
    let mut lines = text.trim().lines();
    let (Some(first), Some(second)) = (lines.next(), lines.next()) else {
        return Err(MessageError::TooFewLines);
    };

    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() {
        return Err(MessageError::EmptyLine);
    }
    Ok((first.to_string(), second.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_lines() {
        assert_eq!(
            parse_message("ฟองสบู่จัดเต็ม\nเหมือนอยู่ในฝัน!"),
            Ok(("ฟองสบู่จัดเต็ม".into(), "เหมือนอยู่ในฝัน!".into()))
        );
    }

    #[test]
    fn test_extra_lines_ignored_and_trimmed() {
        assert_eq!(
            parse_message("\n  hello  \r\n world \nthird\n"),
            Ok(("hello".into(), "world".into()))
        );
    }

    #[test]
    fn test_single_line_rejected() {
        assert_eq!(parse_message("only one"), Err(MessageError::TooFewLines));
        assert_eq!(parse_message("   "), Err(MessageError::TooFewLines));
    }

    #[test]
    fn test_blank_second_line_rejected() {
        assert_eq!(parse_message("first\n   \nthird"), Err(MessageError::EmptyLine));
    }
}
