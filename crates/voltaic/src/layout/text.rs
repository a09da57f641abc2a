//! Label measurement.
//!
//! Labels are sized from character count with fixed per-character metrics,
//! which is close enough for the monospace-ish fonts schematics use.

use voltaic_core::geometry::Size;

/// Average advance of one character, in ems.
const CHAR_WIDTH: f32 = 0.6;
/// Line box height, in ems.
const LINE_HEIGHT: f32 = 1.2;

/// The box a single line of `text` occupies at `font_size`.
pub fn text_size(text: &str, font_size: f32) -> Size {
    let chars = text.chars().count() as f32;
    Size::new(chars * font_size * CHAR_WIDTH, font_size * LINE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_size() {
        let size = text_size("10k", 10.0);
        assert_approx_eq!(f32, size.width(), 18.0);
        assert_approx_eq!(f32, size.height(), 12.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_approx_eq!(f32, text_size("µF", 10.0).width(), 12.0);
    }
}
