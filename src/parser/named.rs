use csscolorparser::Color;

use crate::types::ColorSample;

use super::format::{Attempt, ColorFormat};
use super::function::looks_like_call;

/// CSS Color 4 functions that are not handled by a dedicated strategy.
const CSS4_FUNCTIONS: &[&str] = &["hwba", "hwb", "oklab", "oklch"];

/// CSS named colors (`white`, `rebeccapurple`, ...) including `transparent`.
///
/// Lookup goes through csscolorparser's table. That parser also accepts bare
/// hex digits, so words made only of hex letters (`bad`, `decade`) are kept
/// away from it: no CSS color name is spelled that way.
pub struct NamedFormat;

impl ColorFormat for NamedFormat {
    fn name(&self) -> &'static str {
        "named"
    }

    fn attempt(&self, input: &str) -> Attempt {
        let is_word = !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphabetic());
        if !is_word || input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Attempt::NoMatch;
        }
        match input.parse::<Color>() {
            Ok(color) => Attempt::Matched(to_sample(&color)),
            Err(_) => Attempt::NoMatch,
        }
    }
}

/// `hwb()`, `oklab()` and `oklch()`, converted to sRGB by
/// csscolorparser. Out-of-gamut results are clamped to the sRGB cube.
pub struct Css4Format;

impl ColorFormat for Css4Format {
    fn name(&self) -> &'static str {
        "css4"
    }

    fn attempt(&self, input: &str) -> Attempt {
        if !looks_like_call(input, CSS4_FUNCTIONS) {
            return Attempt::NoMatch;
        }
        match input.parse::<Color>() {
            Ok(color) => Attempt::Matched(to_sample(&color)),
            Err(_) => Attempt::Rejected,
        }
    }
}

fn to_sample(color: &Color) -> ColorSample {
    let [r, g, b, _] = color.to_rgba8();
    let alpha = f64::from(color.a).clamp(0.0, 1.0);
    ColorSample::new(r, g, b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_white() {
        assert_eq!(NamedFormat.attempt("white"), Attempt::Matched(ColorSample::WHITE));
    }

    #[test]
    fn named_red() {
        assert_eq!(
            NamedFormat.attempt("red"),
            Attempt::Matched(ColorSample::opaque(255, 0, 0))
        );
    }

    #[test]
    fn named_rebeccapurple() {
        assert_eq!(
            NamedFormat.attempt("rebeccapurple"),
            Attempt::Matched(ColorSample::opaque(102, 51, 153))
        );
    }

    #[test]
    fn transparent_has_zero_alpha() {
        match NamedFormat.attempt("transparent") {
            Attempt::Matched(c) => {
                assert_eq!(c.a, 0.0);
                assert_eq!(c.channels(), [0, 0, 0]);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn unknown_word_not_matched() {
        assert_eq!(NamedFormat.attempt("notacolor"), Attempt::NoMatch);
        assert_eq!(NamedFormat.attempt("currentcolor"), Attempt::NoMatch);
        assert_eq!(NamedFormat.attempt("inherit"), Attempt::NoMatch);
    }

    #[test]
    fn hex_letter_words_not_matched() {
        assert_eq!(NamedFormat.attempt("bad"), Attempt::NoMatch);
        assert_eq!(NamedFormat.attempt("facade"), Attempt::NoMatch);
    }

    #[test]
    fn non_words_not_matched() {
        assert_eq!(NamedFormat.attempt("not-a-color"), Attempt::NoMatch);
        assert_eq!(NamedFormat.attempt(""), Attempt::NoMatch);
    }

    #[test]
    fn hwb_converted() {
        assert_eq!(
            Css4Format.attempt("hwb(0 0% 0%)"),
            Attempt::Matched(ColorSample::opaque(255, 0, 0))
        );
    }

    #[test]
    fn oklch_converted() {
        // oklch(0.637 0.237 25.331) is #fb2c36; gamut mapping differs between libraries
        match Css4Format.attempt("oklch(0.637 0.237 25.331)") {
            Attempt::Matched(c) => assert!(c.r >= 240 && c.g < 80, "got {c}"),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn malformed_css4_rejected() {
        assert_eq!(Css4Format.attempt("oklch(banana)"), Attempt::Rejected);
    }

    #[test]
    fn legacy_functions_not_claimed() {
        assert_eq!(Css4Format.attempt("rgb(0, 0, 0)"), Attempt::NoMatch);
    }
}
