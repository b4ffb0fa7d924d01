use crate::types::ColorSample;

use super::format::{Attempt, ColorFormat};
use super::function::{
    function_body, looks_like_call, parse_alpha, parse_number, parse_percentage, split_args,
    to_channel,
};

const NAMES: &[&str] = &["rgba", "rgb"];

/// `rgb()` / `rgba()` in comma or space syntax.
///
/// Channels are numbers in [0, 255] or percentages in [0%, 100%]; fractional
/// values round to the nearest integer. Alpha is optional in both spellings.
pub struct RgbFormat;

impl ColorFormat for RgbFormat {
    fn name(&self) -> &'static str {
        "rgb"
    }

    fn attempt(&self, input: &str) -> Attempt {
        if !looks_like_call(input, NAMES) {
            return Attempt::NoMatch;
        }
        parse_rgb(input).into()
    }
}

fn parse_rgb(input: &str) -> Option<ColorSample> {
    let args = split_args(function_body(input, NAMES)?)?;
    let [r, g, b] = args.channels;
    let alpha = match args.alpha {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };
    Some(ColorSample::new(
        parse_channel(r)?,
        parse_channel(g)?,
        parse_channel(b)?,
        alpha,
    ))
}

fn parse_channel(token: &str) -> Option<u8> {
    if token.ends_with('%') {
        let pct = parse_percentage(token)?;
        return (0.0..=100.0)
            .contains(&pct)
            .then(|| to_channel(pct * 255.0 / 100.0));
    }
    let value = parse_number(token)?;
    (0.0..=255.0).contains(&value).then(|| to_channel(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> ColorSample {
        match RgbFormat.attempt(input) {
            Attempt::Matched(c) => c,
            other => panic!("{input}: {other:?}"),
        }
    }

    #[test]
    fn rgb_comma_format() {
        assert_eq!(parsed("rgb(255, 0, 128)"), ColorSample::opaque(255, 0, 128));
    }

    #[test]
    fn rgb_space_format() {
        assert_eq!(parsed("rgb(255 0 0)"), ColorSample::opaque(255, 0, 0));
    }

    #[test]
    fn rgba_with_alpha() {
        assert_eq!(parsed("rgba(0, 0, 0, 0.5)"), ColorSample::new(0, 0, 0, 0.5));
        assert_eq!(parsed("rgb(0 0 0 / 25%)"), ColorSample::new(0, 0, 0, 0.25));
    }

    #[test]
    fn rgba_without_alpha_is_opaque() {
        assert_eq!(parsed("rgba(1, 2, 3)"), ColorSample::opaque(1, 2, 3));
    }

    #[test]
    fn percentages_scale_and_round() {
        // 50% of 255 = 127.5 -> 128
        assert_eq!(parsed("rgb(100%, 50%, 0%)"), ColorSample::opaque(255, 128, 0));
        // 33% of 255 = 84.15 -> 84
        assert_eq!(parsed("rgb(33%, 33%, 33%)"), ColorSample::opaque(84, 84, 84));
    }

    #[test]
    fn fractional_channel_rounds() {
        assert_eq!(parsed("rgb(10.6, 0, 0)"), ColorSample::opaque(11, 0, 0));
    }

    #[test]
    fn channel_out_of_range_rejected() {
        assert_eq!(RgbFormat.attempt("rgb(256, 0, 0)"), Attempt::Rejected);
        assert_eq!(RgbFormat.attempt("rgb(-1, 0, 0)"), Attempt::Rejected);
        assert_eq!(RgbFormat.attempt("rgb(101%, 0%, 0%)"), Attempt::Rejected);
    }

    #[test]
    fn alpha_out_of_range_rejected() {
        assert_eq!(RgbFormat.attempt("rgba(0, 0, 0, 1.1)"), Attempt::Rejected);
        assert_eq!(RgbFormat.attempt("rgba(0, 0, 0, -0.5)"), Attempt::Rejected);
    }

    #[test]
    fn malformed_rejected() {
        assert_eq!(RgbFormat.attempt("rgb(1, 2)"), Attempt::Rejected);
        assert_eq!(RgbFormat.attempt("rgb(a, b, c)"), Attempt::Rejected);
        assert_eq!(RgbFormat.attempt("rgb(1, 2, 3"), Attempt::Rejected);
    }

    #[test]
    fn other_notation_not_matched() {
        assert_eq!(RgbFormat.attempt("#fff"), Attempt::NoMatch);
        assert_eq!(RgbFormat.attempt("hsl(0, 0%, 0%)"), Attempt::NoMatch);
        assert_eq!(RgbFormat.attempt("rebeccapurple"), Attempt::NoMatch);
    }
}
