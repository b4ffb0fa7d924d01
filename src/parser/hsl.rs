use crate::types::ColorSample;

use super::format::{Attempt, ColorFormat};
use super::function::{
    function_body, looks_like_call, parse_alpha, parse_number, parse_percentage, split_args,
    to_channel,
};

const NAMES: &[&str] = &["hsla", "hsl"];

/// `hsl()` / `hsla()`: hue in [0, 360) (optionally suffixed `deg`),
/// saturation and lightness as percentages in [0%, 100%].
pub struct HslFormat;

impl ColorFormat for HslFormat {
    fn name(&self) -> &'static str {
        "hsl"
    }

    fn attempt(&self, input: &str) -> Attempt {
        if !looks_like_call(input, NAMES) {
            return Attempt::NoMatch;
        }
        parse_hsl(input).into()
    }
}

fn parse_hsl(input: &str) -> Option<ColorSample> {
    let args = split_args(function_body(input, NAMES)?)?;
    let [h, s, l] = args.channels;

    let hue = parse_number(h.strip_suffix("deg").unwrap_or(h))?;
    if !(0.0..360.0).contains(&hue) {
        return None;
    }
    let saturation = parse_percentage(s).filter(|v| (0.0..=100.0).contains(v))?;
    let lightness = parse_percentage(l).filter(|v| (0.0..=100.0).contains(v))?;
    let alpha = match args.alpha {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };

    let [r, g, b] = hsl_to_rgb(hue, saturation / 100.0, lightness / 100.0);
    Some(ColorSample::new(r, g, b, alpha))
}

/// Standard HSL -> RGB: chroma from saturation and lightness, hue sector
/// picks the channel order, lightness midpoint shifts all three.
/// `s` and `l` are fractions in [0, 1]; channels round to nearest.
pub fn hsl_to_rgb(hue: f64, s: f64, l: f64) -> [u8; 3] {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = l - chroma / 2.0;
    [
        to_channel((r1 + m) * 255.0),
        to_channel((g1 + m) * 255.0),
        to_channel((b1 + m) * 255.0),
    ]
}
