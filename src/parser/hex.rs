use crate::math::hex::parse_hex_digits;

use super::format::{Attempt, ColorFormat};

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
pub struct HexFormat;

impl ColorFormat for HexFormat {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn attempt(&self, input: &str) -> Attempt {
        match input.strip_prefix('#') {
            Some(digits) => parse_hex_digits(digits).into(),
            None => Attempt::NoMatch,
        }
    }
}
