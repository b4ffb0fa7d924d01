use crate::types::ColorSample;

/// Parse the digits of a hex color (without the leading `#`).
///
/// Accepts 3, 4, 6 or 8 hex digits, case-insensitive. Short forms double each
/// nibble (`f` -> `ff`). The 4th/8th-digit alpha byte maps to 0.0-1.0.
/// Returns None on any other length or a non-hex digit.
pub fn parse_hex_digits(digits: &str) -> Option<ColorSample> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let bytes: Vec<u8> = match digits.len() {
        3 | 4 => digits
            .chars()
            .map(|c| c.to_digit(16).map(|n| (n * 17) as u8))
            .collect::<Option<_>>()?,
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };

    let alpha = bytes.get(3).map_or(1.0, |&a| f64::from(a) / 255.0);
    Some(ColorSample::new(bytes[0], bytes[1], bytes[2], alpha))
}

/// Format as lowercase `#rrggbb`, appending the alpha byte only when the
/// sample is not fully opaque.
pub fn format_hex(sample: &ColorSample) -> String {
    if sample.is_opaque() {
        format!("#{:02x}{:02x}{:02x}", sample.r, sample.g, sample.b)
    } else {
        let a = (sample.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", sample.r, sample.g, sample.b, a)
    }
}
