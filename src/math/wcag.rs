use crate::types::{ColorSample, ThresholdConfig};

/// Absorbs binary representation error so that ratios written with a trailing
/// 5 in the third decimal (4.495 is stored as 4.49499999...) still round up.
const ROUNDING_EPSILON: f64 = 1e-9;

/// Convert an sRGB channel (0-255) to linear light.
/// Uses the 0.03928 knee from the WCAG 2.1 normative text.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1. Alpha is ignored.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(sample: &ColorSample) -> f64 {
    0.2126 * srgb_to_linear(sample.r)
        + 0.7152 * srgb_to_linear(sample.g)
        + 0.0722 * srgb_to_linear(sample.b)
}

/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn luminance_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Calculate the WCAG 2.1 contrast ratio between two colors, ignoring alpha.
/// Use the evaluator when either color may be translucent.
pub fn contrast_ratio(a: &ColorSample, b: &ColorSample) -> f64 {
    luminance_ratio(relative_luminance(a), relative_luminance(b))
}

/// Round a ratio to two decimals, half-up.
pub fn round_ratio(raw: f64) -> f64 {
    (raw * 100.0 + 0.5 + ROUNDING_EPSILON).floor() / 100.0
}

/// Pass/fail for one threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WcagVerdict {
    pub passes_aa: bool,
    pub passes_aaa: bool,
}

/// Classify an already rounded ratio. WCAG does not specify a rounding rule;
/// this crate compares the two-decimal display value, like most checkers do.
pub fn classify(rounded_ratio: f64, thresholds: &ThresholdConfig) -> WcagVerdict {
    WcagVerdict {
        passes_aa: rounded_ratio >= thresholds.aa_threshold,
        passes_aaa: rounded_ratio >= thresholds.aaa_threshold,
    }
}
