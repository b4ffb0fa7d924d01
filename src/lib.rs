//! WCAG contrast engine for the accessibility overlay.
//!
//! Three pure stages: parse a CSS color, compute its relative luminance,
//! and turn two luminances into a classified contrast ratio. The overlay code
//! calls `evaluate_contrast` (or `evaluate_batch` for a whole page) and renders
//! the result; nothing in here touches the DOM.

pub mod engine;
pub mod error;
pub mod math;
pub mod parser;
pub mod types;

#[cfg(feature = "node")]
mod bindings;

pub use engine::evaluate_batch;
pub use error::ContrastError;
pub use math::checker::Evaluator;
pub use math::wcag::{classify, contrast_ratio, round_ratio, WcagVerdict};
pub use parser::parse_color;
pub use types::{
    BatchOptions, BatchReport, ColorPairInput, ColorSample, ConformanceLevel, ContrastResult,
    PairOutcome, SkippedPair, TextSize, ThresholdConfig,
};

/// Relative luminance of `sample` in [0, 1]. Alpha is ignored.
pub fn relative_luminance(sample: &ColorSample) -> f64 {
    math::wcag::relative_luminance(sample)
}

/// Parse both colors and evaluate `foreground` text on `background`.
///
/// `thresholds` defaults to the normal-text table (4.5 / 7.0). Translucent
/// colors are composited before measuring: the background over a white page,
/// then the foreground over that.
pub fn evaluate_contrast(
    foreground: &str,
    background: &str,
    thresholds: Option<&ThresholdConfig>,
) -> Result<ContrastResult, ContrastError> {
    Evaluator::new(thresholds.copied().unwrap_or_default()).evaluate_str(foreground, background)
}
