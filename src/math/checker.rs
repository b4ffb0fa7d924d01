use tracing::trace;

use crate::error::ContrastError;
use crate::parser::parse_color;
use crate::types::{ColorSample, ContrastResult, ThresholdConfig};

use super::apca::calc_apca_lc;
use super::composite::{composite_over, flatten};
use super::wcag::{classify, luminance_ratio, relative_luminance, round_ratio};

/// Stateless contrast evaluator: a threshold table plus the opaque page backdrop
/// that translucent backgrounds are composited over.
///
/// Cheap to copy and safe to share between threads; every call is a pure
/// function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    thresholds: ThresholdConfig,
    backdrop: ColorSample,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}

impl Evaluator {
    /// Evaluator over a white page.
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self {
            thresholds,
            backdrop: ColorSample::WHITE,
        }
    }

    /// Replace the page backdrop. A translucent backdrop is itself flattened
    /// over white, since nothing is known about what lies behind it.
    pub fn with_backdrop(mut self, backdrop: ColorSample) -> Self {
        self.backdrop = flatten(&backdrop, &ColorSample::WHITE);
        self
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    pub fn backdrop(&self) -> &ColorSample {
        &self.backdrop
    }

    /// Evaluate text drawn in `foreground` on top of `background`.
    ///
    /// Alpha is composited before any luminance is computed:
    ///   1. a translucent background is flattened over the backdrop
    ///   2. a translucent foreground is flattened over that effective background
    ///
    /// Pass/fail uses the ratio rounded to two decimals.
    pub fn evaluate(&self, foreground: ColorSample, background: ColorSample) -> ContrastResult {
        let effective_bg = flatten(&background, &self.backdrop);
        let effective_fg = if foreground.is_opaque() {
            foreground
        } else {
            composite_over(&foreground, &effective_bg)
        };

        let raw_ratio = luminance_ratio(
            relative_luminance(&effective_fg),
            relative_luminance(&effective_bg),
        );
        let ratio = round_ratio(raw_ratio);
        let verdict = classify(ratio, &self.thresholds);
        let large = classify(ratio, &ThresholdConfig::large_text());
        let apca_lc = round_ratio(calc_apca_lc(&effective_fg, &effective_bg));

        trace!(
            fg = %effective_fg,
            bg = %effective_bg,
            raw_ratio,
            ratio,
            passes_aa = verdict.passes_aa,
            "evaluated contrast"
        );

        ContrastResult {
            ratio,
            raw_ratio,
            passes_aa: verdict.passes_aa,
            passes_aaa: verdict.passes_aaa,
            passes_aa_large: large.passes_aa,
            passes_aaa_large: large.passes_aaa,
            apca_lc,
            foreground,
            background,
            effective_foreground: effective_fg,
            effective_background: effective_bg,
        }
    }

    /// Parse both strings, then evaluate. The first unparsable string wins.
    pub fn evaluate_str(&self, foreground: &str, background: &str) -> Result<ContrastResult, ContrastError> {
        let fg = parse_color(foreground)?;
        let bg = parse_color(background)?;
        Ok(self.evaluate(fg, bg))
    }
}
