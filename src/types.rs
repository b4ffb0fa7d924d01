use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::hex::format_hex;

/// A parsed color: 8-bit sRGB channels plus straight (unpremultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 (fully transparent) to 1.0 (opaque)
    pub a: f64,
}

impl ColorSample {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        format_hex(self)
    }
}

impl Default for ColorSample {
    fn default() -> Self {
        Self::BLACK
    }
}

/// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
/// Both forms parse back to the same sample.
impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// WCAG distinguishes normal text from large text (>= 18pt, or >= 14pt bold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

/// Minimum contrast ratios for the AA and AAA conformance levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThresholdConfig {
    pub aa_threshold: f64,
    pub aaa_threshold: f64,
}

impl ThresholdConfig {
    /// WCAG 2.1 SC 1.4.3 / 1.4.6 for normal text: 4.5:1 and 7:1.
    pub const fn normal_text() -> Self {
        Self {
            aa_threshold: 4.5,
            aaa_threshold: 7.0,
        }
    }

    /// Large text: 3:1 and 4.5:1.
    pub const fn large_text() -> Self {
        Self {
            aa_threshold: 3.0,
            aaa_threshold: 4.5,
        }
    }

    pub const fn for_text_size(size: TextSize) -> Self {
        match size {
            TextSize::Normal => Self::normal_text(),
            TextSize::Large => Self::large_text(),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::normal_text()
    }
}

/// Outcome of one foreground/background evaluation.
///
/// `ratio` is the display value (two decimals, round-half-up) and is what the
/// pass flags were computed from. `raw_ratio` keeps full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: f64,
    pub raw_ratio: f64,
    pub passes_aa: bool,
    pub passes_aaa: bool,
    /// Large-text table, independent of the thresholds the call used.
    pub passes_aa_large: bool,
    pub passes_aaa_large: bool,
    /// APCA Lc, informative only. Positive = dark text on light background.
    pub apca_lc: f64,
    /// Samples as parsed from the caller's strings.
    pub foreground: ColorSample,
    pub background: ColorSample,
    /// Opaque samples after alpha compositing; the ratio is computed from these.
    pub effective_foreground: ColorSample,
    pub effective_background: ColorSample,
}

/// One pair submitted to the batch engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPairInput {
    /// Caller-chosen handle (selector, element index...) echoed back in the report.
    pub id: String,
    pub foreground: String,
    pub background: String,
    /// Overrides the batch thresholds with the table for this size.
    #[serde(default)]
    pub text_size: Option<TextSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConformanceLevel {
    #[default]
    AA,
    AAA,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchOptions {
    pub level: ConformanceLevel,
    pub thresholds: ThresholdConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairOutcome {
    pub id: String,
    pub result: ContrastResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPair {
    pub id: String,
    /// The color string that could not be parsed.
    pub input: String,
    pub reason: String,
}

/// Batch results bucketed the way the overlay renders them.
/// Each bucket keeps the relative order of the submitted pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub violations: Vec<PairOutcome>,
    pub passed: Vec<PairOutcome>,
    pub skipped: Vec<SkippedPair>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.violations.len() + self.passed.len() + self.skipped.len()
    }
}
