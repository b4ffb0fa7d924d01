//! napi surface consumed by the overlay's content script.
//! Objects mirror the Rust types with camelCase fields (napi converts the names).

use napi::{Error, Result, Status};
use napi_derive::napi;

use crate::error::ContrastError;
use crate::types::{
    BatchOptions, BatchReport, ColorPairInput, ColorSample, ConformanceLevel, ContrastResult,
    PairOutcome, SkippedPair, TextSize, ThresholdConfig,
};

impl From<ContrastError> for Error {
    fn from(err: ContrastError) -> Self {
        Error::new(Status::InvalidArg, err.to_string())
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsColorSample {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: f64,
}

impl From<ColorSample> for JsColorSample {
    fn from(c: ColorSample) -> Self {
        Self {
            r: u32::from(c.r),
            g: u32::from(c.g),
            b: u32::from(c.b),
            a: c.a,
        }
    }
}

/// Missing fields fall back to the normal-text table.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct JsThresholdConfig {
    pub aa_threshold: Option<f64>,
    pub aaa_threshold: Option<f64>,
}

impl From<JsThresholdConfig> for ThresholdConfig {
    fn from(js: JsThresholdConfig) -> Self {
        let defaults = ThresholdConfig::default();
        Self {
            aa_threshold: js.aa_threshold.unwrap_or(defaults.aa_threshold),
            aaa_threshold: js.aaa_threshold.unwrap_or(defaults.aaa_threshold),
        }
    }
}

/// Equivalent of Rust ContrastResult (nested samples become plain objects)
#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsContrastResult {
    pub ratio: f64,
    pub raw_ratio: f64,
    pub passes_aa: bool,
    pub passes_aaa: bool,
    pub passes_aa_large: bool,
    pub passes_aaa_large: bool,
    pub apca_lc: f64,
    pub foreground: JsColorSample,
    pub background: JsColorSample,
    pub effective_foreground: JsColorSample,
    pub effective_background: JsColorSample,
}

impl From<ContrastResult> for JsContrastResult {
    fn from(r: ContrastResult) -> Self {
        Self {
            ratio: r.ratio,
            raw_ratio: r.raw_ratio,
            passes_aa: r.passes_aa,
            passes_aaa: r.passes_aaa,
            passes_aa_large: r.passes_aa_large,
            passes_aaa_large: r.passes_aaa_large,
            apca_lc: r.apca_lc,
            foreground: r.foreground.into(),
            background: r.background.into(),
            effective_foreground: r.effective_foreground.into(),
            effective_background: r.effective_background.into(),
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsColorPair {
    pub id: String,
    pub foreground: String,
    pub background: String,
    /// "normal" | "large"
    pub text_size: Option<String>,
}

#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct JsBatchOptions {
    /// "AA" | "AAA"
    pub level: Option<String>,
    pub thresholds: Option<JsThresholdConfig>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsPairOutcome {
    pub id: String,
    pub result: JsContrastResult,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsSkippedPair {
    pub id: String,
    pub input: String,
    pub reason: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsBatchReport {
    pub violations: Vec<JsPairOutcome>,
    pub passed: Vec<JsPairOutcome>,
    pub skipped: Vec<JsSkippedPair>,
}

impl From<PairOutcome> for JsPairOutcome {
    fn from(o: PairOutcome) -> Self {
        Self {
            id: o.id,
            result: o.result.into(),
        }
    }
}

impl From<SkippedPair> for JsSkippedPair {
    fn from(s: SkippedPair) -> Self {
        Self {
            id: s.id,
            input: s.input,
            reason: s.reason,
        }
    }
}

impl From<BatchReport> for JsBatchReport {
    fn from(report: BatchReport) -> Self {
        Self {
            violations: report.violations.into_iter().map(Into::into).collect(),
            passed: report.passed.into_iter().map(Into::into).collect(),
            skipped: report.skipped.into_iter().map(Into::into).collect(),
        }
    }
}

fn text_size(value: &str) -> Result<TextSize> {
    match value {
        "normal" => Ok(TextSize::Normal),
        "large" => Ok(TextSize::Large),
        other => Err(Error::new(
            Status::InvalidArg,
            format!("unknown text size {other:?}, expected \"normal\" or \"large\""),
        )),
    }
}

fn conformance_level(value: &str) -> Result<ConformanceLevel> {
    match value {
        "AA" => Ok(ConformanceLevel::AA),
        "AAA" => Ok(ConformanceLevel::AAA),
        other => Err(Error::new(
            Status::InvalidArg,
            format!("unknown conformance level {other:?}, expected \"AA\" or \"AAA\""),
        )),
    }
}

#[napi]
pub fn health_check() -> String {
    "a11y-overlay-contrast ok".to_string()
}

#[napi]
pub fn parse_color(input: String) -> Result<JsColorSample> {
    Ok(crate::parse_color(&input)?.into())
}

/// Luminance of a color string, alpha ignored.
#[napi]
pub fn relative_luminance(input: String) -> Result<f64> {
    let sample = crate::parse_color(&input)?;
    Ok(crate::relative_luminance(&sample))
}

#[napi]
pub fn evaluate_contrast(
    foreground: String,
    background: String,
    thresholds: Option<JsThresholdConfig>,
) -> Result<JsContrastResult> {
    let thresholds: ThresholdConfig = thresholds.unwrap_or_default().into();
    Ok(crate::evaluate_contrast(&foreground, &background, Some(&thresholds))?.into())
}

#[napi]
pub fn evaluate_batch(pairs: Vec<JsColorPair>, options: Option<JsBatchOptions>) -> Result<JsBatchReport> {
    let options = options.unwrap_or_default();
    let batch_options = BatchOptions {
        level: options
            .level
            .as_deref()
            .map(conformance_level)
            .transpose()?
            .unwrap_or_default(),
        thresholds: options.thresholds.unwrap_or_default().into(),
    };

    let pairs = pairs
        .into_iter()
        .map(|p| {
            Ok(ColorPairInput {
                id: p.id,
                foreground: p.foreground,
                background: p.background,
                text_size: p.text_size.as_deref().map(text_size).transpose()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(crate::engine::evaluate_batch(&pairs, &batch_options).into())
}
