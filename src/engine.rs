use rayon::prelude::*;
use tracing::debug;

use crate::error::ContrastError;
use crate::math::checker::Evaluator;
use crate::types::{
    BatchOptions, BatchReport, ColorPairInput, ConformanceLevel, ContrastResult, PairOutcome,
    SkippedPair, ThresholdConfig,
};

/// Evaluate many foreground/background pairs and bucket the outcomes.
///
/// Uses Rayon's `par_iter()` — every pair is independent (no shared mutable
/// state), and the indexed collect keeps results in submission order.
///
/// A pair that fails to parse is skipped rather than failing the batch; the
/// offending string is reported so the overlay can surface it.
///
/// This is the main "hot path" entry point for a full-page scan.
pub fn evaluate_batch(pairs: &[ColorPairInput], options: &BatchOptions) -> BatchReport {
    let outcomes: Vec<Result<PairOutcome, SkippedPair>> = pairs
        .par_iter()
        .map(|pair| evaluate_pair(pair, options))
        .collect();

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(outcome) if is_violation(&outcome.result, options.level) => {
                report.violations.push(outcome)
            }
            Ok(outcome) => report.passed.push(outcome),
            Err(skipped) => report.skipped.push(skipped),
        }
    }

    debug!(
        total = report.total(),
        violations = report.violations.len(),
        passed = report.passed.len(),
        skipped = report.skipped.len(),
        "batch evaluated"
    );
    report
}

fn evaluate_pair(pair: &ColorPairInput, options: &BatchOptions) -> Result<PairOutcome, SkippedPair> {
    let thresholds = pair
        .text_size
        .map_or(options.thresholds, ThresholdConfig::for_text_size);

    Evaluator::new(thresholds)
        .evaluate_str(&pair.foreground, &pair.background)
        .map(|result| PairOutcome {
            id: pair.id.clone(),
            result,
        })
        .map_err(|err| skipped(pair, &err))
}

fn skipped(pair: &ColorPairInput, err: &ContrastError) -> SkippedPair {
    SkippedPair {
        id: pair.id.clone(),
        input: err.input().to_string(),
        reason: err.to_string(),
    }
}

fn is_violation(result: &ContrastResult, level: ConformanceLevel) -> bool {
    match level {
        ConformanceLevel::AA => !result.passes_aa,
        ConformanceLevel::AAA => !result.passes_aaa,
    }
}
