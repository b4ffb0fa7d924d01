use crate::types::ColorSample;

/// What a single format strategy made of an input string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attempt {
    /// Not this notation; the next strategy should try.
    NoMatch,
    Matched(ColorSample),
    /// This notation, but malformed or out of range. Parsing stops here.
    Rejected,
}

/// One color notation the parser understands.
///
/// Strategies are independent of each other: each one decides on its own
/// whether the input belongs to its notation. The parser tries them in a
/// fixed order and the first non-`NoMatch` answer is final.
pub trait ColorFormat: Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// `input` is trimmed and ASCII-lowercased by the caller.
    fn attempt(&self, input: &str) -> Attempt;
}

impl From<Option<ColorSample>> for Attempt {
    /// For strategies that already know the notation matched:
    /// `None` means the value was bad.
    fn from(parsed: Option<ColorSample>) -> Self {
        parsed.map_or(Attempt::Rejected, Attempt::Matched)
    }
}
