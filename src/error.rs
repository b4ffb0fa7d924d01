use thiserror::Error;

/// The only failure the contrast core can produce.
///
/// Raised by the color parser and passed through `evaluate_contrast` untouched.
/// Deciding what to do with an unparsable color (skip, substitute, report) is
/// the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContrastError {
    #[error("unparsable color: {input:?}")]
    UnparsableColor { input: String },
}

impl ContrastError {
    pub(crate) fn unparsable(input: &str) -> Self {
        Self::UnparsableColor {
            input: input.to_string(),
        }
    }

    /// The original string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::UnparsableColor { input } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_quotes_original_input() {
        let err = ContrastError::unparsable("not-a-color");
        assert_eq!(err.to_string(), r#"unparsable color: "not-a-color""#);
        assert_eq!(err.input(), "not-a-color");
    }
}
