/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing symbol strings,
/// splitting parameter lists, and lexing or parsing arithmetic. Parse errors
/// are detected before any value is computed.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types raised while computing parameter expressions:
/// division by zero, overflow, non-numeric literals, unknown functions and
/// argument mismatches.
pub mod evaluation_error;
/// Grammar errors.
///
/// Errors raised while dispatching a token sequence to an interpreter or while
/// expanding a grammar past its configured limits.
pub mod grammar_error;
/// Configuration errors.
///
/// Failures raised while loading a grammar description.
pub mod config_error;

pub use config_error::ConfigError;
pub use evaluation_error::EvaluationError;
pub use grammar_error::GrammarError;
pub use parse_error::ParseError;

/// Any failure produced by the grammar engine.
///
/// `build`, `evaluate` and `execute` can fail for several reasons, so they
/// return this umbrella type. Each variant wraps the phase-specific error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed expression syntax.
    Parse(ParseError),
    /// Arithmetic or function evaluation failure.
    Evaluation(EvaluationError),
    /// Invalid symbol or interpreter state during dispatch.
    Grammar(GrammarError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvaluationError> for Error {
    fn from(e: EvaluationError) -> Self {
        Self::Evaluation(e)
    }
}

impl From<GrammarError> for Error {
    fn from(e: GrammarError) -> Self {
        Self::Grammar(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::Grammar(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Evaluation(e) => Some(e),
            Self::Grammar(e) => Some(e),
        }
    }
}
