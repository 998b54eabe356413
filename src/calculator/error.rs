//! Errors raised while lexing or evaluating an expression.

use thiserror::Error;

/// A syntactic evaluation failure.
///
/// Non-finite results (`Infinity`, `NaN`) are not errors; only input that
/// cannot be read as an arithmetic expression ends up here.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("nothing to evaluate")]
    Empty,

    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unexpected '{found}' at {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("expression ends unexpectedly")]
    UnexpectedEnd,

    #[error("missing closing parenthesis")]
    UnclosedParen,

    #[error("unmatched closing parenthesis at {0}")]
    UnmatchedParen(usize),

    #[error("unknown name '{0}'")]
    UnknownIdent(String),

    #[error("function '{0}' requires an argument in parentheses")]
    MissingArgument(String),

    #[error("expression is nested too deeply")]
    TooDeep,
}
