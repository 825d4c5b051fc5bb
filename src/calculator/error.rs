//! Error kinds produced by the evaluator.

use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// Empty input, a missing operand, or a token that is not a number.
    #[error("malformed expression")]
    MalformedExpression,
    /// A `/` whose right operand is exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}
