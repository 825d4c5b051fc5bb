//! Expression evaluation for display.
//!
//! Runs the input check and the evaluator, then turns the outcome into a
//! [`CalcResult`] carrying either the formatted value or the message to show.

use super::detection::check_expression;
use super::error::EvalError;
use super::evaluator::evaluate;
use super::format::ResultStyle;

/// Shown when the input is empty or ends with an operator.
pub const INVALID_EXPRESSION_MESSAGE: &str = "Error: Invalid Expression";
/// Shown when a division by zero happens during evaluation.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Error: Divide by 0";
/// Shown for any other evaluation failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Error";

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// Successful calculation.
    Success {
        /// The trimmed expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted in the requested style.
        display_result: String,
        /// Formatted for clipboard (default rendering, no separators).
        clipboard_result: String,
    },
    /// The expression was rejected or failed to evaluate.
    Error {
        /// The trimmed expression.
        expression: String,
        /// Why it failed.
        kind: EvalError,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }

    /// Get the numeric value (only for successful results).
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    fn error(expression: String, kind: EvalError, message: &str) -> Self {
        Self::Error {
            expression,
            kind,
            message: message.to_string(),
        }
    }
}

/// Evaluate a keypad expression and format the outcome.
///
/// Input that is empty or ends with an operator is rejected before any
/// arithmetic with [`INVALID_EXPRESSION_MESSAGE`]. Evaluator failures map to
/// [`DIVIDE_BY_ZERO_MESSAGE`] or [`GENERIC_ERROR_MESSAGE`].
pub fn evaluate_expression(input: &str, style: ResultStyle) -> CalcResult {
    let expression = match check_expression(input) {
        Ok(trimmed) => trimmed.to_string(),
        Err(kind) => {
            tracing::debug!(input, "rejected before evaluation");
            return CalcResult::error(input.trim().to_string(), kind, INVALID_EXPRESSION_MESSAGE);
        }
    };

    match evaluate(&expression) {
        Ok(value) => {
            tracing::debug!(%expression, value, "evaluated");
            CalcResult::Success {
                display_result: style.format(value),
                clipboard_result: ResultStyle::Default.format(value),
                expression,
                value,
            }
        }
        Err(kind @ EvalError::DivisionByZero) => {
            tracing::debug!(%expression, "division by zero");
            CalcResult::error(expression, kind, DIVIDE_BY_ZERO_MESSAGE)
        }
        Err(kind @ EvalError::MalformedExpression) => {
            tracing::debug!(%expression, "malformed expression");
            CalcResult::error(expression, kind, GENERIC_ERROR_MESSAGE)
        }
    }
}
