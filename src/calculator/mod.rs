//! Keypad calculator.
//!
//! This module provides functionality to:
//! - Evaluate flat `+ - * / x` expressions with operator precedence
//! - Reject empty input and trailing operators before evaluation
//! - Format results and error messages for display
//! - Model the keypad screen and run evaluation off the input thread
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod error;
mod evaluation;
mod evaluator;
mod format;
mod keypad;
mod worker;

pub use clipboard::copy_result;
pub use detection::{OPERATORS, check_expression, is_operator, looks_like_expression};
pub use error::EvalError;
pub use evaluation::{
    CalcResult, DIVIDE_BY_ZERO_MESSAGE, GENERIC_ERROR_MESSAGE, INVALID_EXPRESSION_MESSAGE,
    evaluate_expression,
};
pub use evaluator::{Operator, evaluate};
pub use format::{ResultStyle, format_default, format_grouped};
pub use keypad::{Key, Keypad, UnknownKey, parse_keys};
pub use worker::spawn_evaluation;
