//! Input checks performed before an expression reaches the evaluator.
//!
//! Mirrors what a keypad front end does when `=` is pressed: the trimmed
//! text must be non-empty and must not end with an operator. Only the last
//! character is inspected; anything else is left to the evaluator.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::EvalError;

/// Characters that act as binary operators.
pub const OPERATORS: &[char] = &['+', '-', '*', '/', 'x'];

lazy_static! {
    /// Matches strings made only of keypad characters.
    static ref KEYPAD_CHARS: Regex = Regex::new(r"^[\d\.\+\-\*/x]+$").unwrap();

    /// Matches an operand, an operator, and another operand.
    static ref BINARY_OPERATION: Regex = Regex::new(r"[\d\.][\+\-\*/x][\d\.]").unwrap();
}

/// Check whether a character is one of the binary operators.
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Trim the input and reject it if it is empty or ends with an operator.
///
/// Returns the trimmed expression on success.
pub fn check_expression(input: &str) -> Result<&str, EvalError> {
    let trimmed = input.trim();
    match trimmed.chars().last() {
        None => Err(EvalError::MalformedExpression),
        Some(c) if is_operator(c) => Err(EvalError::MalformedExpression),
        Some(_) => Ok(trimmed),
    }
}

/// Check if input looks like a calculation rather than keypad commands.
///
/// Returns `true` if the trimmed input consists only of digits, points and
/// operators, and contains at least one operator between two operands.
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();
    KEYPAD_CHARS.is_match(trimmed) && BINARY_OPERATION.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators() {
        for c in ['+', '-', '*', '/', 'x'] {
            assert!(is_operator(c));
        }
        assert!(!is_operator('X'));
        assert!(!is_operator('.'));
        assert!(!is_operator('^'));
    }

    #[test]
    fn test_check_accepts_and_trims() {
        assert_eq!(check_expression("  2+2 "), Ok("2+2"));
        assert_eq!(check_expression("7"), Ok("7"));
    }

    #[test]
    fn test_check_rejects_empty_and_trailing_operator() {
        assert_eq!(check_expression(""), Err(EvalError::MalformedExpression));
        assert_eq!(check_expression("   "), Err(EvalError::MalformedExpression));
        assert_eq!(check_expression("5+"), Err(EvalError::MalformedExpression));
        assert_eq!(check_expression("-"), Err(EvalError::MalformedExpression));
        assert_eq!(check_expression("3x"), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn test_check_only_inspects_last_character() {
        assert_eq!(check_expression("3+-2"), Ok("3+-2"));
        assert_eq!(check_expression("+5"), Ok("+5"));
    }

    #[test]
    fn test_looks_like_expression() {
        assert!(looks_like_expression("2+2"));
        assert!(looks_like_expression(" 1.5x3 "));
        assert!(looks_like_expression("8/4/2"));
        assert!(!looks_like_expression("42"));
        assert!(!looks_like_expression("12+3="));
        assert!(!looks_like_expression("+"));
        assert!(!looks_like_expression("hello"));
        assert!(!looks_like_expression(""));
    }
}
