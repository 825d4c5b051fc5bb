//! Two-stack operator-precedence evaluator.
//!
//! Scans the expression once from left to right, pushing numbers onto an
//! operand stack and operators onto an operator stack. Whenever an incoming
//! operator does not bind tighter than the one on top of the stack, the top
//! is reduced first, so equal precedence resolves left to right.

use super::error::EvalError;

/// A binary operator accepted by the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map an operator character. `x` is accepted as multiplication.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Apply the operator to `a` (left) and `b` (right).
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

/// Evaluate a flat arithmetic expression such as `2+3x4-1.5`.
///
/// The input must not contain whitespace, parentheses or signs. Division by
/// zero fails with [`EvalError::DivisionByZero`]; anything structurally wrong
/// (empty input, a missing operand, a bad number, a stray character) fails
/// with [`EvalError::MalformedExpression`]. Overflow is not an error: the
/// result is whatever IEEE arithmetic produces.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let bytes = expression.as_bytes();
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<Operator> = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];

        if is_number_byte(c) {
            let start = i;
            while i < bytes.len() && is_number_byte(bytes[i]) {
                i += 1;
            }
            operands.push(parse_number(&expression[start..i])?);
            continue;
        }

        let op = Operator::from_char(c as char).ok_or(EvalError::MalformedExpression)?;
        while let Some(&top) = operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            operators.pop();
            reduce(&mut operands, top)?;
        }
        operators.push(op);
        i += 1;
    }

    while let Some(op) = operators.pop() {
        reduce(&mut operands, op)?;
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn is_number_byte(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}

// A run with more than one '.' (or a lone '.') does not parse and is rejected.
fn parse_number(run: &str) -> Result<f64, EvalError> {
    run.parse::<f64>().map_err(|_| {
        tracing::trace!(run, "unparseable numeric run");
        EvalError::MalformedExpression
    })
}

/// Pop the right then the left operand, apply `op`, push the result.
fn reduce(operands: &mut Vec<f64>, op: Operator) -> Result<(), EvalError> {
    let b = operands.pop().ok_or(EvalError::MalformedExpression)?;
    let a = operands.pop().ok_or(EvalError::MalformedExpression)?;
    operands.push(op.apply(a, b)?);
    Ok(())
}
