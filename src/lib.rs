//! Keypad calculator: a two-stack precedence evaluator for flat
//! `+ - * / x` expressions, plus the screen, formatting and configuration
//! around it.

pub mod calculator;
pub mod config;
