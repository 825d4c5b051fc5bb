//! Keypad screen buffer.
//!
//! Holds the text a keypad calculator shows and applies key presses to it.
//! The buffer only builds candidate expressions; evaluation happens outside,
//! and the outcome is written back with [`Keypad::show_result`].

use thiserror::Error;

use super::detection::is_operator;
use super::evaluation::CalcResult;

const EMPTY_SCREEN: &str = "0";

/// A single key on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// `0`..`9`.
    Digit(char),
    /// `+ - * / x`.
    Operator(char),
    /// `.`
    Point,
    /// DEL: remove the last character.
    Delete,
    /// AC: reset the screen.
    Clear,
    /// `=`
    Equals,
}

impl Key {
    /// Map a character to a key.
    ///
    /// Digits, operators, `.` and `=` map to themselves; `<` is DEL and
    /// `c`/`C` is AC.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            c if is_operator(c) => Some(Self::Operator(c)),
            '.' => Some(Self::Point),
            '<' => Some(Self::Delete),
            'c' | 'C' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }
}

/// A character with no key assigned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unknown key '{0}'")]
pub struct UnknownKey(pub char);

/// Parse a sequence of key characters, ignoring whitespace.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, UnknownKey> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_char(c).ok_or(UnknownKey(c)))
        .collect()
}

/// Screen state of a keypad calculator.
#[derive(Clone, Debug)]
pub struct Keypad {
    screen: String,
    showing_error: bool,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            screen: EMPTY_SCREEN.to_string(),
            showing_error: false,
        }
    }

    /// Current screen text.
    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Whether the screen currently shows an error message.
    pub fn is_showing_error(&self) -> bool {
        self.showing_error
    }

    /// Apply a key press.
    ///
    /// Returns the expression to evaluate when `=` is pressed; every other
    /// key edits the screen and returns `None`.
    pub fn press(&mut self, key: Key) -> Option<String> {
        if key == Key::Equals {
            return Some(self.screen.clone());
        }

        // An error message is not an expression; start over.
        if self.showing_error {
            self.clear();
        }

        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Operator(op) => self.press_operator(op),
            Key::Point => self.press_point(),
            Key::Delete => self.delete(),
            Key::Clear => self.clear(),
            Key::Equals => {}
        }
        None
    }

    /// AC.
    pub fn clear(&mut self) {
        self.screen.clear();
        self.screen.push_str(EMPTY_SCREEN);
        self.showing_error = false;
    }

    fn press_digit(&mut self, digit: char) {
        if self.screen == EMPTY_SCREEN {
            self.screen.clear();
        }
        self.screen.push(digit);
    }

    fn press_operator(&mut self, op: char) {
        match self.screen.chars().last() {
            Some(last) if !is_operator(last) => self.screen.push(op),
            _ => {}
        }
    }

    // At most one point on the whole screen, not one per number.
    fn press_point(&mut self) {
        if !self.screen.contains('.') {
            self.screen.push('.');
        }
    }

    fn delete(&mut self) {
        if self.screen.chars().count() > 1 {
            self.screen.pop();
        } else {
            self.clear();
        }
    }

    /// Replace the screen with the result display or error message.
    pub fn show_result(&mut self, result: &CalcResult) {
        self.screen = result.display().to_string();
        self.showing_error = !result.is_success();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{ResultStyle, evaluate_expression};

    fn type_keys(keypad: &mut Keypad, keys: &str) -> Option<String> {
        let mut pending = None;
        for key in parse_keys(keys).unwrap() {
            pending = keypad.press(key);
        }
        pending
    }

    fn run(keypad: &mut Keypad, keys: &str) {
        if let Some(expression) = type_keys(keypad, keys) {
            let result = evaluate_expression(&expression, ResultStyle::Default);
            keypad.show_result(&result);
        }
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Keypad::new().screen(), "0");
    }

    #[test]
    fn test_first_digit_replaces_zero() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "12");
        assert_eq!(keypad.screen(), "12");
    }

    #[test]
    fn test_consecutive_operators_are_ignored() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "3+-x4");
        assert_eq!(keypad.screen(), "3+4");
    }

    #[test]
    fn test_single_point_per_screen() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "1.5+2.5");
        assert_eq!(keypad.screen(), "1.5+25");
    }

    #[test]
    fn test_delete_and_clear() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "123<");
        assert_eq!(keypad.screen(), "12");
        type_keys(&mut keypad, "<<");
        assert_eq!(keypad.screen(), "0");
        type_keys(&mut keypad, "45c");
        assert_eq!(keypad.screen(), "0");
    }

    #[test]
    fn test_equals_returns_screen() {
        let mut keypad = Keypad::new();
        assert_eq!(type_keys(&mut keypad, "2+3x4="), Some("2+3x4".to_string()));
        assert_eq!(keypad.screen(), "2+3x4");
    }

    #[test]
    fn test_result_can_be_extended() {
        let mut keypad = Keypad::new();
        run(&mut keypad, "2+3x4=");
        assert_eq!(keypad.screen(), "14.0");
        run(&mut keypad, "+1=");
        assert_eq!(keypad.screen(), "15.0");
    }

    #[test]
    fn test_error_then_new_input() {
        let mut keypad = Keypad::new();
        run(&mut keypad, "5/0=");
        assert_eq!(keypad.screen(), "Error: Divide by 0");
        assert!(keypad.is_showing_error());
        run(&mut keypad, "7");
        assert_eq!(keypad.screen(), "7");
        assert!(!keypad.is_showing_error());
    }

    #[test]
    fn test_trailing_operator_rejected() {
        let mut keypad = Keypad::new();
        run(&mut keypad, "5+=");
        assert_eq!(keypad.screen(), "Error: Invalid Expression");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(parse_keys("1+a"), Err(UnknownKey('a')));
        assert_eq!(parse_keys(" 1 = ").unwrap(), vec![Key::Digit('1'), Key::Equals]);
    }
}
