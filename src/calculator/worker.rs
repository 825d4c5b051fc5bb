//! Off-thread evaluation.
//!
//! Keeps evaluation away from the thread that reads input, delivering the
//! result over a channel.

use std::thread;

use super::evaluation::{CalcResult, evaluate_expression};
use super::format::ResultStyle;

/// Evaluate `expression` on a background thread.
///
/// The returned receiver yields exactly one [`CalcResult`].
pub fn spawn_evaluation(expression: String, style: ResultStyle) -> flume::Receiver<CalcResult> {
    let (tx, rx) = flume::bounded(1);

    thread::spawn(move || {
        let result = evaluate_expression(&expression, style);
        if tx.send(result).is_err() {
            tracing::debug!(%expression, "result receiver dropped");
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_arrives() {
        let rx = spawn_evaluation("2*3+4".to_string(), ResultStyle::Default);
        let result = rx.recv().unwrap();
        assert_eq!(result.display(), "10.0");
    }

    #[test]
    fn test_independent_evaluations() {
        let receivers: Vec<_> = (1..=8)
            .map(|n| spawn_evaluation(format!("{n}x{n}"), ResultStyle::Grouped))
            .collect();
        for (n, rx) in (1..=8).zip(receivers) {
            assert_eq!(rx.recv().unwrap().value(), Some((n * n) as f64));
        }
    }

    #[test]
    fn test_dropped_receiver_is_harmless() {
        drop(spawn_evaluation("1/0".to_string(), ResultStyle::Default));
    }
}
