#![allow(missing_docs)]

//! First-try scoring.

use serde::{Deserialize, Serialize};

/// Percentage at or above which a result is celebrated.
pub const DEFAULT_PASS_THRESHOLD: u8 = 50;

/// Rounded share of questions answered correctly on the first attempt.
pub fn percentage(correct_first_try: usize, total_questions: usize) -> u8 {
    if total_questions == 0 {
        return 0;
    }
    let correct = correct_first_try.min(total_questions) as f64;
    (correct / total_questions as f64 * 100.0).round() as u8
}

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub percentage: u8,
    pub correct_first_try: usize,
    pub total_questions: usize,
}

impl SessionResult {
    pub fn new(correct_first_try: usize, total_questions: usize) -> Self {
        Self {
            percentage: percentage(correct_first_try, total_questions),
            correct_first_try,
            total_questions,
        }
    }

    /// Whether the result earns the celebration.
    pub fn passed(&self, threshold: u8) -> bool {
        self.percentage >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_right_is_fifty_percent() {
        let result = SessionResult::new(5, 10);
        assert_eq!(result.percentage, 50);
        assert!(result.passed(DEFAULT_PASS_THRESHOLD));
        assert!(!SessionResult::new(4, 10).passed(DEFAULT_PASS_THRESHOLD));
    }

    #[test]
    fn percentage_rounds_and_stays_in_range() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(10, 10), 100);
        assert_eq!(percentage(0, 10), 0);
        assert_eq!(percentage(0, 0), 0);
    }
}
