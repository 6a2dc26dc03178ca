//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords that force a description to High priority.
const HIGH_PRIORITY_KEYWORDS: [&str; 3] = ["urgent", "important", "asap"];

/// Keywords that mark a description as Low priority.
const LOW_PRIORITY_KEYWORDS: [&str; 3] = ["low", "later", "someday"];

/// Task priority, derived from the description when the task is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Priority {
    /// Classify a description by case-insensitive keyword scan.
    ///
    /// A high-priority keyword wins over a low-priority one when both are
    /// present; neither yields Normal.
    pub fn classify(description: &str) -> Self {
        let text = description.to_lowercase();

        if HIGH_PRIORITY_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            Self::High
        } else if LOW_PRIORITY_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            Self::Low
        } else {
            Self::Normal
        }
    }

    /// Sort key: High sorts before Normal, Normal before Low.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Normal => 2,
            Self::Low => 3,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Normal => "Normal",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single user-entered unit of work.
///
/// Serializes with camelCase field names; the JSON export format depends on
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// 1-based position in the ledger, renumbered after every removal.
    /// Not a stable identifier.
    pub sequence_number: usize,

    /// User-supplied description
    pub description: String,

    /// Derived from the description at creation; updates leave it untouched.
    pub priority: Priority,

    /// Estimated duration in minutes, never negative.
    pub duration_minutes: f64,

    /// Free-text category label
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_high() {
        assert_eq!(Priority::classify("URGENT: fix the build"), Priority::High);
        assert_eq!(Priority::classify("important meeting"), Priority::High);
        assert_eq!(Priority::classify("reply asap"), Priority::High);
    }

    #[test]
    fn test_classify_low() {
        assert_eq!(Priority::classify("low effort cleanup"), Priority::Low);
        assert_eq!(Priority::classify("do this later"), Priority::Low);
        assert_eq!(Priority::classify("Someday: learn piano"), Priority::Low);
    }

    #[test]
    fn test_classify_normal() {
        assert_eq!(Priority::classify("write the report"), Priority::Normal);
        assert_eq!(Priority::classify(""), Priority::Normal);
    }

    #[test]
    fn test_classify_high_wins_over_low() {
        assert_eq!(
            Priority::classify("urgent but can slip later"),
            Priority::High
        );
        assert_eq!(Priority::classify("low priority but ASAP"), Priority::High);
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Priority::High.rank() < Priority::Normal.rank());
        assert!(Priority::Normal.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::High.to_string(), "High");
        assert_eq!(Priority::Normal.to_string(), "Normal");
        assert_eq!(Priority::Low.to_string(), "Low");
    }
}
