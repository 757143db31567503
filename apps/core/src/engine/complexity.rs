//! Structural complexity scoring.
//!
//! Buckets prompt length, clause count, nested constraints, and example
//! presence into an integer score between 1 (trivial) and 10 (dense).
//! The score is monotonic in length and clause count.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CLAUSE_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[.!?;\n,]|\b(and|then|also|plus|as well as|while|but)\b")
        .expect("Invalid regex: clause separators")
});

static NESTED_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(if|when|unless|except|depending on|provided that|in case)\b")
        .expect("Invalid regex: nested constraint markers")
});

static EXAMPLE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bexample\b|\be\.g\.|for instance|such as|```")
        .expect("Invalid regex: example markers")
});

/// Metrics behind a complexity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    /// Total word count.
    pub word_count: usize,
    /// Number of distinct instruction clauses (split on conjunctions/punctuation).
    pub clause_count: usize,
    /// Whether nested-constraint markers (if/when/unless/...) are present.
    pub has_nested_constraints: bool,
    /// Whether the prompt carries examples.
    pub has_examples: bool,
    /// Composite score, clamped to [1, 10].
    pub score: u8,
}

/// Complexity scorer for prompt text.
pub struct ComplexityScorer;

impl Default for ComplexityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityScorer {
    /// Create a new complexity scorer.
    pub fn new() -> Self {
        Self
    }

    /// Count instruction clauses: non-empty segments between separators.
    fn count_clauses(&self, text: &str) -> usize {
        CLAUSE_SPLIT
            .split(text)
            .filter(|segment| segment.trim().split_whitespace().count() >= 2)
            .count()
            .max(if text.trim().is_empty() { 0 } else { 1 })
    }

    /// Bucket word count into 0-4 points.
    fn length_points(word_count: usize) -> u8 {
        match word_count {
            0..=7 => 0,
            8..=19 => 1,
            20..=39 => 2,
            40..=79 => 3,
            _ => 4,
        }
    }

    /// Bucket clause count into 0-3 points.
    fn clause_points(clause_count: usize) -> u8 {
        match clause_count {
            0..=1 => 0,
            2..=3 => 1,
            4..=5 => 2,
            _ => 3,
        }
    }

    /// Analyze text and return complexity metrics.
    pub fn analyze(&self, text: &str) -> ComplexityMetrics {
        let word_count = text.split_whitespace().count();

        if word_count == 0 {
            return ComplexityMetrics {
                word_count: 0,
                clause_count: 0,
                has_nested_constraints: false,
                has_examples: false,
                score: 1,
            };
        }

        let clause_count = self.count_clauses(text);
        let has_nested_constraints = NESTED_MARKERS.is_match(text);
        let has_examples = EXAMPLE_MARKERS.is_match(text);

        let score = 1
            + Self::length_points(word_count)
            + Self::clause_points(clause_count)
            + u8::from(has_nested_constraints)
            + u8::from(has_examples);

        ComplexityMetrics {
            word_count,
            clause_count,
            has_nested_constraints,
            has_examples,
            score: score.clamp(1, 10),
        }
    }

    /// Get just the complexity score.
    pub fn score(&self, text: &str) -> u8 {
        self.analyze(text).score
    }
}
