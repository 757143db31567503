//! Keyword extraction using TF-IDF.
//!
//! Term frequency over the prompt, against a heuristic IDF approximation.
//! Stopwords are filtered; the top-scoring terms feed the enhancer's role
//! directive and example selection.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// English stopwords.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "for", "yet", "so", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
    "this", "that", "these", "those", "who", "whom", "which", "what", "whose", "is", "am", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did",
    "doing", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "in",
    "on", "at", "to", "from", "by", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "up", "down", "out", "off", "over", "under",
    "again", "further", "here", "there", "where", "when", "why", "how", "all", "each", "every",
    "both", "few", "more", "most", "other", "some", "any", "no", "not", "only", "own", "same",
    "than", "too", "very", "just", "also", "now", "then", "once", "always", "never", "if",
    "because", "as", "until", "while", "although", "though", "please", "make", "write", "give",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Pre-computed IDF weights for terms common in prompt engineering.
/// Higher weight means a more specific, more informative term.
static IDF_WEIGHTS: LazyLock<HashMap<&'static str, f32>> = LazyLock::new(|| {
    let mut weights = HashMap::new();

    // Very specific terms.
    for term in [
        "algorithm",
        "database",
        "schema",
        "endpoint",
        "screenplay",
        "stakeholder",
        "hypothesis",
    ] {
        weights.insert(term, 2.5);
    }

    // Technical-ish terms.
    for term in ["code", "api", "report", "story", "data", "system", "config", "test"] {
        weights.insert(term, 2.0);
    }

    // Common task verbs.
    for term in ["create", "update", "delete", "summarize", "translate", "analyze", "convert"] {
        weights.insert(term, 1.5);
    }

    weights
});

/// A keyword with its TF-IDF score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordScore {
    /// The keyword, lowercased.
    pub keyword: String,
    /// TF-IDF score.
    pub score: f32,
    /// Raw frequency in the text.
    pub frequency: usize,
}

/// Keyword extractor over a single prompt.
pub struct KeywordExtractor {
    min_word_length: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::with_config(3, 10)
    }

    /// Create an extractor with a custom minimum word length and result cap.
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            min_word_length,
            max_keywords,
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '_' && c != '-')
            .filter(|word| {
                word.len() >= self.min_word_length
                    && !STOPWORD_SET.contains(word)
                    && !word.chars().all(|c| c.is_numeric())
            })
            .map(str::to_string)
            .collect()
    }

    /// Heuristic IDF: precomputed weight when known, otherwise length-scaled.
    fn idf(word: &str) -> f32 {
        if let Some(&weight) = IDF_WEIGHTS.get(word) {
            return weight;
        }

        // Longer and hyphenated/underscored words tend to be more specific.
        let length_factor = (word.len() as f32 / 6.0).min(1.5);
        let compound_bonus = if word.contains('_') || word.contains('-') {
            0.5
        } else {
            0.0
        };

        1.0 + length_factor + compound_bonus
    }

    /// Extract the top keywords from text, highest score first.
    pub fn extract(&self, text: &str, top_k: Option<usize>) -> Vec<KeywordScore> {
        let words = self.tokenize(text);
        if words.is_empty() {
            return vec![];
        }

        let total = words.len() as f32;
        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for word in &words {
            *frequencies.entry(word.clone()).or_insert(0) += 1;
        }

        let mut scored: Vec<KeywordScore> = frequencies
            .into_iter()
            .map(|(word, frequency)| {
                let tf = frequency as f32 / total;
                let score = tf * Self::idf(&word);
                KeywordScore {
                    keyword: word,
                    score,
                    frequency,
                }
            })
            .collect();

        // Stable order for equal scores: alphabetical keeps extraction deterministic.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });

        scored
            .into_iter()
            .take(top_k.unwrap_or(self.max_keywords))
            .collect()
    }
}
