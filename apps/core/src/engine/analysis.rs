//! Analysis record produced by the analyzer.

use serde::{Deserialize, Serialize};

use super::conflicts::Conflict;
use super::domain::Domain;
use super::intent::Intent;
use super::keywords::KeywordScore;
use super::structure::MissingComponent;

/// Complete analysis of one prompt.
///
/// A pure function of the prompt text: recomputed on every call, never
/// cached, and carries no timestamps so identical input yields identical
/// records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptAnalysis {
    /// Task category the prompt appears to request.
    pub intent: Intent,
    /// Subject-matter register.
    pub domain: Domain,
    /// Structural complexity, 1-10.
    pub complexity: u8,
    /// Structural elements absent from the prompt.
    pub missing_components: Vec<MissingComponent>,
    /// Contradictory directive pairs found.
    pub conflicts: Vec<Conflict>,
    /// The single dominant issue, in plain language.
    pub pain_point: String,
    /// Estimated token count.
    pub token_count: u32,
    /// Heuristic well-formedness score, 0-100.
    pub quality_score: u8,
    /// Top TF-IDF keywords.
    pub keywords: Vec<KeywordScore>,
    /// Total word count.
    pub word_count: usize,
}

impl PromptAnalysis {
    /// Degraded record for empty or whitespace-only input.
    pub fn degraded() -> Self {
        Self {
            intent: Intent::Unknown,
            domain: Domain::General,
            complexity: 1,
            missing_components: vec![
                MissingComponent::Role,
                MissingComponent::Context,
                MissingComponent::Format,
                MissingComponent::Constraints,
                MissingComponent::Examples,
            ],
            conflicts: vec![],
            pain_point: "Empty prompt; nothing to analyze.".to_string(),
            token_count: 0,
            quality_score: 0,
            keywords: vec![],
            word_count: 0,
        }
    }

    /// Whether the named component is absent.
    pub fn is_missing(&self, component: MissingComponent) -> bool {
        self.missing_components.contains(&component)
    }

    /// Whether a conflict on the given topic was found.
    pub fn has_conflict_on(&self, topic: &str) -> bool {
        self.conflicts.iter().any(|c| c.topic == topic)
    }

    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "Intent: {} | Domain: {} | Complexity: {}/10 | Missing: {} | Conflicts: {} | Quality: {}/100",
            self.intent,
            self.domain,
            self.complexity,
            self.missing_components.len(),
            self.conflicts.len(),
            self.quality_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_record() {
        let analysis = PromptAnalysis::degraded();
        assert_eq!(analysis.intent, Intent::Unknown);
        assert_eq!(analysis.domain, Domain::General);
        assert_eq!(analysis.complexity, 1);
        assert_eq!(analysis.missing_components.len(), 5);
        assert_eq!(analysis.token_count, 0);
    }

    #[test]
    fn test_summary_shape() {
        let summary = PromptAnalysis::degraded().summary();
        assert!(summary.contains("Intent:"));
        assert!(summary.contains("Complexity:"));
        assert!(summary.contains("Quality:"));
    }

    #[test]
    fn test_component_lookup() {
        let analysis = PromptAnalysis::degraded();
        assert!(analysis.is_missing(MissingComponent::Format));
        assert!(!analysis.has_conflict_on("tone"));
    }
}
