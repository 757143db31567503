//! Prompt analyzer - main orchestrator for the engine module.
//!
//! Coordinates intent and domain classification, complexity scoring,
//! missing-component and conflict detection, keyword extraction, and
//! quality scoring into one `PromptAnalysis` record.

use tracing::debug;

use super::analysis::PromptAnalysis;
use super::complexity::ComplexityScorer;
use super::conflicts::detect_conflicts;
use super::domain::DomainClassifier;
use super::intent::IntentClassifier;
use super::keywords::KeywordExtractor;
use super::quality::{pain_point, quality_score};
use super::structure::detect_missing;
use crate::tokens::count_tokens;

/// Number of keywords surfaced per analysis.
const TOP_KEYWORDS: usize = 5;

/// Main analyzer orchestrating all analysis components.
///
/// Holds only immutable compiled tables; freely shared across threads.
pub struct PromptAnalyzer {
    intent_classifier: IntentClassifier,
    domain_classifier: DomainClassifier,
    complexity_scorer: ComplexityScorer,
    keyword_extractor: KeywordExtractor,
}

impl Default for PromptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptAnalyzer {
    /// Create a new analyzer with default settings.
    pub fn new() -> Self {
        Self {
            intent_classifier: IntentClassifier::new(),
            domain_classifier: DomainClassifier::new(),
            complexity_scorer: ComplexityScorer::new(),
            keyword_extractor: KeywordExtractor::new(),
        }
    }

    /// Analyze a prompt and produce its analysis record.
    ///
    /// Total over all string input: empty or whitespace-only prompts yield a
    /// degraded record instead of an error.
    pub fn analyze(&self, prompt: &str) -> PromptAnalysis {
        if prompt.trim().is_empty() {
            return PromptAnalysis::degraded();
        }

        // 1. Classify intent.
        let intent = self.intent_classifier.classify(prompt);

        // 2. Classify domain.
        let domain = self.domain_classifier.classify(prompt);

        // 3. Score structural complexity.
        let complexity = self.complexity_scorer.analyze(prompt);

        // 4. Detect absent structural components.
        let missing_components = detect_missing(prompt);

        // 5. Detect contradictory directives.
        let conflicts = detect_conflicts(prompt);

        // 6. Extract keywords.
        let keywords = self.keyword_extractor.extract(prompt, Some(TOP_KEYWORDS));

        // 7. Derive pain point and quality score.
        let pain = pain_point(&missing_components, &conflicts, complexity.score);
        let quality = quality_score(
            intent.intent,
            complexity.score,
            &missing_components,
            &conflicts,
            complexity.word_count,
        );

        let analysis = PromptAnalysis {
            intent: intent.intent,
            domain,
            complexity: complexity.score,
            missing_components,
            conflicts,
            pain_point: pain,
            token_count: count_tokens(prompt),
            quality_score: quality,
            keywords,
            word_count: complexity.word_count,
        };

        debug!("analyzed prompt: {}", analysis.summary());

        analysis
    }
}
