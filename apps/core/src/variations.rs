//! Variation orchestrator.
//!
//! Drives the enhancer several times with an index-based parameter schedule
//! and packages each result with its own analysis, improvement notes, and
//! signed quality delta.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::enhancer::Enhancer;
use crate::engine::analyzer::PromptAnalyzer;
use crate::error::{EngineError, Result};
use crate::improvements::{calculate_improvement, explain_improvements};
use crate::models::{
    EnhanceOptions, EnhancedPrompt, EnhancementType, PatternMetadata, Platform, Tone,
    VariationRequest,
};
use crate::tokens::count_tokens;

/// Parameters for one variation index.
///
/// The index-based overrides are product tuning carried over as-is; the
/// schedule lives in this one place so a declarative strategy table could
/// replace it without touching the orchestrator loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariationPlan {
    pub tone: Tone,
    pub few_shot_count: u8,
    pub resolve_ambiguity: bool,
    pub enhancement_type: EnhancementType,
}

impl VariationPlan {
    /// Derives the plan for variation `index` from the baseline complexity
    /// and the caller's request. Deterministic: no randomness anywhere.
    pub fn for_index(index: u8, baseline_complexity: u8, request: &VariationRequest) -> Self {
        let resolve_ambiguity = index >= 1;

        let few_shot_count = if index == 2 && baseline_complexity > 5 {
            2
        } else if index == 1 && baseline_complexity > 7 {
            3
        } else {
            request.few_shot_count
        };

        let tone = if index == 2 { Tone::Spartan } else { request.tone };

        let enhancement_type = match index {
            0 => EnhancementType::Conservative,
            1 => EnhancementType::Balanced,
            _ => EnhancementType::Aggressive,
        };

        Self {
            tone,
            few_shot_count,
            resolve_ambiguity,
            enhancement_type,
        }
    }
}

/// Orchestrates enhancement variations over a single prompt.
pub struct VariationOrchestrator {
    analyzer: PromptAnalyzer,
    enhancer: Enhancer,
}

impl Default for VariationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl VariationOrchestrator {
    /// Create a new orchestrator.
    pub fn new() -> Self {
        Self {
            analyzer: PromptAnalyzer::new(),
            enhancer: Enhancer::new(),
        }
    }

    /// Generates `request.variation_count` enhanced prompts in schedule order
    /// (conservative, balanced, aggressive).
    ///
    /// Fails with `InvalidInput` for an empty prompt and `Validation` for
    /// out-of-range request options. The `improvement` delta is surfaced
    /// signed; a variation may score below the original.
    pub fn generate(
        &self,
        prompt: &str,
        platform: &Platform,
        request: &VariationRequest,
    ) -> Result<Vec<EnhancedPrompt>> {
        if prompt.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "prompt must not be empty".to_string(),
            ));
        }
        request.validate()?;

        let baseline = self.analyzer.analyze(prompt);
        info!(
            platform = %platform.id,
            count = request.variation_count,
            "generating variations; baseline {}",
            baseline.summary()
        );

        let mut results = Vec::with_capacity(request.variation_count as usize);

        for index in 0..request.variation_count {
            let plan = VariationPlan::for_index(index, baseline.complexity, request);
            let options = EnhanceOptions {
                tone: plan.tone,
                few_shot_count: plan.few_shot_count,
                resolve_ambiguity: plan.resolve_ambiguity,
                system_message: request.system_message.clone(),
                dataset_content: request.dataset_content.clone(),
            };

            let enhanced = self.enhancer.enhance(prompt, platform, &options);
            let analysis = self.analyzer.analyze(&enhanced);
            let improvements = explain_improvements(&baseline, &analysis, &options);
            let improvement = calculate_improvement(&baseline, &analysis);

            let created_at = Utc::now();
            let id = format!(
                "enh-{}-{}-{}",
                created_at.timestamp_millis(),
                index,
                &Uuid::new_v4().simple().to_string()[..8]
            );

            info!(
                variation = index,
                kind = plan.enhancement_type.label(),
                improvement,
                "variation produced"
            );

            results.push(EnhancedPrompt {
                id,
                original: prompt.to_string(),
                enhanced: enhanced.clone(),
                platform_id: platform.id.clone(),
                quality_score: analysis.quality_score,
                improvements,
                token_count: count_tokens(&enhanced),
                improvement,
                analysis,
                metadata: PatternMetadata {
                    enhancement_type: plan.enhancement_type,
                    tone: plan.tone,
                    few_shot_count: plan.few_shot_count,
                },
                created_at,
            });
        }

        Ok(results)
    }
}
