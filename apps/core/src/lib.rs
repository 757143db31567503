//! # PromptForge Core
//!
//! Prompt analysis and enhancement engine. Given a free-text prompt, it
//! analyzes linguistic and structural properties, scores quality, and
//! generates several enhanced rewrites tuned for a target AI platform.
//!
//! Everything in this crate is a synchronous, deterministic pure function of
//! its inputs: no I/O, no model calls, no persistence, no randomness. The
//! HTTP layer (or any other collaborator) maps these functions onto its own
//! transport.
//!
//! ## Entry points
//! - [`analyze_prompt`]: heuristic analysis of a raw prompt
//! - [`enhance_prompt`]: one rule-based rewrite for a platform
//! - [`generate_variations`]: a scheduled set of rewrites, re-analyzed and
//!   scored against the baseline
//! - [`platforms`], [`get_platform_by_id`], [`all_categories`]: the static
//!   platform catalog
//! - [`count_tokens`], [`calculate_cost`]: token and cost estimation

pub mod enhancer;
pub mod engine;
pub mod error;
pub mod improvements;
pub mod models;
pub mod platforms;
pub mod tokens;
pub mod variations;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

pub use enhancer::Enhancer;
pub use engine::{Domain, Intent, MissingComponent, PromptAnalysis, PromptAnalyzer};
pub use error::{EngineError, Result};
pub use improvements::{calculate_improvement, explain_improvements};
pub use models::{
    ApiFormat, EnhanceOptions, EnhancedPrompt, EnhancementType, PatternMetadata, Platform, Tone,
    VariationRequest,
};
pub use platforms::{all_categories, get_platform_by_id, platforms};
pub use tokens::{calculate_cost, count_tokens};
pub use variations::{VariationOrchestrator, VariationPlan};

static ANALYZER: LazyLock<PromptAnalyzer> = LazyLock::new(PromptAnalyzer::new);
static ENHANCER: LazyLock<Enhancer> = LazyLock::new(Enhancer::new);
static ORCHESTRATOR: LazyLock<VariationOrchestrator> = LazyLock::new(VariationOrchestrator::new);

/// Analyzes a raw prompt. Total over all input: empty or whitespace-only
/// prompts yield a degraded record instead of an error.
pub fn analyze_prompt(prompt: &str) -> PromptAnalysis {
    ANALYZER.analyze(prompt)
}

/// Rewrites a prompt into an enhanced version for the given platform.
/// Assumes a valid `Platform`; resolve ids with [`get_platform_by_id`] first.
pub fn enhance_prompt(prompt: &str, platform: &Platform, options: &EnhanceOptions) -> String {
    ENHANCER.enhance(prompt, platform, options)
}

/// Generates a scheduled set of enhancement variations for a platform id.
///
/// # Errors
/// `InvalidPlatform` for an unknown id, `InvalidInput` for an empty prompt,
/// `Validation` for out-of-range request options.
pub fn generate_variations(
    prompt: &str,
    platform_id: &str,
    request: &VariationRequest,
) -> Result<Vec<EnhancedPrompt>> {
    let platform = get_platform_by_id(platform_id)
        .ok_or_else(|| EngineError::InvalidPlatform(platform_id.to_string()))?;
    ORCHESTRATOR.generate(prompt, platform, request)
}
