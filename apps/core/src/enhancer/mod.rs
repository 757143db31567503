//! # Enhancer Module
//!
//! Deterministic, rule-based prompt rewriting. The enhanced prompt is an
//! assembly of ordered sections, each produced by a pure builder, composed
//! here with a final token-budget trim.
//!
//! ## Components
//! - `sections`: pure section builders (system, dataset, role, body, ...)
//! - `tone`: tone transformation rules
//! - `examples`: few-shot example bank and per-format rendering

pub mod examples;
pub mod sections;
pub mod tone;

use tracing::debug;

use crate::engine::analyzer::PromptAnalyzer;
use crate::models::{EnhanceOptions, Platform};
use crate::tokens::count_tokens;

use sections::{
    body_section, clarification_section, closing_section, dataset_section, examples_section,
    role_section, system_section, Section, SectionKind,
};

/// Sections removed first when the assembly exceeds the platform budget,
/// least critical first.
const DROP_ORDER: &[SectionKind] = &[
    SectionKind::Examples,
    SectionKind::Dataset,
    SectionKind::Clarifications,
];

/// Rule-based prompt enhancer.
///
/// Assumes a valid `Platform`; unknown platform ids are rejected upstream.
pub struct Enhancer {
    analyzer: PromptAnalyzer,
}

impl Default for Enhancer {
    fn default() -> Self {
        Self::new()
    }
}

fn assemble(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| s.text.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Keeps whole words while the running token estimate stays within `budget`.
/// Always keeps at least the first word so the result stays non-empty.
fn hard_truncate(text: &str, budget: u32) -> String {
    let mut kept = String::new();
    let mut chars = 0usize;
    let mut words = 0usize;

    for word in text.split_whitespace() {
        let next_chars = chars + word.chars().count() + usize::from(words > 0);
        let next_words = words + 1;
        if crate::tokens::estimate_from_counts(next_chars, next_words) > budget && words > 0 {
            break;
        }
        if words > 0 {
            kept.push(' ');
        }
        kept.push_str(word);
        chars = next_chars;
        words = next_words;
    }

    kept
}

impl Enhancer {
    /// Create a new enhancer.
    pub fn new() -> Self {
        Self {
            analyzer: PromptAnalyzer::new(),
        }
    }

    /// Rewrites `prompt` into an enhanced version for the given platform.
    ///
    /// The output is deterministic for identical inputs and never empty when
    /// the prompt is non-empty.
    pub fn enhance(&self, prompt: &str, platform: &Platform, options: &EnhanceOptions) -> String {
        let analysis = self.analyzer.analyze(prompt);

        let mut sections: Vec<Section> = Vec::with_capacity(7);
        if let Some(section) = system_section(options, platform) {
            sections.push(section);
        }
        if let Some(section) = dataset_section(options, platform) {
            sections.push(section);
        }
        sections.push(role_section(&analysis));
        sections.push(body_section(prompt, options, platform));
        if let Some(section) = clarification_section(&analysis, options) {
            sections.push(section);
        }
        if let Some(section) = examples_section(&analysis, options, platform) {
            sections.push(section);
        }
        if let Some(section) = closing_section(platform) {
            sections.push(section);
        }

        let mut assembled = assemble(&sections);

        // Trim least-critical sections until the estimate fits the budget.
        for kind in DROP_ORDER {
            if count_tokens(&assembled) <= platform.max_tokens {
                break;
            }
            if let Some(position) = sections.iter().position(|s| s.kind == *kind) {
                debug!("dropping {:?} section to fit {} budget", kind, platform.id);
                sections.remove(position);
                assembled = assemble(&sections);
            }
        }

        // Last resort: cut the assembly itself at a word boundary.
        if count_tokens(&assembled) > platform.max_tokens {
            debug!("hard-truncating enhanced prompt to fit {} budget", platform.id);
            assembled = hard_truncate(&assembled, platform.max_tokens);
        }

        assembled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::get_platform_by_id;

    #[test]
    fn test_enhanced_is_never_empty() {
        let enhancer = Enhancer::new();
        let llama = get_platform_by_id("llama").unwrap();

        let out = enhancer.enhance("write code", llama, &EnhanceOptions::default());
        assert!(!out.is_empty());
        assert!(out.contains("You are"));
    }

    #[test]
    fn test_section_order() {
        let enhancer = Enhancer::new();
        let claude = get_platform_by_id("claude").unwrap();

        let options = EnhanceOptions {
            system_message: Some("House rules apply.".to_string()),
            resolve_ambiguity: true,
            few_shot_count: 1,
            ..EnhanceOptions::default()
        };
        let out = enhancer.enhance("write code", claude, &options);

        let system_at = out.find("House rules apply.").expect("system block");
        let role_at = out.find("You are").expect("role block");
        let body_at = out.find("<task>").expect("body block");
        let clarify_at = out.find("Clarifications:").expect("clarification block");
        let examples_at = out.find("Examples:").expect("examples block");

        assert!(system_at < role_at);
        assert!(role_at < body_at);
        assert!(body_at < clarify_at);
        assert!(clarify_at < examples_at);
    }

    #[test]
    fn test_budget_enforced_by_dropping_sections() {
        let enhancer = Enhancer::new();
        let midjourney = get_platform_by_id("midjourney").unwrap();

        let options = EnhanceOptions {
            few_shot_count: 5,
            resolve_ambiguity: true,
            dataset_content: Some("pixel ".repeat(2000)),
            ..EnhanceOptions::default()
        };
        let out = enhancer.enhance(
            "Paint a quiet harbor village at dawn with fishing boats",
            midjourney,
            &options,
        );

        assert!(count_tokens(&out) <= midjourney.max_tokens);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_deterministic_output() {
        let enhancer = Enhancer::new();
        let gpt = get_platform_by_id("gpt-4o").unwrap();
        let options = EnhanceOptions {
            few_shot_count: 2,
            resolve_ambiguity: true,
            ..EnhanceOptions::default()
        };

        let a = enhancer.enhance("Summarize our churn numbers", gpt, &options);
        let b = enhancer.enhance("Summarize our churn numbers", gpt, &options);
        assert_eq!(a, b);
    }

    #[test]
    fn test_closing_directives_present() {
        let enhancer = Enhancer::new();
        let copilot = get_platform_by_id("copilot").unwrap();

        let out = enhancer.enhance("write code", copilot, &EnhanceOptions::default());
        assert!(out.contains("- Keep code blocks self-contained and compilable."));
    }
}
