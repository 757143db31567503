//! Pure section builders for the enhancement pipeline.
//!
//! Each builder turns the analysis, options, and platform into one optional
//! block of text. The assembler in `enhancer::mod` owns ordering and the
//! token-budget trim.

use crate::engine::analysis::PromptAnalysis;
use crate::engine::conflicts::strip_losing_directives;
use crate::engine::domain::Domain;
use crate::engine::intent::Intent;
use crate::engine::structure::MissingComponent;
use crate::models::{EnhanceOptions, Platform};
use crate::tokens::count_tokens;

use super::examples::{render_examples, select_examples};
use super::tone::apply_tone;

/// Fraction of the platform budget the dataset block may occupy.
const DATASET_BUDGET_FRACTION: u32 = 4;

/// Identity of a section, used by the budget trim to drop blocks in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    System,
    Dataset,
    Role,
    Body,
    Clarifications,
    Examples,
    Closing,
}

/// One assembled block of the enhanced prompt.
#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    pub text: String,
}

impl Section {
    fn new(kind: SectionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// System-message block: the caller's message verbatim, or the platform's
/// default template when the caller supplied none.
pub fn system_section(options: &EnhanceOptions, platform: &Platform) -> Option<Section> {
    let message = options
        .system_message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .or(platform.system_prompt_template.as_deref())?;

    Some(Section::new(SectionKind::System, message.trim()))
}

/// Keeps whole words of `text` while the running token estimate stays within
/// `budget`. Appends a trim marker when anything was dropped.
fn truncate_to_token_budget(text: &str, budget: u32) -> String {
    if count_tokens(text) <= budget {
        return text.trim().to_string();
    }

    let mut kept = String::new();
    let mut chars = 0usize;
    let mut words = 0usize;

    for word in text.split_whitespace() {
        let next_chars = chars + word.chars().count() + usize::from(words > 0);
        let next_words = words + 1;
        if crate::tokens::estimate_from_counts(next_chars, next_words) > budget {
            break;
        }
        if words > 0 {
            kept.push(' ');
        }
        kept.push_str(word);
        chars = next_chars;
        words = next_words;
    }

    if kept.is_empty() {
        return String::new();
    }
    format!("{kept} [trimmed]")
}

/// Dataset-context block, trimmed to a fraction of the platform budget.
pub fn dataset_section(options: &EnhanceOptions, platform: &Platform) -> Option<Section> {
    let content = options
        .dataset_content
        .as_deref()
        .filter(|c| !c.trim().is_empty())?;

    let budget = (platform.max_tokens / DATASET_BUDGET_FRACTION).max(1);
    let trimmed = truncate_to_token_budget(content, budget);
    if trimmed.is_empty() {
        return None;
    }

    Some(Section::new(
        SectionKind::Dataset,
        format!("Context: reference dataset\n{trimmed}"),
    ))
}

/// Role/persona directive for the analyzed intent and domain, specialized
/// with the top extracted keywords.
pub fn role_section(analysis: &PromptAnalysis) -> Section {
    let persona = match analysis.intent {
        Intent::Code => "You are a senior software engineer who ships clean, working code.",
        Intent::Analysis => "You are a rigorous analyst who reasons from evidence.",
        Intent::Creative => "You are a seasoned storyteller with a vivid voice.",
        Intent::DataProcessing => "You are a data specialist who handles messy inputs with care.",
        Intent::Instruction => "You are a dependable assistant who follows directions closely.",
        Intent::Conversation => "You are an attentive conversation partner.",
        Intent::Unknown => "You are a capable assistant.",
    };

    let coloring = match analysis.domain {
        Domain::Technical => " You know production systems inside out.",
        Domain::Business => " You understand how companies operate and what stakeholders need.",
        Domain::Academic => " You are at home with scholarly writing and citation practice.",
        Domain::Creative => " You have an instinct for narrative and rhythm.",
        Domain::General => "",
    };

    let focus = match analysis.keywords.as_slice() {
        [] => String::new(),
        [first] => format!(" Pay particular attention to {}.", first.keyword),
        [first, second, ..] => format!(
            " Pay particular attention to {} and {}.",
            first.keyword, second.keyword
        ),
    };

    Section::new(SectionKind::Role, format!("{persona}{coloring}{focus}"))
}

/// The original request: conflicting directives resolved, rewritten for the
/// requested tone, and wrapped in the platform's user template when present.
pub fn body_section(prompt: &str, options: &EnhanceOptions, platform: &Platform) -> Section {
    let consistent = strip_losing_directives(prompt, options.tone);
    let rewritten = apply_tone(&consistent, options.tone);

    let text = match platform.user_prompt_template.as_deref() {
        Some(template) => template.replace("{prompt}", &rewritten),
        None => rewritten,
    };

    Section::new(SectionKind::Body, text)
}

/// Clarifying constraints for exactly the gaps found in the original prompt.
pub fn clarification_section(
    original: &PromptAnalysis,
    options: &EnhanceOptions,
) -> Option<Section> {
    if !options.resolve_ambiguity {
        return None;
    }

    let mut lines = Vec::new();

    if !original.conflicts.is_empty() {
        lines.push(
            "- Where the draft gave contradictory directions, follow the single register used \
             here and disregard the rest."
                .to_string(),
        );
    }
    if original.is_missing(MissingComponent::Context) {
        lines.push(
            "- Context: treat this as part of a real project and state any assumptions you rely on."
                .to_string(),
        );
    }
    if original.is_missing(MissingComponent::Format) {
        lines.push(
            "- Present the result in a clear format: use headed sections or a numbered list."
                .to_string(),
        );
    }
    if original.is_missing(MissingComponent::Constraints) {
        lines.push("- Stay within the scope stated above and do not invent facts.".to_string());
    }
    if original.is_missing(MissingComponent::Examples) && options.few_shot_count == 0 {
        lines.push("- If it helps, include one worked example in your answer.".to_string());
    }

    if lines.is_empty() {
        return None;
    }

    Some(Section::new(
        SectionKind::Clarifications,
        format!("Clarifications:\n{}", lines.join("\n")),
    ))
}

/// Few-shot examples rendered in the platform's wire format.
pub fn examples_section(
    analysis: &PromptAnalysis,
    options: &EnhanceOptions,
    platform: &Platform,
) -> Option<Section> {
    let count = options.few_shot_count.min(5) as usize;
    if count == 0 {
        return None;
    }

    let pairs = select_examples(analysis.intent, analysis.domain, count);
    let rendered = render_examples(&pairs, platform.api_format);

    Some(Section::new(
        SectionKind::Examples,
        format!("Examples:\n{rendered}"),
    ))
}

/// Closing directives from the platform's special requirements.
pub fn closing_section(platform: &Platform) -> Option<Section> {
    if platform.special_requirements.is_empty() {
        return None;
    }

    let lines: Vec<String> = platform
        .special_requirements
        .iter()
        .map(|req| format!("- {req}"))
        .collect();

    Some(Section::new(SectionKind::Closing, lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyzer::PromptAnalyzer;
    use crate::platforms::get_platform_by_id;

    fn analysis_of(prompt: &str) -> PromptAnalysis {
        PromptAnalyzer::new().analyze(prompt)
    }

    #[test]
    fn test_system_section_prefers_caller_message() {
        let claude = get_platform_by_id("claude").unwrap();

        let options = EnhanceOptions {
            system_message: Some("Follow the house style guide.".to_string()),
            ..EnhanceOptions::default()
        };
        let section = system_section(&options, claude).unwrap();
        assert_eq!(section.text, "Follow the house style guide.");

        // Falls back to the platform template.
        let section = system_section(&EnhanceOptions::default(), claude).unwrap();
        assert!(section.text.contains("careful assistant"));

        // No message and no template yields no section.
        let gemini = get_platform_by_id("gemini").unwrap();
        assert!(system_section(&EnhanceOptions::default(), gemini).is_none());
    }

    #[test]
    fn test_dataset_section_respects_budget() {
        let midjourney = get_platform_by_id("midjourney").unwrap();
        let options = EnhanceOptions {
            dataset_content: Some("row ".repeat(4000)),
            ..EnhanceOptions::default()
        };

        let section = dataset_section(&options, midjourney).unwrap();
        let budget = midjourney.max_tokens / 4;
        assert!(count_tokens(&section.text) <= budget + 16);
        assert!(section.text.contains("[trimmed]"));
    }

    #[test]
    fn test_role_section_matches_intent() {
        let section = role_section(&analysis_of("write code"));
        assert!(section.text.contains("software engineer"));
        assert!(section.text.starts_with("You are"));

        let section = role_section(&analysis_of("Write a short story about a fox"));
        assert!(section.text.contains("storyteller"));
    }

    #[test]
    fn test_body_section_wraps_template() {
        let claude = get_platform_by_id("claude").unwrap();
        let section = body_section("summarize the minutes", &EnhanceOptions::default(), claude);
        assert!(section.text.starts_with("<task>"));
        assert!(section.text.ends_with("</task>"));
    }

    #[test]
    fn test_clarifications_fill_only_gaps() {
        let analysis = analysis_of("write code");
        let options = EnhanceOptions {
            resolve_ambiguity: true,
            ..EnhanceOptions::default()
        };

        let section = clarification_section(&analysis, &options).unwrap();
        assert!(section.text.contains("Context:"));
        assert!(section.text.contains("format"));

        // Without the flag, no clarifications are emitted.
        assert!(clarification_section(&analysis, &EnhanceOptions::default()).is_none());
    }

    #[test]
    fn test_examples_section_count() {
        let llama = get_platform_by_id("llama").unwrap();
        let options = EnhanceOptions {
            few_shot_count: 2,
            ..EnhanceOptions::default()
        };

        let section = examples_section(&analysis_of("write code"), &options, llama).unwrap();
        assert!(section.text.contains("Example 1:"));
        assert!(section.text.contains("Example 2:"));

        let none = examples_section(&analysis_of("write code"), &EnhanceOptions::default(), llama);
        assert!(none.is_none());
    }

    #[test]
    fn test_closing_section() {
        let copilot = get_platform_by_id("copilot").unwrap();
        let section = closing_section(copilot).unwrap();
        assert!(section.text.contains("code blocks"));

        let gemini = get_platform_by_id("gemini").unwrap();
        assert!(closing_section(gemini).is_none());
    }
}
