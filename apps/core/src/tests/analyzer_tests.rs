//! Analyzer Tests
//!
//! Cross-cutting tests for the analysis pipeline: classification, scoring
//! bounds, idempotence, and monotonicity of component detection.

use crate::engine::{Domain, Intent, MissingComponent, PromptAnalyzer};
use crate::{analyze_prompt, count_tokens};

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_intent_across_categories() {
        let cases = vec![
            ("Refactor this Python function to avoid the nested loop", Intent::Code),
            ("Write a poem about the sea in three stanzas", Intent::Creative),
            ("Compare the pros and cons of these two vendors", Intent::Analysis),
            ("Parse the CSV and deduplicate rows by email", Intent::DataProcessing),
            ("Make a packing checklist for a camping weekend", Intent::Instruction),
            ("Hey, what do you think about this idea?", Intent::Conversation),
        ];

        for (prompt, expected) in cases {
            let analysis = analyze_prompt(prompt);
            assert_eq!(
                analysis.intent, expected,
                "Expected {:?} for '{}'",
                expected, prompt
            );
        }
    }

    #[test]
    fn test_domain_across_registers() {
        let cases = vec![
            ("Tune the database index for the slow query", Domain::Technical),
            ("Prepare the quarterly revenue forecast for the client", Domain::Business),
            ("Structure the literature review for my dissertation", Domain::Academic),
            ("Develop the plot and protagonist of my novel", Domain::Creative),
            ("What should we cook tonight", Domain::General),
        ];

        for (prompt, expected) in cases {
            let analysis = analyze_prompt(prompt);
            assert_eq!(
                analysis.domain, expected,
                "Expected {:?} for '{}'",
                expected, prompt
            );
        }
    }
}

#[cfg(test)]
mod scoring_tests {
    use super::*;

    #[test]
    fn test_bounds_hold_over_varied_input() {
        let prompts = [
            "",
            "hi",
            "write code",
            "Explain the difference between TCP and UDP for an interview, \
             and include one example of when each fits, then close with a summary table.",
            "be concise but extremely detailed and formal yet casual",
        ];

        for prompt in prompts {
            let analysis = analyze_prompt(prompt);
            assert!(
                (1..=10).contains(&analysis.complexity),
                "complexity out of range for '{prompt}'"
            );
            assert!(
                analysis.quality_score <= 100,
                "quality out of range for '{prompt}'"
            );
        }
    }

    #[test]
    fn test_token_count_positive_for_non_empty() {
        for prompt in ["a", "write code", "Summarize the notes below."] {
            assert!(count_tokens(prompt) > 0);
            assert!(analyze_prompt(prompt).token_count > 0);
        }
        assert_eq!(analyze_prompt("").token_count, 0);
    }

    #[test]
    fn test_idempotent_analysis() {
        let analyzer = PromptAnalyzer::new();
        let prompt = "Draft an onboarding guide for new support agents, in markdown";

        let first = analyzer.analyze(prompt);
        let second = analyzer.analyze(prompt);

        assert_eq!(first.intent, second.intent);
        assert_eq!(first.domain, second.domain);
        assert_eq!(first.complexity, second.complexity);
        assert_eq!(first.quality_score, second.quality_score);
        assert_eq!(first.token_count, second.token_count);
        assert_eq!(first.missing_components, second.missing_components);
        assert_eq!(first.conflicts, second.conflicts);
        assert_eq!(first.pain_point, second.pain_point);
    }
}

#[cfg(test)]
mod component_tests {
    use super::*;

    #[test]
    fn test_supplying_format_removes_the_gap() {
        let before = analyze_prompt("Summarize the incident timeline");
        assert!(before.is_missing(MissingComponent::Format));

        let after = analyze_prompt(
            "Summarize the incident timeline. Respond in JSON format with one entry per event.",
        );
        assert!(!after.is_missing(MissingComponent::Format));

        // The addition supplies a component without introducing new gaps.
        for component in &after.missing_components {
            assert!(
                before.missing_components.contains(component),
                "new gap {component} appeared"
            );
        }
    }

    #[test]
    fn test_bare_prompt_reports_critical_gaps() {
        let analysis = analyze_prompt("write code");
        assert!(analysis.is_missing(MissingComponent::Context));
        assert!(analysis.is_missing(MissingComponent::Constraints));
        assert!(analysis.pain_point.contains("context"));
    }

    #[test]
    fn test_conflict_detection_end_to_end() {
        let analysis =
            analyze_prompt("Describe the rollout plan. Be very formal and keep it super casual.");
        assert!(!analysis.conflicts.is_empty());
        assert!(analysis.has_conflict_on("tone"));
        assert!(analysis.pain_point.starts_with("Contradictory"));

        let clean = analyze_prompt("Describe the rollout plan in a formal register.");
        assert!(clean.conflicts.is_empty());
    }
}
