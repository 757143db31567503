//! Improvement explanation and scoring.
//!
//! Diffs the original and enhanced analyses to produce plain-language
//! improvement notes. Every statement is backed by the diff or by a section
//! the enhancer verifiably added; nothing is fabricated.

use crate::engine::analysis::PromptAnalysis;
use crate::engine::structure::MissingComponent;
use crate::models::EnhanceOptions;

/// Note templates per supplied component.
fn component_note(component: MissingComponent) -> &'static str {
    match component {
        MissingComponent::Role => "Added a role directive establishing a task-appropriate persona",
        MissingComponent::Context => "Added background context the original prompt lacked",
        MissingComponent::Format => "Added an explicit output format instruction",
        MissingComponent::Constraints => "Added explicit constraints to bound the response",
        MissingComponent::Examples => "Added a worked example to anchor the expected output",
    }
}

/// Compares the original and enhanced analyses and lists the improvements
/// actually present in the diff, in a fixed order.
pub fn explain_improvements(
    original: &PromptAnalysis,
    enhanced: &PromptAnalysis,
    options: &EnhanceOptions,
) -> Vec<String> {
    let mut notes = Vec::new();

    // Components the enhancement supplied.
    for component in &original.missing_components {
        let resolved = !enhanced.missing_components.contains(component);
        if !resolved {
            continue;
        }
        // The few-shot block gets its own richer note below.
        if *component == MissingComponent::Examples && options.few_shot_count > 0 {
            continue;
        }
        notes.push(component_note(*component).to_string());
    }

    // Conflicts the rewrite resolved.
    for conflict in &original.conflicts {
        if !enhanced.has_conflict_on(&conflict.topic) {
            notes.push(format!("Resolved conflicting {} directives", conflict.topic));
        }
    }

    // Structural additions actually made.
    if options
        .system_message
        .as_deref()
        .is_some_and(|m| !m.trim().is_empty())
    {
        notes.push("Included the caller's system-level instructions".to_string());
    }
    if options
        .dataset_content
        .as_deref()
        .is_some_and(|d| !d.trim().is_empty())
    {
        notes.push("Grounded the request with the supplied dataset context".to_string());
    }
    if options.few_shot_count > 0 && !enhanced.missing_components.contains(&MissingComponent::Examples)
    {
        notes.push(format!(
            "Added {} worked example{} in the platform's wire format",
            options.few_shot_count,
            if options.few_shot_count == 1 { "" } else { "s" }
        ));
    }

    notes
}

/// Signed quality delta between the enhanced and original analyses.
/// Negative when the rewrite scored below the original; never clamped.
pub fn calculate_improvement(original: &PromptAnalysis, enhanced: &PromptAnalysis) -> f32 {
    f32::from(enhanced.quality_score) - f32::from(original.quality_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyzer::PromptAnalyzer;
    use crate::enhancer::Enhancer;
    use crate::models::Tone;
    use crate::platforms::get_platform_by_id;

    fn enhanced_pair(prompt: &str, options: &EnhanceOptions) -> (PromptAnalysis, PromptAnalysis) {
        let analyzer = PromptAnalyzer::new();
        let enhancer = Enhancer::new();
        let platform = get_platform_by_id("gpt-4o").unwrap();

        let original = analyzer.analyze(prompt);
        let enhanced_text = enhancer.enhance(prompt, platform, options);
        let enhanced = analyzer.analyze(&enhanced_text);
        (original, enhanced)
    }

    #[test]
    fn test_reports_supplied_components() {
        let options = EnhanceOptions {
            resolve_ambiguity: true,
            ..EnhanceOptions::default()
        };
        let (original, enhanced) = enhanced_pair("write code", &options);
        let notes = explain_improvements(&original, &enhanced, &options);

        assert!(notes.iter().any(|n| n.contains("role directive")));
        assert!(notes.iter().any(|n| n.contains("output format")));
    }

    #[test]
    fn test_reports_resolved_tone_conflict() {
        let options = EnhanceOptions {
            tone: Tone::Professional,
            resolve_ambiguity: true,
            ..EnhanceOptions::default()
        };
        let (original, enhanced) = enhanced_pair(
            "Describe our product launch. Be very formal and keep it super casual.",
            &options,
        );

        assert!(!original.conflicts.is_empty());
        let notes = explain_improvements(&original, &enhanced, &options);
        assert!(notes.iter().any(|n| n.contains("Resolved conflicting tone directives")));
    }

    #[test]
    fn test_no_fabricated_notes() {
        // A prompt that already carries every component leaves little to claim.
        let prompt = "You are a release manager. Given that we ship weekly and our team \
                      owns the deploy pipeline, write the release notes in markdown format. \
                      They must stay under one page. For instance, group changes by area.";
        let options = EnhanceOptions::default();
        let (original, enhanced) = enhanced_pair(prompt, &options);
        let notes = explain_improvements(&original, &enhanced, &options);

        assert!(notes.iter().all(|n| !n.contains("system-level")));
        assert!(notes.iter().all(|n| !n.contains("dataset")));
        assert!(notes.iter().all(|n| !n.contains("worked example")));
    }

    #[test]
    fn test_structural_additions_reported() {
        let options = EnhanceOptions {
            system_message: Some("Use the public changelog voice.".to_string()),
            dataset_content: Some("v1.4 fixed the importer".to_string()),
            few_shot_count: 2,
            ..EnhanceOptions::default()
        };
        let (original, enhanced) = enhanced_pair("write code", &options);
        let notes = explain_improvements(&original, &enhanced, &options);

        assert!(notes.iter().any(|n| n.contains("system-level")));
        assert!(notes.iter().any(|n| n.contains("dataset context")));
        assert!(notes.iter().any(|n| n.contains("2 worked examples")));
    }

    #[test]
    fn test_improvement_delta_is_signed() {
        let analyzer = PromptAnalyzer::new();
        let good = analyzer.analyze(
            "You are an editor. Given the context above, rewrite this paragraph in \
             markdown format. It must keep the original meaning. For example, keep names intact.",
        );
        let bad = analyzer.analyze("write code");

        assert!(calculate_improvement(&bad, &good) > 0.0);
        assert!(calculate_improvement(&good, &bad) < 0.0);
    }
}
