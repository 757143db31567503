//! Quality scoring and pain-point selection.
//!
//! The score is a weighted combination of structural penalties and
//! intent-fit bonuses, clamped to [0, 100]. The constants are tuning, not
//! contract; tests elsewhere assert ranges and monotonicity only.

use super::conflicts::Conflict;
use super::intent::Intent;
use super::structure::MissingComponent;

const BASE_SCORE: f32 = 60.0;
const MISSING_PENALTY: f32 = 9.0;
const CONFLICT_PENALTY: f32 = 15.0;
const KNOWN_INTENT_BONUS: f32 = 10.0;
const IN_BAND_BONUS: f32 = 15.0;
const OUT_OF_BAND_BONUS: f32 = 5.0;
const LENGTH_BONUS_CAP: f32 = 5.0;

/// Computes the 0-100 quality score for an analyzed prompt.
pub fn quality_score(
    intent: Intent,
    complexity: u8,
    missing: &[MissingComponent],
    conflicts: &[Conflict],
    word_count: usize,
) -> u8 {
    let mut score = BASE_SCORE;

    score -= missing.len() as f32 * MISSING_PENALTY;
    score -= conflicts.len() as f32 * CONFLICT_PENALTY;

    if intent != Intent::Unknown {
        score += KNOWN_INTENT_BONUS;
        score += match intent.ideal_complexity() {
            Some((low, high)) if (low..=high).contains(&complexity) => IN_BAND_BONUS,
            _ => OUT_OF_BAND_BONUS,
        };
    }

    score += (word_count as f32 / 20.0).min(LENGTH_BONUS_CAP);

    score.clamp(0.0, 100.0).round() as u8
}

/// Selects the single dominant issue to surface as the pain point.
///
/// Priority: conflicts, then missing critical components, then missing
/// optional components, then thinness, then a well-formed summary.
pub fn pain_point(missing: &[MissingComponent], conflicts: &[Conflict], complexity: u8) -> String {
    if let Some(conflict) = conflicts.first() {
        return format!("Contradictory instructions: {}.", conflict.description);
    }

    if let Some(critical) = missing.iter().find(|c| c.is_critical()) {
        return match critical {
            MissingComponent::Context => {
                "No background context; the model has to guess the situation.".to_string()
            }
            _ => "No output format specified; response structure is left to chance.".to_string(),
        };
    }

    if let Some(optional) = missing.first() {
        return match optional {
            MissingComponent::Role => {
                "No role or persona given; answers will default to a generic voice.".to_string()
            }
            MissingComponent::Constraints => {
                "No constraints stated; scope and length are unbounded.".to_string()
            }
            _ => "No examples provided; expected output shape is implicit.".to_string(),
        };
    }

    if complexity <= 2 {
        return "Very thin prompt; add specifics to steer the model.".to_string();
    }

    "Well-formed prompt; only minor gaps.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::conflicts::detect_conflicts;
    use crate::engine::structure::detect_missing;

    #[test]
    fn test_score_bounds() {
        let missing = detect_missing("write code");
        let score = quality_score(Intent::Code, 1, &missing, &[], 2);
        assert!(score <= 100);

        // Everything wrong at once still clamps at zero.
        let conflicts = detect_conflicts("be concise but extremely detailed and formal yet casual");
        let score = quality_score(Intent::Unknown, 1, &missing, &conflicts, 0);
        assert!(score <= 100);
    }

    #[test]
    fn test_fewer_gaps_scores_higher() {
        let bare = detect_missing("write code");
        let fuller = detect_missing(
            "You are a backend engineer. Given that we run Rust services, \
             write code for request logging. Respond in markdown. It must compile.",
        );
        assert!(fuller.len() < bare.len());

        let low = quality_score(Intent::Code, 3, &bare, &[], 2);
        let high = quality_score(Intent::Code, 3, &fuller, &[], 24);
        assert!(high > low);
    }

    #[test]
    fn test_conflicts_depress_score() {
        let clean = quality_score(Intent::Analysis, 5, &[], &[], 30);
        let conflicts = detect_conflicts("be concise and also exhaustive");
        let conflicted = quality_score(Intent::Analysis, 5, &[], &conflicts, 30);
        assert!(conflicted < clean);
    }

    #[test]
    fn test_pain_point_priority() {
        let conflicts = detect_conflicts("be formal but casual");
        let missing = detect_missing("write code");

        // Conflicts outrank everything.
        let point = pain_point(&missing, &conflicts, 1);
        assert!(point.starts_with("Contradictory"));

        // Critical components outrank optional ones.
        let point = pain_point(&missing, &[], 1);
        assert!(point.contains("context"));

        // Clean prompts report as well-formed.
        let point = pain_point(&[], &[], 6);
        assert!(point.contains("Well-formed"));
    }
}
