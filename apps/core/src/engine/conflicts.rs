//! Detection of mutually exclusive directives.
//!
//! A table of antagonistic phrase pairs; a conflict is reported when both
//! sides of a pair match the same prompt. The enhancer uses the same table
//! to drop the losing side when it rewrites the body.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::models::Tone;

/// One detected pair of contradictory directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Aspect the directives disagree on ("tone", "length", ...).
    pub topic: String,
    /// The first directive as matched in the text.
    pub first: String,
    /// The second directive as matched in the text.
    pub second: String,
    /// Human-readable description of the contradiction.
    pub description: String,
}

struct ConflictRule {
    topic: &'static str,
    first: Regex,
    second: Regex,
}

static CONFLICT_RULES: LazyLock<Vec<ConflictRule>> = LazyLock::new(|| {
    vec![
        ConflictRule {
            topic: "length",
            first: Regex::new(r"(?i)\b(concise|brief|short|succinct|terse|keep it short)\b")
                .expect("Invalid regex: brevity directives"),
            second: Regex::new(
                r"(?i)\b(detailed|comprehensive|thorough|in-?depth|extensive|exhaustive)\b",
            )
            .expect("Invalid regex: length directives"),
        },
        ConflictRule {
            topic: "tone",
            first: Regex::new(r"(?i)\b(formal|professional tone|businesslike)\b")
                .expect("Invalid regex: formal directives"),
            second: Regex::new(r"(?i)\b(casual|informal|laid-?back|conversational|slangy?)\b")
                .expect("Invalid regex: casual directives"),
        },
        ConflictRule {
            topic: "register",
            first: Regex::new(r"(?i)\b(simple|plain language|layman|beginner-?friendly|eli5)\b")
                .expect("Invalid regex: plain-register directives"),
            second: Regex::new(r"(?i)\b(technical|expert-?level|advanced|jargon-?heavy)\b")
                .expect("Invalid regex: expert-register directives"),
        },
        ConflictRule {
            topic: "style",
            first: Regex::new(r"(?i)\b(creative|imaginative|playful|whimsical)\b")
                .expect("Invalid regex: creative directives"),
            second: Regex::new(r"(?i)\b(factual|literal|strictly accurate|no embellishment)\b")
                .expect("Invalid regex: factual directives"),
        },
    ]
});

/// Returns every antagonistic directive pair found in the text.
pub fn detect_conflicts(text: &str) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for rule in CONFLICT_RULES.iter() {
        let first = rule.first.find(text);
        let second = rule.second.find(text);

        if let (Some(a), Some(b)) = (first, second) {
            conflicts.push(Conflict {
                topic: rule.topic.to_string(),
                first: a.as_str().to_string(),
                second: b.as_str().to_string(),
                description: format!(
                    "conflicting {} directives: \"{}\" vs \"{}\"",
                    rule.topic,
                    a.as_str(),
                    b.as_str()
                ),
            });
        }
    }

    conflicts
}

/// Removes the losing side of each conflicting pair so the rewritten body
/// carries one consistent directive per aspect.
///
/// The side aligned with the requested tone survives: relaxed tones keep the
/// casual/short side, all others keep the first-listed side.
pub fn strip_losing_directives(text: &str, tone: Tone) -> String {
    let mut result = text.to_string();

    for rule in CONFLICT_RULES.iter() {
        if !(rule.first.is_match(&result) && rule.second.is_match(&result)) {
            continue;
        }

        let relaxed = matches!(tone, Tone::Casual | Tone::Sarcastic);
        let loser = if rule.topic == "tone" && relaxed {
            &rule.first
        } else {
            &rule.second
        };

        result = loser.replace_all(&result, "").into_owned();
    }

    // Collapse whitespace artifacts from removed phrases.
    let collapsed = result.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .replace(" ,", ",")
        .replace(" .", ".")
        .replace("  ", " ")
}
