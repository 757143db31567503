//! Intent classification using regex patterns.
//!
//! Fast pattern-based detection of the task category a prompt requests.
//! No ML model - pure regex matching over ordered, weighted pattern groups.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Task category a prompt appears to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Creative writing (story, poem, article, etc.)
    Creative,
    /// Code generation or modification
    Code,
    /// Analysis, comparison, evaluation, summarization
    Analysis,
    /// Chit-chat or open-ended conversation
    Conversation,
    /// Data transformation (parse, convert, clean, aggregate)
    DataProcessing,
    /// Imperative instruction with no more specific category
    Instruction,
    /// No category cleared the threshold
    Unknown,
}

impl Intent {
    /// Returns a human-readable label for the intent.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Creative => "creative",
            Intent::Code => "code",
            Intent::Analysis => "analysis",
            Intent::Conversation => "conversation",
            Intent::DataProcessing => "data_processing",
            Intent::Instruction => "instruction",
            Intent::Unknown => "unknown",
        }
    }

    /// Complexity band (inclusive) in which prompts of this intent tend to be
    /// well-specified. Used by the quality scorer.
    pub fn ideal_complexity(&self) -> Option<(u8, u8)> {
        match self {
            Intent::Code => Some((4, 8)),
            Intent::Analysis => Some((4, 8)),
            Intent::Creative => Some((3, 7)),
            Intent::DataProcessing => Some((3, 7)),
            Intent::Instruction => Some((2, 6)),
            Intent::Conversation => Some((1, 4)),
            Intent::Unknown => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of intent classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent.
    pub intent: Intent,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Text fragments that matched.
    pub matched_patterns: Vec<String>,
}

impl IntentResult {
    /// Result for empty or unclassifiable input.
    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            confidence: 0.0,
            matched_patterns: vec![],
        }
    }
}

/// Pattern definition for intent matching.
struct IntentPattern {
    intent: Intent,
    patterns: &'static [Regex],
    weight: f32,
}

// Compile patterns once at startup.
static CODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(code|coding|program|script|debug|refactor|compile|implement)\b")
            .expect("Invalid regex: code verbs"),
        Regex::new(r"(?i)\b(function|class|method|variable|algorithm|api|endpoint|unit test)\b")
            .expect("Invalid regex: code constructs"),
        Regex::new(r"(?i)\b(rust|python|javascript|typescript|java|c\+\+|golang|sql|html|css)\b")
            .expect("Invalid regex: languages"),
        Regex::new(r"(?i)\b(library|framework|module|crate|package|repository|bug|stack trace)\b")
            .expect("Invalid regex: code artifacts"),
        Regex::new(r"```").expect("Invalid regex: code block marker"),
    ]
});

static DATA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(csv|json file|spreadsheet|dataset|rows|columns|cells)\b")
            .expect("Invalid regex: data artifacts"),
        Regex::new(r"(?i)\b(parse|extract|transform|convert|normalize|deduplicate|aggregate)\b")
            .expect("Invalid regex: data verbs"),
        Regex::new(r"(?i)\b(filter|sort|group by|merge|join|pivot|reformat)\b")
            .expect("Invalid regex: data operations"),
        Regex::new(r"(?i)\b(records|entries|fields|values|tabular)\b")
            .expect("Invalid regex: data nouns"),
    ]
});

static ANALYSIS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(analy[sz]e|compare|evaluate|assess|review|examine|investigate)\b")
            .expect("Invalid regex: analysis verbs"),
        Regex::new(r"(?i)\b(summar[iy][sz]e|synthesi[sz]e|recap|overview|breakdown)\b")
            .expect("Invalid regex: summary verbs"),
        Regex::new(r"(?i)\b(pros and cons|trade-?offs?|difference between|advantages|disadvantages)\b")
            .expect("Invalid regex: comparison nouns"),
        Regex::new(r"(?i)\b(explain|why does|what causes|how does|interpret)\b")
            .expect("Invalid regex: explanation verbs"),
    ]
});

static CREATIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"(?i)^(write|compose|draft|imagine|invent)\b.*\b(story|poem|essay|article|blog|song|novel|tagline|slogan|headline|scene)\b",
        )
        .expect("Invalid regex: creative openers"),
        Regex::new(r"(?i)\b(story|poem|poetry|fiction|narrative|lyrics|haiku|tale|screenplay)\b")
            .expect("Invalid regex: creative nouns"),
        Regex::new(r"(?i)\b(character|plot|setting|dialogue|worldbuilding)\b")
            .expect("Invalid regex: fiction elements"),
        Regex::new(r"(?i)\b(brainstorm|catchy|whimsical|evocative)\b")
            .expect("Invalid regex: creative qualities"),
    ]
});

static INSTRUCTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)^(do|make|create|generate|build|produce|prepare|list|give|provide|show)\b")
            .expect("Invalid regex: imperative openers"),
        Regex::new(r"(?i)^(translate|rewrite|rephrase|fix|update|change|modify|draft)\b")
            .expect("Invalid regex: transformation openers"),
        Regex::new(r"(?i)\b(step[- ]by[- ]step|instructions|guide|checklist|template)\b")
            .expect("Invalid regex: procedure nouns"),
        Regex::new(r"(?i)\b(please|kindly)\b").expect("Invalid regex: courtesy markers"),
    ]
});

static CONVERSATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)^(hello|hi|hey|thanks|thank you|good morning|good evening)\b")
            .expect("Invalid regex: greetings"),
        Regex::new(r"(?i)\b(how are you|what do you think|your opinion|tell me about yourself)\b")
            .expect("Invalid regex: conversational phrases"),
        Regex::new(r"(?i)\b(chat|talk|conversation|chitchat)\b")
            .expect("Invalid regex: conversation nouns"),
    ]
});

/// A classification only counts when its score clears this floor.
const MIN_SCORE: f32 = 0.05;

/// Intent classifier using weighted regex pattern groups.
pub struct IntentClassifier {
    patterns: Vec<IntentPattern>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with all pattern groups, in priority order.
    pub fn new() -> Self {
        let patterns = vec![
            IntentPattern {
                intent: Intent::Code,
                patterns: &CODE_PATTERNS,
                weight: 0.9,
            },
            IntentPattern {
                intent: Intent::DataProcessing,
                patterns: &DATA_PATTERNS,
                weight: 0.85,
            },
            IntentPattern {
                intent: Intent::Analysis,
                patterns: &ANALYSIS_PATTERNS,
                weight: 0.8,
            },
            IntentPattern {
                intent: Intent::Creative,
                patterns: &CREATIVE_PATTERNS,
                weight: 0.8,
            },
            IntentPattern {
                intent: Intent::Instruction,
                patterns: &INSTRUCTION_PATTERNS,
                weight: 0.7,
            },
            IntentPattern {
                intent: Intent::Conversation,
                patterns: &CONVERSATION_PATTERNS,
                weight: 0.6,
            },
        ];

        Self { patterns }
    }

    /// Classify the intent of a prompt.
    pub fn classify(&self, text: &str) -> IntentResult {
        let text = text.trim();

        if text.is_empty() {
            return IntentResult::unknown();
        }

        let mut best_intent = Intent::Unknown;
        let mut best_score: f32 = 0.0;
        let mut matched_patterns = Vec::new();

        for group in &self.patterns {
            let mut match_count = 0;
            let mut group_matches = Vec::new();

            for pattern in group.patterns {
                if let Some(m) = pattern.find(text) {
                    match_count += 1;
                    group_matches.push(m.as_str().to_string());
                }
            }

            if match_count > 0 {
                // Score based on match density and group weight.
                let match_ratio = match_count as f32 / group.patterns.len() as f32;
                let score = match_ratio * group.weight;

                if score > best_score {
                    best_score = score;
                    best_intent = group.intent;
                    matched_patterns = group_matches;
                }
            }
        }

        if best_score < MIN_SCORE {
            return IntentResult::unknown();
        }

        IntentResult {
            intent: best_intent,
            confidence: (best_score * 1.2).min(1.0),
            matched_patterns,
        }
    }
}
