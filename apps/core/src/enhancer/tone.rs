//! Tone transformation rules.
//!
//! Word/phrase substitution and sentence restructuring per tone. Each
//! transformation is a pure function of the input text; substitution tables
//! are compiled once.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Tone;

/// Contractions and their formal expansions.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "cannot"),
    ("won't", "will not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("let's", "let us"),
    ("i'm", "I am"),
    ("you're", "you are"),
    ("we're", "we are"),
];

/// Informal words and their professional replacements.
const INFORMAL_TO_FORMAL: &[(&str, &str)] = &[
    ("stuff", "material"),
    ("things", "items"),
    ("big", "significant"),
    ("huge", "substantial"),
    ("a lot of", "a great deal of"),
    ("kind of", "somewhat"),
    ("sort of", "somewhat"),
    ("get", "obtain"),
    ("okay", "acceptable"),
];

/// Formal phrasings relaxed for a casual register.
const FORMAL_TO_CASUAL: &[(&str, &str)] = &[
    ("cannot", "can't"),
    ("do not", "don't"),
    ("will not", "won't"),
    ("it is", "it's"),
    ("utilize", "use"),
    ("obtain", "get"),
    ("therefore", "so"),
    ("however", "but"),
    ("assistance", "help"),
    ("purchase", "buy"),
];

/// Filler words the spartan tone strips.
static FILLER_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(just|really|quite|actually|basically|literally|honestly|kind of|sort of|a bit|rather|somewhat|perhaps|maybe|please)\b",
    )
    .expect("Invalid regex: filler words")
});

/// Courtesy preambles the spartan tone drops.
static COURTESY_PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(could you|can you|would you|i would like you to|i want you to|i need you to|please)[,\s]+",
    )
    .expect("Invalid regex: courtesy preambles")
});

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s+|\n+").expect("Invalid regex: sentence breaks"));

/// Connectives cycled between sentences in the professional tone.
const CONNECTIVES: &[&str] = &["Furthermore,", "Additionally,", "Moreover,"];

fn substitution_regexes(table: &[(&str, &str)]) -> Vec<(Regex, String)> {
    table
        .iter()
        .map(|(from, to)| {
            let pattern =
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from))).expect("Invalid regex: substitution");
            (pattern, (*to).to_string())
        })
        .collect()
}

static EXPAND_CONTRACTIONS: LazyLock<Vec<(Regex, String)>> =
    LazyLock::new(|| substitution_regexes(CONTRACTIONS));

static FORMALIZE: LazyLock<Vec<(Regex, String)>> =
    LazyLock::new(|| substitution_regexes(INFORMAL_TO_FORMAL));

static RELAX: LazyLock<Vec<(Regex, String)>> =
    LazyLock::new(|| substitution_regexes(FORMAL_TO_CASUAL));

fn apply_substitutions(text: &str, table: &[(Regex, String)]) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in table {
        result = pattern.replace_all(&result, replacement.as_str()).into_owned();
    }
    result
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn professional(text: &str) -> String {
    let substituted = apply_substitutions(text, &FORMALIZE);
    let substituted = apply_substitutions(&substituted, &EXPAND_CONTRACTIONS);

    let sentences = split_sentences(&substituted);
    if sentences.is_empty() {
        return String::new();
    }

    let mut joined = Vec::with_capacity(sentences.len());
    for (i, sentence) in sentences.iter().enumerate() {
        let sentence = capitalize_first(sentence.trim_end_matches(['.', '!', '?']));
        if i == 0 {
            joined.push(format!("{sentence}."));
        } else {
            let connective = CONNECTIVES[(i - 1) % CONNECTIVES.len()];
            joined.push(format!("{connective} {sentence}."));
        }
    }

    joined.join(" ")
}

fn spartan(text: &str) -> String {
    let sentences = split_sentences(text);
    let mut kept = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let headless = COURTESY_PREAMBLE.replace(&sentence, "").into_owned();
        let stripped = FILLER_WORDS.replace_all(&headless, "").into_owned();
        let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
        let cleaned = collapsed.replace(" ,", ",").replace(" .", ".");
        if !cleaned.is_empty() {
            kept.push(format!("{}.", capitalize_first(cleaned.trim_end_matches('.'))));
        }
    }

    kept.join(" ")
}

fn sarcastic(text: &str) -> String {
    let body = text.trim().trim_end_matches(['.', '!', '?']);
    format!("Oh, wonderful: {body}. Try to contain the excitement.")
}

fn casual(text: &str) -> String {
    apply_substitutions(text, &RELAX)
}

/// Rewrites `text` for the requested tone.
pub fn apply_tone(text: &str, tone: Tone) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match tone {
        Tone::Professional => professional(trimmed),
        Tone::Spartan => spartan(trimmed),
        Tone::Sarcastic => sarcastic(trimmed),
        Tone::Casual => casual(trimmed),
    }
}
