//! Approximate token counting and per-platform cost estimation.
//!
//! The count is an estimate from raw character/word counts, not exact BPE
//! tokenization. It only has to be monotonic and stable, since it drives
//! budget trimming and cost display rather than billing.

/// Assumed characters per token for the character-based estimate.
const CHARS_PER_TOKEN: f32 = 4.0;

/// Assumed tokens per word for the word-boundary correction (4 tokens per 3 words).
const TOKENS_PER_WORD: f32 = 4.0 / 3.0;

/// Price per million tokens, by platform id. Unknown ids use `DEFAULT_PRICE`.
const PRICE_PER_MILLION: &[(&str, f64)] = &[
    ("claude", 3.00),
    ("gpt-4o", 2.50),
    ("gemini", 1.25),
    ("mistral", 0.70),
    ("llama", 0.20),
    ("copilot", 1.00),
    ("cursor", 1.00),
    ("perplexity", 1.00),
    ("midjourney", 1.00),
];

const DEFAULT_PRICE: f64 = 1.00;

/// Token estimate from raw character and word counts. Shared with the
/// enhancer's truncation helpers so trimming and counting agree.
pub(crate) fn estimate_from_counts(chars: usize, words: usize) -> u32 {
    let by_chars = chars as f32 / CHARS_PER_TOKEN;
    let by_words = words as f32 * TOKENS_PER_WORD;
    ((by_chars + by_words) / 2.0).ceil() as u32
}

/// Estimates the token count of `text`.
///
/// Blends a characters/4 estimate with a 4-tokens-per-3-words estimate.
/// Returns 0 for empty or whitespace-only input, and at least 1 otherwise.
pub fn count_tokens(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let chars = trimmed.chars().count();
    let words = trimmed.split_whitespace().count();

    estimate_from_counts(chars, words).max(1)
}

/// Formats the estimated cost of `token_count` tokens on the given platform,
/// e.g. `"$0.0042"`. Unknown platform ids fall back to a default rate.
pub fn calculate_cost(token_count: u32, platform_id: &str) -> String {
    let wanted = platform_id.trim().to_lowercase();
    let rate = PRICE_PER_MILLION
        .iter()
        .find(|(id, _)| *id == wanted)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_PRICE);

    let cost = token_count as f64 / 1_000_000.0 * rate;
    format!("${:.4}", cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(count_tokens(""), 0);
        assert_eq!(count_tokens("   \n\t  "), 0);
    }

    #[test]
    fn test_non_empty_is_positive() {
        assert!(count_tokens("a") >= 1);
        assert!(count_tokens("hi") >= 1);
        assert!(count_tokens("write a function") >= 3);
    }

    #[test]
    fn test_monotonic_in_length() {
        let base = "Summarize the quarterly report";
        let longer = format!("{base} and list the three largest cost drivers");
        assert!(count_tokens(&longer) > count_tokens(base));

        // Growing a text never shrinks the estimate.
        let mut text = String::from("word");
        let mut last = count_tokens(&text);
        for _ in 0..50 {
            text.push_str(" word");
            let next = count_tokens(&text);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_rough_scale() {
        // ~400 chars / ~70 words should land in the dozens, not thousands.
        let text = "lorem ipsum dolor sit amet ".repeat(15);
        let tokens = count_tokens(&text);
        assert!(tokens > 50 && tokens < 250, "estimate out of range: {tokens}");
    }

    #[test]
    fn test_cost_formatting() {
        assert_eq!(calculate_cost(0, "claude"), "$0.0000");
        assert_eq!(calculate_cost(1_000_000, "claude"), "$3.0000");
        assert_eq!(calculate_cost(500_000, "gpt-4o"), "$1.2500");
        // Unknown platforms use the fallback rate.
        assert_eq!(calculate_cost(1_000_000, "mystery-model"), "$1.0000");
    }

    #[test]
    fn test_cost_case_insensitive() {
        assert_eq!(calculate_cost(1_000_000, "Claude"), "$3.0000");
    }
}
