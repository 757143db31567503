use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::engine::analysis::PromptAnalysis;

/// Wire format a platform expects for structured prompt parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFormat {
    Json,
    Xml,
    Text,
}

/// Descriptor of a target AI platform.
///
/// Loaded once from the static catalog at process start and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Unique catalog key (e.g. "claude", "gpt-4o").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short icon identifier for UI consumers.
    pub icon: String,
    /// Catalog category (e.g. "general", "code").
    pub category: String,
    /// Wire format used when rendering structured sections.
    pub api_format: ApiFormat,
    /// Token budget an enhanced prompt must stay within.
    pub max_tokens: u32,
    /// Closing directives appended to every enhanced prompt.
    #[serde(default)]
    pub special_requirements: Vec<String>,
    /// Default system message used when the caller supplies none.
    #[serde(default)]
    pub system_prompt_template: Option<String>,
    /// Template wrapped around the rewritten prompt body; `{prompt}` is substituted.
    #[serde(default)]
    pub user_prompt_template: Option<String>,
    /// Human-readable description.
    pub description: String,
}

/// Tone applied to the rewritten prompt body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Spartan,
    Sarcastic,
}

impl Tone {
    /// Returns a human-readable label for the tone.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Spartan => "spartan",
            Tone::Sarcastic => "sarcastic",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tone {
    type Err = std::convert::Infallible;

    /// Parses a user-facing tone label. "laconic" is accepted as an alias for
    /// spartan; unknown labels fall back to professional.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "casual" => Tone::Casual,
            "spartan" | "laconic" => Tone::Spartan,
            "sarcastic" => Tone::Sarcastic,
            _ => Tone::Professional,
        })
    }
}

/// Label describing how far a variation departs from the original prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhancementType {
    Conservative,
    Balanced,
    Aggressive,
}

impl EnhancementType {
    /// Returns a human-readable label for the enhancement type.
    pub fn label(&self) -> &'static str {
        match self {
            EnhancementType::Conservative => "conservative",
            EnhancementType::Balanced => "balanced",
            EnhancementType::Aggressive => "aggressive",
        }
    }
}

/// Options controlling a single enhancement pass.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnhanceOptions {
    /// Tone applied to the rewritten prompt body.
    #[serde(default)]
    pub tone: Tone,
    /// Number of input/output example pairs to append (0-5).
    #[validate(range(max = 5))]
    #[serde(default)]
    pub few_shot_count: u8,
    /// Whether to append clarifications for the gaps found in the original prompt.
    #[serde(default)]
    pub resolve_ambiguity: bool,
    /// Verbatim system-level instructions placed first when provided.
    #[serde(default)]
    pub system_message: Option<String>,
    /// Reference dataset included (trimmed to budget) as a context block.
    #[serde(default)]
    pub dataset_content: Option<String>,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            tone: Tone::Professional,
            few_shot_count: 0,
            resolve_ambiguity: false,
            system_message: None,
            dataset_content: None,
        }
    }
}

/// Caller request for a batch of enhancement variations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VariationRequest {
    /// How many variations to produce (1-5).
    #[validate(range(min = 1, max = 5))]
    pub variation_count: u8,
    /// Base tone; index 2 of the schedule overrides this with spartan.
    #[serde(default)]
    pub tone: Tone,
    /// Base few-shot count; the schedule may override it per index (0-5).
    #[validate(range(max = 5))]
    #[serde(default)]
    pub few_shot_count: u8,
    /// Optional system-level instructions forwarded to every variation.
    #[serde(default)]
    pub system_message: Option<String>,
    /// Optional dataset forwarded to every variation.
    #[serde(default)]
    pub dataset_content: Option<String>,
}

impl Default for VariationRequest {
    fn default() -> Self {
        Self {
            variation_count: 3,
            tone: Tone::Professional,
            few_shot_count: 0,
            system_message: None,
            dataset_content: None,
        }
    }
}

/// Parameters a variation was actually produced with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMetadata {
    /// Schedule label for the variation index.
    pub enhancement_type: EnhancementType,
    /// Tone used for the rewritten body.
    pub tone: Tone,
    /// Few-shot pairs actually requested.
    pub few_shot_count: u8,
}

/// One enhanced rewrite of a prompt, produced by the variation orchestrator.
///
/// Created once per enhancement call and immutable thereafter; callers own
/// persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedPrompt {
    /// Generated id: timestamp millis, variation index, and a UUID suffix.
    pub id: String,
    /// Source prompt text.
    pub original: String,
    /// Rewritten prompt text. Never empty when `original` is non-empty.
    pub enhanced: String,
    /// Catalog id of the target platform.
    pub platform_id: String,
    /// Quality score of the enhanced text (0-100).
    pub quality_score: u8,
    /// Ordered, plain-language improvement statements.
    pub improvements: Vec<String>,
    /// Token estimate of the enhanced text.
    pub token_count: u32,
    /// Signed quality delta vs. the original prompt. May be negative.
    pub improvement: f32,
    /// Full analysis of the enhanced text.
    pub analysis: PromptAnalysis,
    /// Parameters this variation was produced with.
    pub metadata: PatternMetadata,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_parsing() {
        assert_eq!("spartan".parse::<Tone>().unwrap(), Tone::Spartan);
        assert_eq!("laconic".parse::<Tone>().unwrap(), Tone::Spartan);
        assert_eq!("SARCASTIC".parse::<Tone>().unwrap(), Tone::Sarcastic);
        assert_eq!("casual".parse::<Tone>().unwrap(), Tone::Casual);
        // Unknown labels degrade to the default rather than failing.
        assert_eq!("gibberish".parse::<Tone>().unwrap(), Tone::Professional);
    }

    #[test]
    fn test_variation_request_validation() {
        let ok = VariationRequest::default();
        assert!(ok.validate().is_ok());

        let too_many = VariationRequest {
            variation_count: 9,
            ..VariationRequest::default()
        };
        assert!(too_many.validate().is_err());

        let zero = VariationRequest {
            variation_count: 0,
            ..VariationRequest::default()
        };
        assert!(zero.validate().is_err());

        let heavy_shots = VariationRequest {
            few_shot_count: 7,
            ..VariationRequest::default()
        };
        assert!(heavy_shots.validate().is_err());
    }

    #[test]
    fn test_enhance_options_default() {
        let opts = EnhanceOptions::default();
        assert_eq!(opts.tone, Tone::Professional);
        assert_eq!(opts.few_shot_count, 0);
        assert!(!opts.resolve_ambiguity);
        assert!(opts.system_message.is_none());
    }

    #[test]
    fn test_enhancement_type_labels() {
        assert_eq!(EnhancementType::Conservative.label(), "conservative");
        assert_eq!(EnhancementType::Balanced.label(), "balanced");
        assert_eq!(EnhancementType::Aggressive.label(), "aggressive");
    }
}
