//! Static platform catalog.
//!
//! Target-platform descriptors are loaded once at first access and never
//! mutated. Lookups hand out references into the static table.

use std::sync::LazyLock;

use crate::models::{ApiFormat, Platform};

fn platform(
    id: &str,
    name: &str,
    icon: &str,
    category: &str,
    api_format: ApiFormat,
    max_tokens: u32,
    special_requirements: &[&str],
    system_prompt_template: Option<&str>,
    user_prompt_template: Option<&str>,
    description: &str,
) -> Platform {
    Platform {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
        api_format,
        max_tokens,
        special_requirements: special_requirements.iter().map(|s| s.to_string()).collect(),
        system_prompt_template: system_prompt_template.map(|s| s.to_string()),
        user_prompt_template: user_prompt_template.map(|s| s.to_string()),
        description: description.to_string(),
    }
}

static PLATFORMS: LazyLock<Vec<Platform>> = LazyLock::new(|| {
    vec![
        platform(
            "claude",
            "Claude",
            "anthropic",
            "general",
            ApiFormat::Xml,
            200_000,
            &[
                "Wrap structured parts of the answer in XML tags.",
                "State assumptions before the answer when the request leaves gaps.",
            ],
            Some("You are a careful assistant who reasons before answering."),
            Some("<task>\n{prompt}\n</task>"),
            "Anthropic's assistant family; favors XML-tagged structure and large contexts.",
        ),
        platform(
            "gpt-4o",
            "GPT-4o",
            "openai",
            "general",
            ApiFormat::Json,
            128_000,
            &["Return machine-readable sections when the request asks for structure."],
            None,
            None,
            "OpenAI's flagship multimodal model; JSON-friendly outputs.",
        ),
        platform(
            "gemini",
            "Gemini",
            "google",
            "general",
            ApiFormat::Json,
            1_000_000,
            &[],
            None,
            None,
            "Google's long-context model family.",
        ),
        platform(
            "mistral",
            "Mistral Large",
            "mistral",
            "general",
            ApiFormat::Json,
            32_000,
            &[],
            None,
            None,
            "Mistral's general-purpose instruction model.",
        ),
        platform(
            "llama",
            "Llama",
            "meta",
            "general",
            ApiFormat::Text,
            8_192,
            &["Keep instructions in plain text; no markup blocks."],
            None,
            None,
            "Meta's open-weight model family; small context, plain-text prompts.",
        ),
        platform(
            "copilot",
            "GitHub Copilot",
            "github",
            "code",
            ApiFormat::Text,
            8_192,
            &[
                "Keep code blocks self-contained and compilable.",
                "Name the language of every code block.",
            ],
            None,
            None,
            "In-editor code assistant; responds best to code-shaped context.",
        ),
        platform(
            "cursor",
            "Cursor",
            "cursor",
            "code",
            ApiFormat::Text,
            32_000,
            &["Reference files by path when the change spans several of them."],
            None,
            None,
            "AI-first code editor agent.",
        ),
        platform(
            "perplexity",
            "Perplexity",
            "perplexity",
            "research",
            ApiFormat::Text,
            127_000,
            &["Ask for sources to be cited inline."],
            None,
            None,
            "Search-grounded answer engine.",
        ),
        platform(
            "midjourney",
            "Midjourney",
            "midjourney",
            "image",
            ApiFormat::Text,
            350,
            &["Describe one scene per prompt; put style and ratio flags last."],
            None,
            None,
            "Image generator with a very small prompt budget.",
        ),
    ]
});

/// Returns the full static platform list.
pub fn platforms() -> &'static [Platform] {
    &PLATFORMS
}

/// Looks up a platform by catalog id. Matching is case-insensitive.
pub fn get_platform_by_id(id: &str) -> Option<&'static Platform> {
    let wanted = id.trim().to_lowercase();
    PLATFORMS.iter().find(|p| p.id == wanted)
}

/// Returns the distinct categories in catalog order.
pub fn all_categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for p in PLATFORMS.iter() {
        if !seen.contains(&p.category.as_str()) {
            seen.push(p.category.as_str());
        }
    }
    seen
}
