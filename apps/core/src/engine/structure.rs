//! Missing-component detection.
//!
//! Checks a prompt for the structural elements a well-formed prompt carries:
//! an explicit role, background context, an output-format instruction,
//! constraints, and examples. Each absent element is reported by name.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// A structural prompt element that can be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingComponent {
    Role,
    Context,
    Format,
    Constraints,
    Examples,
}

impl MissingComponent {
    /// Returns the component's canonical name.
    pub fn label(&self) -> &'static str {
        match self {
            MissingComponent::Role => "role",
            MissingComponent::Context => "context",
            MissingComponent::Format => "format",
            MissingComponent::Constraints => "constraints",
            MissingComponent::Examples => "examples",
        }
    }

    /// Components whose absence changes what a model produces the most.
    pub fn is_critical(&self) -> bool {
        matches!(self, MissingComponent::Context | MissingComponent::Format)
    }
}

impl fmt::Display for MissingComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

static ROLE_PRESENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(you are|act as|as an? (expert|senior|professional)|persona|imagine you('| a)?re)\b")
        .expect("Invalid regex: role markers")
});

static CONTEXT_PRESENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(context|background|given that|considering|based on|we are|i am|i'm|currently|our (team|project|company|product))\b",
    )
    .expect("Invalid regex: context markers")
});

static FORMAT_PRESENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(format|json|xml|markdown|table|bullet(ed)? (points|list)|list of|csv|output as|respond (with|in)|structured? as|in the form)\b",
    )
    .expect("Invalid regex: format markers")
});

static CONSTRAINTS_PRESENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(must|should|avoid|don'?t|do not|limit|at most|at least|no more than|within|maximum|minimum|only|exactly|fewer than|less than)\b",
    )
    .expect("Invalid regex: constraint markers")
});

static EXAMPLES_PRESENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bexamples?\b|\be\.g\.|for instance|such as|```|input:|output:")
        .expect("Invalid regex: example markers")
});

/// Ordered presence table; detection walks it top to bottom.
static COMPONENT_CHECKS: LazyLock<Vec<(MissingComponent, &'static Regex)>> = LazyLock::new(|| {
    vec![
        (MissingComponent::Role, &ROLE_PRESENT),
        (MissingComponent::Context, &CONTEXT_PRESENT),
        (MissingComponent::Format, &FORMAT_PRESENT),
        (MissingComponent::Constraints, &CONSTRAINTS_PRESENT),
        (MissingComponent::Examples, &EXAMPLES_PRESENT),
    ]
});

/// Returns the components absent from the prompt, in canonical order.
pub fn detect_missing(text: &str) -> Vec<MissingComponent> {
    COMPONENT_CHECKS
        .iter()
        .filter(|(_, present)| !present.is_match(text))
        .map(|(component, _)| *component)
        .collect()
}
