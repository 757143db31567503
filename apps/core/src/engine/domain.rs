//! Domain classification over subject-matter vocabularies.
//!
//! Counts hits against per-domain keyword tables; the densest vocabulary
//! wins, with ties broken in a fixed priority order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject-matter register of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Technical,
    Business,
    Academic,
    Creative,
    General,
}

impl Domain {
    /// Returns a human-readable label for the domain.
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Technical => "technical",
            Domain::Business => "business",
            Domain::Academic => "academic",
            Domain::Creative => "creative",
            Domain::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Technical jargon.
const TECHNICAL_TERMS: &[&str] = &[
    "api",
    "database",
    "server",
    "backend",
    "frontend",
    "deployment",
    "cloud",
    "kubernetes",
    "docker",
    "algorithm",
    "latency",
    "throughput",
    "cache",
    "compiler",
    "runtime",
    "microservice",
    "protocol",
    "encryption",
    "schema",
    "query",
    "repository",
    "pipeline",
    "debugging",
    "refactoring",
    "codebase",
    "framework",
    "sdk",
    "cli",
    "regression",
    "unit test",
];

/// Business jargon.
const BUSINESS_TERMS: &[&str] = &[
    "revenue",
    "marketing",
    "customer",
    "stakeholder",
    "roi",
    "sales",
    "strategy",
    "budget",
    "kpi",
    "quarterly",
    "client",
    "proposal",
    "invoice",
    "pricing",
    "churn",
    "onboarding",
    "pitch",
    "forecast",
    "market share",
    "competitor",
    "b2b",
    "procurement",
    "roadmap",
    "headcount",
];

/// Academic markers.
const ACADEMIC_TERMS: &[&str] = &[
    "research",
    "thesis",
    "hypothesis",
    "literature review",
    "citation",
    "peer-reviewed",
    "methodology",
    "abstract",
    "dissertation",
    "curriculum",
    "academic",
    "journal",
    "empirical",
    "bibliography",
    "scholarly",
    "seminar",
    "syllabus",
    "lecture",
    "professor",
];

/// Creative-writing markers.
const CREATIVE_TERMS: &[&str] = &[
    "story",
    "poem",
    "novel",
    "character",
    "plot",
    "lyrics",
    "metaphor",
    "imagery",
    "fiction",
    "screenplay",
    "protagonist",
    "stanza",
    "prose",
    "narrator",
    "genre",
    "fantasy",
    "dialogue",
    "verse",
];

/// Domain classifier over static vocabularies, checked in priority order.
pub struct DomainClassifier {
    vocabularies: Vec<(Domain, &'static [&'static str])>,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainClassifier {
    /// Create a classifier with all vocabularies. Order doubles as tie-break priority.
    pub fn new() -> Self {
        Self {
            vocabularies: vec![
                (Domain::Technical, TECHNICAL_TERMS),
                (Domain::Business, BUSINESS_TERMS),
                (Domain::Academic, ACADEMIC_TERMS),
                (Domain::Creative, CREATIVE_TERMS),
            ],
        }
    }

    /// Count vocabulary hits in the text. Multi-word terms match as substrings
    /// on word boundaries approximated by the surrounding padding.
    fn count_hits(text: &str, terms: &[&str]) -> usize {
        let padded = format!(" {} ", text.to_lowercase().replace(|c: char| !c.is_alphanumeric() && c != '-', " "));
        terms
            .iter()
            .filter(|term| padded.contains(&format!(" {term} ")))
            .count()
    }

    /// Classify the domain of a prompt. Defaults to `General` when no
    /// vocabulary scores a hit.
    pub fn classify(&self, text: &str) -> Domain {
        if text.trim().is_empty() {
            return Domain::General;
        }

        let mut best = Domain::General;
        let mut best_hits = 0usize;

        for (domain, terms) in &self.vocabularies {
            let hits = Self::count_hits(text, terms);
            // Strictly-greater keeps the earlier (higher-priority) domain on ties.
            if hits > best_hits {
                best_hits = hits;
                best = *domain;
            }
        }

        best
    }
}
