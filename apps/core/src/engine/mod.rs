//! # Engine Module
//!
//! Fast, non-LLM analysis of prompt text. Everything here is a pure,
//! deterministic function of its input - no I/O, no caching, no randomness.
//!
//! ## Components
//! - `intent`: intent classification using regex pattern tables
//! - `domain`: domain classification over keyword vocabularies
//! - `complexity`: structural complexity scoring (1-10)
//! - `structure`: missing-component detection
//! - `conflicts`: antagonistic-directive detection
//! - `keywords`: TF-IDF keyword extraction
//! - `quality`: quality scoring and pain-point selection
//! - `analysis`: output data structure
//! - `analyzer`: main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod complexity;
pub mod conflicts;
pub mod domain;
pub mod intent;
pub mod keywords;
pub mod quality;
pub mod structure;

pub use analysis::PromptAnalysis;
pub use analyzer::PromptAnalyzer;
pub use complexity::{ComplexityMetrics, ComplexityScorer};
pub use conflicts::{detect_conflicts, Conflict};
pub use domain::{Domain, DomainClassifier};
pub use intent::{Intent, IntentClassifier, IntentResult};
pub use keywords::{KeywordExtractor, KeywordScore};
pub use structure::{detect_missing, MissingComponent};
