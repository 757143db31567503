//! Test Module
//!
//! Cross-module test suite for the PromptForge core.
//!
//! ## Test Categories
//! - `analyzer_tests`: intent/domain classification, complexity, quality scoring
//! - `enhancer_tests`: section assembly, tone rewrites, budget trimming
//! - `variation_tests`: schedule determinism and orchestration
//! - `integration_tests`: full analyze-enhance-explain workflows

pub mod analyzer_tests;
