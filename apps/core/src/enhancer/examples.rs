//! Few-shot example bank and per-format rendering.
//!
//! Entries are keyed by intent and optionally by domain; when nothing fits,
//! deterministic placeholder pairs are synthesized so the requested count is
//! always honored.

use serde_json::json;

use crate::engine::domain::Domain;
use crate::engine::intent::Intent;
use crate::models::ApiFormat;

/// One input/output pair in the bank.
pub struct ExampleEntry {
    pub intent: Intent,
    pub domain: Option<Domain>,
    pub input: &'static str,
    pub output: &'static str,
}

static EXAMPLE_BANK: &[ExampleEntry] = &[
    ExampleEntry {
        intent: Intent::Code,
        domain: Some(Domain::Technical),
        input: "Write a function that checks whether a year is a leap year",
        output: "A documented leap-year function plus two unit tests covering century boundaries",
    },
    ExampleEntry {
        intent: Intent::Code,
        domain: None,
        input: "Fix the off-by-one error in this pagination loop",
        output: "The corrected loop with a one-line note on the boundary change",
    },
    ExampleEntry {
        intent: Intent::DataProcessing,
        domain: None,
        input: "Convert this CSV of orders into JSON grouped by customer",
        output: "A JSON object keyed by customer id, each holding its orders sorted by date",
    },
    ExampleEntry {
        intent: Intent::DataProcessing,
        domain: Some(Domain::Business),
        input: "Aggregate monthly revenue per region from these records",
        output: "A table of region rows and month columns with totals in the last row",
    },
    ExampleEntry {
        intent: Intent::Analysis,
        domain: Some(Domain::Business),
        input: "Compare two pricing models for a subscription product",
        output: "Revenue impact per model, one risk each, and a closing recommendation",
    },
    ExampleEntry {
        intent: Intent::Analysis,
        domain: None,
        input: "Summarize this incident report for leadership",
        output: "Five sentences: what happened, impact, root cause, fix, follow-up",
    },
    ExampleEntry {
        intent: Intent::Creative,
        domain: None,
        input: "Write an opening paragraph for a mystery set in a lighthouse",
        output: "Three sentences establishing setting, narrator, and one unanswered question",
    },
    ExampleEntry {
        intent: Intent::Instruction,
        domain: None,
        input: "Make a checklist for onboarding a new engineer",
        output: "A ten-item list ordered by first day, first week, first month",
    },
    ExampleEntry {
        intent: Intent::Conversation,
        domain: None,
        input: "What do you think about remote work?",
        output: "Two paragraphs weighing both sides, ending with one question back",
    },
];

/// Selects up to `count` example pairs for the intent/domain, preferring
/// domain-specific entries, then intent-wide ones, then synthesized
/// placeholders.
pub fn select_examples(intent: Intent, domain: Domain, count: usize) -> Vec<(String, String)> {
    let mut selected: Vec<(String, String)> = Vec::with_capacity(count);

    let matching = EXAMPLE_BANK
        .iter()
        .filter(|e| e.intent == intent && e.domain == Some(domain))
        .chain(EXAMPLE_BANK.iter().filter(|e| e.intent == intent && e.domain.is_none()));

    for entry in matching.take(count) {
        selected.push((entry.input.to_string(), entry.output.to_string()));
    }

    // Pad with placeholders when the bank runs dry.
    let mut placeholder_index = 1;
    while selected.len() < count {
        selected.push((
            format!("Sample request {placeholder_index}, phrased like the task above"),
            "A response that satisfies every stated requirement in the requested structure"
                .to_string(),
        ));
        placeholder_index += 1;
    }

    selected
}

/// Renders example pairs in the platform's wire format.
pub fn render_examples(pairs: &[(String, String)], format: ApiFormat) -> String {
    match format {
        ApiFormat::Json => {
            let values: Vec<_> = pairs
                .iter()
                .map(|(input, output)| json!({ "input": input, "output": output }))
                .collect();
            serde_json::to_string_pretty(&values).unwrap_or_default()
        }
        ApiFormat::Xml => {
            let mut lines = vec!["<examples>".to_string()];
            for (input, output) in pairs {
                lines.push("  <example>".to_string());
                lines.push(format!("    <input>{input}</input>"));
                lines.push(format!("    <output>{output}</output>"));
                lines.push("  </example>".to_string());
            }
            lines.push("</examples>".to_string());
            lines.join("\n")
        }
        ApiFormat::Text => pairs
            .iter()
            .enumerate()
            .map(|(i, (input, output))| {
                format!("Example {}:\nInput: {input}\nOutput: {output}", i + 1)
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}
