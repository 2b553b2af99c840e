//! Export formats for generated test cases.
//!
//! CSV rows follow a fixed 10-column header; fields containing a comma or a
//! quote are double-quoted with internal quotes doubled. The JSON document
//! bundles the analysis, the full case list, and an export timestamp.

pub mod boilerplate;

use crate::model::{Analysis, TestCase};

pub const CSV_FILENAME: &str = "test-cases.csv";
pub const JSON_FILENAME: &str = "test-cases.json";

pub const CSV_HEADERS: [&str; 10] = [
    "Test Type",
    "Priority",
    "Test Name",
    "Description",
    "Given Context",
    "Test Steps",
    "Expected Outcome",
    "Notes",
    "Setup Required",
    "Teardown Required",
];

/// Render test cases as CSV, one row per case, steps joined by `" | "`.
#[must_use]
pub fn to_csv(cases: &[TestCase]) -> String {
    let mut lines = Vec::with_capacity(cases.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for tc in cases {
        let row = [
            tc.test_type.as_str().to_owned(),
            tc.priority.as_str().to_owned(),
            tc.test_name.clone(),
            tc.description.clone(),
            tc.given_context.clone(),
            tc.test_steps.join(" | "),
            tc.expected_outcome.clone(),
            tc.notes.clone().unwrap_or_default(),
            tc.setup_required.clone().unwrap_or_default(),
            tc.teardown_required.clone().unwrap_or_default(),
        ];
        lines.push(
            row.iter()
                .map(|cell| csv_field(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

/// Render the JSON export document.
#[must_use]
pub fn to_json(analysis: &Analysis, cases: &[TestCase], exported_at: &str) -> serde_json::Value {
    serde_json::json!({
        "analysis": analysis,
        "testCases": cases,
        "exportedAt": exported_at,
    })
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
