//! Context builder — the automatic alternative to the manual Q&A branch.
//!
//! Deterministic and offline: derives a bounded list of hint strings from
//! the description, category, and optional requirement/global context. The
//! result is truncated to [`MAX_CONTEXT_ENTRIES`] as a parity contract with
//! the manual path, so the generation service always receives a context
//! block of predictable size.

use crate::model::Category;

pub const MAX_CONTEXT_ENTRIES: usize = 10;

/// Four canned testing hints per category.
pub(crate) fn category_hints(category: Category) -> [&'static str; 4] {
    match category {
        Category::BackendApi => [
            "Validate all HTTP methods, payload schemas, and authentication flows including success, validation, and authorization failures.",
            "Cover rate limiting, concurrency, idempotency of repeated requests, and graceful handling of upstream/downstream outages.",
            "Ensure error responses follow the contract (status codes + structured error bodies).",
            "Verify integration with the data layer including transaction rollback, pagination, and filtering logic.",
        ],
        Category::FrontendComponent => [
            "Exercise UI states: initial, loading, success, empty, and error across desktop and mobile breakpoints.",
            "Validate accessibility (ARIA labels, keyboard navigation, focus rings) and visual contrast in light/dark themes.",
            "Ensure form validation, inline feedback, and disabling/enabling of controls behaves correctly.",
            "Confirm external API interactions are debounced, retried, and surfaced to the user appropriately.",
        ],
        Category::Database => [
            "Test CRUD operations with transactional integrity, constraints, and cascading behavior.",
            "Validate indexing, query performance, and plan for long-running analytical workloads.",
            "Exercise migration/rollback scripts and ensure backward compatibility for existing data.",
            "Check backup/restore procedures, failover replicas, and data retention policies.",
        ],
        Category::LibraryFunction => [
            "Cover deterministic outputs, rounding/precision rules, and locale/timezone awareness where applicable.",
            "Test invalid inputs, optional arguments, and default parameter handling.",
            "Verify side effects, asynchronous flows, and integration with caller-supplied callbacks/promises.",
            "Evaluate performance for large payloads and repeated invocations to catch regressions.",
        ],
        Category::Integration => [
            "Exercise full end-to-end workflows spanning multiple services or queues.",
            "Simulate upstream/downstream failures, retries, timeouts, and circuit breaker scenarios.",
            "Validate data contracts, serialization formats, and schema evolution between systems.",
            "Confirm monitoring/alerting signals fire when integrations degrade or drift.",
        ],
        Category::DataPipeline => [
            "Cover ingestion of both happy-path and malformed records, ensuring data quality checks block bad data.",
            "Test scheduling, batching vs. streaming paths, and idempotent reprocessing of historical runs.",
            "Validate transformations, aggregations, and schema evolution as data moves through stages.",
            "Ensure failure recovery, checkpointing, and alerting operate without data loss.",
        ],
        Category::Other => [
            "Exercise core business flows plus negative, edge, and boundary cases.",
            "Validate observability: structured logging, metrics, and tracing for key milestones.",
            "Ensure resiliency to dependency outages, slow responses, and retry storms.",
            "Cover cross-cutting concerns like security, performance, and accessibility relevant to the stack.",
        ],
    }
}

/// Build the automatic context block: a fixed preamble with requirement and
/// global-context lines spliced in near the front when present, followed by
/// the category hints, truncated to [`MAX_CONTEXT_ENTRIES`].
#[must_use]
pub fn build_auto_context(
    project_description: &str,
    category: Category,
    requirements: Option<&str>,
    default_context: Option<&str>,
) -> Vec<String> {
    let clean_description = match project_description.trim() {
        "" => "No additional description provided.",
        trimmed => trimmed,
    };
    let requirement_context = requirements
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| format!("Key requirements: {r}"));
    let global_context = default_context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| format!("Global considerations: {c}"));

    let mut entries = vec![
        format!("Project summary: {clean_description}"),
        format!("System type: {}.", category.description()),
        "Target outcome: deliver reliable, user-friendly functionality aligned with the described goals.".to_string(),
        "Assume modern authentication/authorization, data validation, and logging best practices are required."
            .to_string(),
        "Consider performance budgets, scalability, and graceful degradation under load spikes.".to_string(),
        "Plan for operational readiness: monitoring, alerting, and fallback behavior for partial outages.".to_string(),
    ];

    // Requirement and global lines go right after the summary.
    let mut insert_index = 1;
    for entry in [requirement_context, global_context].into_iter().flatten() {
        entries.insert(insert_index, entry);
        insert_index += 1;
    }

    entries.extend(category_hints(category).iter().map(|&hint| hint.to_owned()));
    entries.truncate(MAX_CONTEXT_ENTRIES);
    entries
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
