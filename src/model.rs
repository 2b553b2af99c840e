//! Domain types shared across the wizard pipeline.
//!
//! DESIGN
//! ======
//! Everything here is plain data. Test cases are created only by parsing a
//! generation-service response and are never mutated afterwards — downstream
//! stages filter, persist, and render them. Wire names stay camelCase so
//! stored runs and exports keep the shape the generation prompt asks for.

use serde::{Deserialize, Serialize};

// =============================================================================
// CATEGORY
// =============================================================================

/// Closed set of project categories a description can classify into.
///
/// `Other` is the local fallback for unrecognized classifier output; it is
/// never offered to the classification service itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BackendApi,
    FrontendComponent,
    Database,
    LibraryFunction,
    Integration,
    DataPipeline,
    Other,
}

impl Category {
    /// Categories the classification service may choose from.
    pub const CLASSIFIABLE: [Category; 6] = [
        Category::BackendApi,
        Category::FrontendComponent,
        Category::Database,
        Category::LibraryFunction,
        Category::Integration,
        Category::DataPipeline,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BackendApi => "backend-api",
            Self::FrontendComponent => "frontend-component",
            Self::Database => "database",
            Self::LibraryFunction => "library-function",
            Self::Integration => "integration",
            Self::DataPipeline => "data-pipeline",
            Self::Other => "other",
        }
    }

    /// Parse an exact category label. Returns `None` for anything outside
    /// the closed set — callers decide whether to fall back to [`Category::Other`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "backend-api" => Some(Self::BackendApi),
            "frontend-component" => Some(Self::FrontendComponent),
            "database" => Some(Self::Database),
            "library-function" => Some(Self::LibraryFunction),
            "integration" => Some(Self::Integration),
            "data-pipeline" => Some(Self::DataPipeline),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Human-readable system-type label used in prompts and context lines.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::BackendApi => "REST API Endpoint",
            Self::FrontendComponent => "Frontend Component",
            Self::Database => "Database Operation",
            Self::LibraryFunction => "Library Function",
            Self::Integration => "System Integration",
            Self::DataPipeline => "Data Pipeline",
            Self::Other => "Other",
        }
    }
}

// =============================================================================
// TEST TYPE / PRIORITY
// =============================================================================

/// The five kinds of test case the generator is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Unit,
    Integration,
    Feature,
    Performance,
    Manual,
}

impl TestType {
    pub const ALL: [TestType; 5] = [
        TestType::Unit,
        TestType::Integration,
        TestType::Feature,
        TestType::Performance,
        TestType::Manual,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::Feature => "feature",
            Self::Performance => "performance",
            Self::Manual => "manual",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

// =============================================================================
// FRAMEWORK KEY
// =============================================================================

/// Identifier for a boilerplate target framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKey {
    Vitest,
    Jest,
    Pytest,
    Unittest,
    Junit,
    Phpunit,
    Rspec,
    Mocha,
}

impl FrameworkKey {
    pub const ALL: [FrameworkKey; 8] = [
        FrameworkKey::Vitest,
        FrameworkKey::Jest,
        FrameworkKey::Pytest,
        FrameworkKey::Unittest,
        FrameworkKey::Junit,
        FrameworkKey::Phpunit,
        FrameworkKey::Rspec,
        FrameworkKey::Mocha,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vitest => "vitest",
            Self::Jest => "jest",
            Self::Pytest => "pytest",
            Self::Unittest => "unittest",
            Self::Junit => "junit",
            Self::Phpunit => "phpunit",
            Self::Rspec => "rspec",
            Self::Mocha => "mocha",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "vitest" => Some(Self::Vitest),
            "jest" => Some(Self::Jest),
            "pytest" => Some(Self::Pytest),
            "unittest" => Some(Self::Unittest),
            "junit" => Some(Self::Junit),
            "phpunit" => Some(Self::Phpunit),
            "rspec" => Some(Self::Rspec),
            "mocha" => Some(Self::Mocha),
            _ => None,
        }
    }
}

// =============================================================================
// TEST CASE
// =============================================================================

/// A single generated test case. Optional narrative fields default to empty
/// so a slightly sparse generation response still parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub test_type: TestType,
    pub test_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub given_context: String,
    #[serde(default)]
    pub test_steps: Vec<String>,
    #[serde(default)]
    pub expected_outcome: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teardown_required: Option<String>,
}

// =============================================================================
// GENERATION OUTPUT
// =============================================================================

/// Raw parse of one generation response, before any filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRun {
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub testing_strategy: String,
    #[serde(default)]
    pub risk_areas: Vec<String>,
}

/// Strategy and risk summary produced alongside the test cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub testing_strategy: String,
    pub risk_areas: Vec<String>,
}

// =============================================================================
// SAVED RUNS
// =============================================================================

/// A completed wizard run persisted to durable storage, keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRun {
    pub id: String,
    pub project_description: String,
    pub category: Category,
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub testing_strategy: String,
    #[serde(default)]
    pub risk_areas: Vec<String>,
    /// RFC 3339 creation timestamp.
    pub timestamp: String,
}

/// Lightweight index entry for the saved-run list, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub id: String,
    pub project_description: String,
    pub category: Category,
    pub timestamp: String,
    pub test_case_count: usize,
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
