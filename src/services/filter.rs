//! Filter engine — drops test cases whose type is disabled in Settings.

use crate::model::TestCase;

use super::settings::Settings;

/// Return the sublist of `cases` whose type is not disabled. With no
/// disabled types this is the identity (by content). Callers must treat an
/// emptied result as a user-visible condition, not proceed silently.
#[must_use]
pub fn filter_by_settings(cases: &[TestCase], settings: &Settings) -> Vec<TestCase> {
    if settings.disabled_test_types.values().all(|&disabled| !disabled) {
        return cases.to_vec();
    }

    cases
        .iter()
        .filter(|tc| !settings.is_test_type_disabled(tc.test_type))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
