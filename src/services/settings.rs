//! Settings store — user preferences with defaulting and sanitization.
//!
//! Persisted under the durable `tcg_settings` key. Stored JSON is never
//! trusted: unknown keys are ignored, missing keys take defaults, and the
//! boilerplate sample size is clamped on every load and save.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::WizardError;
use crate::model::{FrameworkKey, TestType};
use crate::storage::Storage;

pub const SETTINGS_KEY: &str = "tcg_settings";

pub const MIN_SAMPLE_SIZE: u32 = 1;
pub const MAX_SAMPLE_SIZE: u32 = 5;

// =============================================================================
// TYPES
// =============================================================================

/// Sanitized user preferences. Both maps always carry every known key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub default_context: String,
    pub disabled_test_types: BTreeMap<TestType, bool>,
    /// Always within `[MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE]`.
    pub boilerplate_sample_size: u32,
    pub disabled_boilerplates: BTreeMap<FrameworkKey, bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_context: String::new(),
            disabled_test_types: TestType::ALL.iter().map(|&t| (t, false)).collect(),
            boilerplate_sample_size: MAX_SAMPLE_SIZE,
            disabled_boilerplates: FrameworkKey::ALL.iter().map(|&k| (k, false)).collect(),
        }
    }
}

impl Settings {
    /// `true` when the given test type is disabled.
    #[must_use]
    pub fn is_test_type_disabled(&self, test_type: TestType) -> bool {
        self.disabled_test_types
            .get(&test_type)
            .copied()
            .unwrap_or(false)
    }

    /// `true` when the given boilerplate framework is disabled.
    #[must_use]
    pub fn is_boilerplate_disabled(&self, key: FrameworkKey) -> bool {
        self.disabled_boilerplates
            .get(&key)
            .copied()
            .unwrap_or(false)
    }
}

/// Untrusted settings shape as read from storage or a PUT body. String-keyed
/// maps so unknown keys deserialize fine and are then dropped by
/// [`sanitize_settings`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSettings {
    #[serde(default)]
    pub default_context: Option<String>,
    #[serde(default)]
    pub disabled_test_types: Option<BTreeMap<String, bool>>,
    #[serde(default)]
    pub boilerplate_sample_size: Option<f64>,
    #[serde(default)]
    pub disabled_boilerplates: Option<BTreeMap<String, bool>>,
}

// =============================================================================
// SANITIZATION
// =============================================================================

/// Merge a partial settings document over the defaults: known keys override,
/// unknown keys are ignored, and the sample size is rounded and clamped.
#[must_use]
pub fn sanitize_settings(partial: PartialSettings) -> Settings {
    let mut settings = Settings::default();

    if let Some(default_context) = partial.default_context {
        settings.default_context = default_context;
    }

    if let Some(disabled) = partial.disabled_test_types {
        for (raw_key, value) in disabled {
            if let Ok(test_type) = serde_json::from_value::<TestType>(serde_json::Value::String(raw_key)) {
                settings.disabled_test_types.insert(test_type, value);
            }
        }
    }

    if let Some(disabled) = partial.disabled_boilerplates {
        for (raw_key, value) in disabled {
            if let Some(key) = FrameworkKey::parse(&raw_key) {
                settings.disabled_boilerplates.insert(key, value);
            }
        }
    }

    if let Some(size) = partial.boilerplate_sample_size {
        settings.boilerplate_sample_size = clamp_sample_size(size);
    }

    settings
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_sample_size(raw: f64) -> u32 {
    if !raw.is_finite() {
        return MAX_SAMPLE_SIZE;
    }
    (raw.round() as i64).clamp(i64::from(MIN_SAMPLE_SIZE), i64::from(MAX_SAMPLE_SIZE)) as u32
}

// =============================================================================
// LOAD / SAVE
// =============================================================================

/// Load settings from durable storage, sanitizing whatever is found.
/// A missing or corrupt document yields the defaults.
///
/// # Errors
///
/// Returns [`WizardError::Storage`] when the store itself fails.
pub async fn load_settings(storage: &Arc<dyn Storage>) -> Result<Settings, WizardError> {
    let partial = match storage.get(SETTINGS_KEY).await? {
        Some(value) => serde_json::from_value::<PartialSettings>(value).unwrap_or_default(),
        None => PartialSettings::default(),
    };
    Ok(sanitize_settings(partial))
}

/// Sanitize and persist a settings update, returning the stored result.
///
/// # Errors
///
/// Returns [`WizardError::Storage`] when the write fails.
pub async fn save_settings(storage: &Arc<dyn Storage>, partial: PartialSettings) -> Result<Settings, WizardError> {
    let settings = sanitize_settings(partial);
    storage
        .set(SETTINGS_KEY, serde_json::to_value(&settings)?)
        .await?;
    info!(
        sample_size = settings.boilerplate_sample_size,
        "settings: preferences saved"
    );
    Ok(settings)
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
