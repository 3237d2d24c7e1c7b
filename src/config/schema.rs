//! Configuration schema for the humanizer.
//!
//! This module defines the configuration structure and validation logic for
//! every tunable of the rewriting pipeline.

use crate::humanizer::SelectionPolicy;
use crate::rewrite::RewriteProbabilities;
use crate::style::StyleConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the humanizer.
///
/// Settings can be supplied as JSON under the "humanizer" key. Missing fields
/// fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizerConfig {
    /// Per-sentence and per-token edit probabilities.
    #[serde(default)]
    pub probabilities: RewriteProbabilities,

    /// Style table and the fallback profile for unknown labels.
    #[serde(default)]
    pub styles: StyleConfig,

    /// How the number of operations per call is chosen.
    ///
    /// Valid values: "scaledBase", "randomBase". Defaults to "scaledBase".
    #[serde(default)]
    pub selection_policy: SelectionPolicy,
}

impl Default for HumanizerConfig {
    fn default() -> Self {
        Self {
            probabilities: RewriteProbabilities::default(),
            styles: StyleConfig::default(),
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl HumanizerConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive message.
    pub fn validate(&self) -> Result<(), String> {
        self.probabilities.validate()?;
        self.styles
            .validate()
            .map_err(|e| format!("styles.{}", e))?;
        Ok(())
    }

    /// Merges this configuration with another, using values from `other`.
    ///
    /// Style profiles are merged per label, so a user section that only
    /// overrides `Casual` keeps the other built-in profiles.
    pub fn merge(&self, other: &HumanizerConfig) -> Self {
        let mut styles = self.styles.clone();
        for (label, profile) in &other.styles.profiles {
            styles.set_profile(label.clone(), *profile);
        }
        styles.fallback = other.styles.fallback;

        Self {
            probabilities: other.probabilities,
            styles,
            selection_policy: other.selection_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProfile;

    #[test]
    fn test_default_config_is_valid() {
        let config = HumanizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.selection_policy, SelectionPolicy::ScaledBase);
    }

    #[test]
    fn test_invalid_probability() {
        let mut config = HumanizerConfig::default();
        config.probabilities.structure = 2.0;
        assert!(config.validate().unwrap_err().contains("structure"));
    }

    #[test]
    fn test_invalid_style_factor() {
        let mut config = HumanizerConfig::default();
        config
            .styles
            .set_profile("Casual", StyleProfile::new(-1.0, 4));

        let err = config.validate().unwrap_err();
        assert!(err.starts_with("styles.Casual"));
    }

    #[test]
    fn test_camel_case_fields() {
        let config: HumanizerConfig = serde_json::from_str(
            r#"{"selectionPolicy": "randomBase", "probabilities": {"nuance": 0.9}}"#,
        )
        .unwrap();

        assert_eq!(config.selection_policy, SelectionPolicy::RandomBase);
        assert_eq!(config.probabilities.nuance, 0.9);
        assert_eq!(config.probabilities.structure, 0.4);
    }

    #[test]
    fn test_merge_keeps_other_profiles() {
        let mut user = HumanizerConfig::default();
        user.styles.profiles.clear();
        user.styles.set_profile("Casual", StyleProfile::new(1.5, 5));
        user.probabilities.hesitation = 0.25;

        let merged = HumanizerConfig::default().merge(&user);

        assert_eq!(merged.styles.profiles.len(), 3);
        assert_eq!(
            merged.styles.resolve("Casual").profile,
            StyleProfile::new(1.5, 5)
        );
        assert_eq!(merged.probabilities.hesitation, 0.25);
    }
}
