//! Communication styles and their scaling profiles.
//!
//! A style label selects a [`StyleProfile`] that scales how many rewrite
//! operations a single call applies. Labels that are not in the table fall
//! back to a neutral profile instead of failing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Built-in communication styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Style {
    #[default]
    Professional,
    Casual,
    Technical,
}

impl Style {
    /// All built-in styles.
    pub const ALL: [Style; 3] = [Style::Professional, Style::Casual, Style::Technical];

    /// Returns the display label of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Professional => "Professional",
            Style::Casual => "Casual",
            Style::Technical => "Technical",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    /// Parses a style label, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| format!("Unknown style: {}", s))
    }
}

/// Scaling parameters for one style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Multiplier applied to the scaled modification count.
    pub factor: f64,

    /// Number of operations applied at the default intensity before scaling.
    pub base_mod_count: usize,
}

impl StyleProfile {
    /// Creates a new profile.
    pub const fn new(factor: f64, base_mod_count: usize) -> Self {
        Self {
            factor,
            base_mod_count,
        }
    }

    /// The neutral profile used for unknown style labels.
    pub const fn neutral() -> Self {
        Self::new(1.0, 3)
    }

    /// Checks that the factor is a positive finite number.
    pub fn validate(&self) -> Result<(), String> {
        if !self.factor.is_finite() || self.factor <= 0.0 {
            return Err(format!(
                "style factor must be a positive number, got {}",
                self.factor
            ));
        }
        Ok(())
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Result of resolving a style label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    /// The profile to use.
    pub profile: StyleProfile,

    /// Whether the label matched an entry of the table.
    pub known: bool,
}

/// Table mapping style labels to profiles.
///
/// Lookups ignore ASCII case, so `"casual"` resolves to the `Casual` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Known profiles keyed by label.
    #[serde(default = "default_profiles")]
    pub profiles: BTreeMap<String, StyleProfile>,

    /// Profile used for labels absent from `profiles`.
    #[serde(default)]
    pub fallback: StyleProfile,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
            fallback: StyleProfile::neutral(),
        }
    }
}

impl StyleConfig {
    /// Resolves a label to its profile, falling back to the neutral profile.
    ///
    /// # Example
    ///
    /// ```
    /// use text_humanizer::style::StyleConfig;
    ///
    /// let styles = StyleConfig::default();
    /// assert!(styles.resolve("casual").known);
    /// assert!(!styles.resolve("Poetic").known);
    /// assert_eq!(styles.resolve("Poetic").profile.factor, 1.0);
    /// ```
    pub fn resolve(&self, label: &str) -> ResolvedStyle {
        let label = label.trim();

        let found = self.profiles.get(label).or_else(|| {
            self.profiles
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(label))
                .map(|(_, profile)| profile)
        });

        match found {
            Some(profile) => ResolvedStyle {
                profile: *profile,
                known: true,
            },
            None => ResolvedStyle {
                profile: self.fallback,
                known: false,
            },
        }
    }

    /// Returns the profile for a built-in style.
    pub fn profile(&self, style: Style) -> StyleProfile {
        self.resolve(style.as_str()).profile
    }

    /// Inserts or replaces a profile.
    ///
    /// Labels are matched case-insensitively, so setting `"casual"` replaces
    /// the built-in `Casual` profile and is stored under the canonical label.
    pub fn set_profile(&mut self, label: impl Into<String>, profile: StyleProfile) {
        let label = label.into();
        let label = match label.parse::<Style>() {
            Ok(style) => style.to_string(),
            Err(_) => label.trim().to_string(),
        };

        self.profiles
            .retain(|name, _| !name.eq_ignore_ascii_case(&label));
        self.profiles.insert(label, profile);
    }

    /// Validates every profile including the fallback.
    pub fn validate(&self) -> Result<(), String> {
        self.fallback
            .validate()
            .map_err(|e| format!("fallback: {}", e))?;

        for (label, profile) in &self.profiles {
            profile.validate().map_err(|e| format!("{}: {}", label, e))?;
        }

        Ok(())
    }
}

fn default_profiles() -> BTreeMap<String, StyleProfile> {
    let mut profiles = BTreeMap::new();
    profiles.insert(Style::Professional.to_string(), StyleProfile::new(1.0, 3));
    profiles.insert(Style::Casual.to_string(), StyleProfile::new(1.2, 4));
    profiles.insert(Style::Technical.to_string(), StyleProfile::new(0.8, 3));
    profiles
}
