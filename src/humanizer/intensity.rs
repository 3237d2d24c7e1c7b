//! Validated transformation intensity.

use crate::error::HumanizeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly to transform text, from 1 (lightest) to 10 (heaviest).
///
/// The value 5 is neutral: it applies a style's base operation count
/// unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    /// Lowest accepted intensity.
    pub const MIN: u8 = 1;
    /// Highest accepted intensity.
    pub const MAX: u8 = 10;
    /// Neutral intensity.
    pub const DEFAULT: u8 = 5;

    /// Creates an intensity, rejecting values outside `1..=10`.
    ///
    /// # Example
    ///
    /// ```
    /// use text_humanizer::Intensity;
    ///
    /// assert_eq!(Intensity::new(7).unwrap().get(), 7);
    /// assert!(Intensity::new(0).is_err());
    /// assert!(Intensity::new(11).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, HumanizeError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(HumanizeError::InvalidIntensity(value))
        }
    }

    /// Creates an intensity, clamping out-of-range values into `1..=10`.
    ///
    /// Suitable for slider-style inputs that are bounded by the caller anyway.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Returns the raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Ratio of this intensity to the neutral one.
    pub fn scale(self) -> f64 {
        f64::from(self.0) / f64::from(Self::DEFAULT)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Intensity {
    type Error = HumanizeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}
