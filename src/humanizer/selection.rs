//! Choosing how many operations to apply, and which.

use super::Intensity;
use crate::rewrite::RewriteOperation;
use crate::style::StyleProfile;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fewest operations a non-empty call applies.
pub const MIN_OPERATIONS: usize = 2;

/// Policy for the base operation count before intensity and style scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionPolicy {
    /// Use the style's fixed `base_mod_count`.
    #[default]
    ScaledBase,
    /// Draw the base uniformly from `[2, 5]` on every call.
    RandomBase,
}

/// Computes the number of operations for one call.
///
/// `clamp(round(base * intensity / 5 * factor), 2, 5)`, rounding half away
/// from zero.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use text_humanizer::humanizer::{modification_count, SelectionPolicy};
/// use text_humanizer::style::StyleProfile;
/// use text_humanizer::Intensity;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let profile = StyleProfile::new(1.0, 3);
/// let intensity = Intensity::new(10).unwrap();
/// assert_eq!(modification_count(SelectionPolicy::ScaledBase, profile, intensity, &mut rng), 5);
/// ```
pub fn modification_count<R: Rng + ?Sized>(
    policy: SelectionPolicy,
    profile: StyleProfile,
    intensity: Intensity,
    rng: &mut R,
) -> usize {
    let base = match policy {
        SelectionPolicy::ScaledBase => profile.base_mod_count,
        SelectionPolicy::RandomBase => rng.gen_range(MIN_OPERATIONS..=RewriteOperation::COUNT),
    };

    let scaled = (base as f64 * intensity.scale() * profile.factor).round();
    if scaled.is_nan() {
        return MIN_OPERATIONS;
    }

    // Saturating float-to-int cast; the clamp bounds the result
    (scaled as usize).clamp(MIN_OPERATIONS, RewriteOperation::COUNT)
}

/// Draws `count` distinct operations in a random application order.
///
/// `count` is clamped to the number of available operations.
pub fn select_operations<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<RewriteOperation> {
    let mut operations = RewriteOperation::ALL.to_vec();
    operations.shuffle(rng);
    operations.truncate(count.min(RewriteOperation::COUNT));
    operations
}
