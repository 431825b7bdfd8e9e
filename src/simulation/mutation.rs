//! Mutation policy applied to network weights during reproduction.
//!
//! The policy is plain data so it can be configured, serialized, and tested
//! on its own. Each weight is visited once; with probability `probability`
//! it is perturbed, otherwise it is left bit-identical.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a selected weight is changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Perturbation {
    /// Adds an offset drawn uniformly from `[low, high)`.
    ///
    /// The default `[0, 1)` range only ever pushes weights upward.
    UniformOffset {
        /// Inclusive lower bound of the offset.
        low: f32,
        /// Exclusive upper bound of the offset.
        high: f32,
    },
    /// Replaces the weight with a fresh value drawn uniformly from `[low, high)`.
    Resample {
        /// Inclusive lower bound.
        low: f32,
        /// Exclusive upper bound.
        high: f32,
    },
}

impl Perturbation {
    fn bounds(&self) -> (f32, f32) {
        match *self {
            Perturbation::UniformOffset { low, high } | Perturbation::Resample { low, high } => {
                (low, high)
            }
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        let (low, high) = self.bounds();
        if high > low {
            rng.random_range(low..high)
        } else {
            low
        }
    }

    /// Returns `true` if the range is finite and non-empty.
    pub fn is_valid(&self) -> bool {
        let (low, high) = self.bounds();
        low.is_finite() && high.is_finite() && low < high
    }
}

/// Per-weight mutation policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationPolicy {
    /// Chance that any single weight is perturbed.
    pub probability: f32,
    /// What happens to a weight that is selected.
    pub perturbation: Perturbation,
}

impl Default for MutationPolicy {
    fn default() -> Self {
        Self {
            probability: 0.1,
            perturbation: Perturbation::UniformOffset {
                low: 0.0,
                high: 1.0,
            },
        }
    }
}

impl MutationPolicy {
    /// A policy that never changes anything.
    pub fn none() -> Self {
        Self {
            probability: 0.0,
            ..Self::default()
        }
    }

    /// Returns the (possibly) perturbed value of `weight`.
    #[inline]
    pub fn apply<R: Rng>(&self, weight: f32, rng: &mut R) -> f32 {
        if rng.random::<f32>() < self.probability {
            match self.perturbation {
                Perturbation::UniformOffset { .. } => weight + self.perturbation.sample(rng),
                Perturbation::Resample { .. } => self.perturbation.sample(rng),
            }
        } else {
            weight
        }
    }
}
