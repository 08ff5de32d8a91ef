pub mod engine;
pub mod loader;
pub mod physics;
pub mod standardize;
pub mod types;

use self::loader::FrequencyTables;
pub use self::types::{Scores, BASELINE, BASELINE_VERSION};
use crate::config::ScoringWeights;
use crate::error::{ShuangForgeError, SfResult};
use crate::scheme::ShuangpinConfig;
use tracing::debug;

/// Scores configurations against one fixed set of frequency tables.
pub struct Scorer {
    pub tables: FrequencyTables,
    pub weights: ScoringWeights,
    pub baseline: Scores,
}

impl Scorer {
    pub fn new(tables: FrequencyTables, weights: ScoringWeights) -> SfResult<Self> {
        Self::with_baseline(tables, weights, BASELINE)
    }

    pub fn with_baseline(
        tables: FrequencyTables,
        weights: ScoringWeights,
        baseline: Scores,
    ) -> SfResult<Self> {
        tables.validate()?;
        weights.validate()?;
        let b = &baseline;
        let positive = [
            b.tapping_workload_distribution,
            b.hand_alternation,
            b.finger_alternation,
            b.avoidance_of_big_steps,
            b.hit_direction,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);
        if !positive {
            return Err(ShuangForgeError::Config(format!(
                "Baseline must be strictly positive: {:?}",
                baseline
            )));
        }
        debug!(
            "Scorer ready: {} units, {} pairs",
            tables.singles.len(),
            tables.pairs.len()
        );
        Ok(Self {
            tables,
            weights,
            baseline,
        })
    }

    /// The five raw metrics.
    pub fn score(&self, config: &ShuangpinConfig) -> SfResult<Scores> {
        let standard = standardize::standardize(config, &self.tables);
        engine::score_standardized(config, &standard)
    }

    /// Each metric relative to the population baseline, weighted and summed.
    /// Lower is better.
    pub fn weighted_score(&self, config: &ShuangpinConfig) -> SfResult<f64> {
        Ok(self.combine(&self.score(config)?))
    }

    pub fn combine(&self, s: &Scores) -> f64 {
        let b = &self.baseline;
        let w = &self.weights;
        s.tapping_workload_distribution / b.tapping_workload_distribution * w.weight_workload
            + s.hand_alternation / b.hand_alternation * w.weight_hand_alternation
            + s.finger_alternation / b.finger_alternation * w.weight_finger_alternation
            + s.avoidance_of_big_steps / b.avoidance_of_big_steps * w.weight_big_steps
            + s.hit_direction / b.hit_direction * w.weight_hit_direction
    }
}
