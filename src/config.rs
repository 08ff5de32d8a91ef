use crate::error::{ShuangForgeError, SfResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub sampling: SamplingParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Random configurations drawn for a Monte Carlo baseline
    #[arg(long, default_value_t = 4000)]
    pub samples: usize,

    /// Draws allowed before a constrained generation gives up
    #[arg(long, default_value_t = 10_000)]
    pub max_attempts: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            samples: 4000,
            max_attempts: 10_000,
            seed: None,
        }
    }
}

/// Importance of each metric in the weighted score. Versioned together with
/// [`crate::scorer::BASELINE`].
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    #[arg(long, default_value_t = 0.45)]
    pub weight_workload: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_hand_alternation: f64,
    #[arg(long, default_value_t = 0.8)]
    pub weight_finger_alternation: f64,
    #[arg(long, default_value_t = 0.7)]
    pub weight_big_steps: f64,
    #[arg(long, default_value_t = 0.6)]
    pub weight_hit_direction: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_workload: 0.45,
            weight_hand_alternation: 1.0,
            weight_finger_alternation: 0.8,
            weight_big_steps: 0.7,
            weight_hit_direction: 0.6,
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: ScoringWeights = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> SfResult<()> {
        let all = [
            self.weight_workload,
            self.weight_hand_alternation,
            self.weight_finger_alternation,
            self.weight_big_steps,
            self.weight_hit_direction,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ShuangForgeError::Config(format!(
                "Weights must be finite and non-negative: {:?}",
                self
            )));
        }
        Ok(())
    }
}
