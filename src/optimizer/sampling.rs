use super::generation::generate_config;
use crate::error::{ShuangForgeError, SfResult};
use crate::scorer::{Scorer, Scores};
use fastrand::Rng;
use rayon::prelude::*;
use tracing::info;

/// Draws `n` unconstrained configurations and averages their raw scores.
/// Used offline to re-derive [`crate::scorer::BASELINE`].
pub fn average_scores(
    scorer: &Scorer,
    rng: &mut Rng,
    n: usize,
    max_attempts: usize,
) -> SfResult<Scores> {
    if n == 0 {
        return Err(ShuangForgeError::Config(
            "Cannot average zero samples".to_string(),
        ));
    }
    let mut total = Scores::default();
    for _ in 0..n {
        let config = generate_config(rng, None, max_attempts)?;
        total += scorer.score(&config)?;
    }
    Ok(total / n as f64)
}

/// Parallel [`average_scores`]. Sample `i` is drawn from its own generator
/// seeded with `seed + i`, and the sum is reduced in sample order, so the
/// result does not depend on the thread count.
pub fn par_average_scores(
    scorer: &Scorer,
    seed: u64,
    n: usize,
    max_attempts: usize,
) -> SfResult<Scores> {
    if n == 0 {
        return Err(ShuangForgeError::Config(
            "Cannot average zero samples".to_string(),
        ));
    }
    info!("🎲 Sampling {} random configurations", n);

    let samples: Vec<Scores> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut rng = Rng::with_seed(seed.wrapping_add(i as u64));
            let config = generate_config(&mut rng, None, max_attempts)?;
            scorer.score(&config)
        })
        .collect::<SfResult<Vec<_>>>()?;

    let total: Scores = samples.into_iter().sum();
    Ok(total / n as f64)
}
