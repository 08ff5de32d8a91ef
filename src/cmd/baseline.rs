use crate::reports;
use clap::Args;
use shuangforge::config::Config;
use shuangforge::error::SfResult;
use shuangforge::optimizer::par_average_scores;
use shuangforge::scorer::Scorer;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BaselineArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: &BaselineArgs, scorer: &Scorer) -> SfResult<()> {
    let params = &args.config.sampling;
    let seed = params.seed.unwrap_or_else(|| fastrand::u64(..));
    let start = Instant::now();

    let averages = par_average_scores(scorer, seed, params.samples, params.max_attempts)?;

    info!(
        "Sampled {} configurations in {:.2}s (seed {})",
        params.samples,
        start.elapsed().as_secs_f32(),
        seed
    );
    reports::print_baseline_report(&averages, &scorer.baseline);
    Ok(())
}
