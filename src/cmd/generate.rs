use crate::reports;
use clap::Args;
use shuangforge::config::SamplingParams;
use shuangforge::error::SfResult;
use shuangforge::optimizer::generate_config;
use shuangforge::scheme::InitialConstraints;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub sampling: SamplingParams,

    /// Apply the default `g`/`h` initial constraints
    #[arg(long, default_value_t = false)]
    pub constrained: bool,

    /// Write the configuration here instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: &GenerateArgs) -> SfResult<()> {
    let mut rng = match args.sampling.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let constraints = args.constrained.then(InitialConstraints::defaults);

    let config = generate_config(&mut rng, constraints.as_ref(), args.sampling.max_attempts)?;
    config.validate()?;

    reports::print_layout_grid("GENERATED", &config);
    match &args.out {
        Some(path) => {
            config.save_to_file(path)?;
            info!("💾 Saved to {}", path);
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
