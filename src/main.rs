use clap::{Parser, Subcommand};
use shuangforge::config::ScoringWeights;
use shuangforge::error::SfResult;
use shuangforge::scorer::loader::{load_frequency_tsv, FrequencyTables};
use shuangforge::scorer::Scorer;
use std::fs::File;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding single_freqs.json + pair_freqs.json, or a .tsv file
    #[arg(global = true, short, long, default_value = "data/frequencies")]
    freqs: String,

    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Evaluate(cmd::evaluate::EvaluateArgs),
    Generate(cmd::generate::GenerateArgs),
    Baseline(cmd::baseline::BaselineArgs),
}

fn load_scorer(cli: &Cli, cli_weights: &ScoringWeights) -> SfResult<Scorer> {
    info!("📂 Loading Frequencies: {}", cli.freqs);
    let path = Path::new(&cli.freqs);
    let tables = if path.extension().is_some_and(|ext| ext == "tsv") {
        load_frequency_tsv(File::open(path)?)?
    } else {
        FrequencyTables::load_from_dir(path)?
    };

    let weights = match &cli.weights {
        Some(p) => {
            info!("⚖️  Loading Weights from: {}", p);
            ScoringWeights::load_from_file(p)?
        }
        None => cli_weights.clone(),
    };
    if weights != ScoringWeights::default() {
        warn!("Non-default weights: scores are not comparable with the frozen baseline set.");
    }

    Scorer::new(tables, weights)
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Initializing ShuangForge...");

    let result = match &cli.command {
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Evaluate(args) => {
            load_scorer(&cli, &args.config.weights).and_then(|s| cmd::evaluate::run(args, &s))
        }
        Commands::Baseline(args) => {
            load_scorer(&cli, &args.config.weights).and_then(|s| cmd::baseline::run(args, &s))
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
