use crate::reports;
use clap::Args;
use shuangforge::config::Config;
use shuangforge::error::SfResult;
use shuangforge::layouts::get_all_schemes;
use shuangforge::scheme::ShuangpinConfig;
use shuangforge::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only known schemes whose name contains this
    #[arg(short, long)]
    pub scheme: Option<String>,

    /// Also score a configuration saved as JSON
    #[arg(long)]
    pub layout_file: Option<String>,
}

pub fn run(args: &EvaluateArgs, scorer: &Scorer) -> SfResult<()> {
    let mut candidates: Vec<(String, ShuangpinConfig)> = get_all_schemes()
        .into_iter()
        .map(|(s, c)| (s.to_string(), c))
        .filter(|(name, _)| match &args.scheme {
            Some(filter) => name.contains(&filter.to_lowercase()),
            None => true,
        })
        .collect();

    if let Some(path) = &args.layout_file {
        candidates.push((path.clone(), ShuangpinConfig::load_from_file(path)?));
    }

    println!("\n🔎 === SCHEME AUDIT === 🔎");
    let mut results = Vec::new();
    for (name, config) in &candidates {
        reports::print_layout_grid(name, config);
        let scores = scorer.score(config)?;
        results.push((name.clone(), scores, scorer.combine(&scores)));
    }

    results.sort_by(|a, b| a.2.total_cmp(&b.2));
    reports::print_scoring_report(&results, scorer);
    Ok(())
}
