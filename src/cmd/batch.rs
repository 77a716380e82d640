use crate::reports;
use clap::Args;
use ecotally::api;
use ecotally::config::{Config, ScoringWeights};
use ecotally::error::EtResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON file with one input object or an array of them
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &BatchArgs, weights: ScoringWeights) -> EtResult<()> {
    info!("📂 Loading inputs: {}", args.input.display());
    let raws = api::load_inputs(&args.input)?;
    let reports_out = api::calculate_batch(&raws, Some(weights))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports_out)?);
    } else {
        reports::print_batch_summary(&reports_out);
    }
    Ok(())
}
