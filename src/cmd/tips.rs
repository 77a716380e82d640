use crate::reports;
use clap::Args;
use ecotally::config::{Config, ScoringWeights};

#[derive(Args, Debug, Clone)]
pub struct TipsArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(weights: &ScoringWeights) {
    reports::print_tier_table(weights);
}
