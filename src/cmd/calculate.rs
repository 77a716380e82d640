use crate::reports;
use clap::Args;
use ecotally::api;
use ecotally::config::{Config, ScoringWeights};
use ecotally::error::EtResult;
use ecotally::scorer::{RawField, RawFootprintInput};

#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Monthly electricity usage (kWh)
    #[arg(short, long)]
    pub electricity: Option<String>,

    /// Monthly natural gas usage (therms)
    #[arg(short, long)]
    pub gas: Option<String>,

    /// Weekly car mileage
    #[arg(short, long)]
    pub car: Option<String>,

    /// Flights per year
    #[arg(short, long)]
    pub flights: Option<String>,

    /// mixed, vegetarian or vegan
    #[arg(short, long)]
    pub diet: Option<String>,

    /// never, sometimes or always
    #[arg(short, long)]
    pub recycling: Option<String>,

    /// Print the report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl CalculateArgs {
    pub fn raw_input(&self) -> RawFootprintInput {
        let text = |v: &Option<String>| v.as_deref().map(RawField::from);
        RawFootprintInput {
            electricity_kwh_per_month: text(&self.electricity),
            gas_therms_per_month: text(&self.gas),
            car_miles_per_week: text(&self.car),
            flights_per_year: text(&self.flights),
            diet: self.diet.clone(),
            recycling: self.recycling.clone(),
        }
    }
}

pub fn run(args: &CalculateArgs, weights: ScoringWeights) -> EtResult<()> {
    let report = api::calculate(&args.raw_input(), Some(weights))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_summary(&report);
    reports::print_breakdown(&report);
    reports::print_tips(&report.tips);
    Ok(())
}
