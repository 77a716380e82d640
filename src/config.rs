use crate::error::{EcoTallyError, EtResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
}

/// Multipliers and thresholds used by the scorer.
///
/// The defaults are illustrative constants, not an emissions model.
/// They are kept exactly as published so results stay comparable.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === PER-UNIT USAGE ===
    #[arg(long, default_value_t = 0.5)]
    pub weight_electricity: f64,
    #[arg(long, default_value_t = 0.2)]
    pub weight_gas: f64,
    #[arg(long, default_value_t = 0.3)]
    pub weight_car: f64,
    #[arg(long, default_value_t = 1.5)]
    pub weight_flights: f64,

    // === DIET ===
    #[arg(long, default_value_t = 2.0)]
    pub diet_base: f64,
    #[arg(long, default_value_t = 1.0)]
    pub diet_factor_mixed: f64,
    #[arg(long, default_value_t = 0.7)]
    pub diet_factor_vegetarian: f64,
    #[arg(long, default_value_t = 0.5)]
    pub diet_factor_vegan: f64,

    // === WASTE ===
    #[arg(long, default_value_t = 1.0)]
    pub waste_base: f64,
    #[arg(long, default_value_t = 1.0)]
    pub recycling_factor_never: f64,
    #[arg(long, default_value_t = 0.9)]
    pub recycling_factor_sometimes: f64,
    #[arg(long, default_value_t = 0.8)]
    pub recycling_factor_always: f64,

    // === TIERS (lower bounds, inclusive) ===
    #[arg(long, default_value_t = 5.0)]
    pub tier_medium_min: f64,
    #[arg(long, default_value_t = 10.0)]
    pub tier_high_min: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_electricity: 0.5,
            weight_gas: 0.2,
            weight_car: 0.3,
            weight_flights: 1.5,
            diet_base: 2.0,
            diet_factor_mixed: 1.0,
            diet_factor_vegetarian: 0.7,
            diet_factor_vegan: 0.5,
            waste_base: 1.0,
            recycling_factor_never: 1.0,
            recycling_factor_sometimes: 0.9,
            recycling_factor_always: 0.8,
            tier_medium_min: 5.0,
            tier_high_min: 10.0,
        }
    }
}

impl ScoringWeights {
    /// Loads a JSON weights profile. Missing keys keep their defaults.
    /// Callers run `validate` once overrides have been merged in.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> EtResult<Self> {
        let path = path.as_ref();
        debug!("Reading weights profile {:?}", path);
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over only the flags the user actually typed, so a profile
    /// loaded from disk is not clobbered by clap defaults.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_electricity);
        update_if_present!(weight_gas);
        update_if_present!(weight_car);
        update_if_present!(weight_flights);

        update_if_present!(diet_base);
        update_if_present!(diet_factor_mixed);
        update_if_present!(diet_factor_vegetarian);
        update_if_present!(diet_factor_vegan);

        update_if_present!(waste_base);
        update_if_present!(recycling_factor_never);
        update_if_present!(recycling_factor_sometimes);
        update_if_present!(recycling_factor_always);

        update_if_present!(tier_medium_min);
        update_if_present!(tier_high_min);
    }

    /// Every weight must be finite and non-negative, and the tier bounds
    /// must be ordered.
    pub fn validate(&self) -> EtResult<()> {
        let fields = [
            ("weight_electricity", self.weight_electricity),
            ("weight_gas", self.weight_gas),
            ("weight_car", self.weight_car),
            ("weight_flights", self.weight_flights),
            ("diet_base", self.diet_base),
            ("diet_factor_mixed", self.diet_factor_mixed),
            ("diet_factor_vegetarian", self.diet_factor_vegetarian),
            ("diet_factor_vegan", self.diet_factor_vegan),
            ("waste_base", self.waste_base),
            ("recycling_factor_never", self.recycling_factor_never),
            ("recycling_factor_sometimes", self.recycling_factor_sometimes),
            ("recycling_factor_always", self.recycling_factor_always),
            ("tier_medium_min", self.tier_medium_min),
            ("tier_high_min", self.tier_high_min),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EcoTallyError::Config(format!(
                    "'{}' must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.tier_medium_min > self.tier_high_min {
            return Err(EcoTallyError::Config(format!(
                "tier_medium_min ({}) exceeds tier_high_min ({})",
                self.tier_medium_min, self.tier_high_min
            )));
        }

        Ok(())
    }
}
