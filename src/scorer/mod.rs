pub mod parse;
pub mod tips;
pub mod types;

pub use self::types::{
    BreakdownEntry, Category, Diet, FootprintInput, FootprintResult, Level, RawField,
    RawFootprintInput, Recycling, CATEGORY_COUNT,
};
use self::types::sanitize;
use crate::config::ScoringWeights;

/// Ceiling for a single sub-score. Six of them still sum to a finite total.
pub const MAX_CONTRIBUTION: f64 = f64::MAX / 8.0;

/// Holds the weight table. Immutable once built, so one instance can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn diet_factor(&self, diet: Diet) -> f64 {
        match diet {
            Diet::Mixed => self.weights.diet_factor_mixed,
            Diet::Vegetarian => self.weights.diet_factor_vegetarian,
            Diet::Vegan => self.weights.diet_factor_vegan,
        }
    }

    pub fn recycling_factor(&self, recycling: Recycling) -> f64 {
        match recycling {
            Recycling::Never => self.weights.recycling_factor_never,
            Recycling::Sometimes => self.weights.recycling_factor_sometimes,
            Recycling::Always => self.weights.recycling_factor_always,
        }
    }

    /// Tier bounds are inclusive lower bounds: a total sitting exactly on a
    /// threshold belongs to the higher tier.
    pub fn classify(&self, total: f64) -> Level {
        if total >= self.weights.tier_high_min {
            Level::High
        } else if total >= self.weights.tier_medium_min {
            Level::Medium
        } else {
            Level::Low
        }
    }

    pub fn compute(&self, input: &FootprintInput) -> FootprintResult {
        let w = &self.weights;

        let values = [
            sanitize(input.electricity_kwh_per_month) * w.weight_electricity,
            sanitize(input.gas_therms_per_month) * w.weight_gas,
            sanitize(input.car_miles_per_week) * w.weight_car,
            sanitize(input.flights_per_year) * w.weight_flights,
            w.diet_base * self.diet_factor(input.diet),
            w.waste_base * self.recycling_factor(input.recycling),
        ]
        .map(|v| v.min(MAX_CONTRIBUTION));

        let breakdown = [
            Category::Electricity,
            Category::Gas,
            Category::Car,
            Category::Flights,
            Category::Diet,
            Category::Waste,
        ]
        .map(|category| BreakdownEntry {
            category,
            value: values[category as usize],
        });

        // Summed in breakdown order so the total matches a re-sum exactly.
        let total = breakdown.iter().fold(0.0, |acc, e| acc + e.value);
        let level = self.classify(total);

        FootprintResult {
            total,
            breakdown,
            level,
            tips: level.tips(),
        }
    }
}

/// Scores with the default weight table.
pub fn compute(input: &FootprintInput) -> FootprintResult {
    Scorer::default().compute(input)
}
