use super::parse::{parse_choice, parse_lenient};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    #[default]
    Mixed,
    Vegetarian,
    Vegan,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Recycling {
    Never,
    #[default]
    Sometimes,
    Always,
}

/// Breakdown categories. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Category {
    Electricity,
    Gas,
    Car,
    Flights,
    Diet,
    Waste,
}

pub const CATEGORY_COUNT: usize = 6;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Normalized lifestyle figures. Numeric fields are clamped to finite,
/// non-negative values again at scoring time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FootprintInput {
    pub electricity_kwh_per_month: f64,
    pub gas_therms_per_month: f64,
    pub car_miles_per_week: f64,
    pub flights_per_year: f64,
    pub diet: Diet,
    pub recycling: Recycling,
}

/// A numeric field as an untrusted source delivers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

impl RawField {
    pub fn to_number(&self) -> f64 {
        match self {
            RawField::Number(n) => sanitize(*n),
            RawField::Text(s) => parse_lenient(s),
        }
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        RawField::Text(s.to_string())
    }
}

impl From<f64> for RawField {
    fn from(n: f64) -> Self {
        RawField::Number(n)
    }
}

/// Form-style input: every field optional, numbers may arrive as text.
/// The short aliases match the field names of the calculator form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFootprintInput {
    #[serde(alias = "electricity")]
    pub electricity_kwh_per_month: Option<RawField>,
    #[serde(alias = "gas")]
    pub gas_therms_per_month: Option<RawField>,
    #[serde(alias = "car")]
    pub car_miles_per_week: Option<RawField>,
    #[serde(alias = "flights")]
    pub flights_per_year: Option<RawField>,
    pub diet: Option<String>,
    pub recycling: Option<String>,
}

impl RawFootprintInput {
    /// Coerces every field. Absent or unparsable numbers become 0.
    /// Unknown diet text falls back to `Mixed` and unknown recycling text to
    /// `Never`, both of which carry the full base score.
    pub fn normalize(&self) -> FootprintInput {
        let num = |f: &Option<RawField>| f.as_ref().map_or(0.0, RawField::to_number);

        FootprintInput {
            electricity_kwh_per_month: num(&self.electricity_kwh_per_month),
            gas_therms_per_month: num(&self.gas_therms_per_month),
            car_miles_per_week: num(&self.car_miles_per_week),
            flights_per_year: num(&self.flights_per_year),
            diet: match &self.diet {
                None => Diet::default(),
                Some(s) => parse_choice(s).unwrap_or(Diet::Mixed),
            },
            recycling: match &self.recycling {
                None => Recycling::default(),
                Some(s) => parse_choice(s).unwrap_or(Recycling::Never),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownEntry {
    #[serde(rename = "name")]
    pub category: Category,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintResult {
    pub total: f64,
    pub breakdown: [BreakdownEntry; CATEGORY_COUNT],
    pub level: Level,
    pub tips: &'static [&'static str],
}

impl FootprintResult {
    pub fn value_of(&self, category: Category) -> f64 {
        self.breakdown
            .iter()
            .find(|e| e.category == category)
            .map_or(0.0, |e| e.value)
    }

    /// Category with the largest contribution. Ties go to the earlier entry.
    pub fn dominant(&self) -> Category {
        self.breakdown
            .iter()
            .fold(self.breakdown[0], |best, e| {
                if e.value > best.value {
                    *e
                } else {
                    best
                }
            })
            .category
    }

    /// Percentage of the total for each entry; all zeros when the total is 0.
    pub fn shares(&self) -> [f64; CATEGORY_COUNT] {
        let mut out = [0.0; CATEGORY_COUNT];
        if self.total > 0.0 {
            for (slot, e) in out.iter_mut().zip(self.breakdown.iter()) {
                *slot = e.value / self.total * 100.0;
            }
        }
        out
    }
}

/// Finite and positive, otherwise zero.
pub fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
