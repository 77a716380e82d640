use crate::config::ScoringWeights;
use crate::error::{EcoTallyError, EtResult};
use crate::scorer::{Category, FootprintResult, Level, RawFootprintInput, Scorer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownShare {
    pub name: Category,
    pub value: f64,
    /// Percent of the total (0 when the total is 0).
    pub share: f64,
}

/// Everything a front end needs to render one calculation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationReport {
    pub total: f64,
    pub total_display: String,
    pub level: Level,
    pub headline: String,
    pub dominant: Category,
    pub breakdown: Vec<BreakdownShare>,
    pub tips: Vec<String>,
}

impl From<&FootprintResult> for CalculationReport {
    fn from(result: &FootprintResult) -> Self {
        let breakdown = result
            .breakdown
            .iter()
            .zip(result.shares())
            .map(|(e, share)| BreakdownShare {
                name: e.category,
                value: e.value,
                share,
            })
            .collect();

        Self {
            total: result.total,
            total_display: format!("{:.2}", result.total),
            level: result.level,
            headline: result.level.headline().to_string(),
            dominant: result.dominant(),
            breakdown,
            tips: result.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

fn build_scorer(weights: Option<ScoringWeights>) -> EtResult<Scorer> {
    match weights {
        Some(w) => {
            w.validate()?;
            debug!("API: Using custom weights");
            Ok(Scorer::new(w))
        }
        None => Ok(Scorer::default()),
    }
}

/// Service: score one form submission.
pub fn calculate(
    raw: &RawFootprintInput,
    weights: Option<ScoringWeights>,
) -> EtResult<CalculationReport> {
    let scorer = build_scorer(weights)?;
    let input = raw.normalize();
    debug!("API: Normalized input {:?}", input);

    let result = scorer.compute(&input);
    info!(
        "API: Footprint {:.2} ({}), dominant category {}",
        result.total,
        result.level,
        result.dominant()
    );

    Ok(CalculationReport::from(&result))
}

/// Service: score many submissions with one weight table, preserving order.
pub fn calculate_batch(
    raws: &[RawFootprintInput],
    weights: Option<ScoringWeights>,
) -> EtResult<Vec<CalculationReport>> {
    let scorer = build_scorer(weights)?;
    info!("API: Scoring batch of {} inputs", raws.len());

    Ok(raws
        .iter()
        .map(|raw| CalculationReport::from(&scorer.compute(&raw.normalize())))
        .collect())
}

/// Reads a JSON file holding either one input object or an array of them.
pub fn load_inputs<P: AsRef<Path>>(path: P) -> EtResult<Vec<RawFootprintInput>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let inputs = match value {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<RawFootprintInput>>(value)?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(value)?],
        other => {
            return Err(EcoTallyError::Validation(format!(
                "{:?}: expected an object or an array of objects, found {}",
                path,
                json_kind(&other)
            )))
        }
    };

    debug!("Loaded {} inputs from {:?}", inputs.len(), path);
    Ok(inputs)
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
