use super::BatchOutcome;
use crate::config::RoundingMode;
use crate::dosing::RenalBand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSummary {
    pub generated_at: DateTime<Utc>,
    pub n_patients: usize,
    pub n_rejected: usize,
    pub rounding: RoundingMode,
    pub band_counts: BTreeMap<RenalBand, usize>,
    pub clearance: ClearanceSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearanceSummary {
    pub mean: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
}

impl BatchSummary {
    pub fn from_outcome(outcome: &BatchOutcome) -> Self {
        let mut band_counts: BTreeMap<RenalBand, usize> =
            RenalBand::ALL.iter().map(|band| (*band, 0)).collect();
        for dosing in &outcome.doses {
            *band_counts.entry(dosing.assessment.band).or_insert(0) += 1;
        }

        let clearances: Vec<f64> = outcome.doses.iter()
            .map(|d| d.assessment.creatinine_clearance)
            .collect();

        Self {
            generated_at: Utc::now(),
            n_patients: outcome.doses.len(),
            n_rejected: outcome.rejected.len(),
            rounding: outcome.rounding,
            band_counts,
            clearance: ClearanceSummary {
                mean: mean(&clearances),
                sd: std_dev(&clearances),
                min: extreme(&clearances, f64::min),
                max: extreme(&clearances, f64::max),
            },
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn extreme(values: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    values.iter().copied().reduce(pick).unwrap_or(0.0)
}

fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        0.0
    } else {
        let mean_val = mean(values);
        let variance = values.iter()
            .map(|v| (v - mean_val).powi(2))
            .sum::<f64>() / (values.len() - 1) as f64;
        variance.sqrt()
    }
}
