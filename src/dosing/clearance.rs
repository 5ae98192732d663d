use crate::models::{PatientInput, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serum creatinine assay factor for µmol/L.
pub const CREATININE_UMOL_FACTOR: f64 = 0.815;
pub const FEMALE_FACTOR: f64 = 0.85;

/// Cockcroft-Gault estimate in mL/min.
pub fn creatinine_clearance(patient: &PatientInput) -> f64 {
    let sex_factor = match patient.sex() {
        Sex::Female => FEMALE_FACTOR,
        Sex::Male => 1.0,
    };
    (140.0 - patient.age() as f64) * patient.weight()
        / (CREATININE_UMOL_FACTOR * patient.serum_creatinine())
        * sex_factor
}

/// Renal function class used to pick the maintenance regimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RenalBand {
    /// clearance > 60
    A,
    /// 40 <= clearance <= 60
    B,
    /// 20 <= clearance < 40
    C,
    /// clearance < 20
    D,
}

impl RenalBand {
    pub const ALL: [RenalBand; 4] = [RenalBand::A, RenalBand::B, RenalBand::C, RenalBand::D];

    /// Ordered checks, first match wins. NaN falls through to `D`.
    pub fn classify(clearance: f64) -> Self {
        if clearance > 60.0 {
            RenalBand::A
        } else if (40.0..=60.0).contains(&clearance) {
            RenalBand::B
        } else if (20.0..40.0).contains(&clearance) {
            RenalBand::C
        } else {
            RenalBand::D
        }
    }

    pub fn frequency_hours(&self) -> u32 {
        match self {
            RenalBand::A | RenalBand::B => 12,
            RenalBand::C => 24,
            RenalBand::D => 48,
        }
    }
}

impl fmt::Display for RenalBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RenalBand::A => "A",
            RenalBand::B => "B",
            RenalBand::C => "C",
            RenalBand::D => "D",
        };
        write!(f, "{}", label)
    }
}
