pub mod record;

use crate::error::{DosingError, DoseResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use record::PatientRecord;

/// Cockcroft-Gault is undefined (non-positive clearance) from this age on.
pub const MAX_AGE_YEARS: u32 = 140;
/// Upper bound on accepted body weight in kg.
pub const MAX_WEIGHT_KG: f64 = 500.0;
/// Lower bound on accepted serum creatinine in µmol/L.
pub const MIN_SERUM_CREATININE_UMOL_L: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Validated patient covariates.
///
/// Fields are private so that a `PatientInput` can only exist once every
/// precondition of the dose calculation holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatientInput {
    age: u32,
    weight: f64,
    serum_creatinine: f64,
    sex: Sex,
}

impl PatientInput {
    /// `weight` in kg, `serum_creatinine` in µmol/L.
    pub fn new(age: u32, weight: f64, serum_creatinine: f64, sex: Sex) -> DoseResult<Self> {
        if age == 0 {
            return Err(DosingError::InvalidPatientInput(
                "Age must be a positive whole number of years".to_string()
            ));
        }
        if age >= MAX_AGE_YEARS {
            return Err(DosingError::InvalidPatientInput(
                format!("Age must be below {} years, got {}", MAX_AGE_YEARS, age)
            ));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(DosingError::InvalidPatientInput(
                format!("Weight must be positive, got {}", weight)
            ));
        }
        if weight > MAX_WEIGHT_KG {
            return Err(DosingError::InvalidPatientInput(
                format!("Weight must not exceed {} kg, got {}", MAX_WEIGHT_KG, weight)
            ));
        }
        if !serum_creatinine.is_finite() || serum_creatinine <= 0.0 {
            return Err(DosingError::InvalidPatientInput(
                format!("Serum creatinine must be positive, got {}", serum_creatinine)
            ));
        }
        if serum_creatinine < MIN_SERUM_CREATININE_UMOL_L {
            return Err(DosingError::InvalidPatientInput(
                format!(
                    "Serum creatinine must be at least {} umol/L, got {}",
                    MIN_SERUM_CREATININE_UMOL_L, serum_creatinine
                )
            ));
        }

        Ok(Self { age, weight, serum_creatinine, sex })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn serum_creatinine(&self) -> f64 {
        self.serum_creatinine
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }
}
