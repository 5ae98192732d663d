pub mod clearance;
pub mod infusion;
pub mod rounding;

use crate::config::RoundingMode;
use crate::models::PatientInput;
use log::debug;
use serde::{Deserialize, Serialize};

pub use clearance::{creatinine_clearance, RenalBand};
pub use infusion::recommended_minutes;
pub use rounding::round_dose;

/// Loading dose per kg when clearance is at least [`LOADING_CLEARANCE_THRESHOLD`].
pub const LOADING_DOSE_MG_PER_KG: f64 = 25.0;
pub const REDUCED_LOADING_DOSE_MG_PER_KG: f64 = 15.0;
pub const LOADING_CLEARANCE_THRESHOLD: f64 = 20.0;
pub const MAINTENANCE_MIN_MG_PER_KG: f64 = 15.0;
/// Upper end of the maintenance range, only used in band A.
pub const MAINTENANCE_MAX_MG_PER_KG: f64 = 20.0;

/// Rounded regimen for one patient. All doses in mg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosingResult {
    pub loading_dose: f64,
    pub maintenance_dose_min: f64,
    pub maintenance_dose_max: f64,
    pub maintenance_frequency_hours: u32,
}

impl DosingResult {
    pub fn has_maintenance_range(&self) -> bool {
        self.maintenance_dose_min != self.maintenance_dose_max
    }
}

/// Everything the presentation layer shows for one patient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosingAssessment {
    pub creatinine_clearance: f64,
    pub band: RenalBand,
    pub dose: DosingResult,
    pub loading_infusion_minutes: f64,
    pub maintenance_infusion_minutes: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DosingCalculator {
    rounding: RoundingMode,
}

impl DosingCalculator {
    pub fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn compute_dose(&self, patient: &PatientInput) -> DosingResult {
        let clearance = creatinine_clearance(patient);
        self.regimen_for_clearance(clearance, patient.weight())
    }

    /// Regimen for an already estimated clearance (mL/min) and weight (kg).
    pub fn regimen_for_clearance(&self, clearance: f64, weight: f64) -> DosingResult {
        let band = RenalBand::classify(clearance);
        let maintenance_min = MAINTENANCE_MIN_MG_PER_KG * weight;
        let maintenance_max = match band {
            RenalBand::A => MAINTENANCE_MAX_MG_PER_KG * weight,
            RenalBand::B | RenalBand::C | RenalBand::D => maintenance_min,
        };

        // Independent of the band: only the 20 mL/min threshold matters here.
        let loading = if clearance >= LOADING_CLEARANCE_THRESHOLD {
            LOADING_DOSE_MG_PER_KG * weight
        } else {
            REDUCED_LOADING_DOSE_MG_PER_KG * weight
        };

        DosingResult {
            loading_dose: round_dose(loading, self.rounding),
            maintenance_dose_min: round_dose(maintenance_min, self.rounding),
            maintenance_dose_max: round_dose(maintenance_max, self.rounding),
            maintenance_frequency_hours: band.frequency_hours(),
        }
    }

    /// Dose plus the infusion advice for the loading and maximum maintenance dose.
    pub fn assess(&self, patient: &PatientInput) -> DosingAssessment {
        let clearance = creatinine_clearance(patient);
        let band = RenalBand::classify(clearance);
        let dose = self.regimen_for_clearance(clearance, patient.weight());

        debug!(
            "CrCl {:.1} mL/min (band {}), LD {} mg, MD {}-{} mg q{}h",
            clearance,
            band,
            dose.loading_dose,
            dose.maintenance_dose_min,
            dose.maintenance_dose_max,
            dose.maintenance_frequency_hours
        );

        DosingAssessment {
            creatinine_clearance: clearance,
            band,
            dose,
            loading_infusion_minutes: recommended_minutes(dose.loading_dose),
            maintenance_infusion_minutes: recommended_minutes(dose.maintenance_dose_max),
        }
    }
}
