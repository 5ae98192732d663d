use crate::config::RoundingMode;

pub const DOSE_INCREMENT_MG: f64 = 250.0;

/// Round a dose to the nearest multiple of [`DOSE_INCREMENT_MG`].
pub fn round_dose(dose_mg: f64, mode: RoundingMode) -> f64 {
    let steps = dose_mg / DOSE_INCREMENT_MG;
    let rounded = match mode {
        RoundingMode::HalfAwayFromZero => steps.round(),
        RoundingMode::HalfEven => steps.round_ties_even(),
    };
    rounded * DOSE_INCREMENT_MG
}
