pub const MINIMUM_INFUSION_MINUTES: f64 = 60.0;
pub const STANDARD_INFUSION_MINUTES: f64 = 120.0;
/// Maximum administration rate in mg per minute.
pub const INFUSION_RATE_MG_PER_MIN: f64 = 10.0;

/// Recommended administration time for a single dose, in minutes.
///
/// Kept as `max(60, 120, dose / 10)`; the 60 minute term never wins.
pub fn recommended_minutes(dose_mg: f64) -> f64 {
    MINIMUM_INFUSION_MINUTES
        .max(STANDARD_INFUSION_MINUTES)
        .max(dose_mg / INFUSION_RATE_MG_PER_MIN)
}
