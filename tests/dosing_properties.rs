//! Property tests over generated patient cohorts.
//!
//! Patients are drawn from a seeded generator so that failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use vanc_dosing::dosing::creatinine_clearance;
use vanc_dosing::{DosingCalculator, PatientInput, RenalBand, RoundingMode, Sex};

fn generate_cohort(seed: u64, n: usize) -> Vec<PatientInput> {
    let mut rng = StdRng::seed_from_u64(seed);
    let weight_dist = Normal::new(75.0, 20.0).unwrap();
    let creatinine_dist = Normal::new(120.0, 80.0).unwrap();

    (0..n)
        .map(|_| {
            let age = rng.gen_range(18..=100);
            let weight: f64 = weight_dist.sample(&mut rng);
            let creatinine: f64 = creatinine_dist.sample(&mut rng);
            let sex = if rng.gen_bool(0.5) { Sex::Female } else { Sex::Male };
            PatientInput::new(age, weight.max(30.0).min(200.0), creatinine.max(30.0), sex).unwrap()
        })
        .collect()
}

fn is_dose_step(dose: f64) -> bool {
    dose >= 0.0 && dose % 250.0 == 0.0
}

#[test]
fn test_doses_are_ordered_steps() {
    for mode in [RoundingMode::HalfAwayFromZero, RoundingMode::HalfEven] {
        let calculator = DosingCalculator::new(mode);
        for patient in generate_cohort(42, 500) {
            let result = calculator.compute_dose(&patient);
            assert!(result.maintenance_dose_min <= result.maintenance_dose_max, "{:?}", patient);
            assert!(is_dose_step(result.loading_dose), "{:?}", result);
            assert!(is_dose_step(result.maintenance_dose_min), "{:?}", result);
            assert!(is_dose_step(result.maintenance_dose_max), "{:?}", result);
        }
    }
}

#[test]
fn test_frequency_set_and_range_only_in_band_a() {
    let calculator = DosingCalculator::default();
    for patient in generate_cohort(7, 500) {
        let assessment = calculator.assess(&patient);
        let hours = assessment.dose.maintenance_frequency_hours;
        assert!([12, 24, 48].contains(&hours));
        if assessment.band != RenalBand::A {
            assert_eq!(assessment.dose.maintenance_dose_min, assessment.dose.maintenance_dose_max);
        }
    }
}

#[test]
fn test_frequency_non_decreasing_as_clearance_falls() {
    let calculator = DosingCalculator::default();
    let mut assessments: Vec<_> = generate_cohort(1234, 500)
        .iter()
        .map(|p| calculator.assess(p))
        .collect();
    assessments.sort_by(|a, b| b.creatinine_clearance.total_cmp(&a.creatinine_clearance));

    for pair in assessments.windows(2) {
        assert!(pair[0].dose.maintenance_frequency_hours <= pair[1].dose.maintenance_frequency_hours);
        assert!(pair[0].band <= pair[1].band);
    }
}

#[test]
fn test_loading_dose_follows_twenty_threshold() {
    let calculator = DosingCalculator::default();
    for patient in generate_cohort(99, 500) {
        let clearance = creatinine_clearance(&patient);
        let result = calculator.compute_dose(&patient);
        let per_kg = if clearance >= 20.0 { 25.0 } else { 15.0 };
        let expected = (per_kg * patient.weight() / 250.0).round() * 250.0;
        assert_eq!(result.loading_dose, expected);
    }
}

#[test]
fn test_identical_inputs_identical_outputs() {
    let calculator = DosingCalculator::default();
    for patient in generate_cohort(5, 100) {
        let copy = PatientInput::new(
            patient.age(),
            patient.weight(),
            patient.serum_creatinine(),
            patient.sex(),
        )
        .unwrap();
        assert_eq!(calculator.assess(&patient), calculator.assess(&copy));
    }
}

#[test]
fn test_infusion_never_below_two_hours() {
    let calculator = DosingCalculator::default();
    for patient in generate_cohort(11, 200) {
        let assessment = calculator.assess(&patient);
        assert!(assessment.loading_infusion_minutes >= 120.0);
        assert!(assessment.maintenance_infusion_minutes >= 120.0);
        assert!(assessment.loading_infusion_minutes >= assessment.dose.loading_dose / 10.0);
    }
}

fn assert_output_guarantees(patient: &PatientInput) {
    for mode in [RoundingMode::HalfAwayFromZero, RoundingMode::HalfEven] {
        let assessment = DosingCalculator::new(mode).assess(patient);
        let dose = assessment.dose;
        assert!(assessment.creatinine_clearance.is_finite(), "{:?}", patient);
        for value in [dose.loading_dose, dose.maintenance_dose_min, dose.maintenance_dose_max] {
            assert!(value.is_finite() && is_dose_step(value), "{:?} -> {:?}", patient, dose);
        }
        assert!(dose.maintenance_dose_min <= dose.maintenance_dose_max);
        assert!([12, 24, 48].contains(&dose.maintenance_frequency_hours));
        assert!(assessment.loading_infusion_minutes.is_finite());
        assert!(assessment.maintenance_infusion_minutes.is_finite());
    }
}

#[test]
fn test_largest_accepted_inputs() {
    use vanc_dosing::models::{MAX_WEIGHT_KG, MIN_SERUM_CREATININE_UMOL_L};

    for sex in [Sex::Male, Sex::Female] {
        let patient = PatientInput::new(1, MAX_WEIGHT_KG, MIN_SERUM_CREATININE_UMOL_L, sex).unwrap();
        assert_output_guarantees(&patient);

        let result = DosingCalculator::default().compute_dose(&patient);
        assert_eq!(result.loading_dose, 12500.0);
        assert_eq!(result.maintenance_frequency_hours, 12);
    }
}

#[test]
fn test_smallest_accepted_inputs() {
    for sex in [Sex::Male, Sex::Female] {
        let patient = PatientInput::new(139, 1e-300, 1e300, sex).unwrap();
        assert_output_guarantees(&patient);

        let result = DosingCalculator::default().compute_dose(&patient);
        assert_eq!(result.loading_dose, 0.0);
        assert_eq!(result.maintenance_frequency_hours, 48);
    }
}

#[test]
fn test_oldest_patient_with_heavy_weight() {
    let patient = PatientInput::new(139, 500.0, 1.0, Sex::Female).unwrap();
    assert_output_guarantees(&patient);
}

#[test]
fn test_extreme_assessment_serializes_clearance() {
    use vanc_dosing::models::{MAX_WEIGHT_KG, MIN_SERUM_CREATININE_UMOL_L};

    let patient = PatientInput::new(1, MAX_WEIGHT_KG, MIN_SERUM_CREATININE_UMOL_L, Sex::Male).unwrap();
    let json = vanc_dosing::output::render_json(&DosingCalculator::default().assess(&patient)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["creatinine_clearance"].is_f64());
}
