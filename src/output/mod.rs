use crate::batch::{BatchOutcome, BatchSummary};
use crate::dosing::{DosingAssessment, DosingResult};
use crate::error::DoseResult;
use std::fs::File;
use std::path::Path;
use log::info;

/// Human readable result panel for a single patient.
pub fn render_text(assessment: &DosingAssessment) -> String {
    let dose = &assessment.dose;
    format!(
        "Estimated creatinine clearance: {:.1} mL/min (band {})\n\
         Doses rounded to nearest 250mg.\n\
         Loading dose: {} mg (administer over {} minutes)\n\
         Maintenance dose: {} q{}h (administer over {} minutes)\n\
         For other details refer to the local vancomycin dosing protocol.\n",
        assessment.creatinine_clearance,
        assessment.band,
        dose.loading_dose,
        assessment.loading_infusion_minutes,
        maintenance_label(dose),
        dose.maintenance_frequency_hours,
        assessment.maintenance_infusion_minutes,
    )
}

fn maintenance_label(dose: &DosingResult) -> String {
    if dose.has_maintenance_range() {
        format!("{}-{} mg", dose.maintenance_dose_min, dose.maintenance_dose_max)
    } else {
        format!("{} mg", dose.maintenance_dose_max)
    }
}

pub fn render_json(assessment: &DosingAssessment) -> DoseResult<String> {
    Ok(serde_json::to_string_pretty(assessment)?)
}

pub fn save_results<P: AsRef<Path>>(outcome: &BatchOutcome, output_dir: P) -> DoseResult<BatchSummary> {
    let output_path = output_dir.as_ref();

    save_dosing_table(outcome, output_path.join("dosing_results.csv"))?;

    let summary = BatchSummary::from_outcome(outcome);
    save_batch_summary(&summary, output_path.join("batch_summary.json"))?;

    info!("All results saved to {:?}", output_path);
    Ok(summary)
}

fn save_dosing_table<P: AsRef<Path>>(outcome: &BatchOutcome, path: P) -> DoseResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "PATIENT_ID", "AGE", "WEIGHT", "CREATININE", "SEX", "CRCL", "BAND",
        "LOADING_DOSE", "MD_MIN", "MD_MAX", "MD_FREQ_H", "LD_INFUSION_MIN", "MD_INFUSION_MIN",
    ])?;

    for dosing in &outcome.doses {
        let record = &dosing.record;
        let assessment = &dosing.assessment;
        writer.write_record(&[
            record.id.clone(),
            record.age.to_string(),
            record.weight.to_string(),
            record.creatinine.to_string(),
            record.sex.to_string(),
            format!("{:.2}", assessment.creatinine_clearance),
            assessment.band.to_string(),
            assessment.dose.loading_dose.to_string(),
            assessment.dose.maintenance_dose_min.to_string(),
            assessment.dose.maintenance_dose_max.to_string(),
            assessment.dose.maintenance_frequency_hours.to_string(),
            assessment.loading_infusion_minutes.to_string(),
            assessment.maintenance_infusion_minutes.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn save_batch_summary<P: AsRef<Path>>(summary: &BatchSummary, path: P) -> DoseResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}
