pub mod summary;

use crate::config::RoundingMode;
use crate::dosing::{DosingAssessment, DosingCalculator};
use crate::error::DoseResult;
use crate::models::PatientRecord;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub use summary::BatchSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDosing {
    pub record: PatientRecord,
    pub assessment: DosingAssessment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub rounding: RoundingMode,
    pub doses: Vec<PatientDosing>,
    pub rejected: Vec<RejectedRecord>,
}

pub struct BatchProcessor {
    calculator: DosingCalculator,
}

impl BatchProcessor {
    pub fn new(calculator: DosingCalculator) -> Self {
        Self { calculator }
    }

    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> DoseResult<BatchOutcome> {
        let file = std::fs::File::open(path)?;
        self.process_reader(file)
    }

    /// Rows that fail to parse or validate are recorded and skipped.
    pub fn process_reader<R: Read>(&self, reader: R) -> DoseResult<BatchOutcome> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut outcome = BatchOutcome {
            rounding: self.calculator.rounding(),
            ..BatchOutcome::default()
        };

        for (index, row) in csv_reader.deserialize::<PatientRecord>().enumerate() {
            let row_number = index + 1;
            let record = match row {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping row {}: {}", row_number, e);
                    outcome.rejected.push(RejectedRecord { row: row_number, reason: e.to_string() });
                    continue;
                }
            };

            match record.to_input() {
                Ok(input) => {
                    debug!("Dosing patient {}", record.id);
                    let assessment = self.calculator.assess(&input);
                    outcome.doses.push(PatientDosing { record, assessment });
                }
                Err(e) => {
                    warn!("Skipping patient {} (row {}): {}", record.id, row_number, e);
                    outcome.rejected.push(RejectedRecord { row: row_number, reason: e.to_string() });
                }
            }
        }

        info!(
            "Batch processed: {} dosed, {} rejected",
            outcome.doses.len(),
            outcome.rejected.len()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dosing::RenalBand;

    const INPUT: &str = "\
id,age,weight,creatinine,sex
P1,60,70,80,male
P2,70,60,150,female
P3,50,abc,90,male
P4,85,55,400,female
P5,40,80,0,male
";

    #[test]
    fn test_batch_skips_invalid_rows() {
        let processor = BatchProcessor::new(DosingCalculator::default());
        let outcome = processor.process_reader(INPUT.as_bytes()).unwrap();

        assert_eq!(outcome.doses.len(), 3);
        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.rejected[0].row, 3);
        assert_eq!(outcome.rejected[1].row, 5);
    }

    #[test]
    fn test_batch_assessments() {
        let processor = BatchProcessor::new(DosingCalculator::default());
        let outcome = processor.process_reader(INPUT.as_bytes()).unwrap();

        let bands: Vec<RenalBand> = outcome.doses.iter().map(|d| d.assessment.band).collect();
        assert_eq!(bands, vec![RenalBand::A, RenalBand::C, RenalBand::D]);
        assert_eq!(outcome.doses[2].record.id, "P4");
        assert_eq!(outcome.doses[2].assessment.dose.maintenance_frequency_hours, 48);
    }
}
