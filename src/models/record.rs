use super::{PatientInput, Sex};
use crate::error::DoseResult;
use serde::{Deserialize, Serialize};

/// One row of a batch input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub age: u32,
    pub weight: f64,
    pub creatinine: f64,
    pub sex: Sex,
}

impl PatientRecord {
    pub fn to_input(&self) -> DoseResult<PatientInput> {
        PatientInput::new(self.age, self.weight, self.creatinine, self.sex)
    }
}
