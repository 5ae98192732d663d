//! Vancomycin dose calculator.
//!
//! Estimates creatinine clearance with Cockcroft-Gault, classifies renal
//! function and derives a loading dose, maintenance regimen and infusion
//! times for a single patient.

pub mod batch;
pub mod config;
pub mod dosing;
pub mod error;
pub mod models;
pub mod output;

pub use config::{Config, OutputFormat, RoundingMode};
pub use dosing::{DosingAssessment, DosingCalculator, DosingResult, RenalBand};
pub use error::{DosingError, DoseResult};
pub use models::{PatientInput, Sex};
