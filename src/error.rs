use thiserror::Error;

#[derive(Error, Debug)]
pub enum DosingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid patient input: {0}")]
    InvalidPatientInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type DoseResult<T> = Result<T, DosingError>;
