use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No readings were returned for the selected period")]
    NoData,

    #[error("Insufficient data to determine a peak reading")]
    InsufficientData,
}
