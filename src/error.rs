use crate::air_data::error::AirDataError;
use crate::analysis::error::AnalysisError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirstatError {
    #[error(transparent)]
    AirData(#[from] AirDataError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Could not resolve a local timestamp for date '{0}'")]
    TimestampResolution(NaiveDate),
}
