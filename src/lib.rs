mod air_data;
mod airstat;
mod analysis;
mod error;
mod table;
mod types;

pub use error::AirstatError;

pub use airstat::*;

pub use air_data::error::AirDataError;
pub use air_data::fetch::{HistoryFetcher, HistoryQuery, HISTORY_ENDPOINT};
pub use air_data::response::{Components, HistoryResponse, RawRecord};

pub use types::pollutant::Pollutant;
pub use types::quality::{QualityBand, QualityScale, ThresholdScale};
pub use types::reading::Reading;

pub use table::AirQualityTable;

pub use analysis::error::AnalysisError;
pub use analysis::report::AirQualityReport;
pub use analysis::{CorrelationMatrix, IndicatorSummary, MeanPoint, Peak, ProfileRow};
