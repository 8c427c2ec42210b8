//! One-call bundle of every statistic a presenter needs.

use crate::analysis::error::AnalysisError;
use crate::analysis::{CorrelationMatrix, IndicatorSummary, MeanPoint, Peak, ProfileRow};
use crate::table::AirQualityTable;
use crate::types::quality::{QualityBand, QualityScale};
use std::collections::BTreeMap;

/// Everything derived from one table, computed in a single pass over the
/// analysis methods.
///
/// The fields map directly onto a dashboard's outputs: `mean_series` feeds a
/// line chart, `distribution` a bar chart, `correlation` a heatmap, `hourly`
/// and `weekday` two further line charts, and `peak` / `indicators` the text
/// summaries.
///
/// `peak` is `None` when no row had a defined mean, so a table of entirely
/// missing readings degrades to an "insufficient data" notice rather than an
/// error. An *empty* table is an error at build time instead; nothing
/// downstream should run in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityReport {
    pub mean_series: Vec<MeanPoint>,
    pub indicators: Vec<IndicatorSummary>,
    pub distribution: BTreeMap<QualityBand, usize>,
    pub peak: Option<Peak>,
    pub correlation: CorrelationMatrix,
    pub hourly: Vec<ProfileRow>,
    pub weekday: Vec<ProfileRow>,
}

impl AirQualityReport {
    /// Derives the full report from a table.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoData`] when the table has zero rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use airstat::{AirQualityReport, AirQualityTable, AnalysisError, ThresholdScale};
    ///
    /// let empty = AirQualityTable::default();
    /// assert!(matches!(
    ///     AirQualityReport::build(&empty, &ThresholdScale),
    ///     Err(AnalysisError::NoData)
    /// ));
    /// ```
    pub fn build(
        table: &AirQualityTable,
        scale: &impl QualityScale,
    ) -> Result<Self, AnalysisError> {
        if table.is_empty() {
            return Err(AnalysisError::NoData);
        }
        Ok(Self {
            mean_series: table.mean_series(scale),
            indicators: table.indicator_summaries(scale),
            distribution: table.band_distribution(scale),
            peak: table.peak().ok(),
            correlation: table.correlation(),
            hourly: table.hourly_profile(),
            weekday: table.weekday_profile(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::air_data::response::HistoryResponse;
    use crate::types::quality::ThresholdScale;
    use crate::types::reading::Reading;
    use chrono::NaiveDate;

    const PAYLOAD: &str = r#"{ "list": [
        { "dt": 1734177600, "components": {
            "co": 230.31, "no": 0.01, "no2": 0.72, "o3": 68.66,
            "so2": 0.64, "pm2_5": 0.5, "pm10": 0.54, "nh3": 0.12 } },
        { "dt": 1734181200, "components": {
            "co": 250.34, "no": 0.02, "no2": 0.81, "o3": 70.10,
            "so2": 0.71, "pm2_5": 0.62, "pm10": 0.67, "nh3": 0.14 } },
        { "dt": 1734184800, "components": {
            "co": 210.29, "no": 0.01, "no2": 0.69, "o3": 66.20,
            "so2": 0.60, "pm2_5": 0.48, "pm10": 0.51, "nh3": 0.11 } }
    ] }"#;

    #[test]
    fn empty_table_short_circuits_to_no_data() {
        let result = AirQualityReport::build(&AirQualityTable::default(), &ThresholdScale);
        assert_eq!(result, Err(AnalysisError::NoData));
    }

    #[test]
    fn all_missing_table_builds_with_no_peak() {
        let ts = NaiveDate::from_ymd_opt(2024, 12, 14)
            .unwrap()
            .and_hms_opt(5, 0, 0)
            .unwrap();
        let table = AirQualityTable::from_readings(vec![Reading::empty(ts)]);
        let report = AirQualityReport::build(&table, &ThresholdScale).unwrap();
        assert_eq!(report.peak, None);
        assert!(report.distribution.is_empty());
        assert_eq!(report.mean_series.len(), 1);
    }

    #[test]
    fn full_pipeline_is_deterministic() {
        // Building the table and deriving the report twice from the same raw
        // payload must give identical results: no hidden state anywhere.
        let response: HistoryResponse = serde_json::from_str(PAYLOAD).unwrap();
        let first = AirQualityReport::build(
            &AirQualityTable::from_response(&response),
            &ThresholdScale,
        )
        .unwrap();
        let second = AirQualityReport::build(
            &AirQualityTable::from_response(&response),
            &ThresholdScale,
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn report_fields_cover_every_chart_input() {
        let response: HistoryResponse = serde_json::from_str(PAYLOAD).unwrap();
        let table = AirQualityTable::from_response(&response);
        let report = AirQualityReport::build(&table, &ThresholdScale).unwrap();

        assert_eq!(report.mean_series.len(), 3);
        assert_eq!(report.indicators.len(), 8);
        assert_eq!(report.distribution.values().sum::<usize>(), 3);

        let peak = report.peak.expect("three defined row means");
        // The second record has the largest values across the board.
        let expected = report.mean_series[1].mean.unwrap();
        assert_eq!(peak.mean, expected);

        // All three readings fall within the same day, so at most three hourly
        // groups and one weekday group.
        assert!(report.hourly.len() <= 3);
        assert!(!report.weekday.is_empty());
    }
}
