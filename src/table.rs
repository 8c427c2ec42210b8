use crate::air_data::response::HistoryResponse;
use crate::types::pollutant::Pollutant;
use crate::types::reading::Reading;
use chrono::{DateTime, Local};
use log::warn;

/// An ordered table of air pollution readings.
///
/// Rows keep the API's delivery order (chronological as delivered; the table
/// never re-sorts). Once built, the table is immutable; every statistic in
/// [`crate::AirQualityReport`] is a pure function of it, so re-deriving twice
/// gives identical results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirQualityTable {
    readings: Vec<Reading>,
}

impl AirQualityTable {
    /// Builds a table from a raw API response.
    ///
    /// Each record's `dt` is converted from Unix epoch seconds to local
    /// calendar time; absent or non-numeric pollutant values are already
    /// `None` in the wire types and pass through unchanged. A record whose
    /// timestamp falls outside the representable range is skipped with a
    /// warning rather than failing the whole build.
    pub fn from_response(response: &HistoryResponse) -> Self {
        let readings = response
            .list
            .iter()
            .filter_map(|record| {
                let Some(utc) = DateTime::from_timestamp(record.dt, 0) else {
                    warn!("Skipping record with out-of-range timestamp {}", record.dt);
                    return None;
                };
                let timestamp = utc.with_timezone(&Local).naive_local();
                let c = &record.components;
                Some(Reading {
                    timestamp,
                    co: c.co,
                    no: c.no,
                    no2: c.no2,
                    o3: c.o3,
                    so2: c.so2,
                    pm2_5: c.pm2_5,
                    pm10: c.pm10,
                    nh3: c.nh3,
                })
            })
            .collect();
        Self { readings }
    }

    /// Builds a table directly from readings, preserving their order.
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    /// The values of one pollutant column, in row order.
    pub fn column(&self, pollutant: Pollutant) -> Vec<Option<f64>> {
        self.readings
            .iter()
            .map(|r| r.concentration(pollutant))
            .collect()
    }
}

impl<'a> IntoIterator for &'a AirQualityTable {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}
