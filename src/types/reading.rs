use crate::types::pollutant::Pollutant;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// One timestamped set of pollutant concentrations.
///
/// Each pollutant is independently optional: the API may omit a key, or report
/// a value that fails numeric coercion. Missing values are `None`, never a
/// sentinel number, so downstream means and correlations stay correct by
/// construction.
///
/// The timestamp is local calendar time, converted from the API's Unix epoch
/// seconds when the table is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub co: Option<f64>,
    pub no: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub nh3: Option<f64>,
}

impl Reading {
    /// A reading at `timestamp` with every concentration missing.
    ///
    /// Mostly useful with struct update syntax:
    ///
    /// ```
    /// use airstat::Reading;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2024, 12, 14).unwrap().and_hms_opt(5, 0, 0).unwrap();
    /// let reading = Reading { co: Some(10.0), ..Reading::empty(ts) };
    /// assert_eq!(reading.mean(), Some(10.0));
    /// ```
    pub fn empty(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            co: None,
            no: None,
            no2: None,
            o3: None,
            so2: None,
            pm2_5: None,
            pm10: None,
            nh3: None,
        }
    }

    /// The concentration of a single pollutant, if present.
    pub fn concentration(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Co => self.co,
            Pollutant::No => self.no,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
            Pollutant::So2 => self.so2,
            Pollutant::Pm2_5 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Nh3 => self.nh3,
        }
    }

    /// Arithmetic mean over the pollutants that are present.
    ///
    /// Missing values are skipped, not counted as zero; the divisor is the
    /// number of present values. Returns `None` when all eight are missing.
    pub fn mean(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for pollutant in Pollutant::ALL {
            if let Some(value) = self.concentration(pollutant) {
                sum += value;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Hour of day, 0–23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Day of week, 0–6 with Monday as 0.
    pub fn weekday(&self) -> u32 {
        self.timestamp.weekday().num_days_from_monday()
    }
}
