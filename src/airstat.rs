//! The main entry point for fetching historical air pollution data.
//!
//! An [`Airstat`] client is built from an [`ApiKey`] and issues history
//! requests for a geographical point and an inclusive date range, returning an
//! [`AirQualityTable`] ready for analysis.

use crate::air_data::fetch::{HistoryFetcher, HistoryQuery};
use crate::error::AirstatError;
use crate::table::AirQualityTable;
use bon::bon;
use chrono::{Local, NaiveDate, TimeZone};
use std::fmt;

/// A geographical coordinate: latitude first, longitude second.
///
/// Both values are signed decimal degrees. They are passed to the API as
/// given, without range checks.
///
/// # Examples
///
/// ```
/// use airstat::LatLon;
///
/// let muriae = LatLon(-21.1316, -42.3637);
/// assert_eq!(muriae.0, -21.1316); // Latitude
/// assert_eq!(muriae.1, -42.3637); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// An OpenWeather API credential.
///
/// The key is opaque to this crate and always supplied by the caller; there is
/// no default. `Debug` redacts the secret so it cannot leak through error
/// chains or logs.
///
/// # Examples
///
/// ```
/// use airstat::ApiKey;
///
/// let key = ApiKey::new("my-secret-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(***)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// True when the key is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// The main client for fetching historical air pollution data.
///
/// Wraps the HTTP fetcher and converts calendar date ranges into the Unix
/// timestamp bounds the API expects.
///
/// # Examples
///
/// ```no_run
/// use airstat::{Airstat, ApiKey, LatLon};
/// use chrono::NaiveDate;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), airstat::AirstatError> {
/// let client = Airstat::new(ApiKey::new(std::env::var("OPENWEATHER_API_KEY").unwrap()));
/// let table = client
///     .history()
///     .location(LatLon(-21.1316, -42.3637))
///     .start(NaiveDate::from_ymd_opt(2024, 12, 14).unwrap())
///     .end(NaiveDate::from_ymd_opt(2024, 12, 20).unwrap())
///     .call()
///     .await?;
/// println!("{} readings", table.len());
/// # Ok(())
/// # }
/// ```
pub struct Airstat {
    fetcher: HistoryFetcher,
    api_key: ApiKey,
}

#[bon]
impl Airstat {
    /// Creates a client that talks to the default OpenWeather endpoint.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            fetcher: HistoryFetcher::new(),
            api_key,
        }
    }

    /// Creates a client against a non-default endpoint, e.g. a local stand-in
    /// server during development.
    pub fn with_endpoint(api_key: ApiKey, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher: HistoryFetcher::with_endpoint(endpoint),
            api_key,
        }
    }

    /// Fetches the air pollution history for a location and date range.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The point to query.
    /// * `.start(NaiveDate)`: **Required.** First day of the range, inclusive.
    /// * `.end(NaiveDate)`: **Required.** Last day of the range, inclusive.
    ///
    /// The range covers local time from 00:00:00 on `start` through 23:59:59
    /// on `end`, converted to Unix seconds.
    ///
    /// # Errors
    ///
    /// * [`AirstatError::AirData`] for a missing credential, transport
    ///   failure, HTTP error status, or undecodable body.
    /// * [`AirstatError::TimestampResolution`] when a date's local midnight
    ///   (or end of day) does not exist, e.g. inside a DST transition gap.
    ///
    /// An empty result list is not an error: it yields an empty table, which
    /// the analysis layer reports as the no-data case.
    #[builder]
    pub async fn history(
        &self,
        location: LatLon,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AirQualityTable, AirstatError> {
        let query = HistoryQuery {
            location,
            start: local_timestamp(start, 0, 0, 0)?,
            end: local_timestamp(end, 23, 59, 59)?,
        };
        let response = self.fetcher.fetch(&query, &self.api_key).await?;
        Ok(AirQualityTable::from_response(&response))
    }
}

/// Unix seconds for a wall-clock time on `date` in the system's local zone.
fn local_timestamp(date: NaiveDate, hour: u32, min: u32, sec: u32) -> Result<i64, AirstatError> {
    let naive = date
        .and_hms_opt(hour, min, sec)
        .ok_or(AirstatError::TimestampResolution(date))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or(AirstatError::TimestampResolution(date))
}
