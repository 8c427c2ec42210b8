use crate::air_data::error::AirDataError;
use crate::air_data::response::HistoryResponse;
use crate::airstat::{ApiKey, LatLon};
use log::{info, warn};
use reqwest::Client;

/// The fixed OpenWeather historical air pollution endpoint.
pub const HISTORY_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/air_pollution/history";

/// Query parameters for one history request.
///
/// Coordinates are passed through as given; the API itself rejects values it
/// cannot serve. `start` and `end` are inclusive Unix-second bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryQuery {
    pub location: LatLon,
    pub start: i64,
    pub end: i64,
}

/// Issues history requests against the OpenWeather air pollution API.
///
/// One best-effort GET per call: no retry, no backoff, no configured timeout.
/// Failures surface as [`AirDataError`] variants that distinguish transport
/// errors, HTTP status errors, and body decode errors.
pub struct HistoryFetcher {
    client: Client,
    endpoint: String,
}

impl HistoryFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(HISTORY_ENDPOINT)
    }

    /// Uses a non-default endpoint. Intended for pointing at a stand-in server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches the raw history payload for `query`.
    ///
    /// An empty API key is rejected before any network I/O with
    /// [`AirDataError::MissingApiKey`]. An empty or absent result list is not
    /// an error here; it deserializes to an empty [`HistoryResponse`] and is
    /// handled downstream as the no-data case.
    pub async fn fetch(
        &self,
        query: &HistoryQuery,
        api_key: &ApiKey,
    ) -> Result<HistoryResponse, AirDataError> {
        if api_key.is_empty() {
            return Err(AirDataError::MissingApiKey);
        }

        let url = self.build_url(query, api_key);
        // The logged form never includes the credential.
        let display_url = self.build_url(query, &ApiKey::new("<redacted>"));
        info!("Requesting air pollution history from {}", display_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AirDataError::NetworkRequest(display_url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", display_url, e);
                return Err(if let Some(status) = e.status() {
                    AirDataError::HttpStatus {
                        url: display_url,
                        status,
                        source: e,
                    }
                } else {
                    AirDataError::NetworkRequest(display_url, e)
                });
            }
        };

        let body: HistoryResponse = response
            .json()
            .await
            .map_err(|e| AirDataError::ResponseDecode(display_url.clone(), e))?;

        if body.list.is_empty() {
            warn!("No air pollution records returned for {}", display_url);
        } else {
            info!("Received {} air pollution records", body.list.len());
        }
        Ok(body)
    }

    fn build_url(&self, query: &HistoryQuery, api_key: &ApiKey) -> String {
        format!(
            "{}?lat={}&lon={}&start={}&end={}&appid={}",
            self.endpoint,
            query.location.0,
            query.location.1,
            query.start,
            query.end,
            api_key.as_str()
        )
    }
}

impl Default for HistoryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_query() -> HistoryQuery {
        HistoryQuery {
            location: LatLon(-21.131641716582518, -42.363723220344596),
            start: 1734134400,
            end: 1734739199,
        }
    }

    #[test]
    fn build_url_includes_all_parameters() {
        let fetcher = HistoryFetcher::new();
        let url = fetcher.build_url(&sample_query(), &ApiKey::new("secret"));
        assert!(url.starts_with(HISTORY_ENDPOINT));
        assert!(url.contains("lat=-21.131641716582518"));
        assert!(url.contains("lon=-42.363723220344596"));
        assert!(url.contains("start=1734134400"));
        assert!(url.contains("end=1734739199"));
        assert!(url.contains("appid=secret"));
    }

    #[test]
    fn custom_endpoint_is_used() {
        let fetcher = HistoryFetcher::with_endpoint("http://localhost:1/history");
        let url = fetcher.build_url(&sample_query(), &ApiKey::new("k"));
        assert!(url.starts_with("http://localhost:1/history?"));
    }

    #[tokio::test]
    async fn empty_api_key_is_rejected_before_any_request() {
        let fetcher = HistoryFetcher::new();
        let result = fetcher.fetch(&sample_query(), &ApiKey::new("")).await;
        assert!(matches!(result, Err(AirDataError::MissingApiKey)));
    }
}
