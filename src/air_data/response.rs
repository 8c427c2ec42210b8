//! Serde wire types for the OpenWeather air pollution history endpoint.
//!
//! The response shape is `{ "coord": {...}, "list": [ { "dt": <unix seconds>,
//! "main": { "aqi": ... }, "components": { "co": ..., ... } } ] }`. Only the
//! fields the pipeline consumes are modeled; unknown fields are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level history response.
///
/// A response without a `list` field deserializes to an empty list rather than
/// failing, so "the API returned nothing" stays a no-data condition instead of
/// a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub list: Vec<RawRecord>,
}

/// One record of the `list` array: a Unix timestamp plus the pollutant map.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub dt: i64,
    #[serde(default)]
    pub components: Components,
}

/// The pollutant concentration map, μg/m³.
///
/// Every field is optional and leniently coerced: absent keys, nulls, and
/// non-numeric junk all become `None` instead of aborting deserialization of
/// the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub co: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub no: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub no2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub o3: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub so2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pm2_5: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pm10: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub nh3: Option<f64>,
}

/// Accepts a number or a numeric string; anything else coerces to `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_regular_payload() {
        let body = r#"{
            "coord": { "lat": -21.13, "lon": -42.36 },
            "list": [
                {
                    "dt": 1734177600,
                    "main": { "aqi": 2 },
                    "components": {
                        "co": 230.31, "no": 0.01, "no2": 0.72, "o3": 68.66,
                        "so2": 0.64, "pm2_5": 0.5, "pm10": 0.54, "nh3": 0.12
                    }
                }
            ]
        }"#;
        let response: HistoryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.list.len(), 1);
        let record = &response.list[0];
        assert_eq!(record.dt, 1734177600);
        assert_eq!(record.components.co, Some(230.31));
        assert_eq!(record.components.nh3, Some(0.12));
    }

    #[test]
    fn missing_keys_default_to_none() {
        let body = r#"{ "list": [ { "dt": 0, "components": { "co": 1.0 } } ] }"#;
        let response: HistoryResponse = serde_json::from_str(body).unwrap();
        let c = &response.list[0].components;
        assert_eq!(c.co, Some(1.0));
        assert_eq!(c.no, None);
        assert_eq!(c.pm2_5, None);
    }

    #[test]
    fn non_numeric_values_coerce_to_none() {
        let body = r#"{ "list": [ { "dt": 0, "components": {
            "co": "12.5", "no": "n/a", "no2": null, "o3": true, "so2": {}
        } } ] }"#;
        let response: HistoryResponse = serde_json::from_str(body).unwrap();
        let c = &response.list[0].components;
        assert_eq!(c.co, Some(12.5));
        assert_eq!(c.no, None);
        assert_eq!(c.no2, None);
        assert_eq!(c.o3, None);
        assert_eq!(c.so2, None);
    }

    #[test]
    fn missing_list_field_is_an_empty_list() {
        let response: HistoryResponse = serde_json::from_str(r#"{ "cod": "200" }"#).unwrap();
        assert!(response.list.is_empty());
    }

    #[test]
    fn missing_components_is_all_missing() {
        let body = r#"{ "list": [ { "dt": 1734177600 } ] }"#;
        let response: HistoryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.list[0].components.co, None);
    }
}
