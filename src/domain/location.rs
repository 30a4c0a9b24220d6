use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ClientError;

/// A geographic point reported by the location service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One ISS position report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssLocation {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub coordinates: Coordinates,
}

impl IssLocation {
    /// Decode a service payload.
    ///
    /// The live endpoint nests stringly-typed coordinates under
    /// `iss_position` and reports epoch timestamps; other deployments of the
    /// same shape return flat numeric fields and RFC 3339 timestamps. Both
    /// forms are accepted. Coordinates outside [-90, 90] / [-180, 180] are
    /// rejected.
    pub fn from_payload(payload: &Value) -> Result<Self, ClientError> {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::decode("missing or invalid `message` field"))?
            .to_string();

        let timestamp = extract_timestamp(payload)?;

        let position = payload.get("iss_position").unwrap_or(payload);
        let latitude = extract_number(position, "latitude")
            .ok_or_else(|| ClientError::decode("missing or invalid `latitude` field"))?;
        let longitude = extract_number(position, "longitude")
            .ok_or_else(|| ClientError::decode("missing or invalid `longitude` field"))?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ClientError::decode(format!(
                "latitude {} out of range",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ClientError::decode(format!(
                "longitude {} out of range",
                longitude
            )));
        }

        Ok(Self {
            message,
            timestamp,
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        })
    }
}

fn extract_number(v: &Value, key: &str) -> Option<f64> {
    if let Some(x) = v.get(key) {
        if let Some(f) = x.as_f64() {
            return Some(f);
        }
        if let Some(s) = x.as_str() {
            return s.parse::<f64>().ok();
        }
    }
    None
}

fn extract_timestamp(payload: &Value) -> Result<DateTime<Utc>, ClientError> {
    let value = payload
        .get("timestamp")
        .ok_or_else(|| ClientError::decode("missing `timestamp` field"))?;

    if let Some(secs) = value.as_i64() {
        return epoch_to_datetime(secs);
    }
    if let Some(secs) = value.as_f64() {
        return epoch_to_datetime(secs as i64);
    }
    if let Some(s) = value.as_str() {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
            return Ok(parsed.with_timezone(&Utc));
        }
        if let Ok(secs) = s.parse::<i64>() {
            return epoch_to_datetime(secs);
        }
    }

    Err(ClientError::decode("invalid `timestamp` field"))
}

fn epoch_to_datetime(secs: i64) -> Result<DateTime<Utc>, ClientError> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| ClientError::decode(format!("timestamp {} out of range", secs)))
}
