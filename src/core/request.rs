use crate::domain::model::{QueryRequest, Route};
use crate::utils::error::{PytheusError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left literal when encoding the query expression.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses a calendar date, optionally with a time of day, as UTC.
pub fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| PytheusError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Unix epoch seconds; whole seconds render without a fractional part.
pub fn epoch_seconds(instant: &DateTime<Utc>) -> String {
    let secs = instant.timestamp();
    let nanos = instant.timestamp_subsec_nanos();
    if nanos == 0 {
        secs.to_string()
    } else {
        (secs as f64 + f64::from(nanos) / 1_000_000_000.0).to_string()
    }
}

pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ENCODE_SET).to_string()
}

/// Builds endpoint URLs below a fixed API base.
#[derive(Debug, Clone)]
pub struct QueryUrlBuilder {
    api_base: String,
}

impl QueryUrlBuilder {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_url(&self, request: &QueryRequest) -> String {
        let encoded_query = encode_query(&request.query);
        match request.route {
            Route::Query => format!("{}/{}?query={}", self.api_base, request.route, encoded_query),
            Route::QueryRange => format!(
                "{}/{}?query={}&start={}&end={}&step={}",
                self.api_base,
                request.route,
                encoded_query,
                epoch_seconds(&request.start),
                epoch_seconds(&request.end),
                request.step
            ),
        }
    }
}
