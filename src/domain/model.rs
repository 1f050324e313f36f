use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::PytheusError;

/// API endpoint variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Query,
    QueryRange,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Query => "query",
            Route::QueryRange => "query_range",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = PytheusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(Route::Query),
            "query_range" => Ok(Route::QueryRange),
            other => Err(PytheusError::InvalidRoute {
                route: other.to_string(),
            }),
        }
    }
}

/// Opaque token sent in the `cookie` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Everything needed to address one query endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub step: String,
    pub query: String,
    pub route: Route,
}

/// Raw response of a transport call.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the decoded document ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    File(std::path::PathBuf),
    Stdout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!("query".parse::<Route>().unwrap(), Route::Query);
        assert_eq!("query_range".parse::<Route>().unwrap(), Route::QueryRange);

        let err = "series".parse::<Route>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid route: series");
        assert!("Query".parse::<Route>().is_err());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("session=abc123");
        assert_eq!(credential.expose(), "session=abc123");
        assert!(!format!("{:?}", credential).contains("abc123"));
    }

    #[test]
    fn test_transport_response_success_range() {
        let ok = TransportResponse { status: 204, body: Vec::new() };
        let redirect = TransportResponse { status: 302, body: Vec::new() };
        let failed = TransportResponse { status: 500, body: Vec::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!failed.is_success());
    }
}
