use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PytheusError {
    #[error("Cookie file not found at: {}", .path.display())]
    CredentialNotFound { path: PathBuf },

    #[error("Cookie file is empty: {}", .path.display())]
    CredentialEmpty { path: PathBuf },

    #[error("Cookie file at {} could not be read: {source}", .path.display())]
    CredentialUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cookie value cannot be sent as a header: {reason}")]
    InvalidCredential { reason: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid route: {route}")]
    InvalidRoute { route: String },

    #[error("Invalid {field} timestamp '{value}': expected YYYY-MM-DD or YYYY-MM-DD hh:mm:ss")]
    InvalidTimestamp { field: String, value: String },

    #[error("Query failed with status code: {status}")]
    QueryFailed { status: u16 },

    #[error("Request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Response is not valid JSON: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Usage,
    Remote,
    Transport,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PytheusError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PytheusError::CredentialNotFound { .. }
            | PytheusError::CredentialEmpty { .. }
            | PytheusError::CredentialUnreadable { .. }
            | PytheusError::InvalidCredential { .. }
            | PytheusError::MissingConfigError { .. }
            | PytheusError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PytheusError::InvalidRoute { .. } | PytheusError::InvalidTimestamp { .. } => {
                ErrorCategory::Usage
            }
            PytheusError::QueryFailed { .. } => ErrorCategory::Remote,
            PytheusError::TransportError(_) | PytheusError::SerializationError(_) => {
                ErrorCategory::Transport
            }
            PytheusError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Usage => ErrorSeverity::High,
            ErrorCategory::Transport | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Usage messages are informational and may be muted by `--silent`.
    pub fn is_suppressible(&self) -> bool {
        matches!(self, PytheusError::InvalidRoute { .. })
    }

    /// Whether the failure is printed for the user.
    pub fn should_report(&self, silent: bool) -> bool {
        !(silent && self.is_suppressible())
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PytheusError::TransportError(e) if e.is_connect() => {
                format!("Could not connect to the monitoring API: {}", e)
            }
            PytheusError::TransportError(e) if e.is_timeout() => {
                format!("The monitoring API did not answer in time: {}", e)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PytheusError::CredentialNotFound { .. } | PytheusError::CredentialEmpty { .. } => {
                "Please create the file and add the cookie value to it."
            }
            PytheusError::CredentialUnreadable { .. } => {
                "Make sure the cookie file is readable and holds UTF-8 text."
            }
            PytheusError::InvalidCredential { .. } => {
                "Make sure the cookie file holds a single header value without control characters."
            }
            PytheusError::MissingConfigError { .. } | PytheusError::InvalidConfigValueError { .. } => {
                "Set PYTHEUS_API_URL (or pass --api-url) to the base URL of the API, e.g. https://prometheus.example.com/api/v1"
            }
            PytheusError::InvalidRoute { .. } => "Use --route query or --route query_range.",
            PytheusError::InvalidTimestamp { .. } => {
                "Dates are UTC, e.g. --start 2023-01-01 or --start '2023-01-01 12:30:00'."
            }
            PytheusError::QueryFailed { .. } => {
                "Check the query expression and that the cookie is still valid."
            }
            PytheusError::TransportError(_) => {
                "Check network connectivity and the configured API URL."
            }
            PytheusError::SerializationError(_) => {
                "The endpoint did not return JSON; verify the API URL points at the query API."
            }
            PytheusError::IoError(_) => "Check that the output location is writable.",
        }
    }
}

pub type Result<T> = std::result::Result<T, PytheusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let missing = PytheusError::CredentialNotFound {
            path: PathBuf::from("/tmp/nope"),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.exit_code(), 1);

        let route = PytheusError::InvalidRoute {
            route: "series".to_string(),
        };
        assert_eq!(route.category(), ErrorCategory::Usage);
        assert_eq!(route.exit_code(), 1);
        assert!(route.is_suppressible());

        let remote = PytheusError::QueryFailed { status: 500 };
        assert_eq!(remote.category(), ErrorCategory::Remote);
        assert_eq!(remote.exit_code(), 2);
        assert!(!remote.is_suppressible());
    }

    #[test]
    fn test_messages_name_the_problem() {
        let missing = PytheusError::CredentialNotFound {
            path: PathBuf::from("/home/me/.pytheus/cookie"),
        };
        assert_eq!(
            missing.user_friendly_message(),
            "Cookie file not found at: /home/me/.pytheus/cookie"
        );

        let remote = PytheusError::QueryFailed { status: 503 };
        assert!(remote.to_string().contains("503"));
    }

    #[test]
    fn test_silent_mutes_only_route_errors() {
        let route = PytheusError::InvalidRoute {
            route: "series".to_string(),
        };
        assert!(route.should_report(false));
        assert!(!route.should_report(true));

        let missing = PytheusError::CredentialNotFound {
            path: PathBuf::from("/tmp/nope"),
        };
        assert!(missing.should_report(true));

        let remote = PytheusError::QueryFailed { status: 500 };
        assert!(remote.should_report(true));
    }
}
