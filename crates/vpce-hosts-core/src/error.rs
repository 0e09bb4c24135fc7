// ── Core error types ──
//
// User-facing errors from vpce-hosts-core. Consumers never see raw SDK
// errors; the `From<vpce_hosts_api::Error>` impl sorts them into
// connection, authentication and API failures.

use std::io;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach EC2 ({operation}): {reason}")]
    ConnectionFailed {
        operation: &'static str,
        reason: String,
    },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("EC2 API error: {message}")]
    Api {
        message: String,
        /// The AWS error code (e.g., "RequestLimitExceeded").
        code: Option<String>,
    },

    #[error("Invalid EC2 response: {message}")]
    InvalidResponse { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("No AWS region configured")]
    MissingRegion,

    // ── Hosts file errors ────────────────────────────────────────────
    #[error("Cannot write hosts file {path}: {source}")]
    HostsFile {
        path: String,
        #[source]
        source: io::Error,
    },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<vpce_hosts_api::Error> for CoreError {
    fn from(err: vpce_hosts_api::Error) -> Self {
        if err.is_auth() {
            return CoreError::AuthenticationFailed {
                message: err.to_string(),
            };
        }
        match err {
            vpce_hosts_api::Error::MissingRegion => CoreError::MissingRegion,
            err @ vpce_hosts_api::Error::Credentials { .. } => CoreError::AuthenticationFailed {
                message: err.to_string(),
            },
            vpce_hosts_api::Error::Service {
                operation,
                code,
                message,
            } => CoreError::Api {
                message: format!("{operation}: {message}"),
                code,
            },
            vpce_hosts_api::Error::Transport { operation, message } => {
                CoreError::ConnectionFailed {
                    operation,
                    reason: message,
                }
            }
            err @ vpce_hosts_api::Error::MissingField { .. } => CoreError::InvalidResponse {
                message: err.to_string(),
            },
        }
    }
}
