use aws_credential_types::provider::error::CredentialsError;
use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// AWS error codes that mean the caller's credentials were rejected or lack
/// permission for the operation.
const AUTH_ERROR_CODES: &[&str] = &[
    "AuthFailure",
    "UnauthorizedOperation",
    "InvalidClientTokenId",
    "ExpiredToken",
    "RequestExpired",
    "SignatureDoesNotMatch",
    "AccessDenied",
];

/// Top-level error type for the `vpce-hosts-api` crate.
///
/// Covers client construction, EC2 service and transport failures, and
/// response records that lack a field the caller depends on.
/// `vpce-hosts-core` maps these into domain errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// No region could be resolved from flags, environment or profile.
    #[error("No AWS region configured")]
    MissingRegion,

    // ── Service ─────────────────────────────────────────────────────
    /// EC2 answered with a structured error.
    #[error("{operation} failed ({}): {message}", .code.as_deref().unwrap_or("unknown"))]
    Service {
        operation: &'static str,
        code: Option<String>,
        message: String,
    },

    // ── Credentials ─────────────────────────────────────────────────
    /// The provider chain could not supply credentials; nothing was sent.
    #[error("{operation} failed: no usable AWS credentials: {message}")]
    Credentials {
        operation: &'static str,
        message: String,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// The request never produced a service response (DNS, connect,
    /// timeout, malformed body).
    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// A response record lacks a field that is required downstream.
    #[error("{record} in {operation} response is missing required field `{field}`")]
    MissingField {
        operation: &'static str,
        record: &'static str,
        field: &'static str,
    },
}

impl Error {
    /// Translate an SDK error into this crate's taxonomy.
    pub(crate) fn from_sdk<E, R>(operation: &'static str, err: &SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug + 'static,
    {
        if let SdkError::ServiceError(service) = err {
            let inner = service.err();
            return Self::Service {
                operation,
                code: inner.code().map(str::to_owned),
                message: inner
                    .message()
                    .map_or_else(|| inner.to_string(), str::to_owned),
            };
        }
        let message = DisplayErrorContext(err).to_string();
        if credentials_failure(err).is_some() {
            return Self::Credentials { operation, message };
        }
        Self::Transport { operation, message }
    }

    /// Returns `true` if credentials were missing, or EC2 rejected them or
    /// the permissions behind them.
    pub fn is_auth(&self) -> bool {
        match self {
            Self::Credentials { .. } => true,
            Self::Service {
                code: Some(code), ..
            } => AUTH_ERROR_CODES.contains(&code.as_str()),
            _ => false,
        }
    }
}

/// First [`CredentialsError`] in the source chain of `err`.
fn credentials_failure<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> Option<&'a CredentialsError> {
    let mut current = Some(err);
    while let Some(cause) = current {
        if let Some(found) = cause.downcast_ref::<CredentialsError>() {
            return Some(found);
        }
        current = cause.source();
    }
    None
}
