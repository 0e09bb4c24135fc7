//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a stable exit code.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use vpce_hosts_config::ConfigError;
use vpce_hosts_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach EC2 ({operation})")]
    #[diagnostic(
        code(vpce_hosts::connection_failed),
        help(
            "Check network access to the EC2 API for this region.\n\
             Private subnets need an `ec2` interface endpoint or a NAT route.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { operation: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("AWS authentication failed")]
    #[diagnostic(
        code(vpce_hosts::auth_failed),
        help(
            "Check the credentials picked up by the AWS provider chain\n\
             (environment, --profile, instance role). The caller needs\n\
             ec2:DescribeVpcEndpoints and ec2:DescribeNetworkInterfaces.\n\
             {message}"
        )
    )]
    AuthFailed { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("EC2 API error ({code}): {message}")]
    #[diagnostic(code(vpce_hosts::api_error))]
    ApiError { code: String, message: String },

    #[error("Unexpected EC2 response: {message}")]
    #[diagnostic(code(vpce_hosts::invalid_response))]
    InvalidResponse { message: String },

    // ── Hosts file ───────────────────────────────────────────────────
    #[error("Cannot write hosts file {path}")]
    #[diagnostic(
        code(vpce_hosts::hosts_file),
        help("Writing {path} usually requires root. Re-run with sudo, or pass another FILENAME.")
    )]
    HostsFilePermission {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write hosts file {path}")]
    #[diagnostic(code(vpce_hosts::hosts_file))]
    HostsFile {
        path: String,
        #[source]
        source: io::Error,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No AWS region configured")]
    #[diagnostic(
        code(vpce_hosts::no_region),
        help(
            "Pass --region, set AWS_REGION, add `region` to your AWS profile,\n\
             or set `aws.region` in the vpce-hosts config file."
        )
    )]
    NoRegion,

    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(vpce_hosts::no_config),
        help("Check the --config flag or the VPCE_HOSTS_CONFIG environment variable.")
    )]
    ConfigNotFound { path: String },

    #[error(transparent)]
    #[diagnostic(code(vpce_hosts::config))]
    Config(Box<figment::Error>),

    #[error("Failed to render configuration: {0}")]
    #[diagnostic(code(vpce_hosts::config))]
    RenderConfig(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::HostsFilePermission { .. } => exit_code::PERMISSION,
            Self::NoRegion | Self::ConfigNotFound { .. } | Self::Config(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { operation, reason } => CliError::ConnectionFailed {
                operation: operation.into(),
                reason,
            },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Api { message, code } => CliError::ApiError {
                code: code.unwrap_or_else(|| "unknown".into()),
                message,
            },

            CoreError::InvalidResponse { message } => CliError::InvalidResponse { message },

            CoreError::MissingRegion => CliError::NoRegion,

            CoreError::HostsFile { path, source }
                if source.kind() == io::ErrorKind::PermissionDenied =>
            {
                CliError::HostsFilePermission { path, source }
            }

            CoreError::HostsFile { path, source } => CliError::HostsFile { path, source },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound(path) => CliError::ConfigNotFound {
                path: path.display().to_string(),
            },
            ConfigError::Serialization(e) => CliError::RenderConfig(e),
            ConfigError::Figment(e) => CliError::Config(e),
        }
    }
}
