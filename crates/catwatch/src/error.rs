//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use catwatch_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(catwatch::connection_failed),
        help(
            "Check that the controller is running and accessible.\n\
             URL: {url}\n\
             Self-signed certificate? Try --insecure (-k)."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed (HTTP {status})")]
    #[diagnostic(
        code(catwatch::auth_failed),
        help(
            "Verify your username and password, then retry.\n\
             Store the password with: catwatch config set-password\n\
             Controller said: {message}"
        )
    )]
    AuthFailed { status: u16, message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(catwatch::no_credentials),
        help(
            "Configure credentials with: catwatch config init\n\
             Or set CATWATCH_USERNAME / CATWATCH_PASSWORD environment variables."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(catwatch::not_found),
        help("Run: catwatch {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API / pipeline ───────────────────────────────────────────────

    #[error("Device directory unavailable")]
    #[diagnostic(
        code(catwatch::directory),
        help("The controller could not produce a device list: {message}")
    )]
    Directory { message: String },

    #[error("Telemetry fetch failed for device '{device}'")]
    #[diagnostic(
        code(catwatch::telemetry),
        help("The controller rejected the interface query: {message}")
    )]
    Telemetry { device: String, message: String },

    #[error("API error: {message}")]
    #[diagnostic(code(catwatch::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(catwatch::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(catwatch::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: catwatch config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(catwatch::no_config),
        help(
            "Create one with: catwatch config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(catwatch::timeout),
        help("Increase timeout with --timeout or check controller responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(catwatch::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AuthenticationFailed { status, message } => {
                CliError::AuthFailed { status, message }
            }

            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::DirectoryUnavailable { message } => CliError::Directory { message },

            CoreError::TelemetryUnavailable { device, message } => {
                CliError::Telemetry { device, message }
            }

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::ApiError { message },
        }
    }
}

impl From<catwatch_config::ConfigError> for CliError {
    fn from(err: catwatch_config::ConfigError) -> Self {
        match err {
            catwatch_config::ConfigError::NoCredentials { profile } => {
                CliError::NoCredentials { profile }
            }
            catwatch_config::ConfigError::Validation { field, reason } => {
                CliError::Validation { field, reason }
            }
            other => CliError::ApiError {
                message: other.to_string(),
            },
        }
    }
}
