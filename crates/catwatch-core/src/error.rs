// ── Core error types ──
//
// Pipeline-level errors. The distinction that matters is WHICH fetch
// failed: the same HTTP 500 is a directory failure on device enumeration
// but a telemetry failure on an interface fetch, and the two have
// different blast radii (directory aborts the run, telemetry loses one
// device or one data set). A bare `From<catwatch_api::Error>` cannot
// express that, so construction goes through per-call-site helpers.

use thiserror::Error;

/// Unified error type for the core pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Fatal for the whole run ──────────────────────────────────────
    #[error("Authentication failed (HTTP {status}): {message}")]
    AuthenticationFailed { status: u16, message: String },

    #[error("Device directory unavailable: {message}")]
    DirectoryUnavailable { message: String },

    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Controller request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Fatal for one device / one data set ──────────────────────────
    #[error("Telemetry fetch failed for device '{device}': {message}")]
    TelemetryUnavailable { device: String, message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Classify an API error raised by device enumeration.
    pub(crate) fn directory(err: catwatch_api::Error) -> Self {
        match Self::common(err) {
            Ok(common) => common,
            Err(err) => Self::DirectoryUnavailable {
                message: err.to_string(),
            },
        }
    }

    /// Classify an API error raised during the initial token exchange.
    pub(crate) fn connect_failure(err: catwatch_api::Error) -> Self {
        match Self::common(err) {
            Ok(common) => common,
            Err(err) => Self::Internal(err.to_string()),
        }
    }

    /// Classify an API error raised by an interface fetch for `device`.
    pub(crate) fn telemetry(device: &str, err: catwatch_api::Error) -> Self {
        match Self::common(err) {
            Ok(common) => common,
            Err(err) => Self::TelemetryUnavailable {
                device: device.to_owned(),
                message: err.to_string(),
            },
        }
    }

    /// Map the error kinds whose meaning does not depend on the call
    /// site: auth, connection, timeout. Returns the original error back
    /// when the caller should apply its own classification.
    fn common(err: catwatch_api::Error) -> Result<Self, catwatch_api::Error> {
        match err {
            catwatch_api::Error::Authentication { status, body } => {
                Ok(Self::AuthenticationFailed {
                    status,
                    message: body,
                })
            }
            catwatch_api::Error::Transport(ref e) if e.is_timeout() => {
                Ok(Self::Timeout { timeout_secs: 0 })
            }
            catwatch_api::Error::Transport(ref e) if e.is_connect() => {
                Ok(Self::ConnectionFailed {
                    url: e
                        .url()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "<unknown>".into()),
                    reason: e.to_string(),
                })
            }
            catwatch_api::Error::Tls(msg) => Ok(Self::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            }),
            catwatch_api::Error::InvalidUrl(e) => Ok(Self::Config {
                message: format!("Invalid URL: {e}"),
            }),
            other => Err(other),
        }
    }

    /// Returns `true` if the run cannot continue past this error
    /// (expired token, unreachable controller, unusable directory).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed { .. }
                | Self::DirectoryUnavailable { .. }
                | Self::ConnectionFailed { .. }
                | Self::Config { .. }
        )
    }
}
