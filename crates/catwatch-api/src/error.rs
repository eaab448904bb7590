use thiserror::Error;

/// Top-level error type for the `catwatch-api` crate.
///
/// Covers every failure mode the Intent API surfaces: token acquisition,
/// transport, per-endpoint HTTP errors, and payload decoding.
/// `catwatch-core` maps these into pipeline-level error kinds.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token acquisition failed, or a later call returned 401
    /// (the token is acquired once per run and never refreshed).
    #[error("Authentication failed (HTTP {status}): {body}")]
    Authentication { status: u16, body: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Intent API ──────────────────────────────────────────────────
    /// Non-2xx response from an Intent API endpoint. Carries the raw
    /// body: malformed or unexpected controller responses are the
    /// dominant real-world failure mode against this API.
    #[error("Intent API error (HTTP {status}): {body}")]
    Intent { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the bearer token was rejected.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a "not found" response.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Intent { status: 404, .. } => true,
            _ => false,
        }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Intent { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
