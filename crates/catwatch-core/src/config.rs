// ── Controller configuration ──
//
// Everything the pipeline needs to reach one controller: address,
// credentials, TLS policy, timeout. Built by catwatch-config (profiles)
// or by the CLI from flags; the core never reads globals or files.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification policy for the controller connection.
#[derive(Debug, Clone)]
pub enum TlsVerification {
    /// Use the system certificate store.
    SystemDefaults,
    /// Trust a custom CA certificate (PEM file).
    CustomCa(PathBuf),
    /// Accept any certificate. Lab/sandbox controllers only.
    DangerAcceptInvalid,
}

/// Credentials for the token exchange.
///
/// Catalyst Center has a single auth scheme: HTTP Basic against the token
/// endpoint, then the returned token on every subsequent request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Complete configuration for one controller connection.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller base URL (e.g. `https://dnac.example.com`).
    pub url: Url,
    pub credentials: Credentials,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}
