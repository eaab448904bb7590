//! CLI configuration — thin wrapper around `catwatch_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--controller, --username, etc.).

use std::time::Duration;

use catwatch_core::{ControllerConfig, Credentials, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use catwatch_config::{
    Config, Profile, config_path, load_config_or_default, resolve_password, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate a `Profile` + global flags into a `ControllerConfig`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<ControllerConfig, CliError> {
    // 1. Controller URL (flag > env > profile)
    let url_str = global.controller.as_deref().unwrap_or(&profile.controller);
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "controller".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    // 2. Credentials (username flag override, password via shared chain)
    let username = global
        .username
        .clone()
        .or_else(|| profile.username.clone())
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.to_owned(),
        })?;
    let password = catwatch_config::resolve_password(profile, profile_name)?;

    // 3. TLS verification
    let tls = if global.insecure || profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    // 4. Timeout
    let timeout = Duration::from_secs(global.timeout);

    Ok(ControllerConfig {
        url,
        credentials: Credentials { username, password },
        tls,
        timeout,
    })
}
