//! Shared helpers for command handlers.

use catwatch_core::{Controller, Device};

use crate::error::CliError;

/// Resolve a hostname to its device record, or a NotFound error.
///
/// The pipeline reports "unknown hostname" as `Ok(None)`; at the CLI
/// boundary that becomes a NotFound diagnostic with a list hint, kept
/// distinct from transport/auth failures.
pub async fn resolve_device(controller: &Controller, hostname: &str) -> Result<Device, CliError> {
    match controller.find_device(hostname).await? {
        Some(device) => Ok(device),
        None => Err(CliError::NotFound {
            resource_type: "device".into(),
            identifier: hostname.into(),
            list_command: "devices list".into(),
        }),
    }
}

/// Render an optional controller field, "-" when absent.
pub fn na(value: Option<&str>) -> String {
    value.unwrap_or("-").to_owned()
}
