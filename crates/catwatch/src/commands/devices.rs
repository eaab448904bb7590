//! Device command handlers.

use tabled::Tabled;

use catwatch_core::{Controller, Device};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Hostname")]
    hostname: String,
    #[tabled(rename = "Management IP")]
    management_ip: String,
    #[tabled(rename = "Platform")]
    platform: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Reachability")]
    reachability: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            hostname: d.hostname.clone(),
            management_ip: util::na(d.management_ip_address.as_deref()),
            platform: util::na(d.platform_id.as_deref()),
            version: util::na(d.software_version.as_deref()),
            role: util::na(d.role.as_deref()),
            reachability: util::na(d.reachability_status.as_deref()),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::List => {
            let devices = controller.list_devices().await?;
            let out = output::render_list(
                &global.output,
                &devices,
                |d| DeviceRow::from(d),
                |d| d.hostname.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
