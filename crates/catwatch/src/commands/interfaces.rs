//! Interface command handlers: snapshots, CRC ranking, utilization.

use tabled::Tabled;

use catwatch_core::{Controller, Interface, RankedCrc, rank_top_errors, statistics_window};

use crate::cli::{GlobalOpts, InterfacesArgs, InterfacesCommand, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct InterfaceRow {
    #[tabled(rename = "Port Name")]
    port: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Admin")]
    admin: String,
    #[tabled(rename = "MAC Address")]
    mac: String,
    #[tabled(rename = "Speed")]
    speed: String,
    #[tabled(rename = "Duplex")]
    duplex: String,
    #[tabled(rename = "MTU")]
    mtu: String,
    #[tabled(rename = "VLAN")]
    vlan: String,
    #[tabled(rename = "IP Address")]
    ip: String,
    #[tabled(rename = "IP Mask")]
    mask: String,
}

impl From<&Interface> for InterfaceRow {
    fn from(i: &Interface) -> Self {
        Self {
            port: i.port_name.clone(),
            status: util::na(i.oper_status.as_deref()),
            admin: util::na(i.admin_status.as_deref()),
            mac: util::na(i.mac_address.as_deref()),
            speed: util::na(i.speed.as_deref()),
            duplex: util::na(i.duplex.as_deref()),
            mtu: util::na(i.mtu.as_deref()),
            vlan: util::na(i.vlan_id.as_deref()),
            ip: util::na(i.ipv4_address.as_deref()),
            mask: util::na(i.ipv4_mask.as_deref()),
        }
    }
}

#[derive(Tabled)]
pub(crate) struct CrcRow {
    #[tabled(rename = "Port Name")]
    port: String,
    #[tabled(rename = "CRC Errors")]
    crc_errors: u64,
}

impl From<&RankedCrc> for CrcRow {
    fn from(r: &RankedCrc) -> Self {
        Self {
            port: r.port_name.clone(),
            crc_errors: r.crc_errors,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: InterfacesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InterfacesCommand::List { device } => {
            let device = util::resolve_device(controller, &device).await?;
            let interfaces = controller.interface_snapshots(&device).await?;
            let out = output::render_list(
                &global.output,
                &interfaces,
                |i| InterfaceRow::from(i),
                |i| i.port_name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        InterfacesCommand::Errors {
            device,
            top,
            no_chart,
        } => {
            let device = util::resolve_device(controller, &device).await?;
            let records = controller.interface_errors(&device).await?;
            let ranked = rank_top_errors(&records, top);

            // Structured formats still get their (empty) list; the
            // human-readable message is table/plain only.
            if ranked.is_empty()
                && matches!(global.output, OutputFormat::Table | OutputFormat::Plain)
            {
                if !global.quiet {
                    println!("No CRC errors to report.");
                }
                return Ok(());
            }

            let out = output::render_list(
                &global.output,
                &ranked,
                |r| CrcRow::from(r),
                |r| format!("{} {}", r.port_name, r.crc_errors),
            );
            output::print_output(&out, global.quiet);

            if matches!(global.output, OutputFormat::Table) && !no_chart {
                let color = output::should_color(&global.color);
                output::print_output(&output::render_bar_chart(&ranked, color), global.quiet);
            }
            Ok(())
        }

        InterfacesCommand::Stats { device, port, days } => {
            let device = util::resolve_device(controller, &device).await?;
            let interfaces = controller.interface_snapshots(&device).await?;

            let interface = interfaces
                .iter()
                .find(|i| i.port_name == port)
                .ok_or_else(|| CliError::NotFound {
                    resource_type: "interface".into(),
                    identifier: port.clone(),
                    list_command: format!("interfaces list {}", device.hostname),
                })?;

            let Some(ref interface_id) = interface.id else {
                return Err(CliError::ApiError {
                    message: format!(
                        "controller returned no interface id for '{port}'; \
                         statistics cannot be queried"
                    ),
                });
            };

            let (start_ms, end_ms) = statistics_window(days);
            let stats = controller
                .interface_statistics(&device, interface_id, start_ms, end_ms)
                .await?;

            match stats {
                Some(data) => {
                    // Field set varies by platform -- structured formats only.
                    let out = match global.output {
                        OutputFormat::JsonCompact => output::render_json_compact(&data),
                        OutputFormat::Yaml => output::render_yaml(&data),
                        _ => output::render_json_pretty(&data),
                    };
                    output::print_output(&out, global.quiet);
                }
                None => {
                    if !global.quiet {
                        println!(
                            "No utilization data available for {port} \
                             (endpoint unsupported in this environment)."
                        );
                    }
                }
            }
            Ok(())
        }
    }
}
