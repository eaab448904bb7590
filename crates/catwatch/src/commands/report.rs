//! Full interface-health report: one device, or every device.
//!
//! This is the presentation end of the pipeline. The error-isolation
//! rules live in the core; this module only has to render what it is
//! handed: full reports, degraded reports (snapshot without ranking),
//! and per-device failures inside a sweep.

use chrono::Utc;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use catwatch_core::{Controller, CrcSummary, DeviceReport, SweepEntry};

use crate::cli::{GlobalOpts, OutputFormat, ReportArgs};
use crate::error::CliError;
use crate::output;

use super::interfaces::{CrcRow, InterfaceRow};
use super::util;

pub async fn handle(
    controller: &Controller,
    args: ReportArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let entries = match args.device {
        Some(ref hostname) => {
            let device = util::resolve_device(controller, hostname).await?;
            let report = controller.device_report(&device, args.top).await?;
            vec![SweepEntry::Report(report)]
        }
        None => controller.sweep(args.top).await?,
    };

    match global.output {
        OutputFormat::Table => render_human(&entries, &args, global),
        OutputFormat::Plain => render_plain(&entries, global),
        _ => {
            let values: Vec<serde_json::Value> = entries.iter().map(entry_to_json).collect();
            let out = match global.output {
                OutputFormat::JsonCompact => output::render_json_compact(&values),
                OutputFormat::Yaml => output::render_yaml(&values),
                _ => output::render_json_pretty(&values),
            };
            output::print_output(&out, global.quiet);
        }
    }
    Ok(())
}

// ── Human rendering ─────────────────────────────────────────────────

fn render_human(entries: &[SweepEntry], args: &ReportArgs, global: &GlobalOpts) {
    let color = output::should_color(&global.color);

    if !global.quiet {
        println!(
            "catwatch report - {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    for entry in entries {
        match entry {
            SweepEntry::Report(report) => render_device(report, args, global, color),
            SweepEntry::Failed { device, error } => {
                // Stays on stderr: the sweep continues, but the operator
                // must see which device produced no report and why.
                eprintln!("✗ {}: {error}", device.hostname);
            }
        }
    }
}

fn render_device(report: &DeviceReport, args: &ReportArgs, global: &GlobalOpts, color: bool) {
    if global.quiet {
        return;
    }

    let title = format!("── {} ", report.device.hostname);
    if color {
        println!("\n{}{}", title.bold(), "─".repeat(60_usize.saturating_sub(title.len())));
    } else {
        println!("\n{}{}", title, "─".repeat(60_usize.saturating_sub(title.len())));
    }

    if report.interfaces.is_empty() {
        println!("(no interfaces reported)");
    } else {
        let rows: Vec<InterfaceRow> = report.interfaces.iter().map(InterfaceRow::from).collect();
        println!("{}", table(rows));
    }

    match &report.crc {
        CrcSummary::Ranked { top } if top.is_empty() => {
            println!("\nNo CRC errors to report.");
        }
        CrcSummary::Ranked { top } => {
            println!("\nTop {} interfaces by CRC errors:", args.top);
            let rows: Vec<CrcRow> = top.iter().map(CrcRow::from).collect();
            println!("{}", table(rows));
            if !args.no_chart {
                println!("{}", output::render_bar_chart(top, color));
            }
        }
        CrcSummary::Unavailable { reason } => {
            // Snapshot data above stands; only the ranking is missing.
            println!("\nCRC ranking unavailable: {reason}");
        }
    }
}

fn table<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// ── Plain rendering (scripting) ─────────────────────────────────────

/// One line per ranked interface: `hostname port crc_count`.
fn render_plain(entries: &[SweepEntry], global: &GlobalOpts) {
    for entry in entries {
        match entry {
            SweepEntry::Report(report) => {
                if let Some(top) = report.crc.ranked() {
                    for ranked in top {
                        if !global.quiet {
                            println!(
                                "{} {} {}",
                                report.device.hostname, ranked.port_name, ranked.crc_errors
                            );
                        }
                    }
                }
            }
            SweepEntry::Failed { device, error } => {
                eprintln!("✗ {}: {error}", device.hostname);
            }
        }
    }
}

// ── Structured rendering ────────────────────────────────────────────

fn entry_to_json(entry: &SweepEntry) -> serde_json::Value {
    match entry {
        SweepEntry::Report(report) => {
            serde_json::to_value(report).unwrap_or_else(|_| serde_json::Value::Null)
        }
        SweepEntry::Failed { device, error } => serde_json::json!({
            "device": { "id": device.id, "hostname": device.hostname },
            "error": error.to_string(),
        }),
    }
}
