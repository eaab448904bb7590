//! Output formatting: table, JSON, YAML, plain, and the CRC bar chart.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use catwatch_core::RankedCrc;

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-item detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Pretty-printed JSON.
pub(crate) fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

/// Compact single-line JSON.
pub(crate) fn render_json_compact<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).expect("serialization should not fail")
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        render_json_compact(data)
    } else {
        render_json_pretty(data)
    }
}

/// YAML output.
pub(crate) fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}

// ── CRC bar chart ────────────────────────────────────────────────────

/// Width of the longest bar, in character cells.
const CHART_WIDTH: usize = 40;

/// Render the ranked CRC entries as a horizontal bar chart.
///
/// Bars scale linearly against the largest count. Empty input yields the
/// "no CRC errors" message instead of an empty plot.
pub fn render_bar_chart(ranked: &[RankedCrc], color: bool) -> String {
    if ranked.is_empty() {
        return "No CRC errors to report.".into();
    }

    let max = ranked
        .iter()
        .map(|r| r.crc_errors)
        .max()
        .unwrap_or(1)
        .max(1);
    let label_width = ranked
        .iter()
        .map(|r| r.port_name.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(ranked.len());
    for entry in ranked {
        let filled = scale(entry.crc_errors, max, CHART_WIDTH);
        let bar: String = "█".repeat(filled);
        let bar = if color {
            bar.red().to_string()
        } else {
            bar
        };
        lines.push(format!(
            "{:<label_width$}  {bar} {}",
            entry.port_name, entry.crc_errors
        ));
    }
    lines.join("\n")
}

/// Scale `value` into `[1, width]` cells relative to `max`.
///
/// Nonzero counts always get at least one cell so small counts stay
/// visible next to large ones.
fn scale(value: u64, max: u64, width: usize) -> usize {
    if value == 0 {
        return 0;
    }
    let width_u64 = u64::try_from(width).unwrap_or(u64::MAX);
    let cells = value.saturating_mul(width_u64) / max;
    usize::try_from(cells.max(1)).unwrap_or(width)
}
