// ── Per-device report assembly ──
//
// The report types encode the one asymmetry the pipeline guarantees: a
// failed error-counter fetch degrades a device's report (the ranking
// section goes missing, with a reason) but never suppresses the snapshot
// data fetched a moment earlier.

use serde::Serialize;

use catwatch_api::{Device, Interface};

use crate::error::CoreError;
use crate::ranking::RankedCrc;

/// CRC ranking section of a device report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CrcSummary {
    /// Counters were fetched; ranking may legitimately be empty when no
    /// interface has nonzero errors.
    Ranked { top: Vec<RankedCrc> },
    /// The error-counter fetch failed. The snapshot section is still
    /// valid; only the ranking is unavailable.
    Unavailable { reason: String },
}

impl CrcSummary {
    /// Returns the ranked entries, if counters were available.
    pub fn ranked(&self) -> Option<&[RankedCrc]> {
        match self {
            Self::Ranked { top } => Some(top),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Everything one poll pass produced for a single device.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceReport {
    pub device: Device,
    pub interfaces: Vec<Interface>,
    pub crc: CrcSummary,
}

/// Outcome of one device within a multi-device sweep.
///
/// A snapshot-fetch failure loses the device's report but not the sweep;
/// the failure is carried so the sink can say which device was skipped
/// and why.
#[derive(Debug)]
pub enum SweepEntry {
    Report(DeviceReport),
    Failed { device: Device, error: CoreError },
}
