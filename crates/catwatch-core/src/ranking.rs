// ── CRC error ranking ──
//
// Pure ranking over per-interface error counters. No I/O: the function is
// fed decoded counter records and returns an ordered view, so it can be
// tested from literal data.

use serde::Serialize;

use catwatch_api::InterfaceErrors;

/// One entry of the top-N ranking. Derived and ephemeral — built fresh
/// from counter records on every run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCrc {
    pub port_name: String,
    pub crc_errors: u64,
}

/// Default ranking depth.
pub const DEFAULT_TOP_N: usize = 10;

/// Rank interfaces by CRC error count, descending.
///
/// Interfaces with zero errors are dropped, the remainder is sorted by
/// count descending, and the result is truncated to `n` entries. Ties
/// keep their relative input order (`sort_by` is stable). Empty input or
/// `n == 0` yields an empty ranking, not an error.
pub fn rank_top_errors(records: &[InterfaceErrors], n: usize) -> Vec<RankedCrc> {
    let mut ranked: Vec<RankedCrc> = records
        .iter()
        .filter(|r| r.crc_errors > 0)
        .map(|r| RankedCrc {
            port_name: r.port_name.clone(),
            crc_errors: r.crc_errors,
        })
        .collect();

    ranked.sort_by(|a, b| b.crc_errors.cmp(&a.crc_errors));
    ranked.truncate(n);
    ranked
}
