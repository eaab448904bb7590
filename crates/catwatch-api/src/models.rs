// Intent API response types
//
// Models for the Catalyst Center Intent API. Payloads arrive wrapped in the
// `{ "response": ..., "version": ... }` envelope. Fields use
// `#[serde(default)]` liberally because the API omits fields freely
// depending on device platform and software version.

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard Intent API response envelope.
///
/// Every endpoint wraps its payload:
/// ```json
/// { "response": [...], "version": "1.0" }
/// ```
#[derive(Debug, Deserialize)]
pub struct IntentEnvelope<T> {
    pub response: T,
    #[serde(default)]
    pub version: Option<String>,
}

/// Token endpoint payload: `{ "Token": "..." }`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "Token")]
    pub token: String,
}

// ── Device ───────────────────────────────────────────────────────────

/// Managed device from `network-device`.
///
/// The controller returns 40+ fields per device. We model the ones the
/// directory and device table need explicitly; everything else lands in
/// `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub hostname: String,
    #[serde(default)]
    pub management_ip_address: Option<String>,
    #[serde(default)]
    pub platform_id: Option<String>,
    #[serde(default)]
    pub software_version: Option<String>,
    #[serde(default)]
    pub reachability_status: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub up_time: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Interface ────────────────────────────────────────────────────────

/// Operational interface snapshot from `interface/network-device/{id}`.
///
/// Only `portName` is guaranteed; every other field may be absent
/// depending on interface type (SVIs have no duplex, routed ports have no
/// VLAN, etc.). Absent means "not available", never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    /// Interface instance UUID; needed by the statistics endpoint.
    #[serde(default)]
    pub id: Option<String>,
    pub port_name: String,
    /// Operational status as reported by the controller ("up"/"down").
    #[serde(default, rename = "status")]
    pub oper_status: Option<String>,
    #[serde(default)]
    pub admin_status: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub duplex: Option<String>,
    #[serde(default)]
    pub mtu: Option<String>,
    #[serde(default)]
    pub vlan_id: Option<String>,
    #[serde(default)]
    pub ipv4_address: Option<String>,
    #[serde(default)]
    pub ipv4_mask: Option<String>,
    #[serde(default)]
    pub last_input: Option<String>,
    #[serde(default)]
    pub last_output: Option<String>,
    #[serde(default)]
    pub port_mode: Option<String>,
    #[serde(default)]
    pub port_type: Option<String>,
    #[serde(default)]
    pub interface_type: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Interface error counters ─────────────────────────────────────────

/// Per-interface error counters from `interface/network-device/{id}/errors`.
///
/// A missing `crcErrors` field means zero — the endpoint drops counters
/// that have never incremented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceErrors {
    pub port_name: String,
    #[serde(default)]
    pub crc_errors: u64,
    #[serde(default)]
    pub alignment_errors: Option<u64>,
    #[serde(default)]
    pub frame_errors: Option<u64>,
    #[serde(default)]
    pub runts: Option<u64>,
    #[serde(default)]
    pub giants: Option<u64>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
