// catwatch-core: telemetry aggregation pipeline for Catalyst Center
// interface health. One poll-and-report pass per run: authenticate,
// enumerate devices, fetch snapshots and error counters, rank by CRC
// errors, hand plain data to the report sink.

pub mod config;
pub mod controller;
pub mod error;
pub mod ranking;
pub mod report;

pub use catwatch_api::{Device, Interface, InterfaceErrors};
pub use config::{ControllerConfig, Credentials, TlsVerification};
pub use controller::{Controller, statistics_window};
pub use error::CoreError;
pub use ranking::{DEFAULT_TOP_N, RankedCrc, rank_top_errors};
pub use report::{CrcSummary, DeviceReport, SweepEntry};
