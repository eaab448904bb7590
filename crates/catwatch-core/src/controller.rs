// ── Controller facade ──
//
// One authenticated connection to a Catalyst Center controller and the
// poll-and-report pipeline on top of it. The pipeline is deliberately
// sequential: one device at a time, snapshot fetch then error fetch, no
// shared state between devices. Failure blast radii differ by stage --
// see CoreError for the classification rules.

use chrono::Utc;
use tracing::{debug, info, warn};

use catwatch_api::{Device, Interface, InterfaceErrors, IntentClient, TlsMode, TransportConfig};

use crate::config::{ControllerConfig, TlsVerification};
use crate::error::CoreError;
use crate::ranking::rank_top_errors;
use crate::report::{CrcSummary, DeviceReport, SweepEntry};

/// An authenticated controller session plus the aggregation pipeline.
///
/// Created by [`connect`](Self::connect), which performs the one token
/// exchange of the run. The token is never refreshed; if it expires
/// mid-run every subsequent call fails with
/// [`CoreError::AuthenticationFailed`].
#[derive(Debug)]
pub struct Controller {
    config: ControllerConfig,
    client: IntentClient,
}

impl Controller {
    /// Authenticate and return a ready controller session.
    pub async fn connect(config: ControllerConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);

        info!(url = %config.url, "connecting to controller");
        let client = IntentClient::connect(
            config.url.clone(),
            &config.credentials.username,
            &config.credentials.password,
            &transport,
        )
        .await
        .map_err(CoreError::connect_failure)?;

        Ok(Self { config, client })
    }

    /// Access the controller configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ── Device directory ─────────────────────────────────────────────

    /// Enumerate all managed devices.
    ///
    /// A failure here is fatal for anything directory-dependent: a
    /// partial device list is not usable.
    pub async fn list_devices(&self) -> Result<Vec<Device>, CoreError> {
        self.client
            .list_devices()
            .await
            .map_err(CoreError::directory)
    }

    /// Resolve a hostname to its device record.
    ///
    /// Exact string equality over a linear scan; `None` is a normal
    /// outcome (unknown hostname), distinct from transport failures.
    pub async fn find_device(&self, hostname: &str) -> Result<Option<Device>, CoreError> {
        let devices = self.list_devices().await?;
        Ok(devices.into_iter().find(|d| d.hostname == hostname))
    }

    // ── Interface telemetry ──────────────────────────────────────────

    /// Fetch the operational snapshot of every interface on a device.
    pub async fn interface_snapshots(&self, device: &Device) -> Result<Vec<Interface>, CoreError> {
        self.client
            .interfaces(&device.id)
            .await
            .map_err(|e| CoreError::telemetry(&device.hostname, e))
    }

    /// Fetch per-interface error counters for a device.
    pub async fn interface_errors(
        &self,
        device: &Device,
    ) -> Result<Vec<InterfaceErrors>, CoreError> {
        self.client
            .interface_errors(&device.id)
            .await
            .map_err(|e| CoreError::telemetry(&device.hostname, e))
    }

    /// Fetch utilization statistics for one interface over a time window.
    ///
    /// `Ok(None)` means the controller has no statistics for that
    /// interface (common in lab environments) -- an expected outcome.
    pub async fn interface_statistics(
        &self,
        device: &Device,
        interface_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Option<Vec<serde_json::Value>>, CoreError> {
        self.client
            .interface_statistics(interface_id, start_ms, end_ms)
            .await
            .map_err(|e| CoreError::telemetry(&device.hostname, e))
    }

    // ── Report assembly ──────────────────────────────────────────────

    /// Run the full pipeline for one device: snapshot fetch, error
    /// fetch, top-N ranking.
    ///
    /// A snapshot failure loses the report (`Err`). An error-counter
    /// failure only degrades it: the snapshot section survives and the
    /// ranking is marked unavailable -- except when the failure is an
    /// expired token, which no part of the run can survive.
    pub async fn device_report(
        &self,
        device: &Device,
        top_n: usize,
    ) -> Result<DeviceReport, CoreError> {
        let interfaces = self.interface_snapshots(device).await?;
        debug!(
            device = %device.hostname,
            count = interfaces.len(),
            "interface snapshots fetched"
        );

        let crc = match self.interface_errors(device).await {
            Ok(records) => CrcSummary::Ranked {
                top: rank_top_errors(&records, top_n),
            },
            Err(err @ CoreError::AuthenticationFailed { .. }) => return Err(err),
            Err(err) => {
                warn!(
                    device = %device.hostname,
                    error = %err,
                    "error counters unavailable; skipping ranking"
                );
                CrcSummary::Unavailable {
                    reason: err.to_string(),
                }
            }
        };

        Ok(DeviceReport {
            device: device.clone(),
            interfaces,
            crc,
        })
    }

    /// Run the pipeline across every device in the directory.
    ///
    /// Devices are processed sequentially to completion. A device whose
    /// snapshot fetch fails is recorded and skipped; the sweep goes on.
    /// Fatal errors (expired token, unreachable controller) abort the
    /// remainder -- every later device would fail the same way.
    pub async fn sweep(&self, top_n: usize) -> Result<Vec<SweepEntry>, CoreError> {
        let devices = self.list_devices().await?;
        info!(count = devices.len(), "sweeping devices");

        let mut entries = Vec::with_capacity(devices.len());
        for device in devices {
            match self.device_report(&device, top_n).await {
                Ok(report) => entries.push(SweepEntry::Report(report)),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(device = %device.hostname, error = %err, "skipping device");
                    entries.push(SweepEntry::Failed { device, error: err });
                }
            }
        }
        Ok(entries)
    }
}

/// A `[start, end]` window in Unix milliseconds covering the last `days`.
pub fn statistics_window(days: i64) -> (i64, i64) {
    let end = Utc::now();
    let start = end - chrono::Duration::days(days);
    (start.timestamp_millis(), end.timestamp_millis())
}

fn build_transport(config: &ControllerConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}
