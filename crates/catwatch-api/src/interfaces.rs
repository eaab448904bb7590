// Interface telemetry endpoints
//
// Operational snapshots, error counters, and historical utilization for a
// device's interfaces. Snapshots and error counters come from sibling
// endpoints and are correlated downstream by exact portName equality.

use tracing::debug;

use crate::client::IntentClient;
use crate::error::Error;
use crate::models::{Interface, InterfaceErrors};

impl IntentClient {
    /// Fetch the operational snapshot of every interface on a device.
    ///
    /// `GET /dna/intent/api/v1/interface/network-device/{id}`
    ///
    /// One request returns the complete set; the endpoint does not
    /// paginate.
    pub async fn interfaces(&self, device_id: &str) -> Result<Vec<Interface>, Error> {
        let url = self.intent_url(&format!("interface/network-device/{device_id}"))?;
        debug!(device_id, "fetching interface snapshots");
        self.get(url).await
    }

    /// Fetch per-interface error counters for a device.
    ///
    /// `GET /dna/intent/api/v1/interface/network-device/{id}/errors`
    ///
    /// This endpoint is independently fallible from
    /// [`interfaces`](Self::interfaces): sandbox controllers often serve
    /// snapshots but not counters. Callers decide whether a failure here
    /// degrades or aborts their workflow.
    pub async fn interface_errors(&self, device_id: &str) -> Result<Vec<InterfaceErrors>, Error> {
        let url = self.intent_url(&format!("interface/network-device/{device_id}/errors"))?;
        debug!(device_id, "fetching interface error counters");
        self.get(url).await
    }

    /// Fetch historical utilization statistics for one interface.
    ///
    /// `GET /dna/intent/api/v1/interface/{id}/statistics?startTime=..&endTime=..`
    ///
    /// Timestamps are Unix milliseconds. Returns `Ok(None)` on 404 --
    /// lab controllers commonly lack statistics support, and "no data
    /// available" is an expected outcome, not a failure. The field set
    /// varies by platform, so the payload stays loosely typed.
    pub async fn interface_statistics(
        &self,
        interface_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Option<Vec<serde_json::Value>>, Error> {
        let url = self.intent_url(&format!("interface/{interface_id}/statistics"))?;
        debug!(interface_id, start_ms, end_ms, "fetching interface statistics");

        let query = [
            ("startTime", start_ms.to_string()),
            ("endTime", end_ms.to_string()),
        ];

        match self.get_with_query(url, &query).await {
            Ok(stats) => Ok(Some(stats)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}
