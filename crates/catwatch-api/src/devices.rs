// Device directory endpoint
//
// Device enumeration via the network-device inventory. Hostname resolution
// is a linear scan over the full list -- the inventory endpoint has no
// server-side hostname filter worth relying on across controller versions.

use tracing::debug;

use crate::client::IntentClient;
use crate::error::Error;
use crate::models::Device;

impl IntentClient {
    /// List all managed devices.
    ///
    /// `GET /dna/intent/api/v1/network-device`
    pub async fn list_devices(&self) -> Result<Vec<Device>, Error> {
        let url = self.intent_url("network-device")?;
        debug!("listing network devices");
        self.get(url).await
    }
}
