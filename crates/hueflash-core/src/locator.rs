// ── Bridge locator ──
//
// Resolves the bridge's LAN address through the cloud discovery endpoint.
// Single attempt; the caller decides whether to repeat the connect flow.

use std::time::Duration;

use hueflash_api::{DiscoveryClient, TransportConfig};
use tracing::{debug, info};
use url::Url;

use crate::error::CoreError;
use crate::model::BridgeAddress;

pub struct BridgeLocator {
    client: DiscoveryClient,
}

impl BridgeLocator {
    pub fn new(discovery_url: &str, timeout: Option<Duration>) -> Result<Self, CoreError> {
        let url = Url::parse(discovery_url).map_err(|e| CoreError::Config {
            message: format!("invalid discovery URL {discovery_url:?}: {e}"),
        })?;
        let transport = TransportConfig::default().with_timeout(timeout);
        let client = DiscoveryClient::new(url, &transport).map_err(|e| CoreError::Config {
            message: e.to_string(),
        })?;
        Ok(Self { client })
    }

    /// Resolve the bridge address. The first candidate wins.
    pub async fn locate(&self) -> Result<BridgeAddress, CoreError> {
        debug!(url = %self.client.url(), "locating bridge");

        let bridge = self
            .client
            .discover_first()
            .await
            .map_err(CoreError::from_discovery)?;

        let address = BridgeAddress::new(bridge.internal_ip_address, bridge.id);
        info!(
            bridge_id = %address.bridge_id,
            address = %address.network_address,
            "located bridge"
        );
        Ok(address)
    }
}
