// ── Bridge address ──

use std::net::Ipv6Addr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use url::Url;

use crate::error::CoreError;

/// URL scheme used to reach the bridge. The v1 API answers on both.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BridgeScheme {
    #[default]
    Https,
    Http,
}

/// Where the bridge lives on the local network. Resolved once per
/// session and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeAddress {
    /// Host, optionally with a port (e.g. `192.168.1.50`).
    pub network_address: String,
    pub bridge_id: String,
}

impl BridgeAddress {
    pub fn new(network_address: impl Into<String>, bridge_id: impl Into<String>) -> Self {
        Self {
            network_address: network_address.into(),
            bridge_id: bridge_id.into(),
        }
    }

    /// Root URL of the bridge, e.g. `https://192.168.1.50/`.
    pub fn base_url(&self, scheme: BridgeScheme) -> Result<Url, CoreError> {
        let host = self.network_address.trim();
        let host = if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            host.to_owned()
        };

        Url::parse(&format!("{scheme}://{host}/")).map_err(|e| CoreError::MalformedResponse {
            message: format!("bridge address {:?} is not a valid host: {e}", self.network_address),
        })
    }
}
