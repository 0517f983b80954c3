// ── Runtime hub configuration ──
//
// Describes *how* to find and talk to the bridge and where durable state
// lives. Core never reads config files; the outer layer builds a
// `HubConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use crate::model::BridgeScheme;

pub use hueflash_api::DEFAULT_DISCOVERY_URL;

/// Device type sent during pairing when none is configured.
pub const DEFAULT_DEVICE_TYPE: &str = "hueflash#cli";

/// Configuration for a [`Hub`](crate::Hub).
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Cloud discovery endpoint. Validated when the hub is built.
    pub discovery_url: String,
    /// Scheme used for the bridge's REST API.
    pub bridge_scheme: BridgeScheme,
    /// Accept the bridge's certificate without chain validation.
    ///
    /// The bridge presents a certificate it issued itself; trust is
    /// established by being on the same LAN. This only affects the bridge
    /// client, never the discovery client.
    pub trust_local_certificate: bool,
    /// Fixed identifier sent in the pairing request.
    pub device_type: String,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Fetch the catalog in the same flow right after a fresh pairing.
    /// When `false`, a fresh pairing reaches `Ready` without a catalog and
    /// the next connect loads it.
    pub fetch_catalog_after_pairing: bool,
    /// Where the paired credential is stored.
    pub credential_path: PathBuf,
    /// Where the watch-list is stored.
    pub watch_list_path: PathBuf,
}

impl HubConfig {
    /// Config with default endpoints and the given storage paths.
    pub fn with_paths(
        credential_path: impl Into<PathBuf>,
        watch_list_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            discovery_url: DEFAULT_DISCOVERY_URL.into(),
            bridge_scheme: BridgeScheme::Https,
            trust_local_certificate: true,
            device_type: DEFAULT_DEVICE_TYPE.into(),
            timeout: None,
            fetch_catalog_after_pairing: true,
            credential_path: credential_path.into(),
            watch_list_path: watch_list_path.into(),
        }
    }
}

