// hueflash-api: Async Rust client for Hue bridge discovery and the bridge v1 REST API

pub mod bridge;
pub mod discovery;
pub mod error;
pub mod transport;

pub use bridge::BridgeClient;
pub use bridge::models::{
    ApiResult, BridgeErrorBody, CreatedUser, LightDto, LightListing, LightStateDto,
    LightStateUpdate,
};
pub use discovery::{DEFAULT_DISCOVERY_URL, DiscoveredBridge, DiscoveryClient};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
