// ── Domain model ──
//
// Session-scoped values (BridgeAddress, Catalog) are rebuilt on every
// connect; Credential and WatchedLight are durable and owned by the stores.

pub mod alert;
pub mod bridge;
pub mod credential;
pub mod light;
pub mod watch;

pub use alert::AlertMode;
pub use bridge::{BridgeAddress, BridgeScheme};
pub use credential::Credential;
pub use light::{Catalog, LightRecord, StateSnapshot};
pub use watch::WatchedLight;
