//! Bridge pairing, light catalog and alert orchestration.
//!
//! This crate owns the domain model and the flows that sit between
//! `hueflash-api` and the outer collaborator (the CLI or a UI):
//!
//! - **[`Hub`]**: Orchestrator. [`connect()`](Hub::connect) runs the
//!   locate → load-or-pair → fetch-catalog flow and publishes a
//!   [`Session`]; [`on_game_accepted()`](Hub::on_game_accepted) and
//!   [`on_user_test_requested()`](Hub::on_user_test_requested) flash the
//!   watched lights using the most recently published session.
//!
//! - **Stores** ([`store`]): [`CredentialStore`] and [`WatchListStore`]
//!   persist the paired credential and the user's watch-list as JSON.
//!
//! - **Components**: [`BridgeLocator`] (cloud discovery),
//!   [`PairingClient`] (link-button handshake), [`catalog`] (light listing)
//!   and [`alert`] (per-device alert fan-out).
//!
//! - **Domain model** ([`model`]): [`BridgeAddress`], [`Credential`],
//!   [`LightRecord`], [`StateSnapshot`], [`WatchedLight`], [`AlertMode`].

pub mod alert;
pub mod catalog;
pub mod config;
pub mod error;
pub mod hub;
pub mod locator;
pub mod model;
pub mod pairing;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use alert::AlertReport;
pub use config::HubConfig;
pub use error::CoreError;
pub use hub::{ConnectResult, ConnectSummary, ConnectionState, Hub, Session};
pub use locator::BridgeLocator;
pub use model::{
    AlertMode, BridgeAddress, BridgeScheme, Catalog, Credential, LightRecord, StateSnapshot,
    WatchedLight,
};
pub use pairing::PairingClient;
pub use store::{CredentialStore, WatchListStore};
