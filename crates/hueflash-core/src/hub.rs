// ── Hub: connect flow and alert triggers ──
//
// Owns everything a session needs. A connect flow builds a complete
// `Session` and publishes it with one atomic swap when it reaches Ready;
// alert flows load whatever session is current and only read it. An
// alert racing a reconnect therefore sees the previous session, and a
// failed connect never disturbs the session that was already published.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use hueflash_api::{BridgeClient, TransportConfig};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::alert::{self, AlertReport};
use crate::catalog;
use crate::config::HubConfig;
use crate::error::CoreError;
use crate::locator::BridgeLocator;
use crate::model::{AlertMode, BridgeAddress, Catalog, Credential};
use crate::pairing::PairingClient;
use crate::store::{CredentialStore, WatchListStore};

// ── ConnectionState ──────────────────────────────────────────────

/// Connect flow state, observable through [`Hub::subscribe_state`].
///
/// `Idle → Locating → (Pairing | FetchingCatalog) → Ready`, with
/// `Failed` reachable from any step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Locating,
    Pairing,
    FetchingCatalog,
    Ready,
    Failed { reason: String },
}

impl ConnectionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

// ── Session ──────────────────────────────────────────────────────

/// Everything produced by one successful connect flow.
pub struct Session {
    pub address: BridgeAddress,
    pub credential: Credential,
    /// `None` after a fresh pairing when the catalog fetch is deferred.
    pub catalog: Option<Catalog>,
    bridge: BridgeClient,
}

impl Session {
    pub fn bridge(&self) -> &BridgeClient {
        &self.bridge
    }
}

/// What a successful connect produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectSummary {
    pub bridge_id: String,
    pub network_address: String,
    /// `true` if this flow paired a new credential.
    pub paired: bool,
    /// Number of lights in the catalog, if it was fetched.
    pub lights: Option<usize>,
}

pub type ConnectResult = Result<ConnectSummary, CoreError>;

// ── Hub ──────────────────────────────────────────────────────────

/// The orchestrator the outer layer talks to.
///
/// Cheaply cloneable via `Arc<HubInner>`, so a connect flow and an alert
/// flow can run from different tasks.
#[derive(Clone)]
pub struct Hub {
    inner: Arc<HubInner>,
}

struct HubInner {
    config: HubConfig,
    locator: BridgeLocator,
    pairing: PairingClient,
    credentials: CredentialStore,
    watch_list: WatchListStore,
    state: watch::Sender<ConnectionState>,
    session: ArcSwapOption<Session>,
}

impl Hub {
    /// Create a hub from configuration. Does NOT connect -- call
    /// [`connect()`](Self::connect).
    pub fn new(config: HubConfig) -> Result<Self, CoreError> {
        let locator = BridgeLocator::new(&config.discovery_url, config.timeout)?;
        Ok(Self::with_locator(config, locator))
    }

    /// Create a hub with a pre-built locator.
    pub fn with_locator(config: HubConfig, locator: BridgeLocator) -> Self {
        let credentials = CredentialStore::new(&config.credential_path);
        let watch_list = WatchListStore::new(&config.watch_list_path);
        let pairing = PairingClient::new(config.device_type.clone(), credentials.clone());
        let (state, _) = watch::channel(ConnectionState::Idle);

        Self {
            inner: Arc::new(HubInner {
                config,
                locator,
                pairing,
                credentials,
                watch_list,
                state,
                session: ArcSwapOption::empty(),
            }),
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.inner.config
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.inner.credentials
    }

    pub fn watch_list(&self) -> &WatchListStore {
        &self.inner.watch_list
    }

    /// Current connect flow state.
    pub fn state(&self) -> ConnectionState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<ConnectionState> {
        self.inner.state.subscribe()
    }

    /// The most recently published session, if any connect succeeded.
    pub fn session(&self) -> Option<Arc<Session>> {
        self.inner.session.load_full()
    }

    fn set_state(&self, state: ConnectionState) {
        debug!(?state, "connection state");
        self.inner.state.send_replace(state);
    }

    // ── Connect flow ─────────────────────────────────────────────

    /// Run the connect flow: locate, load or pair, fetch the catalog.
    ///
    /// Errors end the flow in [`ConnectionState::Failed`] and are logged
    /// here; they are also returned so the caller can show a notification.
    pub async fn connect(&self) -> ConnectResult {
        match self.run_connect().await {
            Ok(summary) => Ok(summary),
            Err(err) => {
                let cause = std::error::Error::source(&err).map(ToString::to_string);
                error!(error = %err, ?cause, hint = err.user_hint(), "connect failed");
                self.set_state(ConnectionState::Failed {
                    reason: err.reason(),
                });
                Err(err)
            }
        }
    }

    async fn run_connect(&self) -> ConnectResult {
        let config = &self.inner.config;

        self.set_state(ConnectionState::Locating);
        let address = self.inner.locator.locate().await?;
        let bridge = self.bridge_client(&address)?;

        let existing = self.inner.credentials.load()?;
        let paired = existing.is_none();
        if paired {
            self.set_state(ConnectionState::Pairing);
        }
        let credential = self
            .inner
            .pairing
            .obtain_credential(&bridge, existing)
            .await?;

        let catalog = if paired && !config.fetch_catalog_after_pairing {
            info!("paired; the light catalog loads on the next connect");
            None
        } else {
            self.set_state(ConnectionState::FetchingCatalog);
            Some(catalog::fetch_lights(&bridge, &credential).await?)
        };

        let summary = ConnectSummary {
            bridge_id: address.bridge_id.clone(),
            network_address: address.network_address.clone(),
            paired,
            lights: catalog.as_ref().map(Catalog::len),
        };

        self.inner.session.store(Some(Arc::new(Session {
            address,
            credential,
            catalog,
            bridge,
        })));
        self.set_state(ConnectionState::Ready);
        info!(bridge_id = %summary.bridge_id, lights = ?summary.lights, "connected to bridge");
        Ok(summary)
    }

    fn bridge_client(&self, address: &BridgeAddress) -> Result<BridgeClient, CoreError> {
        let config = &self.inner.config;
        let base_url = address.base_url(config.bridge_scheme)?;
        let transport = TransportConfig::local_bridge(config.trust_local_certificate)
            .with_timeout(config.timeout);

        BridgeClient::new(base_url, &transport).map_err(|e| CoreError::Config {
            message: e.to_string(),
        })
    }

    // ── Alert triggers ───────────────────────────────────────────

    /// The helper reported a successful game acceptance: pulse the
    /// watched lights if connected. Never fails; problems are logged.
    pub async fn on_game_accepted(&self) -> AlertReport {
        self.alert_logged(AlertMode::Pulse).await
    }

    /// The user asked to test the setup: one alert cycle on the watched
    /// lights if connected. Never fails; problems are logged.
    pub async fn on_user_test_requested(&self) -> AlertReport {
        self.alert_logged(AlertMode::Sustained).await
    }

    async fn alert_logged(&self, mode: AlertMode) -> AlertReport {
        match self.alert(mode).await {
            Ok(report) => report,
            Err(CoreError::NotReady) => {
                debug!(%mode, "not connected to a bridge; alert skipped");
                AlertReport::empty(mode)
            }
            Err(err) => {
                error!(%mode, error = %err, "alert aborted");
                AlertReport::empty(mode)
            }
        }
    }

    /// Flash the watched lights with `mode` using the current session.
    ///
    /// Requires a published session and a connect state other than
    /// `Idle` or `Failed`; while a reconnect is in flight the previous
    /// session is used.
    pub async fn alert(&self, mode: AlertMode) -> Result<AlertReport, CoreError> {
        let state = self.state();
        if matches!(state, ConnectionState::Idle | ConnectionState::Failed { .. }) {
            return Err(CoreError::NotReady);
        }
        let session = self.session().ok_or(CoreError::NotReady)?;
        let watched = self.inner.watch_list.load()?;

        let empty = Catalog::default();
        let catalog = session.catalog.as_ref().unwrap_or_else(|| {
            warn!("light catalog not loaded yet; connect again to load it");
            &empty
        });

        Ok(alert::flash(&session.bridge, &session.credential, catalog, &watched, mode).await)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn state_predicates() {
        assert!(ConnectionState::Ready.is_ready());
        assert!(!ConnectionState::Pairing.is_ready());
        assert!(
            !ConnectionState::Failed {
                reason: "x".into()
            }
            .is_ready()
        );
    }

    #[tokio::test]
    async fn alert_before_connect_is_not_ready() {
        let dir = tempfile::tempdir().unwrap();
        let hub = Hub::new(HubConfig::with_paths(
            dir.path().join("credential.json"),
            dir.path().join("watched.json"),
        ))
        .unwrap();

        assert_eq!(hub.state(), ConnectionState::Idle);
        assert!(matches!(
            hub.alert(AlertMode::Pulse).await,
            Err(CoreError::NotReady)
        ));
        let report = hub.on_game_accepted().await;
        assert!(report.sent.is_empty());
    }
}
