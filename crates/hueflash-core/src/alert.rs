// ── Alert driver ──
//
// Maps watched light names to device ids and sets the alert attribute on
// each match, one device at a time. Unmatched names and per-device
// failures are logged and skipped; they never stop the remaining lights.

use std::collections::HashSet;

use hueflash_api::{BridgeClient, LightStateUpdate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::model::{AlertMode, Catalog, Credential, WatchedLight};

/// A device whose state update failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceFailure {
    pub device_id: String,
    pub name: String,
    pub reason: String,
}

/// Outcome of one alert run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertReport {
    pub mode: AlertMode,
    /// Device ids that accepted the update, in the order they were sent.
    pub sent: Vec<String>,
    pub failed: Vec<DeviceFailure>,
    /// Watched names with no light of that name in the catalog.
    pub unmatched: Vec<String>,
}

impl AlertReport {
    pub fn empty(mode: AlertMode) -> Self {
        Self {
            mode,
            sent: Vec::new(),
            failed: Vec::new(),
            unmatched: Vec::new(),
        }
    }

    /// `true` when every watched light was found and updated.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.unmatched.is_empty()
    }
}

/// Short repeated alert (`lselect`), used for game-acceptance events.
pub async fn pulse(
    bridge: &BridgeClient,
    credential: &Credential,
    catalog: &Catalog,
    watched: &[WatchedLight],
) -> AlertReport {
    flash(bridge, credential, catalog, watched, AlertMode::Pulse).await
}

/// Single alert cycle (`select`), used to test the setup.
pub async fn sustained_alert(
    bridge: &BridgeClient,
    credential: &Credential,
    catalog: &Catalog,
    watched: &[WatchedLight],
) -> AlertReport {
    flash(bridge, credential, catalog, watched, AlertMode::Sustained).await
}

/// Best-effort fan-out of `mode` to every watched light, sequentially.
pub async fn flash(
    bridge: &BridgeClient,
    credential: &Credential,
    catalog: &Catalog,
    watched: &[WatchedLight],
    mode: AlertMode,
) -> AlertReport {
    let mut report = AlertReport::empty(mode);
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for light in watched {
        if !seen.insert(light.name.as_str()) {
            continue;
        }
        match catalog.find_by_name(&light.name) {
            Some(record) => targets.push((record.device_id.as_str(), record.name.as_str())),
            None => {
                warn!(light = %light.name, "did not find light on bridge");
                report.unmatched.push(light.name.clone());
            }
        }
    }

    let update = LightStateUpdate::alert(mode.as_ref());
    for (device_id, name) in targets {
        match bridge
            .set_light_state(credential.username(), device_id, &update)
            .await
        {
            Ok(_) => {
                debug!(device_id, light = name, %mode, "alert applied");
                report.sent.push(device_id.to_owned());
            }
            Err(e) => {
                let err = CoreError::from_state_update(e);
                warn!(device_id, light = name, error = %err, "alert failed");
                report.failed.push(DeviceFailure {
                    device_id: device_id.to_owned(),
                    name: name.to_owned(),
                    reason: err.reason(),
                });
            }
        }
    }

    if report.is_clean() {
        info!(%mode, lights = report.sent.len(), "alert sent");
    } else {
        warn!(
            %mode,
            sent = report.sent.len(),
            failed = report.failed.len(),
            unmatched = report.unmatched.len(),
            "alert partially applied"
        );
    }
    report
}
