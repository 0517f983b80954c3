// ── Pairing client ──
//
// Obtains the bridge credential: reuse the stored one, otherwise run the
// link-button handshake once and persist the result. There is no polling
// loop; a "link button not pressed" answer ends the attempt.

use hueflash_api::BridgeClient;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::model::Credential;
use crate::store::CredentialStore;

pub struct PairingClient {
    device_type: String,
    store: CredentialStore,
}

impl PairingClient {
    pub fn new(device_type: impl Into<String>, store: CredentialStore) -> Self {
        Self {
            device_type: device_type.into(),
            store,
        }
    }

    /// Return `existing` unchanged if present, otherwise pair with the
    /// bridge and persist the issued credential.
    ///
    /// A stored credential is never validated here; a revoked one only
    /// shows up later as [`CoreError::CredentialInvalid`].
    pub async fn obtain_credential(
        &self,
        bridge: &BridgeClient,
        existing: Option<Credential>,
    ) -> Result<Credential, CoreError> {
        if let Some(credential) = existing {
            debug!("reusing stored credential");
            return Ok(credential);
        }

        info!(device_type = %self.device_type, "pairing with bridge");
        let user = match bridge.create_user(&self.device_type).await {
            Ok(user) => user,
            Err(e) => {
                let err = CoreError::from_pairing(e);
                warn!(error = %err, "pairing attempt failed");
                return Err(err);
            }
        };

        if user.username.is_empty() {
            return Err(CoreError::MalformedResponse {
                message: "bridge issued an empty username".into(),
            });
        }

        let credential = Credential::new(user.username);
        self.store.save(&credential)?;
        info!("paired with bridge");
        Ok(credential)
    }
}
