// Light endpoints
//
// Listing is tolerant: one malformed light must not hide the others, so
// each entry is decoded individually and failures are reported back by id.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::bridge::client::BridgeClient;
use crate::bridge::models::{LightDto, LightListing, LightStateUpdate};
use crate::error::Error;

impl BridgeClient {
    /// List every light known to the bridge.
    pub async fn list_lights(&self, username: &str) -> Result<LightListing, Error> {
        let url = self.user_url(username, "lights")?;
        let value = self.get_value(url).await?;

        let entries = match value {
            serde_json::Value::Object(entries) => entries,
            other => {
                return Err(Error::Deserialization {
                    message: "lights listing is not a JSON object".into(),
                    body: other.to_string(),
                });
            }
        };

        let mut listing = LightListing {
            lights: BTreeMap::new(),
            skipped: Vec::new(),
        };
        for (id, raw) in entries {
            match serde_json::from_value::<LightDto>(raw) {
                Ok(light) => {
                    listing.lights.insert(id, light);
                }
                Err(e) => {
                    warn!(device_id = %id, error = %e, "skipping light with unexpected shape");
                    listing.skipped.push(id);
                }
            }
        }

        debug!(
            lights = listing.lights.len(),
            skipped = listing.skipped.len(),
            "lights listing parsed"
        );
        Ok(listing)
    }

    /// Apply a partial state update to one light.
    ///
    /// Returns the bridge's echo of the applied changes, e.g.
    /// `{"/lights/1/state/alert": "lselect"}`.
    pub async fn set_light_state(
        &self,
        username: &str,
        device_id: &str,
        update: &LightStateUpdate,
    ) -> Result<Vec<serde_json::Map<String, serde_json::Value>>, Error> {
        let url = self.user_url(username, &format!("lights/{device_id}/state"))?;
        self.put(url, update).await
    }
}
