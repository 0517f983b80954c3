// ── Light catalog client ──

use hueflash_api::BridgeClient;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::{Catalog, Credential, LightRecord};

/// Fetch the bridge's lights.
///
/// An error body from the bridge means the credential was rejected
/// ([`CoreError::CredentialInvalid`]); there is no automatic re-pairing.
/// Lights that are missing required fields are skipped.
pub async fn fetch_lights(
    bridge: &BridgeClient,
    credential: &Credential,
) -> Result<Catalog, CoreError> {
    let listing = bridge
        .list_lights(credential.username())
        .await
        .map_err(CoreError::from_catalog)?;

    if !listing.skipped.is_empty() {
        warn!(skipped = ?listing.skipped, "some lights were left out of the catalog");
    }

    let catalog = Catalog::new(
        listing
            .lights
            .into_iter()
            .map(|(id, dto)| LightRecord::from_dto(id, dto)),
    );
    debug!(lights = catalog.len(), "catalog fetched");
    Ok(catalog)
}
