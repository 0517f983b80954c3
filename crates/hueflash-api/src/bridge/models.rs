// Bridge v1 API wire types
//
// The bridge answers writes with an array of single-key objects, each
// either `{"success": ...}` or `{"error": ...}`. Reads return the resource
// directly on success and the same error array on failure. Light fields
// other than `name` and `state` vary by bulb model, so they are optional.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Result envelope ─────────────────────────────────────────────────

/// One entry of a bridge result array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResult<T> {
    Success(T),
    Error(BridgeErrorBody),
}

/// The `error` object inside a bridge result array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BridgeErrorBody {
    #[serde(rename = "type")]
    pub kind: u16,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl From<BridgeErrorBody> for crate::error::Error {
    fn from(body: BridgeErrorBody) -> Self {
        Self::Bridge {
            kind: body.kind,
            address: body.address,
            description: body.description,
        }
    }
}

// ── Pairing ─────────────────────────────────────────────────────────

/// Body of `POST /api`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest<'a> {
    pub devicetype: &'a str,
}

/// `success` payload of a pairing request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreatedUser {
    pub username: String,
}

// ── Lights ──────────────────────────────────────────────────────────

/// A light as reported by `GET /api/{username}/lights`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LightDto {
    pub state: LightStateDto,
    pub name: String,
    #[serde(default, rename = "type")]
    pub light_type: Option<String>,
    #[serde(default)]
    pub modelid: Option<String>,
    #[serde(default)]
    pub manufacturername: Option<String>,
    #[serde(default)]
    pub uniqueid: Option<String>,
    #[serde(default)]
    pub swversion: Option<String>,
}

/// Current state of a light. White-only bulbs omit the colour fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LightStateDto {
    pub on: bool,
    #[serde(default)]
    pub bri: Option<u8>,
    #[serde(default)]
    pub hue: Option<u16>,
    #[serde(default)]
    pub sat: Option<u8>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub xy: Option<[f64; 2]>,
    #[serde(default)]
    pub ct: Option<u16>,
    #[serde(default)]
    pub alert: Option<String>,
    #[serde(default)]
    pub colormode: Option<String>,
    #[serde(default)]
    pub reachable: bool,
}

/// Parsed light listing. Entries that did not match [`LightDto`] are
/// reported in `skipped` (by device id) instead of failing the listing.
#[derive(Debug, Clone, Default)]
pub struct LightListing {
    pub lights: BTreeMap<String, LightDto>,
    pub skipped: Vec<String>,
}

/// Body of `PUT /api/{username}/lights/{id}/state`.
///
/// Only the fields that are `Some` are sent, so the bridge leaves every
/// other attribute of the light untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LightStateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl LightStateUpdate {
    /// An update that only sets the `alert` attribute.
    pub fn alert(mode: impl Into<String>) -> Self {
        Self {
            alert: Some(mode.into()),
        }
    }
}
