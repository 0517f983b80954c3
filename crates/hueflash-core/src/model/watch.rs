use serde::{Deserialize, Serialize};

/// A light the user wants flashed, identified by its bridge name.
///
/// Matched against [`LightRecord::name`](super::LightRecord::name) with an
/// exact, case-sensitive comparison at alert time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchedLight {
    #[serde(rename = "Name")]
    pub name: String,
}

impl WatchedLight {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
