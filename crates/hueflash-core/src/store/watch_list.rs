use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{read_optional, write_atomic};
use crate::error::CoreError;
use crate::model::WatchedLight;

/// On-disk shape: `{"Lights":[{"Name":"Lamp A"}]}`.
#[derive(Default, Serialize, Deserialize)]
struct WatchListFile {
    #[serde(rename = "Lights", default)]
    lights: Vec<WatchedLight>,
}

/// Persists the user's list of lights to flash.
#[derive(Debug, Clone)]
pub struct WatchListStore {
    path: PathBuf,
}

impl WatchListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the watch-list. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<WatchedLight>, CoreError> {
        let Some(contents) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "no watch-list file");
            return Ok(Vec::new());
        };

        let file: WatchListFile = serde_json::from_str(&contents)
            .map_err(|e| CoreError::storage(&self.path, format!("invalid watch-list: {e}")))?;
        Ok(file.lights)
    }

    pub fn save(&self, lights: &[WatchedLight]) -> Result<(), CoreError> {
        let file = WatchListFile {
            lights: lights.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| CoreError::storage(&self.path, e))?;
        write_atomic(&self.path, &json)
    }

    /// Add a light by name. Returns `false` if it was already listed.
    pub fn add(&self, name: &str) -> Result<bool, CoreError> {
        let mut lights = self.load()?;
        if lights.iter().any(|l| l.name == name) {
            return Ok(false);
        }
        lights.push(WatchedLight::new(name));
        self.save(&lights)?;
        Ok(true)
    }

    /// Remove a light by name. Returns `false` if it was not listed.
    pub fn remove(&self, name: &str) -> Result<bool, CoreError> {
        let mut lights = self.load()?;
        let before = lights.len();
        lights.retain(|l| l.name != name);
        if lights.len() == before {
            return Ok(false);
        }
        self.save(&lights)?;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_capitalised_name_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watched.json");
        std::fs::write(&path, r#"{"Lights":[{"Name":"Lamp A"},{"Name":"Lamp B"}]}"#).unwrap();

        let lights = WatchListStore::new(&path).load().unwrap();
        assert_eq!(
            lights,
            vec![WatchedLight::new("Lamp A"), WatchedLight::new("Lamp B")]
        );
    }

    #[test]
    fn add_and_remove_keep_order_and_reject_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatchListStore::new(dir.path().join("watched.json"));

        assert!(store.load().unwrap().is_empty());
        assert!(store.add("Desk").unwrap());
        assert!(store.add("Lamp A").unwrap());
        assert!(!store.add("Desk").unwrap());
        assert_eq!(
            store.load().unwrap(),
            vec![WatchedLight::new("Desk"), WatchedLight::new("Lamp A")]
        );

        assert!(store.remove("Desk").unwrap());
        assert!(!store.remove("Desk").unwrap());
        assert_eq!(store.load().unwrap(), vec![WatchedLight::new("Lamp A")]);
    }
}
