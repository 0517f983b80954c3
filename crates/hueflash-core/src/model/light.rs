// ── Light domain types ──

use std::collections::BTreeMap;

use hueflash_api::{LightDto, LightStateDto};
use serde::Serialize;

/// Bridge-reported state of a light. Read-only: used for display and
/// diagnostics, never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub on: bool,
    pub brightness: Option<u8>,
    pub hue: Option<u16>,
    pub saturation: Option<u8>,
    pub color_mode: Option<String>,
    pub alert: Option<String>,
    pub reachable: bool,
}

impl From<LightStateDto> for StateSnapshot {
    fn from(dto: LightStateDto) -> Self {
        Self {
            on: dto.on,
            brightness: dto.bri,
            hue: dto.hue,
            saturation: dto.sat,
            color_mode: dto.colormode,
            alert: dto.alert,
            reachable: dto.reachable,
        }
    }
}

/// One light known to the bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightRecord {
    pub device_id: String,
    pub name: String,
    pub is_reachable: bool,
    pub light_type: Option<String>,
    pub model_id: Option<String>,
    pub manufacturer: Option<String>,
    pub unique_id: Option<String>,
    pub software_version: Option<String>,
    pub state: StateSnapshot,
}

impl LightRecord {
    pub fn from_dto(device_id: String, dto: LightDto) -> Self {
        let state = StateSnapshot::from(dto.state);
        Self {
            device_id,
            name: dto.name,
            is_reachable: state.reachable,
            light_type: dto.light_type,
            model_id: dto.modelid,
            manufacturer: dto.manufacturername,
            unique_id: dto.uniqueid,
            software_version: dto.swversion,
            state,
        }
    }
}

/// The bridge's lights, keyed by device id.
///
/// Rebuilt in full on every fetch; there is no incremental merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    lights: BTreeMap<String, LightRecord>,
}

impl Catalog {
    pub fn new(lights: impl IntoIterator<Item = LightRecord>) -> Self {
        Self {
            lights: lights
                .into_iter()
                .map(|light| (light.device_id.clone(), light))
                .collect(),
        }
    }

    pub fn get(&self, device_id: &str) -> Option<&LightRecord> {
        self.lights.get(device_id)
    }

    /// First light (in device id order) whose name equals `name` exactly.
    ///
    /// Case-sensitive with no normalisation, so a light renamed on the
    /// bridge stops matching until the watch-list is updated.
    pub fn find_by_name(&self, name: &str) -> Option<&LightRecord> {
        self.lights.values().find(|light| light.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LightRecord> {
        self.lights.values()
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn light(id: &str, name: &str) -> LightRecord {
        LightRecord {
            device_id: id.into(),
            name: name.into(),
            is_reachable: true,
            light_type: None,
            model_id: None,
            manufacturer: None,
            unique_id: None,
            software_version: None,
            state: StateSnapshot {
                on: true,
                brightness: Some(254),
                hue: None,
                saturation: None,
                color_mode: None,
                alert: Some("none".into()),
                reachable: true,
            },
        }
    }

    #[test]
    fn find_by_name_is_exact_and_case_sensitive() {
        let catalog = Catalog::new([light("1", "Lamp A"), light("2", "Desk")]);

        assert_eq!(
            catalog.find_by_name("Lamp A").map(|l| l.device_id.as_str()),
            Some("1")
        );
        assert!(catalog.find_by_name("lamp a").is_none());
        assert!(catalog.find_by_name("Lamp A ").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_lowest_device_id() {
        let catalog = Catalog::new([light("7", "Shelf"), light("3", "Shelf")]);
        assert_eq!(
            catalog.find_by_name("Shelf").map(|l| l.device_id.as_str()),
            Some("3")
        );
    }
}
