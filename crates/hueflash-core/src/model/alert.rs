use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Which alert effect to apply to a light.
///
/// The string form is the value the bridge expects in the `alert` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum AlertMode {
    /// Breathe cycle repeated for roughly fifteen seconds (`lselect`).
    #[strum(serialize = "lselect")]
    #[serde(rename = "lselect")]
    Pulse,
    /// A single breathe cycle (`select`).
    #[strum(serialize = "select")]
    #[serde(rename = "select")]
    Sustained,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values() {
        assert_eq!(AlertMode::Pulse.as_ref(), "lselect");
        assert_eq!(AlertMode::Sustained.to_string(), "select");
    }
}
