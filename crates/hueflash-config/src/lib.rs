//! Configuration for the hueflash binary.
//!
//! A TOML file in the platform config directory, overridden by
//! `HUEFLASH_`-prefixed environment variables, and translated into a
//! `hueflash_core::HubConfig`. Core never reads this file itself.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hueflash_core::{BridgeScheme, HubConfig, config::DEFAULT_DEVICE_TYPE};

/// Default credential file name inside the data directory.
pub const CREDENTIAL_FILE: &str = "bridge-credential.json";
/// Default watch-list file name inside the data directory.
pub const WATCH_LIST_FILE: &str = "watched-lights.json";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub bridge: BridgeSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub helper: HelperSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

/// How to find and talk to the bridge.
#[derive(Debug, Deserialize, Serialize)]
pub struct BridgeSection {
    #[serde(default = "default_discovery_url")]
    pub discovery_url: String,

    #[serde(default)]
    pub scheme: BridgeScheme,

    /// Accept the bridge's self-issued certificate. Never applies to the
    /// discovery endpoint.
    #[serde(default = "default_true")]
    pub trust_local_certificate: bool,

    #[serde(default = "default_device_type")]
    pub device_type: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_true")]
    pub fetch_catalog_after_pairing: bool,
}

impl Default for BridgeSection {
    fn default() -> Self {
        Self {
            discovery_url: default_discovery_url(),
            scheme: BridgeScheme::default(),
            trust_local_certificate: true,
            device_type: default_device_type(),
            timeout_secs: None,
            fetch_catalog_after_pairing: true,
        }
    }
}

fn default_discovery_url() -> String {
    hueflash_core::config::DEFAULT_DISCOVERY_URL.into()
}
fn default_device_type() -> String {
    DEFAULT_DEVICE_TYPE.into()
}
fn default_true() -> bool {
    true
}

/// Where durable state lives. Unset paths fall back to the data dir.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageSection {
    pub credential_file: Option<PathBuf>,
    pub watch_list_file: Option<PathBuf>,
}

/// The game-acceptance helper supervised by `hueflash watch`.
#[derive(Debug, Deserialize, Serialize)]
pub struct HelperSection {
    pub command: Option<PathBuf>,

    #[serde(default)]
    pub args: Vec<String>,

    /// Exit code the helper uses when the user cancelled it.
    #[serde(default = "default_cancelled_exit_code")]
    pub cancelled_exit_code: i32,
}

impl Default for HelperSection {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            cancelled_exit_code: default_cancelled_exit_code(),
        }
    }
}

fn default_cancelled_exit_code() -> i32 {
    2
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingSection {
    /// Directory for the durable `hueflash.log`. No file log when unset.
    pub directory: Option<PathBuf>,
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "hueflash", "hueflash")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback(".config").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Directory holding the credential and watch-list files by default.
pub fn data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback(".local/share"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

fn dirs_fallback(base: &str) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(base);
    p.push("hueflash");
    p
}

// ── Loading / saving ────────────────────────────────────────────────

fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("HUEFLASH_").split("__"))
}

/// Load the config from `path` (or the canonical path) plus environment.
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    let config: Config = figment(&path).extract()?;
    Ok(config)
}

/// Serialize config to pretty TOML at `path`, creating parent directories.
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    pub fn credential_path(&self) -> PathBuf {
        self.storage
            .credential_file
            .clone()
            .unwrap_or_else(|| data_dir().join(CREDENTIAL_FILE))
    }

    pub fn watch_list_path(&self) -> PathBuf {
        self.storage
            .watch_list_file
            .clone()
            .unwrap_or_else(|| data_dir().join(WATCH_LIST_FILE))
    }

    /// Build the core `HubConfig`, validating the discovery URL.
    pub fn to_hub_config(&self) -> Result<HubConfig, ConfigError> {
        let bridge = &self.bridge;
        url::Url::parse(&bridge.discovery_url).map_err(|e| ConfigError::Validation {
            field: "bridge.discovery_url".into(),
            reason: format!("{e}: {}", bridge.discovery_url),
        })?;
        if bridge.device_type.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "bridge.device_type".into(),
                reason: "must not be empty".into(),
            });
        }

        let mut hub = HubConfig::with_paths(self.credential_path(), self.watch_list_path());
        hub.discovery_url.clone_from(&bridge.discovery_url);
        hub.bridge_scheme = bridge.scheme;
        hub.trust_local_certificate = bridge.trust_local_certificate;
        hub.device_type.clone_from(&bridge.device_type);
        hub.timeout = bridge.timeout_secs.map(Duration::from_secs);
        hub.fetch_catalog_after_pairing = bridge.fetch_catalog_after_pairing;
        Ok(hub)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Config {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(toml))
            .extract()
            .unwrap()
    }

    #[test]
    fn defaults_without_file() {
        let cfg = from_toml("");
        assert_eq!(cfg.bridge.discovery_url, "https://discovery.meethue.com/");
        assert_eq!(cfg.bridge.scheme, BridgeScheme::Https);
        assert!(cfg.bridge.trust_local_certificate);
        assert!(cfg.bridge.fetch_catalog_after_pairing);
        assert_eq!(cfg.bridge.device_type, "hueflash#cli");
        assert_eq!(cfg.helper.cancelled_exit_code, 2);
        assert!(cfg.logging.directory.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = from_toml(
            r#"
            [bridge]
            scheme = "http"
            timeout_secs = 5
            fetch_catalog_after_pairing = false

            [storage]
            credential_file = "/tmp/cred.json"

            [helper]
            command = "/usr/local/bin/accept-match"
            args = ["--quiet"]
            cancelled_exit_code = 3
            "#,
        );

        let hub = cfg.to_hub_config().unwrap();
        assert_eq!(hub.bridge_scheme, BridgeScheme::Http);
        assert_eq!(hub.timeout, Some(Duration::from_secs(5)));
        assert!(!hub.fetch_catalog_after_pairing);
        assert_eq!(hub.credential_path, PathBuf::from("/tmp/cred.json"));
        assert_eq!(hub.watch_list_path, data_dir().join(WATCH_LIST_FILE));
        assert_eq!(cfg.helper.args, vec!["--quiet".to_string()]);
        assert_eq!(cfg.helper.cancelled_exit_code, 3);
    }

    #[test]
    fn invalid_discovery_url_is_rejected() {
        let cfg = from_toml("[bridge]\ndiscovery_url = \"not a url\"\n");
        let err = cfg.to_hub_config().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation { ref field, .. } if field == "bridge.discovery_url")
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let mut cfg = Config::default();
        cfg.bridge.timeout_secs = Some(10);
        cfg.logging.directory = Some(dir.path().join("logs"));
        save_config(&cfg, &path).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.bridge.timeout_secs, Some(10));
        assert_eq!(loaded.logging.directory, Some(dir.path().join("logs")));
    }
}
