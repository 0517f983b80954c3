// Cloud discovery client
//
// The vendor's discovery service reports the bridges that recently
// checked in from the caller's public IP. This is a plain HTTPS GET
// returning a JSON array; it uses normal CA verification.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::{TlsMode, TransportConfig};

/// The vendor's public discovery endpoint.
pub const DEFAULT_DISCOVERY_URL: &str = "https://discovery.meethue.com/";

/// One candidate bridge from the discovery endpoint.
///
/// ```json
/// [{ "id": "001788fffe23bfc2", "internalipaddress": "192.168.1.50", "port": 443 }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredBridge {
    pub id: String,
    #[serde(rename = "internalipaddress")]
    pub internal_ip_address: String,
    #[serde(default)]
    pub port: Option<u16>,
}

/// HTTP client for the cloud discovery endpoint.
pub struct DiscoveryClient {
    http: reqwest::Client,
    url: Url,
}

impl DiscoveryClient {
    /// Create a discovery client.
    ///
    /// The discovery endpoint is a public service with a CA-issued
    /// certificate, so the transport's TLS mode is forced to
    /// [`TlsMode::System`] regardless of what the caller passes.
    pub fn new(url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let config = TransportConfig {
            tls: TlsMode::System,
            timeout: transport.timeout,
        };
        Ok(Self {
            http: config.build_client()?,
            url,
        })
    }

    /// Create a discovery client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    /// The discovery endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch all candidate bridges, in the order the endpoint lists them.
    pub async fn discover(&self) -> Result<Vec<DiscoveredBridge>, Error> {
        debug!("GET {}", self.url);

        let resp = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let bridges: Vec<DiscoveredBridge> =
            serde_json::from_str(&body).map_err(|e| Error::deserialization(&e, &body))?;

        debug!(count = bridges.len(), "discovery response parsed");
        Ok(bridges)
    }

    /// Fetch candidates and return the first one.
    pub async fn discover_first(&self) -> Result<DiscoveredBridge, Error> {
        self.discover()
            .await?
            .into_iter()
            .next()
            .ok_or(Error::EmptyDiscovery)
    }
}
