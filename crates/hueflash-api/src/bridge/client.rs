// Bridge HTTP client
//
// Wraps `reqwest::Client` with bridge URL construction and result-array
// handling. Endpoint groups (pairing, lights) are implemented as inherent
// methods in separate files to keep this module focused on transport
// mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::bridge::models::{ApiResult, BridgeErrorBody};
use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for a single bridge's v1 REST API.
///
/// Bound to one base URL (e.g. `https://192.168.1.50`). The bridge reports
/// application errors with HTTP 200 and a `[{"error": ...}]` body; every
/// helper here turns those into [`Error::Bridge`] before the caller sees them.
pub struct BridgeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BridgeClient {
    /// Create a bridge client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url,
        })
    }

    /// Create a bridge client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The bridge base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/api` or `{base}/api/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = if path.is_empty() {
            format!("{base}/api")
        } else {
            format!("{base}/api/{}", path.trim_start_matches('/'))
        };
        Ok(Url::parse(&full)?)
    }

    /// `{base}/api/{username}/{path}` -- every authenticated endpoint.
    ///
    /// The username is pushed as a single percent-encoded segment.
    pub(crate) fn user_url(&self, username: &str, path: &str) -> Result<Url, Error> {
        let mut endpoint = self.api_url("")?;
        endpoint
            .path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(username)
            .extend(path.split('/').filter(|s| !s.is_empty()));
        Ok(endpoint)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET and return the decoded JSON body.
    ///
    /// An error array in place of the resource becomes [`Error::Bridge`].
    pub(crate) async fn get_value(&self, url: Url) -> Result<serde_json::Value, Error> {
        debug!("GET {}", redacted_path(&url));

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let body = read_body(resp).await?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| Error::deserialization(&e, &body))?;

        if let Some(err) = first_error(&value) {
            return Err(err);
        }
        Ok(value)
    }

    /// Send a POST with a JSON body and return the `success` payloads.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<Vec<T>, Error> {
        debug!("POST {}", redacted_path(&url));

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        parse_results(read_body(resp).await?)
    }

    /// Send a PUT with a JSON body and return the `success` payloads.
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<Vec<T>, Error> {
        debug!("PUT {}", redacted_path(&url));

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        parse_results(read_body(resp).await?)
    }
}

/// Read the body of a response, mapping non-2xx statuses to [`Error::Http`].
async fn read_body(resp: reqwest::Response) -> Result<String, Error> {
    let status = resp.status();
    let body = resp.text().await.map_err(Error::Transport)?;
    trace!(%status, len = body.len(), "bridge response");

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        });
    }
    Ok(body)
}

/// Decode a result array. Any `error` entry fails the whole call; an
/// empty array is treated as a malformed response.
fn parse_results<T: DeserializeOwned>(body: String) -> Result<Vec<T>, Error> {
    let results: Vec<ApiResult<T>> =
        serde_json::from_str(&body).map_err(|e| Error::deserialization(&e, &body))?;

    if results.is_empty() {
        return Err(Error::Deserialization {
            message: "empty result array".into(),
            body,
        });
    }

    results
        .into_iter()
        .map(|entry| match entry {
            ApiResult::Success(value) => Ok(value),
            ApiResult::Error(err) => Err(err.into()),
        })
        .collect()
}

/// Extract the first `{"error": ...}` entry of an array body, if any.
fn first_error(value: &serde_json::Value) -> Option<Error> {
    value
        .as_array()?
        .iter()
        .filter_map(|entry| entry.get("error"))
        .find_map(|raw| serde_json::from_value::<BridgeErrorBody>(raw.clone()).ok())
        .map(Into::into)
}

/// URL path with the username segment masked, for logs.
pub(crate) fn redacted_path(url: &Url) -> String {
    let Some(segments) = url.path_segments() else {
        return url.path().to_owned();
    };
    let masked: Vec<&str> = segments
        .enumerate()
        .map(|(i, seg)| if i == 1 && !seg.is_empty() { "***" } else { seg })
        .collect();
    format!("/{}", masked.join("/"))
}
