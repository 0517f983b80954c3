#![allow(clippy::unwrap_used)]
// Integration tests for `BridgeClient` and `DiscoveryClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hueflash_api::{BridgeClient, DiscoveryClient, Error, LightStateUpdate};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, BridgeClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = BridgeClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn discovery_client(server: &MockServer) -> DiscoveryClient {
    let url = Url::parse(&format!("{}/", server.uri())).unwrap();
    DiscoveryClient::with_client(reqwest::Client::new(), url)
}

// ── Discovery tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_discover_returns_candidates_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "bridge1", "internalipaddress": "192.168.1.50", "port": 443 },
            { "id": "bridge2", "internalipaddress": "192.168.1.51" }
        ])))
        .mount(&server)
        .await;

    let client = discovery_client(&server);
    let bridges = client.discover().await.unwrap();

    assert_eq!(bridges.len(), 2);
    assert_eq!(bridges[0].id, "bridge1");
    assert_eq!(bridges[0].internal_ip_address, "192.168.1.50");
    assert_eq!(bridges[0].port, Some(443));
    assert_eq!(bridges[1].port, None);

    let first = client.discover_first().await.unwrap();
    assert_eq!(first.id, "bridge1");
}

#[tokio::test]
async fn test_discover_first_empty_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = discovery_client(&server).discover_first().await;
    assert!(
        matches!(result, Err(Error::EmptyDiscovery)),
        "expected EmptyDiscovery, got: {result:?}"
    );
}

#[tokio::test]
async fn test_discover_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let result = discovery_client(&server).discover().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_discover_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    match discovery_client(&server).discover().await {
        Err(Error::Http { status, .. }) => assert_eq!(status, 429),
        other => panic!("expected Http error, got: {other:?}"),
    }
}

// ── Pairing tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .and(body_json(json!({ "devicetype": "hueflash#test" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "success": { "username": "abc123" } }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let user = client.create_user("hueflash#test").await.unwrap();
    assert_eq!(user.username, "abc123");
}

#[tokio::test]
async fn test_create_user_link_button_not_pressed() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "error": { "type": 101, "address": "/", "description": "link button not pressed" }
        }])))
        .mount(&server)
        .await;

    let err = client.create_user("hueflash#test").await.unwrap_err();
    assert!(err.is_link_button_required(), "unexpected error: {err:?}");
    match err {
        Error::Bridge { description, .. } => assert_eq!(description, "link button not pressed"),
        other => panic!("expected Bridge error, got: {other:?}"),
    }
}

// ── Light tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_lights_skips_malformed_entries() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/abc123/lights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1": {
                "state": {
                    "on": true, "bri": 200, "hue": 8418, "sat": 140,
                    "effect": "none", "xy": [0.4573, 0.41], "ct": 366,
                    "alert": "none", "colormode": "ct", "reachable": true
                },
                "type": "Extended color light",
                "name": "Lamp A",
                "modelid": "LCT007",
                "manufacturername": "Philips",
                "uniqueid": "00:17:88:01:00:bd:c7:b9-0b",
                "swversion": "5.105.0.21169"
            },
            "2": { "type": "Extended color light", "modelid": "LCT007" },
            "3": {
                "state": { "on": false, "reachable": false },
                "name": "Porch"
            }
        })))
        .mount(&server)
        .await;

    let listing = client.list_lights("abc123").await.unwrap();

    assert_eq!(listing.lights.len(), 2);
    assert_eq!(listing.skipped, vec!["2".to_string()]);
    let lamp = &listing.lights["1"];
    assert_eq!(lamp.name, "Lamp A");
    assert_eq!(lamp.state.bri, Some(200));
    assert_eq!(lamp.state.colormode.as_deref(), Some("ct"));
    assert!(!listing.lights["3"].state.reachable);
}

#[tokio::test]
async fn test_list_lights_unauthorized_user() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/revoked/lights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "error": { "type": 1, "address": "/lights", "description": "unauthorized user" }
        }])))
        .mount(&server)
        .await;

    let err = client.list_lights("revoked").await.unwrap_err();
    assert!(err.is_unauthorized(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_set_light_state_sends_only_alert() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/abc123/lights/1/state"))
        .and(body_json(json!({ "alert": "lselect" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "success": { "/lights/1/state/alert": "lselect" } }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let applied = client
        .set_light_state("abc123", "1", &LightStateUpdate::alert("lselect"))
        .await
        .unwrap();

    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0]["/lights/1/state/alert"], json!("lselect"));
}

#[tokio::test]
async fn test_set_light_state_bridge_error() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/abc123/lights/9/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "error": {
                "type": 3,
                "address": "/lights/9/state",
                "description": "resource, /lights/9/state, not available"
            }
        }])))
        .mount(&server)
        .await;

    let result = client
        .set_light_state("abc123", "9", &LightStateUpdate::alert("select"))
        .await;

    match result {
        Err(Error::Bridge { kind, address, .. }) => {
            assert_eq!(kind, 3);
            assert_eq!(address, "/lights/9/state");
        }
        other => panic!("expected Bridge error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = BridgeClient::with_client(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:9").unwrap(),
    );

    let err = client.create_user("hueflash#test").await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got: {err:?}");
}
