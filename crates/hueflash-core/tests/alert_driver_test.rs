#![allow(clippy::unwrap_used)]
// Alert driver fan-out against a wiremock bridge.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hueflash_api::BridgeClient;
use hueflash_core::{Catalog, Credential, LightRecord, StateSnapshot, WatchedLight, alert};

fn light(id: &str, name: &str) -> LightRecord {
    LightRecord {
        device_id: id.into(),
        name: name.into(),
        is_reachable: true,
        light_type: Some("Extended color light".into()),
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

async fn setup() -> (MockServer, BridgeClient) {
    let server = MockServer::start().await;
    let client =
        BridgeClient::with_client(reqwest::Client::new(), Url::parse(&server.uri()).unwrap());
    (server, client)
}

#[tokio::test]
async fn test_device_failure_does_not_stop_remaining_lights() {
    let (server, client) = setup().await;
    let catalog = Catalog::new([light("1", "Desk"), light("2", "Shelf"), light("3", "Porch")]);
    let watched = [
        WatchedLight::new("Desk"),
        WatchedLight::new("Shelf"),
        WatchedLight::new("Porch"),
    ];

    Mock::given(method("PUT"))
        .and(path("/api/abc123/lights/1/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "error": {
                "type": 201,
                "address": "/lights/1/state/alert",
                "description": "parameter, alert, is not modifiable. Device is set to off."
            }
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/abc123/lights/2/state"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/abc123/lights/3/state"))
        .and(body_json(json!({ "alert": "lselect" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "success": { "/lights/3/state/alert": "lselect" } }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let report = alert::pulse(&client, &Credential::new("abc123"), &catalog, &watched).await;

    assert_eq!(report.sent, vec!["3".to_string()]);
    assert_eq!(report.failed.len(), 2);
    assert_eq!(report.failed[0].device_id, "1");
    assert!(report.failed[0].reason.contains("not modifiable"));
    assert_eq!(report.failed[1].name, "Shelf");
    assert!(!report.is_clean());
}

#[tokio::test]
async fn test_each_unmatched_name_reported_once() {
    let (server, client) = setup().await;
    let catalog = Catalog::new([light("1", "Lamp A")]);
    let watched = [
        WatchedLight::new("lamp a"),
        WatchedLight::new("Lamp A"),
        WatchedLight::new("Gone"),
        WatchedLight::new("Gone"),
    ];

    Mock::given(method("PUT"))
        .and(path("/api/abc123/lights/1/state"))
        .and(body_json(json!({ "alert": "select" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "success": { "/lights/1/state/alert": "select" } }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let report =
        alert::sustained_alert(&client, &Credential::new("abc123"), &catalog, &watched).await;

    assert_eq!(report.sent, vec!["1".to_string()]);
    assert_eq!(
        report.unmatched,
        vec!["lamp a".to_string(), "Gone".to_string()]
    );
}

#[tokio::test]
async fn test_empty_watch_list_sends_nothing() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let report = alert::pulse(
        &client,
        &Credential::new("abc123"),
        &Catalog::new([light("1", "Lamp A")]),
        &[],
    )
    .await;

    assert!(report.is_clean());
    assert!(report.sent.is_empty());
}
