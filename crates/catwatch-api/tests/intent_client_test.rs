#![allow(clippy::unwrap_used)]
// Integration tests for `IntentClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{basic_auth, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catwatch_api::{Error, IntentClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const TOKEN: &str = "eyJhbGciOiJSUzI1NiJ9.test-token";

/// A client bound to the mock server with a pre-acquired token.
async fn setup() -> (MockServer, IntentClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = IntentClient::with_token(reqwest::Client::new(), base_url, TOKEN.into());
    (server, client)
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "response": data, "version": "1.0" })
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_connect_acquires_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dna/system/api/v1/auth/token"))
        .and(basic_auth("admin", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Token": TOKEN })))
        .mount(&server)
        .await;

    // The device endpoint must see the acquired token echoed back.
    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/network-device"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let password: secrecy::SecretString = "secret".to_string().into();
    let client = IntentClient::connect(base_url, "admin", &password, &TransportConfig::default())
        .await
        .unwrap();

    let devices = client.list_devices().await.unwrap();
    assert!(devices.is_empty());
}

#[tokio::test]
async fn test_connect_rejected_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dna/system/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let password: secrecy::SecretString = "wrong".to_string().into();
    let result =
        IntentClient::connect(base_url, "admin", &password, &TransportConfig::default()).await;

    match result {
        Err(Error::Authentication { status, ref body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid credentials"), "body: {body}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_expired_token_mid_run() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/network-device"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Token expired"))
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    assert!(
        matches!(result, Err(Error::Authentication { status: 401, .. })),
        "expected Authentication error, got: {result:?}"
    );
}

// ── Device tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let (server, client) = setup().await;

    let body = envelope(json!([
        {
            "id": "9f6b5f8a-0001",
            "hostname": "switch1.example.com",
            "managementIpAddress": "10.10.22.73",
            "platformId": "C9300-24U",
            "softwareVersion": "17.9.4",
            "reachabilityStatus": "Reachable",
            "type": "Cisco Catalyst 9300 Switch",
            "role": "ACCESS"
        },
        {
            "id": "9f6b5f8a-0002",
            "hostname": "switch2.example.com"
        }
    ]));

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/network-device"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let devices = client.list_devices().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].hostname, "switch1.example.com");
    assert_eq!(devices[0].platform_id.as_deref(), Some("C9300-24U"));
    assert_eq!(devices[0].reachability_status.as_deref(), Some("Reachable"));
    // Sparse records parse too: everything but id/hostname is optional.
    assert_eq!(devices[1].id, "9f6b5f8a-0002");
    assert!(devices[1].platform_id.is_none());
}

// ── Interface tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_interfaces_snapshot() {
    let (server, client) = setup().await;

    let body = envelope(json!([
        {
            "portName": "GigabitEthernet1/0/1",
            "status": "up",
            "adminStatus": "UP",
            "macAddress": "00:1a:2b:3c:4d:5e",
            "speed": "1000000",
            "duplex": "FullDuplex",
            "mtu": "9100",
            "vlanId": "10",
            "ipv4Address": "10.0.0.1",
            "ipv4Mask": "255.255.255.0",
            "lastInput": "00:00:01",
            "lastOutput": "00:00:00"
        },
        {
            "portName": "Vlan1",
            "status": "down"
        }
    ]));

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/interface/network-device/dev-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let interfaces = client.interfaces("dev-1").await.unwrap();

    assert_eq!(interfaces.len(), 2);
    assert_eq!(interfaces[0].port_name, "GigabitEthernet1/0/1");
    assert_eq!(interfaces[0].oper_status.as_deref(), Some("up"));
    assert_eq!(interfaces[0].vlan_id.as_deref(), Some("10"));
    // SVI with almost everything missing still decodes.
    assert_eq!(interfaces[1].port_name, "Vlan1");
    assert!(interfaces[1].mac_address.is_none());
}

#[tokio::test]
async fn test_interface_errors_default_zero() {
    let (server, client) = setup().await;

    let body = envelope(json!([
        { "portName": "GigabitEthernet1/0/1", "crcErrors": 42, "runts": 3 },
        { "portName": "GigabitEthernet1/0/2" }
    ]));

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/interface/network-device/dev-1/errors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let errors = client.interface_errors("dev-1").await.unwrap();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].crc_errors, 42);
    assert_eq!(errors[0].runts, Some(3));
    // Absent crcErrors means zero, not a decode failure.
    assert_eq!(errors[1].crc_errors, 0);
}

#[tokio::test]
async fn test_interface_errors_endpoint_unavailable() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/interface/network-device/dev-1/errors"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = client.interface_errors("dev-1").await;

    match result {
        Err(Error::Intent { status, ref body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("Internal Server Error"), "body: {body}");
        }
        other => panic!("expected Intent error, got: {other:?}"),
    }
}

// ── Statistics tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_interface_statistics_window() {
    let (server, client) = setup().await;

    let body = envelope(json!([
        { "timestamp": 1717400000000_i64, "rxUtilization": 12.5, "txUtilization": 3.1 }
    ]));

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/interface/if-9/statistics"))
        .and(query_param("startTime", "1714800000000"))
        .and(query_param("endTime", "1717400000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let stats = client
        .interface_statistics("if-9", 1_714_800_000_000, 1_717_400_000_000)
        .await
        .unwrap();

    let stats = stats.expect("statistics should be present");
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["rxUtilization"], 12.5);
}

#[tokio::test]
async fn test_interface_statistics_not_supported() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/interface/if-9/statistics"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let stats = client.interface_statistics("if-9", 0, 1).await.unwrap();

    // 404 is "no data available in this environment", not an error.
    assert!(stats.is_none());
}

// ── Decode failure tests ────────────────────────────────────────────

#[tokio::test]
async fn test_deserialization_error_carries_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/network-device"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("proxy error"), "body: {body}");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
