#![allow(clippy::unwrap_used)]
// Pipeline tests for `Controller` against a wiremock controller.
//
// These exercise the failure-isolation contract: directory failures are
// fatal, a device's snapshot failure skips only that device, and an
// error-counter failure degrades the report without losing the snapshot.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catwatch_core::{
    Controller, ControllerConfig, CoreError, Credentials, CrcSummary, SweepEntry, TlsVerification,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn config_for(server: &MockServer) -> ControllerConfig {
    ControllerConfig {
        url: Url::parse(&server.uri()).unwrap(),
        credentials: Credentials {
            username: "admin".into(),
            password: "secret".to_string().into(),
        },
        tls: TlsVerification::SystemDefaults,
        timeout: Duration::from_secs(5),
    }
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/dna/system/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Token": "tok-1" })))
        .mount(server)
        .await;
}

async fn mount_devices(server: &MockServer, devices: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/network-device"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": devices })),
        )
        .mount(server)
        .await;
}

fn two_devices() -> serde_json::Value {
    json!([
        { "id": "dev-1", "hostname": "switch1.example.com" },
        { "id": "dev-2", "hostname": "switch2.example.com" }
    ])
}

async fn mount_interfaces(server: &MockServer, device_id: &str) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/dna/intent/api/v1/interface/network-device/{device_id}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [
                { "portName": "GigabitEthernet1/0/1", "status": "up" },
                { "portName": "GigabitEthernet1/0/2", "status": "down" }
            ]
        })))
        .mount(server)
        .await;
}

async fn mount_errors(server: &MockServer, device_id: &str) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/dna/intent/api/v1/interface/network-device/{device_id}/errors"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [
                { "portName": "GigabitEthernet1/0/1", "crcErrors": 7 },
                { "portName": "GigabitEthernet1/0/2", "crcErrors": 0 }
            ]
        })))
        .mount(server)
        .await;
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn auth_failure_terminates_before_enumeration() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dna/system/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    // Deliberately no device mock: if connect succeeded and enumeration
    // ran, the test would fail on an unexpected request.
    let result = Controller::connect(config_for(&server)).await;

    match result {
        Err(CoreError::AuthenticationFailed { status, .. }) => assert_eq!(status, 401),
        other => panic!("expected AuthenticationFailed, got: {other:?}"),
    }
}

// ── Device directory ────────────────────────────────────────────────

#[tokio::test]
async fn find_device_matches_exact_hostname_only() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_devices(&server, two_devices()).await;

    let controller = Controller::connect(config_for(&server)).await.unwrap();

    let found = controller
        .find_device("switch2.example.com")
        .await
        .unwrap()
        .expect("device should resolve");
    assert_eq!(found.id, "dev-2");

    // Prefix of a real hostname is not a match, and not an error.
    let missing = controller.find_device("switch2").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn directory_failure_is_fatal() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/network-device"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let controller = Controller::connect(config_for(&server)).await.unwrap();
    let result = controller.sweep(10).await;

    assert!(
        matches!(result, Err(CoreError::DirectoryUnavailable { .. })),
        "expected DirectoryUnavailable, got: {result:?}"
    );
}

// ── Report degradation ──────────────────────────────────────────────

#[tokio::test]
async fn error_fetch_failure_degrades_but_keeps_snapshot() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_devices(&server, two_devices()).await;
    mount_interfaces(&server, "dev-1").await;

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/interface/network-device/dev-1/errors"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let controller = Controller::connect(config_for(&server)).await.unwrap();
    let device = controller
        .find_device("switch1.example.com")
        .await
        .unwrap()
        .unwrap();

    let report = controller.device_report(&device, 10).await.unwrap();

    // Snapshot table survives; only the ranking section is unavailable.
    assert_eq!(report.interfaces.len(), 2);
    match report.crc {
        CrcSummary::Unavailable { ref reason } => {
            assert!(reason.contains("500"), "reason: {reason}");
        }
        CrcSummary::Ranked { .. } => panic!("expected Unavailable CRC summary"),
    }
}

#[tokio::test]
async fn successful_report_ranks_nonzero_counters() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_devices(&server, two_devices()).await;
    mount_interfaces(&server, "dev-1").await;
    mount_errors(&server, "dev-1").await;

    let controller = Controller::connect(config_for(&server)).await.unwrap();
    let device = controller
        .find_device("switch1.example.com")
        .await
        .unwrap()
        .unwrap();

    let report = controller.device_report(&device, 10).await.unwrap();

    let top = report.crc.ranked().expect("counters should be available");
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].port_name, "GigabitEthernet1/0/1");
    assert_eq!(top[0].crc_errors, 7);
}

// ── Sweep isolation ─────────────────────────────────────────────────

#[tokio::test]
async fn sweep_continues_past_failed_device() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_devices(&server, two_devices()).await;

    // dev-1: snapshot fetch breaks. dev-2: healthy.
    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/interface/network-device/dev-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    mount_interfaces(&server, "dev-2").await;
    mount_errors(&server, "dev-2").await;

    let controller = Controller::connect(config_for(&server)).await.unwrap();
    let entries = controller.sweep(10).await.unwrap();

    assert_eq!(entries.len(), 2);
    match &entries[0] {
        SweepEntry::Failed { device, error } => {
            assert_eq!(device.hostname, "switch1.example.com");
            assert!(matches!(error, CoreError::TelemetryUnavailable { .. }));
        }
        SweepEntry::Report(_) => panic!("dev-1 should have failed"),
    }
    match &entries[1] {
        SweepEntry::Report(report) => {
            assert_eq!(report.device.hostname, "switch2.example.com");
            assert_eq!(report.interfaces.len(), 2);
        }
        SweepEntry::Failed { .. } => panic!("dev-2 should have succeeded"),
    }
}

#[tokio::test]
async fn sweep_aborts_when_token_expires_mid_run() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_devices(&server, two_devices()).await;

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/interface/network-device/dev-1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Token expired"))
        .mount(&server)
        .await;

    let controller = Controller::connect(config_for(&server)).await.unwrap();
    let result = controller.sweep(10).await;

    // Token expiry cannot be survived: no re-authentication mid-run.
    assert!(
        matches!(result, Err(CoreError::AuthenticationFailed { status: 401, .. })),
        "expected AuthenticationFailed, got: {result:?}"
    );
}
