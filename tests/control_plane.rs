//! Control-endpoint tests: mode setting, toggles, envelopes, status snapshot.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_root_reports_metadata_and_mode() {
    let (addr, shutdown) = common::spawn_service(common::fast_config()).await;
    let client = common::client();

    let body: Value = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["failureMode"], "none");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].as_str().unwrap().contains('T'));

    shutdown.trigger();
}

#[tokio::test]
async fn test_set_mode_echoes_confirmation() {
    let (addr, shutdown) = common::spawn_service(common::fast_config()).await;
    let client = common::client();

    let body: Value = client
        .post(format!("http://{}/api/failure-mode", addr))
        .json(&json!({ "mode": "health_failure" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Failure mode set to: health_failure");

    // root now reflects the new mode
    let root: Value = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root["failureMode"], "health_failure");

    shutdown.trigger();
}

#[tokio::test]
async fn test_absent_and_empty_mode_resolve_to_none() {
    let (addr, shutdown) = common::spawn_service(common::fast_config()).await;
    let client = common::client();

    for payload in [json!({}), json!({ "mode": "" }), json!({ "mode": null })] {
        let body: Value = client
            .post(format!("http://{}/api/failure-mode", addr))
            .json(&payload)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["message"], "Failure mode set to: none");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_toggle_confirmations() {
    let (addr, shutdown) = common::spawn_service(common::fast_config()).await;
    let client = common::client();

    let body: Value = client
        .post(format!("http://{}/api/cpu-stress", addr))
        .json(&json!({ "enable": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "CPU stress test enabled");

    let body: Value = client
        .post(format!("http://{}/api/cpu-stress", addr))
        .json(&json!({ "enable": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "CPU stress test disabled");

    let body: Value = client
        .post(format!("http://{}/api/memory-leak", addr))
        .json(&json!({ "enable": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Memory leak disabled");

    shutdown.trigger();
}

#[tokio::test]
async fn test_status_snapshot_reflects_toggles() {
    let (addr, shutdown) = common::spawn_service(common::fast_config()).await;
    let client = common::client();

    let before: Value = client
        .get(format!("http://{}/api/status", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(before["cpuStress"], false);
    assert_eq!(before["memoryLeak"], false);
    assert_eq!(before["leakTasks"], 0);

    client
        .post(format!("http://{}/api/cpu-stress", addr))
        .json(&json!({ "enable": true }))
        .send()
        .await
        .unwrap();
    client
        .post(format!("http://{}/api/memory-leak", addr))
        .json(&json!({ "enable": true }))
        .send()
        .await
        .unwrap();

    let after: Value = client
        .get(format!("http://{}/api/status", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after["cpuStress"], true);
    assert_eq!(after["memoryLeak"], true);
    assert_eq!(after["leakTasks"], 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_initial_mode_seeded_from_config() {
    let mut config = common::fast_config();
    config.fault.initial_mode = "health_failure".to_string();
    let (addr, shutdown) = common::spawn_service(config).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 503);

    shutdown.trigger();
}
