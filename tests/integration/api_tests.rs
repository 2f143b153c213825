//! API integration tests
//!
//! These talk to a running server with a scratch database. Run with:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_duplicate_manufacturer_gets_suffixed_slug() {
    let client = Client::new();

    let first: Value = client
        .post(format!("{}/manufacturer", BASE_URL))
        .json(&json!({ "name": "Slug Collision Labs" }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(first["success"], true);
    assert_eq!(first["manufacturer"]["slug"], "slug_collision_labs");

    let second: Value = client
        .post(format!("{}/manufacturer", BASE_URL))
        .json(&json!({ "name": "Slug Collision Labs" }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(second["success"], true);
    let slug = second["manufacturer"]["slug"]
        .as_str()
        .expect("No slug in response");
    let suffix = slug
        .strip_prefix("slug_collision_labs_")
        .expect("Second slug should carry a numeric suffix");
    let n: u32 = suffix.parse().expect("Suffix should be numeric");
    assert!(n < 100);
}

#[tokio::test]
#[ignore]
async fn test_history_append_accumulates_entries() {
    let client = Client::new();

    // A device to hang the history on
    let device: Value = client
        .post(format!("{}/device", BASE_URL))
        .json(&json!({ "name": "Oscilloscope", "quantity": 2 }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let device_id = device["device"]["id"].as_i64().expect("No device id");

    let mut history_id = 0;
    for description in ["calibrated", "recalibrated"] {
        let appended: Value = client
            .post(format!("{}/history", BASE_URL))
            .json(&json!({
                "equipmentId": device_id,
                "history": [{ "change": "updated", "description": description }]
            }))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse response");
        assert_eq!(appended["success"], true);
        history_id = appended["history"]["id"].as_i64().expect("No history id");
    }

    let body: Value = client
        .get(format!("{}/history?id={}", BASE_URL, history_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["success"], true);
    let entries = body["history"]["entries"]
        .as_array()
        .expect("No entries in response");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["description"], "calibrated");
    assert_eq!(entries[1]["description"], "recalibrated");
}

#[tokio::test]
#[ignore]
async fn test_bulk_tag_update_rejects_duplicate_names() {
    let client = Client::new();

    let a: Value = client
        .post(format!("{}/tag", BASE_URL))
        .json(&json!({ "name": "bulk-dup-a" }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let b: Value = client
        .post(format!("{}/tag", BASE_URL))
        .json(&json!({ "name": "bulk-dup-b" }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id_a = a["tag"]["id"].as_i64().expect("No tag id");
    let id_b = b["tag"]["id"].as_i64().expect("No tag id");

    // Both renamed to the same name within one batch
    let response = client
        .put(format!("{}/tags", BASE_URL))
        .json(&json!([
            { "id": id_a, "name": "bulk-dup-same" },
            { "id": id_b, "name": "bulk-dup-same" }
        ]))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "ENFORCE_UNIQUE_FIELD");
    assert_eq!(body["nonUniqueName"], "bulk-dup-same");

    // Neither tag was renamed
    let check: Value = client
        .get(format!("{}/tag?id={}", BASE_URL, id_a))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(check["tag"]["name"], "bulk-dup-a");
}

#[tokio::test]
#[ignore]
async fn test_accepted_inquiry_creates_project() {
    let client = Client::new();

    let device: Value = client
        .post(format!("{}/device", BASE_URL))
        .json(&json!({ "name": "Laser Cutter", "quantity": 1 }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let device_id = device["device"]["id"].as_i64().expect("No device id");

    let inquiry: Value = client
        .post(format!("{}/inquiry", BASE_URL))
        .json(&json!({
            "requesterName": "Ada",
            "requesterEmail": "ada@example.org",
            "name": "Engraving Workshop",
            "devices": [{ "deviceId": device_id, "quantity": 1 }]
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let inquiry_id = inquiry["inquiry"]["id"].as_i64().expect("No inquiry id");
    let token = inquiry["inquiry"]["confirmationToken"]
        .as_str()
        .expect("No confirmation token")
        .to_string();
    assert_eq!(inquiry["inquiry"]["status"], "unconfirmed");

    // The requester follows the emailed link
    let confirmed: Value = client
        .post(format!("{}/inquiry/confirm", BASE_URL))
        .json(&json!({ "token": token }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(confirmed["inquiry"]["status"], "pending");

    // Admin accepts
    let decided: Value = client
        .post(format!("{}/inquiry/decision?id={}", BASE_URL, inquiry_id))
        .json(&json!({ "decision": "accepted" }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(decided["success"], true);
    assert_eq!(decided["inquiry"]["status"], "accepted");

    let project = &decided["project"];
    assert_eq!(project["name"], "Engraving Workshop");
    let reservations = project["devices"].as_array().expect("No reservations");
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0]["deviceId"], device_id);
}

#[tokio::test]
#[ignore]
async fn test_unconfirmed_inquiry_cannot_be_decided() {
    let client = Client::new();

    let inquiry: Value = client
        .post(format!("{}/inquiry", BASE_URL))
        .json(&json!({
            "requesterName": "Grace",
            "requesterEmail": "grace@example.org",
            "name": "Premature Decision"
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let inquiry_id = inquiry["inquiry"]["id"].as_i64().expect("No inquiry id");

    let response = client
        .post(format!("{}/inquiry/decision?id={}", BASE_URL, inquiry_id))
        .json(&json!({ "decision": "rejected", "reason": "too soon" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "INVALID_TRANSITION");
}

#[tokio::test]
#[ignore]
async fn test_missing_device_is_a_soft_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/device?id=999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["device"].is_null());
}
