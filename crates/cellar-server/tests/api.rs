//! Full HTTP roundtrip tests: spawned axum server, reqwest client,
//! tempdir-backed store.

use serde_json::{Value, json};
use tempfile::TempDir;

use cellar_core::compute_stats;
use cellar_core::{Beer, BeerStats};
use cellar_server::config::Config;
use cellar_server::routes::router;
use cellar_server::state::AppState;

async fn spawn_app() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let config = Config {
        port: 0,
        data_dir: dir.path().to_path_buf(),
        environment: "test".to_string(),
    };

    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (dir, format!("http://{}/api", addr))
}

fn test_ipa() -> Value {
    json!({
        "name": "Test IPA",
        "brewery": "Test Brewery",
        "style": "IPA",
        "abv": 6.5
    })
}

async fn create(client: &reqwest::Client, base: &str, body: &Value) -> Value {
    let resp = client
        .post(format!("{base}/beers"))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["success"], true);
    envelope["data"].clone()
}

#[tokio::test]
async fn health_reports_environment_and_uptime() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["environment"], "test");
    assert!(envelope["data"]["timestamp"].is_string());
    assert!(envelope["data"]["uptime"].is_number());
    assert_eq!(envelope["message"], "Beer management API is running");
}

#[tokio::test]
async fn create_applies_defaults_and_returns_201() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let beer = create(&client, &base, &test_ipa()).await;

    assert_eq!(beer["name"], "Test IPA");
    assert_eq!(beer["drank"], false);
    assert_eq!(beer["notes"], "");
    assert!(beer["rating"].is_null());
    assert!(beer["dateDrank"].is_null());
    assert_eq!(beer["id"].as_str().unwrap().len(), 24);
}

#[tokio::test]
async fn create_rejects_negative_abv_and_persists_nothing() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let mut body = test_ipa();
    body["abv"] = json!(-5);

    let resp = client
        .post(format!("{base}/beers"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "Validation Error");
    assert_eq!(envelope["details"][0]["path"], "abv");

    // Nothing was persisted.
    let listed: Value = client
        .get(format!("{base}/beers"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_mistyped_field_is_400_envelope() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let mut body = test_ipa();
    body["abv"] = json!("six");

    let resp = client
        .post(format!("{base}/beers"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "Validation Error");
    assert_eq!(envelope["details"][0]["path"], "body");
}

#[tokio::test]
async fn update_with_undecodable_body_is_400_envelope() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, &test_ipa()).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .put(format!("{base}/beers/{id}"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "Validation Error");
}

#[tokio::test]
async fn create_enumerates_every_failing_field() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/beers"))
        .json(&json!({ "abv": 120, "rating": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let envelope: Value = resp.json().await.unwrap();
    let paths: Vec<&str> = envelope["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["name", "brewery", "style", "abv", "rating"]);
}

#[tokio::test]
async fn get_roundtrip_returns_created_record() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, &test_ipa()).await;
    let id = created["id"].as_str().unwrap();

    let envelope: Value = client
        .get(format!("{base}/beers/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"], created);
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/beers/0123456789abcdef01234567"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["success"], false);
    assert!(envelope["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn get_malformed_id_is_400() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/beers/not-a-valid-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["details"][0]["path"], "id");
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, &test_ipa()).await;
    let id = created["id"].as_str().unwrap();

    let envelope: Value = client
        .put(format!("{base}/beers/{id}"))
        .json(&json!({ "rating": 5, "notes": "superb" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let updated = &envelope["data"];
    assert_eq!(updated["rating"], 5);
    assert_eq!(updated["notes"], "superb");
    assert_eq!(updated["name"], "Test IPA");
    assert_eq!(updated["abv"], 6.5);
    assert_eq!(updated["dateAdded"], created["dateAdded"]);
    assert_eq!(envelope["message"], "Beer updated successfully");
}

#[tokio::test]
async fn update_drank_toggle_roundtrip() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, &test_ipa()).await;
    let id = created["id"].as_str().unwrap();

    let envelope: Value = client
        .put(format!("{base}/beers/{id}"))
        .json(&json!({ "drank": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope["data"]["drank"], true);
    assert!(envelope["data"]["dateDrank"].is_string());

    // Toggling an already-drank record flips it back.
    let envelope: Value = client
        .put(format!("{base}/beers/{id}"))
        .json(&json!({ "drank": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope["data"]["drank"], false);
    assert!(envelope["data"]["dateDrank"].is_null());
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/beers/0123456789abcdef01234567"))
        .json(&json!({ "drank": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_rejects_invalid_field() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, &test_ipa()).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .put(format!("{base}/beers/{id}"))
        .json(&json!({ "rating": 6 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // The record is untouched.
    let envelope: Value = client
        .get(format!("{base}/beers/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(envelope["data"]["rating"].is_null());
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, &test_ipa()).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .delete(format!("{base}/beers/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["message"], "Beer deleted successfully");

    let resp = client
        .get(format!("{base}/beers/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/beers/0123456789abcdef01234567"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn list_is_newest_first() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    for name in ["First", "Second", "Third"] {
        let mut body = test_ipa();
        body["name"] = json!(name);
        create(&client, &base, &body).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let envelope: Value = client
        .get(format!("{base}/beers"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let names: Vec<&str> = envelope["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn stats_route_is_not_parsed_as_an_id() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    create(&client, &base, &test_ipa()).await;

    let resp = client
        .get(format!("{base}/beers/stats"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["data"]["totalBeers"], 1);
}

#[tokio::test]
async fn stats_summary_for_mixed_snapshot() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    for (name, style, rating, drank) in [
        ("One", "IPA", Some(4), true),
        ("Two", "IPA", Some(5), false),
        ("Three", "Lager", None, true),
    ] {
        let mut body = test_ipa();
        body["name"] = json!(name);
        body["style"] = json!(style);
        body["drank"] = json!(drank);
        if let Some(r) = rating {
            body["rating"] = json!(r);
        }
        create(&client, &base, &body).await;
    }

    let envelope: Value = client
        .get(format!("{base}/beers/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let stats = &envelope["data"];
    assert_eq!(stats["totalBeers"], 3);
    assert_eq!(stats["drankBeers"], 2);
    assert_eq!(stats["pendingBeers"], 1);
    assert_eq!(stats["ratedBeers"], 2);
    assert_eq!(stats["averageRating"], 4.5);
    assert_eq!(stats["topStyle"]["style"], "IPA");
    assert_eq!(stats["topStyle"]["count"], 2);
    assert_eq!(stats["topBrewery"]["brewery"], "Test Brewery");
}

#[tokio::test]
async fn stats_on_empty_store_has_zeroes_and_no_top_entries() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let envelope: Value = client
        .get(format!("{base}/beers/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let stats = &envelope["data"];
    assert_eq!(stats["totalBeers"], 0);
    assert_eq!(stats["averageRating"], 0.0);
    assert!(stats.get("topStyle").is_none());
    assert!(stats.get("topBrewery").is_none());
}

#[tokio::test]
async fn server_stats_equal_client_reduction() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    for (name, brewery, style, rating, drank) in [
        ("One", "Cloud", "IPA", Some(4), true),
        ("Two", "Cloud", "Lager", None, false),
        ("Three", "Alpine", "IPA", Some(3), true),
        ("Four", "Alpine", "Lager", Some(5), false),
        ("Five", "Dock", "Stout", None, true),
    ] {
        let mut body = json!({
            "name": name,
            "brewery": brewery,
            "style": style,
            "abv": 5.0,
            "drank": drank
        });
        if let Some(r) = rating {
            body["rating"] = json!(r);
        }
        create(&client, &base, &body).await;
    }

    let server_stats: BeerStats = {
        let envelope: Value = client
            .get(format!("{base}/beers/stats"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        serde_json::from_value(envelope["data"].clone()).unwrap()
    };

    let snapshot: Vec<Beer> = {
        let envelope: Value = client
            .get(format!("{base}/beers"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        serde_json::from_value(envelope["data"].clone()).unwrap()
    };

    assert_eq!(server_stats, compute_stats(&snapshot));
}

#[tokio::test]
async fn unmatched_route_is_404_envelope() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/nope"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "Route not found");
}
