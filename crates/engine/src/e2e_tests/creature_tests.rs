use axum::http::StatusCode;
use serde_json::json;

use super::*;

#[tokio::test]
async fn create_then_fetch_round_trips_fields() {
    let client = TestClient::new().await;

    let (status, created) = client
        .post("/creatures/", json!({ "name": "Dragon", "species": "Fire Drake" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Dragon");
    assert_eq!(created["species"], "Fire Drake");
    assert!(created.get("realms").is_none());

    let id = id_of(&created);
    let (status, fetched) = client.get(&format!("/creatures/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "Dragon");
    assert_eq!(fetched["species"], "Fire Drake");
    assert_eq!(fetched["realms"], json!([]));
}

#[tokio::test]
async fn generated_ids_are_distinct() {
    let client = TestClient::new().await;
    let first = client.create_creature("Dragon", "Fire Drake").await;
    let second = client.create_creature("Dragon", "Fire Drake").await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn missing_species_is_unprocessable() {
    let client = TestClient::new().await;

    let (status, body) = client.post("/creatures/", json!({ "name": "Dragon" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn names_are_stored_exactly_as_sent() {
    let client = TestClient::new().await;
    let long_name = "x".repeat(201);

    for (name, species) in [(" Dragon ", "Fire Drake"), ("", ""), (long_name.as_str(), " ")] {
        let (status, created) = client
            .post("/creatures/", json!({ "name": name, "species": species }))
            .await;
        assert_eq!(status, StatusCode::OK, "{created}");
        assert_eq!(created["name"], name);
        assert_eq!(created["species"], species);

        let (status, fetched) = client.get(&format!("/creatures/{}", id_of(&created))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], name);
        assert_eq!(fetched["species"], species);
    }
}

#[tokio::test]
async fn non_string_name_is_unprocessable() {
    let client = TestClient::new().await;

    let (status, body) = client
        .post("/creatures/", json!({ "name": 42, "species": "Fire Drake" }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn blank_name_with_malformed_id_is_bad_request() {
    let client = TestClient::new().await;

    let (status, body) = client
        .put("/creatures/not-a-uuid", json!({ "name": "", "species": "" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_of(&body), "Invalid UUID format");
}

#[tokio::test]
async fn list_embeds_realms_in_insertion_order() {
    let client = TestClient::new().await;
    let dragon = client.create_creature("Dragon", "Fire Drake").await;
    client.create_creature("Phoenix", "Immortal Bird").await;
    let olympus = client.create_realm("Olympus").await;
    assert_eq!(client.join(&dragon, &olympus).await, StatusCode::CREATED);

    let (status, body) = client.get("/creatures/").await;

    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().expect("array");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "Dragon");
    assert_eq!(listed[0]["realms"], json!([{ "id": olympus, "name": "Olympus" }]));
    assert_eq!(listed[1]["name"], "Phoenix");
    assert_eq!(listed[1]["realms"], json!([]));
}

#[tokio::test]
async fn malformed_id_is_bad_request_everywhere() {
    let client = TestClient::new().await;
    client.create_creature("Dragon", "Fire Drake").await;

    for raw in ["not-a-uuid", "1234", "123e4567-e89b-12d3-a456"] {
        let uri = format!("/creatures/{raw}");

        let (status, body) = client.get(&uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail_of(&body), "Invalid UUID format");

        let (status, _) = client
            .put(&uri, json!({ "name": "Wyrm", "species": "Drake" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = client.delete(&uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn padded_id_is_bad_request() {
    let client = TestClient::new().await;
    let id = client.create_creature("Dragon", "Fire Drake").await;

    let (status, body) = client.get(&format!("/creatures/%20{id}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_of(&body), "Invalid UUID format");
}

#[tokio::test]
async fn unassigned_id_is_not_found_everywhere() {
    let client = TestClient::new().await;
    let uri = format!("/creatures/{UNASSIGNED_ID}");

    let (status, body) = client.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(detail_of(&body), "Creature not found");

    let (status, _) = client
        .put(&uri, json!({ "name": "Wyrm", "species": "Drake" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = client.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let client = TestClient::new().await;
    let id = client.create_creature("Dragon", "Fire Drake").await;

    let (status, body) = client
        .put(
            &format!("/creatures/{id}"),
            json!({ "name": "Elder Dragon", "species": "Ancient Drake" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": id, "name": "Elder Dragon", "species": "Ancient Drake" }));

    let (_, fetched) = client.get(&format!("/creatures/{id}")).await;
    assert_eq!(fetched["name"], "Elder Dragon");
}

#[tokio::test]
async fn delete_then_fetch_is_not_found() {
    let client = TestClient::new().await;
    let id = client.create_creature("Dragon", "Fire Drake").await;

    let (status, body) = client.delete(&format!("/creatures/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = client.get(&format!("/creatures/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn uppercase_id_resolves_to_same_creature() {
    let client = TestClient::new().await;
    let id = client.create_creature("Dragon", "Fire Drake").await;

    let (status, body) = client
        .get(&format!("/creatures/{}", id.to_uppercase()))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_of(&body), id);
}
