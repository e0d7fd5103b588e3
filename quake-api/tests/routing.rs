//! Index route, malformed parameters and catcher bodies.

use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

use quake_api::models::MessageResponse;
use quake_api::orm::testing::{sample_earthquakes, test_rocket};

#[rocket::async_test]
async fn test_index_reports_service_name() {
    let client = Client::tracked(test_rocket(sample_earthquakes()))
        .await
        .expect("valid rocket instance");

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));

    let body: MessageResponse = response.into_json().await.expect("valid message JSON");
    assert_eq!(body, MessageResponse::new("Earthquake API"));
}

#[rocket::async_test]
async fn test_index_uses_configured_name() {
    let rocket = test_rocket(Vec::new());
    let figment = rocket.figment().clone().merge(("service_name", "Quake Watch"));
    let client = Client::tracked(rocket.configure(figment))
        .await
        .expect("valid rocket instance");

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body, json!({"message": "Quake Watch"}));
}

#[rocket::async_test]
async fn test_malformed_id_is_not_routed() {
    let client = Client::tracked(test_rocket(sample_earthquakes()))
        .await
        .expect("valid rocket instance");

    for path in ["/earthquakes/abc", "/earthquakes/1.5", "/earthquakes/magnitude"] {
        let response = client.get(path).dispatch().await;
        assert_eq!(response.status(), Status::NotFound, "path {}", path);

        let body: Value = response.into_json().await.expect("valid JSON");
        assert_eq!(
            body,
            json!({"error": "Not Found", "path": path, "status": 404}),
            "path {}",
            path
        );
    }
}

#[rocket::async_test]
async fn test_malformed_magnitude_is_not_routed() {
    let client = Client::tracked(test_rocket(sample_earthquakes()))
        .await
        .expect("valid rocket instance");

    for path in [
        "/earthquakes/magnitude/big",
        "/earthquakes/magnitude/NaN",
        "/earthquakes/magnitude/inf",
    ] {
        let response = client.get(path).dispatch().await;
        assert_eq!(response.status(), Status::NotFound, "path {}", path);

        let body: Value = response.into_json().await.expect("valid JSON");
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["status"], 404);
    }
}

#[rocket::async_test]
async fn test_unknown_route_uses_json_catcher() {
    let client = Client::tracked(test_rocket(sample_earthquakes()))
        .await
        .expect("valid rocket instance");

    let response = client.get("/volcanoes/1").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(
        body,
        json!({"error": "Not Found", "path": "/volcanoes/1", "status": 404})
    );
}

#[rocket::async_test]
async fn test_write_methods_are_not_routed() {
    let client = Client::tracked(test_rocket(sample_earthquakes()))
        .await
        .expect("valid rocket instance");

    let response = client.delete("/earthquakes/1").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let response = client
        .post("/earthquakes/1")
        .header(ContentType::JSON)
        .body(r#"{"magnitude": 1.0}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    // Still there afterwards
    let response = client.get("/earthquakes/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
}
