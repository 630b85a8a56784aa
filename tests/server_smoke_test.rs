use std::net::SocketAddr;

use readlog::{db, server};
use serde_json::{Value, json};

// Start the embedded server on an ephemeral port and return its base URL
async fn start_test_server() -> String {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let addr = server::spawn_server(db, SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to start server");
    format!("http://{}/api", addr)
}

#[tokio::test]
async fn test_book_round_trip_over_http() {
    let base = start_test_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/books", base))
        .json(&json!({"title": "Dune", "author": "Herbert", "category": "FICTION"}))
        .send()
        .await
        .expect("POST failed");
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["status"], "TO_READ");

    let res = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("GET failed");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let books: Vec<Value> = res.json().await.unwrap();
    assert_eq!(books, vec![created.clone()]);

    let res = client
        .delete(format!("{}/books/{}", base, created["id"]))
        .send()
        .await
        .expect("DELETE failed");
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let res = client
        .get(format!("{}/books/{}", base, created["id"]))
        .send()
        .await
        .expect("GET failed");
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_is_allowed() {
    let base = start_test_server().await;
    let client = reqwest::Client::new();

    let res = client
        .request(reqwest::Method::OPTIONS, format!("{}/books", base))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("OPTIONS failed");

    assert!(res.status().is_success());
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
