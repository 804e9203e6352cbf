use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use ticklist::{create_app, store::MemoryStore, AppState};

struct TestServer {
    addr: String,
    client: Client,
}

impl TestServer {
    async fn new() -> Self {
        Self::with_base_path("").await
    }

    async fn with_base_path(base_path: &str) -> Self {
        let state = AppState {
            store: MemoryStore::new().into_pool(),
            base_path: Arc::new(base_path.to_string()),
        };
        let app = create_app(state);

        // Bind to random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create client");

        TestServer { addr, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    async fn create(&self, body: Value) -> Value {
        let resp = self
            .client
            .post(self.url("/api/todos"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        resp.json().await.unwrap()
    }

    async fn list(&self, query: &str) -> Vec<Value> {
        let resp = self
            .client
            .get(self.url(&format!("/api/todos{query}")))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        resp.json().await.unwrap()
    }
}

fn labels(todos: &[Value]) -> Vec<&str> {
    todos.iter().map(|t| t["label"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn test_todo_crud() {
    let server = TestServer::new().await;

    assert!(server.list("").await.is_empty());

    let todo = server.create(json!({"label": "buy milk"})).await;
    assert_eq!(todo, json!({"id": 1, "label": "buy milk", "finished": false}));

    let resp = server
        .client
        .get(server.url("/api/todos/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Value = resp.json().await.unwrap();
    assert_eq!(todo["label"], "buy milk");

    let resp = server
        .client
        .put(server.url("/api/todos/1"))
        .json(&json!({"finished": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Value = resp.json().await.unwrap();
    assert_eq!(todo, json!({"id": 1, "label": "buy milk", "finished": true}));

    let finished = server.list("?finished=true").await;
    assert_eq!(finished, vec![todo]);
    assert!(server.list("?finished=false").await.is_empty());

    let resp = server
        .client
        .delete(server.url("/api/todos/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(server.list("").await.is_empty());

    let resp = server
        .client
        .delete(server.url("/api/todos/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_validation() {
    let server = TestServer::new().await;

    let resp = server
        .client
        .post(server.url("/api/todos"))
        .json(&json!({"finished": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "label is required");

    let resp = server
        .client
        .post(server.url("/api/todos"))
        .json(&json!({"label": "   "}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(server.list("").await.is_empty());

    let todo = server
        .create(json!({"label": "walk dog", "finished": true}))
        .await;
    assert_eq!(todo["finished"], true);
}

#[tokio::test]
async fn test_todo_not_found() {
    let server = TestServer::new().await;

    let resp = server
        .client
        .get(server.url("/api/todos/9999"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = server
        .client
        .put(server.url("/api/todos/9999"))
        .json(&json!({"label": "Test"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = server
        .client
        .delete(server.url("/api/todos/9999"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_filters() {
    let server = TestServer::new().await;
    server.create(json!({"label": "buy milk"})).await;
    server
        .create(json!({"label": "fix bike", "finished": true}))
        .await;
    server.create(json!({"label": "call mom"})).await;

    assert_eq!(
        labels(&server.list("").await),
        ["buy milk", "fix bike", "call mom"]
    );
    assert_eq!(labels(&server.list("?mode=finished").await), ["fix bike"]);
    assert_eq!(
        labels(&server.list("?mode=unfinished").await),
        ["buy milk", "call mom"]
    );
    assert_eq!(labels(&server.list("?mode=all").await).len(), 3);
    assert_eq!(labels(&server.list("?label=call%20mom").await), ["call mom"]);
    // explicit attribute wins over the mode
    assert_eq!(
        labels(&server.list("?mode=finished&finished=false").await),
        ["buy milk", "call mom"]
    );
}

#[tokio::test]
async fn test_clear_finished() {
    let server = TestServer::new().await;
    server.create(json!({"label": "a", "finished": true})).await;
    server.create(json!({"label": "b"})).await;
    server.create(json!({"label": "c", "finished": true})).await;

    let resp = server
        .client
        .delete(server.url("/api/todos/finished"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["deleted"], 2);

    assert_eq!(labels(&server.list("").await), ["b"]);
}

#[tokio::test]
async fn test_views_render_display_modes() {
    let server = TestServer::new().await;
    server.create(json!({"label": "buy milk"})).await;
    server
        .create(json!({"label": "fix bike", "finished": true}))
        .await;

    let resp = server.client.get(server.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Tasks"));
    assert!(body.contains("data-display-mode=\"all\""));
    assert!(body.contains("buy milk"));
    assert!(body.contains("fix bike"));
    assert!(body.contains("1 item left"));

    let body = server
        .client
        .get(server.url("/completed"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("data-display-mode=\"finished\""));
    assert!(body.contains("fix bike"));
    assert!(!body.contains("buy milk"));

    let body = server
        .client
        .get(server.url("/active"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("data-display-mode=\"unfinished\""));
    assert!(body.contains("buy milk"));
    assert!(!body.contains("fix bike"));

    let resp = server
        .client
        .get(server.url("/archived"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_route_table() {
    let server = TestServer::new().await;

    let resp = server
        .client
        .get(server.url("/api/routes"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let routes: Value = resp.json().await.unwrap();
    assert_eq!(
        routes,
        json!([
            {"name": "index", "path": "/", "display_mode": "all"},
            {"name": "completed", "path": "/completed", "display_mode": "finished"},
            {"name": "active", "path": "/active", "display_mode": "unfinished"},
        ])
    );
}

#[tokio::test]
async fn test_base_path() {
    let server = TestServer::with_base_path("/tasks").await;

    let resp = server
        .client
        .post(server.url("/tasks/api/todos"))
        .json(&json!({"label": "nested"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = server
        .client
        .get(server.url("/tasks/active"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("nested"));
    assert!(body.contains("href=\"/tasks/completed\""));

    let resp = server
        .client
        .get(server.url("/api/todos"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
