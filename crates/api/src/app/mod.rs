//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repository/dispatcher wiring and startup inventory
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::trace_requests))
            .layer(Extension(services)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use gildedrose_inventory::Item;

    fn app_with(items: Vec<Item>) -> Router {
        build_app(Arc::new(services::build_services(items, std::env::temp_dir())))
    }

    fn item(name: &str, sell_in: i32, quality: i32) -> Item {
        Item::new(name, sell_in, quality).unwrap()
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app_with(vec![]);
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn add_then_list() {
        let app = app_with(vec![]);
        let (status, body) = send(
            &app,
            "POST",
            "/api/items",
            Some(json!({"name": "Backstage passes to a TAFKAL80ETC concert", "sellIn": 10, "quality": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["category"], "TIME_SENSITIVE");
        assert_eq!(body["type"], "Backstage passes to a TAFKAL80ETC concert");
        assert_eq!(body["isLegendary"], false);

        let (status, body) = send(&app, "GET", "/api/items", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["items"][0]["sellIn"], 10);
    }

    #[tokio::test]
    async fn add_rejects_missing_and_invalid_fields() {
        let app = app_with(vec![]);

        let (status, body) = send(&app, "POST", "/api/items", Some(json!({"name": "Cheese"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");

        let (status, body) = send(
            &app,
            "POST",
            "/api/items",
            Some(json!({"name": "Sulfuras, Hand of Ragnaros", "sellIn": 0, "quality": 81})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("80"));

        let (_, body) = send(&app, "GET", "/api/items", None).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn update_advances_one_day() {
        let app = app_with(vec![item("Aged Brie", 2, 0), item("Sulfuras, Hand of Ragnaros", 0, 80)]);

        let (status, body) = send(&app, "POST", "/api/items/update", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["quality"], 1);
        assert_eq!(body["items"][0]["sellIn"], 1);
        assert_eq!(body["items"][1]["quality"], 80);
        assert_eq!(body["items"][1]["sellIn"], 0);
    }

    #[tokio::test]
    async fn category_filter_and_validation() {
        let app = app_with(vec![item("Conjured", 1, 10), item("Cheese", 1, 10)]);

        let (status, body) = send(&app, "GET", "/api/items/category/conjured", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["items"][0]["name"], "Conjured");

        let (status, body) = send(&app, "GET", "/api/items/category/ANCIENT", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_category");
    }

    #[tokio::test]
    async fn lookup_and_remove_by_name() {
        let app = app_with(vec![item("Aged Brie", 2, 0)]);

        let (status, body) = send(&app, "GET", "/api/items/by-name/Aged%20Brie", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "AGING");

        let (status, _) = send(&app, "GET", "/api/items/by-name/Mutton", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "DELETE", "/api/items/by-name/Aged%20Brie", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed"], 1);

        let (status, body) = send(&app, "DELETE", "/api/items/by-name/Aged%20Brie", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn expired_stats_and_clear() {
        let app = app_with(vec![
            item("Cheese", -1, 0),
            item("Sulfuras, Hand of Ragnaros", -1, 80),
            item("Mutton", 10, 10),
        ]);

        let (_, body) = send(&app, "GET", "/api/items/expired", None).await;
        assert_eq!(body["count"], 2);

        let (status, body) = send(&app, "GET", "/api/items/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalItems"], 3);
        assert_eq!(body["legendaryCount"], 1);
        assert_eq!(body["expiredCount"], 2);
        assert_eq!(body["averageQuality"], 30.0);

        let (status, _) = send(&app, "DELETE", "/api/items", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, "GET", "/api/items/stats", None).await;
        assert_eq!(body["totalItems"], 0);
    }

    #[tokio::test]
    async fn load_file_requires_a_path() {
        let app = app_with(vec![]);
        let (status, body) = send(&app, "POST", "/api/items/load-file", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");

        let missing = std::env::temp_dir().join("gildedrose-no-such-inventory.txt");
        let (status, body) = send(
            &app,
            "POST",
            "/api/items/load-file",
            Some(json!({"filePath": missing.to_string_lossy()})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "file_unreadable");
    }

    #[tokio::test]
    async fn load_file_refuses_paths_outside_import_dir() {
        let import_dir = tempfile::tempdir().unwrap();
        let app = build_app(Arc::new(services::build_services(
            vec![item("Cheese", 1, 1)],
            import_dir.path(),
        )));

        for path in ["/etc/passwd", "../../../../etc/passwd"] {
            let (status, body) = send(
                &app,
                "POST",
                "/api/items/load-file",
                Some(json!({"filePath": path})),
            )
            .await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body["error"], "path_not_allowed");
            assert!(!body.to_string().contains("root:"));
        }

        let (_, body) = send(&app, "GET", "/api/items", None).await;
        assert_eq!(body["items"][0]["name"], "Cheese");
    }

    #[tokio::test]
    async fn malformed_file_error_omits_line_content() {
        let import_dir = tempfile::tempdir().unwrap();
        std::fs::write(import_dir.path().join("bad.txt"), "secret:token:value\n").unwrap();
        let app = build_app(Arc::new(services::build_services(vec![], import_dir.path())));

        let (status, body) = send(
            &app,
            "POST",
            "/api/items/load-file",
            Some(json!({"filePath": "bad.txt"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "import_error");
        assert!(!body.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn odd_conjured_quality_fails_update_and_keeps_inventory() {
        let app = app_with(vec![item("Cheese", 5, 5), item("Conjured", 5, 1)]);

        let (status, body) = send(&app, "POST", "/api/items/update", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "invariant_violation");

        let (_, body) = send(&app, "GET", "/api/items", None).await;
        assert_eq!(body["items"][0]["quality"], 5);
        assert_eq!(body["items"][1]["quality"], 1);
    }
}
