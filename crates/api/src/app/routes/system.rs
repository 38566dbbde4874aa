use axum::{response::IntoResponse, Json};
use chrono::Utc;

pub const SERVICE_NAME: &str = "Gilded Rose Inventory API";

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "listItems": "GET /api/items",
            "addItem": "POST /api/items",
            "updateInventory": "POST /api/items/update (advance one day)",
            "loadFromFile": "POST /api/items/load-file",
            "clearInventory": "DELETE /api/items",
            "expiredItems": "GET /api/items/expired",
            "inventoryStats": "GET /api/items/stats",
            "itemsByCategory": "GET /api/items/category/:category",
            "getItem": "GET /api/items/by-name/:name",
            "removeItem": "DELETE /api/items/by-name/:name",
        },
    }))
}
