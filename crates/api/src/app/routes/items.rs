use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use gildedrose_inventory::Category;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(add_item).delete(clear_items))
        .route("/update", post(update_inventory))
        .route("/load-file", post(load_file))
        .route("/expired", get(expired_items))
        .route("/stats", get(inventory_stats))
        .route("/category/:category", get(items_by_category))
        .route("/by-name/:name", get(get_item).delete(remove_item))
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (StatusCode::OK, Json(dto::items_to_json(&services.items()))).into_response()
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    let (Some(name), Some(sell_in), Some(quality)) = (body.name, body.sell_in, body.quality) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "missing required fields: name, sellIn, quality",
        );
    };

    match services.add_item(&name, sell_in, quality) {
        Ok(item) => (StatusCode::CREATED, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.advance_day() {
        Ok(items) => (StatusCode::OK, Json(dto::items_to_json(&items))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn load_file(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoadFileRequest>,
) -> axum::response::Response {
    let Some(path) = body.file_path.filter(|p| !p.trim().is_empty()) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "missing filePath in request body",
        );
    };

    match services.load_file(&path) {
        Ok(count) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": format!("loaded {count} items from file"),
                "count": count,
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn clear_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    services.clear();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "inventory cleared" })),
    )
        .into_response()
}

pub async fn expired_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(dto::items_to_json(&services.expired_items()))).into_response()
}

pub async fn inventory_stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.stats())).into_response()
}

pub async fn items_by_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let category: Category = match category.parse() {
        Ok(c) => c,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_category",
                "category must be one of: NORMAL, LEGENDARY, AGING, TIME_SENSITIVE, CONJURED",
            );
        }
    };

    (
        StatusCode::OK,
        Json(dto::items_to_json(&services.items_by_category(category))),
    )
        .into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.item(&name) {
        Some(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        None => errors::not_found(format!("item '{name}'")),
    }
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.remove_item(&name) {
        0 => errors::not_found(format!("item '{name}'")),
        removed => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": format!("item '{name}' removed"),
                "removed": removed,
            })),
        )
            .into_response(),
    }
}
