use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{db, error::AppResult, extract::parse_path_id, models::Product, AppState};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let products = state.tables.products();

    info!(count = products.len(), "Listed products");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "products": products,
            "count": products.len(),
        })),
    )
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let id = parse_path_id(&raw_id, "product_id")?;
    let product = db::fetch_product_by_id(&state.tables, id)?;

    info!(id, name = %product.name, "Fetched product");

    Ok((StatusCode::OK, Json(product.clone())))
}
