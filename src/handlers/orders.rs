use axum::{http::StatusCode, Json};
use tracing::info;

use crate::{
    extract::ValidatedJson,
    models::{OrderConfirmation, OrderRequest},
};

/// Echoes the validated order with a fixed id. Nothing is stored.
pub async fn create_order(
    ValidatedJson(order): ValidatedJson<OrderRequest>,
) -> (StatusCode, Json<OrderConfirmation>) {
    info!(item = %order.item, quantity = order.quantity, "Accepted order");

    (StatusCode::OK, Json(OrderConfirmation::processing(order)))
}
