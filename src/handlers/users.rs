use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{db, error::AppResult, extract::parse_path_id, models::User, AppState};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_users(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let users = state.tables.users();

    info!(count = users.len(), "Listed users");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "users": users,
            "count": users.len(),
        })),
    )
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<(StatusCode, Json<User>)> {
    let id = parse_path_id(&raw_id, "user_id")?;
    let user = db::fetch_user_by_id(&state.tables, id)?;

    info!(id, name = %user.name, "Fetched user");

    Ok((StatusCode::OK, Json(user.clone())))
}
