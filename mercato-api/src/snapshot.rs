use axum::{
    extract::State,
    routing::get,
    Json,
    Router,
};
use mercato_order::PricingSnapshot;
use mercato_shared::models::SnapshotPublishedEvent;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/snapshot", get(get_snapshot).put(put_snapshot))
}

/// GET /v1/snapshot
async fn get_snapshot(State(state): State<AppState>) -> Json<PricingSnapshot> {
    Json(state.store.current().as_ref().clone())
}

/// PUT /v1/snapshot
/// Replace commission rates and promotions with the store's latest export
async fn put_snapshot(
    State(state): State<AppState>,
    Json(snapshot): Json<PricingSnapshot>,
) -> Result<Json<SnapshotPublishedEvent>, AppError> {
    snapshot
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(Json(state.store.publish(snapshot)))
}
