//! Maps link resolution handler.

use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use tripkit_core::ResolvedPlace;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ResolveRequest {
    pub link: Option<String>,
}

/// POST /api/v1/places/resolve: resolve a shared maps link into a place.
pub(super) async fn resolve_place(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ResolveRequest>,
) -> Result<Json<ApiResponse<ResolvedPlace>>, ApiError> {
    let rid = &req_id.0;

    let link = body.link.as_deref().unwrap_or_default().trim().to_owned();
    if link.is_empty() {
        return Err(ApiError::new(rid, "validation_error", "link is required"));
    }

    let place = state
        .resolver
        .resolve(&link)
        .await
        .map_err(|e| ApiError::new(rid, "resolution_failed", e.to_string()))?;

    Ok(Json(ApiResponse {
        data: place,
        meta: ResponseMeta::new(req_id.0),
    }))
}
