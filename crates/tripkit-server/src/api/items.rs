//! Saved item handlers: list and create.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;
use tripkit_store::SavedItem;

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct CreateItemRequest {
    pub title: Option<String>,
    pub notes: Option<String>,
}

/// GET /api/v1/items: list saved items, newest first.
pub(super) async fn list_items(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<SavedItem>>>, ApiError> {
    let items = state
        .store
        .list()
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: items,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/items: create a saved item.
pub(super) async fn create_item(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SavedItem>>), ApiError> {
    let rid = &req_id.0;

    let title = body.title.as_deref().unwrap_or_default().trim().to_owned();
    if title.is_empty() {
        return Err(ApiError::new(rid, "validation_error", "title is required"));
    }
    let notes = body.notes.unwrap_or_default();

    let item = state
        .store
        .create(&title, &notes)
        .await
        .map_err(|e| map_store_error(rid.clone(), &e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: item,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}
