// ABOUTME: HTTP request handlers for checklist item operations
// ABOUTME: Validates request bodies and maps service results to status codes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use listkeeper_core::{
    validate_patch_title, validate_title, ChecklistItem, ChecklistItemPatch, ValidationError,
};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;

/// Body returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "Item deleted successfully!";

/// Request body for creating an item
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Accepted but discarded by the service
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub version: Option<i32>,
}

impl CreateItemRequest {
    /// Validate the title, reporting failures under `field`
    fn into_item(self, field: &str) -> Result<ChecklistItem, ValidationError> {
        validate_title(field, self.title.as_deref())?;

        Ok(ChecklistItem {
            id: self.id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            completed: self.completed,
            version: self.version.unwrap_or(0),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
}

/// 204 for an empty list, 200 with the items otherwise
fn list_response(items: Vec<ChecklistItem>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(items)).into_response()
    }
}

/// List all checklist items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Response> {
    info!("Listing checklist items");

    let items = state.item_service.get_all_items().await?;
    Ok(list_response(items))
}

/// Get a single checklist item by ID
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ChecklistItem>> {
    info!("Getting checklist item: {}", id);

    let item = state.item_service.get_item_by_id(id).await?;
    Ok(Json(item))
}

/// Create a new checklist item
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> ApiResult<(StatusCode, Json<ChecklistItem>)> {
    info!("Creating checklist item: {:?}", request.title);

    let item = request.into_item("title")?;
    let saved = state.item_service.create_item(item).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Create several checklist items in one batch
pub async fn create_items(
    State(state): State<AppState>,
    Json(requests): Json<Vec<CreateItemRequest>>,
) -> ApiResult<(StatusCode, Json<Vec<ChecklistItem>>)> {
    info!("Creating {} checklist items", requests.len());

    let items = requests
        .into_iter()
        .enumerate()
        .map(|(index, request)| request.into_item(&format!("items[{}].title", index)))
        .collect::<Result<Vec<_>, _>>()?;

    let saved = state.item_service.create_items(items).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Apply a partial update to a checklist item
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ChecklistItemPatch>,
) -> ApiResult<Json<ChecklistItem>> {
    info!("Updating checklist item: {}", id);

    validate_patch_title("title", patch.title.as_deref())?;
    let updated = state.item_service.update_item(id, patch).await?;

    Ok(Json(updated))
}

/// Delete a checklist item
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<(StatusCode, &'static str)> {
    info!("Deleting checklist item: {}", id);

    state.item_service.delete_item_by_id(id).await?;
    Ok((StatusCode::OK, DELETE_CONFIRMATION))
}

/// Search checklist items by title
pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Response> {
    info!("Searching checklist items: {:?}", params.keyword);

    let items = state.item_service.search_items(&params.keyword).await?;
    Ok(list_response(items))
}
