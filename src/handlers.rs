//! One handler per route, each paired with a `*_docs` function that adds
//! its response documentation.
//!
//! Handlers only translate: they bind the request, make exactly one store
//! call and pick the status code. A missing item is answered with a bare
//! 404; only malformed input produces an error body.

use aide::axum::IntoApiResponse;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use items_store::{Item, ItemFields, ItemId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ErrorBody;
use crate::extract::{ItemJson, ItemPath};
use crate::routes::{self, Endpoint};
use crate::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Spring Boot API";

/// Payload of `GET /api/`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ApiInfo {
    pub message: &'static str,
    /// Every route the API serves, including this one.
    pub endpoints: Vec<Endpoint>,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE,
            endpoints: routes::endpoints(),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ItemIdParam {
    /// The unique identifier of the item.
    pub id: ItemId,
}

pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo::default())
}

pub fn api_info_docs(op: TransformOperation) -> TransformOperation {
    op.description("Describe the API and list every available route.")
        .response_with::<200, Json<ApiInfo>, _>(|res| {
            res.description("API information.")
                .example(ApiInfo::default())
        })
}

pub async fn list_items(State(app): State<AppState>) -> Json<Vec<Item>> {
    let items = app.store().list_all();
    debug!(count = items.len(), "listed items");
    Json(items)
}

pub fn list_items_docs(op: TransformOperation) -> TransformOperation {
    op.description("Return every item in creation order. An empty store yields an empty list.")
        .response_with::<200, Json<Vec<Item>>, _>(|res| {
            res.description("List of all items.")
                .example(vec![Item::default()])
        })
}

pub async fn create_item(
    State(app): State<AppState>,
    ItemJson(fields): ItemJson<ItemFields>,
) -> (StatusCode, Json<Item>) {
    let item = app.store().create(fields);
    debug!(id = item.id, "created item");
    (StatusCode::CREATED, Json(item))
}

pub fn create_item_docs(op: TransformOperation) -> TransformOperation {
    op.description("Store a new item. The identifier is assigned by the server.")
        .response_with::<201, Json<Item>, _>(|res| {
            res.description("Item created successfully.")
                .example(Item::default())
        })
        .response_with::<400, Json<ErrorBody>, _>(|res| {
            res.description("The request body is not a valid item.")
        })
}

pub async fn get_item(
    State(app): State<AppState>,
    ItemPath(ItemIdParam { id }): ItemPath<ItemIdParam>,
) -> impl IntoApiResponse {
    match app.store().get_by_id(id) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => {
            debug!(id, "item not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub fn get_item_docs(op: TransformOperation) -> TransformOperation {
    op.description("Retrieve a single item by its identifier.")
        .response_with::<200, Json<Item>, _>(|res| {
            res.description("Successfully retrieved the item.")
                .example(Item::default())
        })
        .response_with::<400, Json<ErrorBody>, _>(|res| {
            res.description("The identifier is not an integer.")
        })
        .response_with::<404, (), _>(|res| res.description("Item was not found."))
}

pub async fn update_item(
    State(app): State<AppState>,
    ItemPath(ItemIdParam { id }): ItemPath<ItemIdParam>,
    ItemJson(fields): ItemJson<ItemFields>,
) -> impl IntoApiResponse {
    match app.store().update(id, fields) {
        Some(item) => {
            debug!(id, "updated item");
            (StatusCode::OK, Json(item)).into_response()
        }
        None => {
            debug!(id, "item not found, nothing updated");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub fn update_item_docs(op: TransformOperation) -> TransformOperation {
    op.description("Replace every field of an existing item. The identifier never changes.")
        .response_with::<200, Json<Item>, _>(|res| {
            res.description("Item updated successfully.")
                .example(Item::default())
        })
        .response_with::<400, Json<ErrorBody>, _>(|res| {
            res.description("The identifier or the request body is malformed.")
        })
        .response_with::<404, (), _>(|res| res.description("Item was not found."))
}

pub async fn delete_item(
    State(app): State<AppState>,
    ItemPath(ItemIdParam { id }): ItemPath<ItemIdParam>,
) -> impl IntoApiResponse {
    if app.store().delete_by_id(id) {
        debug!(id, "deleted item");
        StatusCode::NO_CONTENT
    } else {
        debug!(id, "item not found, nothing deleted");
        StatusCode::NOT_FOUND
    }
}

pub fn delete_item_docs(op: TransformOperation) -> TransformOperation {
    op.description("Permanently delete an item.")
        .response_with::<204, (), _>(|res| res.description("Item deleted successfully."))
        .response_with::<400, Json<ErrorBody>, _>(|res| {
            res.description("The identifier is not an integer.")
        })
        .response_with::<404, (), _>(|res| res.description("Item was not found."))
}
