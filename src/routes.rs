//! The route table.
//!
//! [`ROUTES`] is the single source of truth for what the API serves: the
//! router is built from it at startup, and the info payload at `GET /api/`
//! lists it verbatim.

use std::collections::BTreeMap;

use aide::axum::routing::{delete_with, get_with, post_with, put_with, ApiMethodRouter};
use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::routing::get;
use schemars::JsonSchema;
use serde::Serialize;

use crate::handlers;
use crate::AppState;

pub const BASE_PATH: &str = "/api";
pub const ITEMS_PATH: &str = "/api/items";
pub const ITEM_PATH: &str = "/api/items/{id}";

/// OpenAPI tag shared by every route.
pub const TAG: &str = "items";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A public description of one route, as listed by `GET /api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
}

/// Which handler serves a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ApiInfo,
    ListItems,
    CreateItem,
    GetItem,
    UpdateItem,
    DeleteItem,
}

impl Operation {
    /// OpenAPI `operationId`.
    pub fn id(self) -> &'static str {
        match self {
            Self::ApiInfo => "getApiInfo",
            Self::ListItems => "getAllItems",
            Self::CreateItem => "createItem",
            Self::GetItem => "getItemById",
            Self::UpdateItem => "updateItem",
            Self::DeleteItem => "deleteItem",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub endpoint: Endpoint,
    pub operation: Operation,
}

impl Route {
    const fn new(
        method: HttpMethod,
        path: &'static str,
        description: &'static str,
        operation: Operation,
    ) -> Self {
        Self {
            endpoint: Endpoint {
                method,
                path,
                description,
            },
            operation,
        }
    }

    fn document<'t>(
        &self,
        op: TransformOperation<'t>,
        docs: impl FnOnce(TransformOperation<'t>) -> TransformOperation<'t>,
    ) -> TransformOperation<'t> {
        docs(op)
            .summary(self.endpoint.description)
            .id(self.operation.id())
            .tag(TAG)
    }

    fn method_router(&self) -> ApiMethodRouter<AppState> {
        match self.operation {
            Operation::ApiInfo => get_with(handlers::api_info, |op| {
                self.document(op, handlers::api_info_docs)
            }),
            Operation::ListItems => get_with(handlers::list_items, |op| {
                self.document(op, handlers::list_items_docs)
            }),
            Operation::CreateItem => post_with(handlers::create_item, |op| {
                self.document(op, handlers::create_item_docs)
            }),
            Operation::GetItem => get_with(handlers::get_item, |op| {
                self.document(op, handlers::get_item_docs)
            }),
            Operation::UpdateItem => put_with(handlers::update_item, |op| {
                self.document(op, handlers::update_item_docs)
            }),
            Operation::DeleteItem => delete_with(handlers::delete_item, |op| {
                self.document(op, handlers::delete_item_docs)
            }),
        }
    }
}

/// Every route the API serves, in the order `GET /api/` lists them.
pub static ROUTES: [Route; 6] = [
    Route::new(
        HttpMethod::Get,
        "/api/",
        "API information",
        Operation::ApiInfo,
    ),
    Route::new(
        HttpMethod::Get,
        ITEMS_PATH,
        "Get all items",
        Operation::ListItems,
    ),
    Route::new(
        HttpMethod::Post,
        ITEMS_PATH,
        "Create a new item",
        Operation::CreateItem,
    ),
    Route::new(
        HttpMethod::Get,
        ITEM_PATH,
        "Get item by ID",
        Operation::GetItem,
    ),
    Route::new(
        HttpMethod::Put,
        ITEM_PATH,
        "Update item by ID",
        Operation::UpdateItem,
    ),
    Route::new(
        HttpMethod::Delete,
        ITEM_PATH,
        "Delete item by ID",
        Operation::DeleteItem,
    ),
];

/// Public descriptions of every route in [`ROUTES`].
pub fn endpoints() -> Vec<Endpoint> {
    ROUTES.iter().map(|route| route.endpoint).collect()
}

/// Register every route in [`ROUTES`], plus an undocumented `GET /api`
/// alias for the info payload.
///
/// Routes sharing a path are merged into one method router first, so each
/// path is registered exactly once.
pub fn api_router() -> ApiRouter<AppState> {
    let mut by_path: BTreeMap<&'static str, ApiMethodRouter<AppState>> = BTreeMap::new();
    for route in &ROUTES {
        let path = route.endpoint.path;
        let method_router = match by_path.remove(path) {
            Some(existing) => existing.merge(route.method_router()),
            None => route.method_router(),
        };
        by_path.insert(path, method_router);
    }

    by_path
        .into_iter()
        .fold(ApiRouter::new(), |router, (path, method_router)| {
            router.api_route(path, method_router)
        })
        .route(BASE_PATH, get(handlers::api_info))
}
