//! A small CRUD REST API for [`Item`](items_store::Item) records.
//!
//! All routes live under `/api` and are registered from the explicit table
//! in [`routes`]. Every route is documented with OpenAPI through `aide`; the
//! generated document is served at `/api.json` and `/api.yaml`.
//!
//! # Example
//! ```no_run
//! use items_api::{app, AppState};
//! use items_api::items_store::InMemoryItemStore;
//!
//! # async fn run() -> std::io::Result<()> {
//! let state = AppState::new(InMemoryItemStore::new());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app(state)).await
//! # }
//! ```

pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod server;

// Re-exported so callers can build a store without a direct dependency.
pub use aide;
pub use items_store;

use std::sync::Arc;

use axum::Extension;
use items_store::ItemStore;

/// Shared state handed to every handler.
///
/// The store is passed in at construction time; handlers never look it up
/// from anywhere else.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: impl ItemStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Use a store that is also held elsewhere, e.g. by a test.
    pub fn from_shared(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }
}

/// Build the complete application: item routes, OpenAPI endpoints and
/// whichever documentation viewers are enabled.
pub fn app(state: AppState) -> axum::Router {
    let mut api = docs::api_description();
    docs::mount(routes::api_router())
        .finish_api(&mut api)
        .layer(Extension(api))
        .with_state(state)
}
