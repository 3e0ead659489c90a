#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use items_api::items_store::{InMemoryItemStore, ItemStore};
use items_api::{app, AppState};
use serde_json::Value;
use tower::util::ServiceExt;

/// An app plus a handle on its store, so tests can look behind the API.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryItemStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(InMemoryItemStore::new())
    }

    pub fn with_store(store: InMemoryItemStore) -> Self {
        let store = Arc::new(store);
        let shared: Arc<dyn ItemStore> = store.clone();
        Self {
            router: app(AppState::from_shared(shared)),
            store,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        self.send(json_request(Method::POST, uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        self.send(json_request(Method::PUT, uri, body)).await
    }
}

pub fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body should be JSON")
}
