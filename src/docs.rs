//! OpenAPI document and documentation viewers.
//!
//! The document itself is generated by `aide` from the route table and is
//! attached to the router as an [`Extension`] once the API is finished.

use aide::axum::ApiRouter;
use aide::openapi::{OpenApi, Tag};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Extension;
use tracing::error;

use crate::routes::TAG;
use crate::AppState;

pub const OPENAPI_JSON_PATH: &str = "/api.json";
pub const OPENAPI_YAML_PATH: &str = "/api.yaml";
pub const OPENAPI_YML_PATH: &str = "/api.yml";

#[cfg(feature = "swagger")]
pub const SWAGGER_PATH: &str = "/docs";
#[cfg(feature = "redoc")]
pub const REDOC_PATH: &str = "/redoc";
#[cfg(feature = "scalar")]
pub const SCALAR_PATH: &str = "/scalar";

/// The top-level document that route documentation is merged into.
pub fn api_description() -> OpenApi {
    let mut api = OpenApi::default();
    api.info.title = "Items API".to_string();
    api.info.description = Some("Create, read, update and delete items.".to_string());
    api.info.version = env!("CARGO_PKG_VERSION").to_string();
    api.tags.push(Tag {
        name: TAG.to_string(),
        description: Some("Item lifecycle".to_string()),
        ..Tag::default()
    });
    api
}

/// Add the OpenAPI endpoints, and any enabled viewers, to `router`.
pub fn mount(router: ApiRouter<AppState>) -> ApiRouter<AppState> {
    let router = router
        .route(OPENAPI_JSON_PATH, get(serve_json))
        .route(OPENAPI_YAML_PATH, get(serve_yaml))
        .route(OPENAPI_YML_PATH, get(serve_yaml));

    #[cfg(feature = "swagger")]
    let router = router.route(
        SWAGGER_PATH,
        aide::swagger::Swagger::new(OPENAPI_JSON_PATH).axum_route(),
    );

    #[cfg(feature = "redoc")]
    let router = router.route(
        REDOC_PATH,
        aide::redoc::Redoc::new(OPENAPI_JSON_PATH).axum_route(),
    );

    #[cfg(feature = "scalar")]
    let router = router.route(
        SCALAR_PATH,
        aide::scalar::Scalar::new(OPENAPI_JSON_PATH).axum_route(),
    );

    router
}

async fn serve_json(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
    Json(api)
}

async fn serve_yaml(Extension(api): Extension<OpenApi>) -> Response {
    match serde_yaml::to_string(&api) {
        Ok(yaml) => ([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response(),
        Err(err) => {
            error!(%err, "failed to render OpenAPI document as YAML");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
