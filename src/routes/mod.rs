mod api;

pub use api::*;

use crate::{config::Config, docs::ApiDoc, handlers::{not_found, redoc_html, root}};
use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Location of the generated OpenAPI document
pub const OPENAPI_URL: &str = "/openapi.json";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub openapi_url: &'static str,
}

/// Build the full application router
pub fn create_app(config: &Config) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        openapi_url: OPENAPI_URL,
    };

    let app = Router::new()
        .route("/", get(root))
        .merge(create_item_routes())
        // Rendered from the local static mount, kept out of the schema
        .route("/redoc", get(redoc_html))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url(OPENAPI_URL, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    match cors_layer(config) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

fn cors_layer(config: &Config) -> Option<CorsLayer> {
    let origins = config.cors_origin_list()?;
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Ignoring invalid CORS origin '{}': {}", o, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };
    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
