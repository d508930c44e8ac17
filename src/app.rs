use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{self, AppState};
use crate::openapi::ApiDoc;

/// Builds the HTTP router: food endpoints, health check and API docs.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/foods", get(handlers::search_foods))
        .route("/food/:fdc_id", get(handlers::get_food_details))
        // Swagger UI at /docs, OpenAPI document at /openapi.json
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Any origin may call the API until the client app ships
                .layer(CorsLayer::permissive()),
        )
}
