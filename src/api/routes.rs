//! API route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    self, ErrorResponse, HealthResponse, InsertPersonRequest, MessageResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "People API",
        version = "0.1.0",
        description = "Minimal demonstration service for inserting and querying person records"
    ),
    tags(
        (name = "people", description = "Person record operations"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::insert_person,
        handlers::query_person,
    ),
    components(schemas(
        InsertPersonRequest,
        MessageResponse,
        HealthResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Create the API router
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    Router::new()
        // Person operations
        .route("/insert", post(handlers::insert_person))
        .route("/query/{uid}", get(handlers::query_person))

        // Health
        .route("/health", get(handlers::health))

        // OpenAPI spec and Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
