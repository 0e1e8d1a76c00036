use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::reports::{routes as reports_routes, ReportService};

/// Simple health check endpoint
async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Assemble the application router with all layers applied
pub fn build_router(
    report_service: Arc<ReportService>,
    app: &AppConfig,
    swagger: &SwaggerConfig,
) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger.title.clone(),
        version: swagger.version.clone(),
        description: swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let docs =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    Router::new()
        .merge(docs)
        .merge(reports_routes::routes(report_service))
        .merge(health_route)
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(app.cors_allowed_origins.clone()))
                .layer(DefaultBodyLimit::max(app.max_request_body_size))
                .layer(from_fn(middleware::log_request)),
        )
}
