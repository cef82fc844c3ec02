//! Portal HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::chrome::ChromeVersion;
use crate::config::SiteConfig;
use crate::observability;
use crate::store::DirectoryStore;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub site: SiteConfig,
    pub chrome_version: ChromeVersion,
    /// Lowercase name of the header carrying the signed-in x500.
    pub identity_header: String,
    pub store: Arc<dyn DirectoryStore>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route(
            "/v1/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/v1/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route("/v1/session", axum::routing::get(api::session::get_session))
        .route(
            "/v1/access/check",
            axum::routing::post(api::access::check_access),
        )
        .route(
            "/v1/pages/render",
            axum::routing::post(api::pages::render_page),
        )
        .route("/", axum::routing::get(api::pages::home))
        .route(
            "/units/:short_name",
            axum::routing::get(api::pages::unit_home),
        )
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/v1/openapi.json", ApiDoc::openapi()),
        )
        .layer(trace_layer)
        .with_state(state)
}
