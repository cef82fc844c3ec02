//! OpenAPI document for the portal API.
//!
//! # Purpose
//! Collects the JSON endpoints, the chrome-wrapped pages, and their schema
//! types into one document served at `/v1/openapi.json`.
use crate::api::{
    access, pages, session, system,
    types::{
        AccessCheckRequest, AccessCheckResponse, BreadcrumbEntry, ErrorResponse, HealthStatus,
        ModuleSummary, RenderPageRequest, SessionResponse, SystemInfo,
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ica-portal",
        version = "v1",
        description = "Athletics intranet page chrome and access API"
    ),
    paths(
        system::system_info,
        system::system_health,
        session::get_session,
        access::check_access,
        pages::render_page,
        pages::home,
        pages::unit_home
    ),
    components(schemas(
        SystemInfo,
        HealthStatus,
        ErrorResponse,
        ModuleSummary,
        SessionResponse,
        AccessCheckRequest,
        AccessCheckResponse,
        BreadcrumbEntry,
        RenderPageRequest
    )),
    tags(
        (name = "system", description = "Service identity and health"),
        (name = "session", description = "Resolved requester"),
        (name = "access", description = "Page restriction checks"),
        (name = "pages", description = "Pages wrapped in the site chrome")
    )
)]
pub struct ApiDoc;
