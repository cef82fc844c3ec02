//! Access check endpoint.
//!
//! Lets pages served outside the portal ask whether the current requester
//! may view them, using the same decision and logging as rendered pages.
use crate::api::error::ApiError;
use crate::api::load_context;
use crate::api::types::{AccessCheckRequest, AccessCheckResponse};
use crate::app::AppState;
use crate::context::PageRequest;
use crate::session::RemoteUser;
use axum::Json;
use axum::extract::State;
use intranet_access::AccessError;

#[utoipa::path(
    post,
    path = "/v1/access/check",
    tag = "access",
    request_body = AccessCheckRequest,
    responses(
        (status = 200, description = "Decision for the current requester", body = AccessCheckResponse),
        (status = 400, description = "Invalid restriction", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Directory unavailable", body = crate::api::types::ErrorResponse)
    )
)]
/// Evaluate a restriction policy against the current requester.
///
/// # Errors
/// - Returns 400 for an out-of-range class and 500 if the directory lookup fails.
pub(crate) async fn check_access(
    State(state): State<AppState>,
    RemoteUser(identity): RemoteUser,
    Json(body): Json<AccessCheckRequest>,
) -> Result<Json<AccessCheckResponse>, ApiError> {
    let policy = body.to_policy()?;
    let ctx = load_context(&state, identity, PageRequest::new(policy.restrict_module, "/")).await?;
    let response = match ctx.authorize(&policy) {
        Ok(()) => AccessCheckResponse {
            allowed: true,
            reason: None,
        },
        Err(AccessError::AccessDenied { reason, .. }) => AccessCheckResponse {
            allowed: false,
            reason: Some(reason.as_str().to_string()),
        },
        Err(err) => AccessCheckResponse {
            allowed: false,
            reason: Some(err.to_string()),
        },
    };
    Ok(Json(response))
}
