//! Session introspection.
use crate::api::error::ApiError;
use crate::api::load_context;
use crate::api::types::SessionResponse;
use crate::app::AppState;
use crate::context::PageRequest;
use crate::session::RemoteUser;
use axum::Json;
use axum::extract::State;
use intranet_access::ModuleId;

#[utoipa::path(
    get,
    path = "/v1/session",
    tag = "session",
    responses(
        (status = 200, description = "Resolved identity, role class, and modules", body = SessionResponse),
        (status = 500, description = "Directory unavailable", body = crate::api::types::ErrorResponse)
    )
)]
/// Describe the current requester as the access checks see them.
///
/// # Errors
/// - Returns 500 if the directory lookup fails.
pub(crate) async fn get_session(
    State(state): State<AppState>,
    RemoteUser(identity): RemoteUser,
) -> Result<Json<SessionResponse>, ApiError> {
    let ctx = load_context(&state, identity, PageRequest::new(ModuleId::NONE, "/")).await?;
    Ok(Json(SessionResponse::from(&ctx)))
}
