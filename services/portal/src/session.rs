//! Session identity resolution.
//!
//! The portal sits behind an authenticating proxy (Shibboleth) that reports
//! the signed-in x500 in a trusted request header. Anything missing, blank,
//! or undecodable is the anonymous guest.
use crate::app::AppState;
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use intranet_access::Identity;
use std::convert::Infallible;

pub fn resolve_identity(headers: &HeaderMap, header_name: &str) -> Identity {
    let value = headers
        .get(header_name)
        .and_then(|value| value.to_str().ok());
    Identity::from_remote_user(value)
}

/// Extracts the requester's [`Identity`] using the header configured in
/// [`AppState::identity_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUser(pub Identity);

#[axum::async_trait]
impl FromRequestParts<AppState> for RemoteUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = resolve_identity(&parts.headers, &state.identity_header);
        tracing::debug!(identity = %identity, "resolved remote user");
        Ok(RemoteUser(identity))
    }
}
