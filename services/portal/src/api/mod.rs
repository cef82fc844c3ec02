//! Portal HTTP API.
//!
//! # Purpose
//! Route handlers for the JSON endpoints and the chrome-wrapped pages, plus
//! the page-loading helper they share.
pub mod access;
pub mod error;
pub mod openapi;
pub mod pages;
pub mod session;
pub mod system;
pub mod types;

use crate::api::error::{ApiError, api_internal};
use crate::app::AppState;
use crate::context::{PageContext, PageRequest};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use intranet_access::Identity;

/// Host the request was addressed to, taken from the `Host` header.
pub(crate) fn request_host(headers: &HeaderMap) -> Option<String> {
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}

pub(crate) async fn load_context(
    state: &AppState,
    identity: Identity,
    request: PageRequest,
) -> Result<PageContext, ApiError> {
    PageContext::load(state.store.as_ref(), identity, request)
        .await
        .map_err(|err| api_internal(&state.site.unavailable_message(), &err))
}
