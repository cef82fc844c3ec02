//! Chrome-wrapped pages.
//!
//! # Purpose and responsibility
//! Loads the page context, enforces the page's restriction, and renders the
//! page (or the Access Denied page) in the selected chrome version.
//!
//! # Key invariants and assumptions
//! - Denied requests never render the requested content; they return 403
//!   with the denial page.
//! - Directory failures are JSON 500s, since no page can be rendered.
use crate::api::error::{ApiError, api_internal, api_internal_message, api_not_found};
use crate::api::types::RenderPageRequest;
use crate::api::{load_context, request_host};
use crate::app::AppState;
use crate::chrome::{Breadcrumb, ChromeVersion, Page, PageView, escape_html, render, render_denied};
use crate::context::{PageContext, PageRequest};
use crate::model::ModuleRecord;
use crate::session::RemoteUser;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use intranet_access::{ModuleId, RestrictionPolicy};
use std::fmt::Write;

/// Authorize and render one page for a loaded context.
fn respond(
    state: &AppState,
    ctx: &PageContext,
    page: &Page,
    policy: &RestrictionPolicy,
    version: ChromeVersion,
) -> Result<Response, ApiError> {
    let view = PageView {
        ctx,
        page,
        site: &state.site,
    };
    if let Err(err) = ctx.authorize(policy) {
        let html = render_denied(version, &view, &err)
            .map_err(|_| api_internal_message(&state.site.unavailable_message()))?;
        return Ok((StatusCode::FORBIDDEN, Html(html)).into_response());
    }
    let html =
        render(version, &view).map_err(|_| api_internal_message(&state.site.unavailable_message()))?;
    Ok(Html(html).into_response())
}

fn page_request(headers: &HeaderMap, module: ModuleId, path: impl Into<String>) -> PageRequest {
    let request = PageRequest::new(module, path);
    match request_host(headers) {
        Some(host) => request.with_host(host),
        None => request,
    }
}

#[utoipa::path(
    post,
    path = "/v1/pages/render",
    tag = "pages",
    request_body = RenderPageRequest,
    responses(
        (status = 200, description = "Page wrapped in the site chrome", content_type = "text/html", body = String),
        (status = 400, description = "Invalid page request", body = crate::api::types::ErrorResponse),
        (status = 403, description = "Access Denied page", content_type = "text/html", body = String),
        (status = 500, description = "Directory unavailable", body = crate::api::types::ErrorResponse)
    )
)]
/// Wrap caller-supplied content in the chrome after checking its policy.
///
/// # Errors
/// - Returns 400 for invalid restrictions, paths, dates, or chrome versions.
/// - Returns 500 if the directory lookup fails.
pub(crate) async fn render_page(
    State(state): State<AppState>,
    RemoteUser(identity): RemoteUser,
    headers: HeaderMap,
    Json(body): Json<RenderPageRequest>,
) -> Result<Response, ApiError> {
    body.validate_path()?;
    let version = body.version(state.chrome_version)?;
    let policy = body
        .policy
        .as_ref()
        .map(|policy| policy.to_policy())
        .transpose()?
        .unwrap_or_default();
    let page = body.to_page(&state.site.default_title)?;
    let request = page_request(&headers, ModuleId::new(body.page_module), body.path.clone());
    let ctx = load_context(&state, identity, request).await?;
    respond(&state, &ctx, &page, &policy, version)
}

fn home_content(ctx: &PageContext) -> Result<String, std::fmt::Error> {
    let mut content = String::from("<h2>Intercollegiate Athletics Intranet</h2>\n");
    if !ctx.is_signed_in() {
        content.push_str("<p>Sign in with your University x500 to see your unit resources.</p>\n");
        return Ok(content);
    }
    writeln!(
        content,
        "<p>Welcome, {}.</p>",
        escape_html(ctx.identity().as_str())
    )?;
    let units: Vec<_> = ctx
        .primary_module_record()
        .into_iter()
        .chain(ctx.admin_module_records())
        .collect();
    if !units.is_empty() {
        content.push_str("<ul class=\"unit-links\">\n");
        for unit in units {
            writeln!(
                content,
                "<li><a href=\"{root}{short}/index.php\">{name}</a></li>",
                root = ctx.root_path(),
                short = escape_html(&unit.short_name),
                name = escape_html(&unit.name)
            )?;
        }
        content.push_str("</ul>\n");
    }
    Ok(content)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Intranet home page", content_type = "text/html", body = String),
        (status = 500, description = "Directory unavailable", body = crate::api::types::ErrorResponse)
    )
)]
/// Intranet home page. Visible to everyone, including guests.
pub(crate) async fn home(
    State(state): State<AppState>,
    RemoteUser(identity): RemoteUser,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request = page_request(&headers, ModuleId::NONE, "/index.php");
    let ctx = load_context(&state, identity, request).await?;
    let content =
        home_content(&ctx).map_err(|_| api_internal_message(&state.site.unavailable_message()))?;
    let page = Page::new(&state.site.default_title).with_content(content);
    respond(
        &state,
        &ctx,
        &page,
        &RestrictionPolicy::public(),
        state.chrome_version,
    )
}

fn unit_page(default_title: &str, ctx: &PageContext, module: &ModuleRecord) -> Page {
    Page::new(default_title)
        .with_title(&module.name)
        .with_breadcrumbs(vec![
            Breadcrumb::new("Home", Some(format!("{}index.php", ctx.root_path()))),
            Breadcrumb::new(module.name.clone(), None),
        ])
        .with_content(format!("<h2>{}</h2>\n", escape_html(&module.name)))
}

#[utoipa::path(
    get,
    path = "/units/{short_name}",
    tag = "pages",
    params(
        ("short_name" = String, Path, description = "Unit directory name, e.g. `compliance`")
    ),
    responses(
        (status = 200, description = "Unit home page", content_type = "text/html", body = String),
        (status = 403, description = "Access Denied page", content_type = "text/html", body = String),
        (status = 404, description = "Unknown unit", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Directory unavailable", body = crate::api::types::ErrorResponse)
    )
)]
/// Unit home page, restricted to members of the unit's module.
///
/// # Errors
/// - Returns 404 if no module has this short name.
pub(crate) async fn unit_home(
    Path(short_name): Path<String>,
    State(state): State<AppState>,
    RemoteUser(identity): RemoteUser,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let module = state
        .store
        .find_module_by_short_name(&short_name)
        .await
        .map_err(|err| api_internal(&state.site.unavailable_message(), &err))?
        .ok_or_else(|| api_not_found("unit not found"))?;

    let policy = RestrictionPolicy::default().restrict_to_module(module.module_id);
    let request = page_request(
        &headers,
        module.module_id,
        format!("/{}/index.php", module.short_name),
    );
    let ctx = load_context(&state, identity, request).await?;
    let page = unit_page(&state.site.default_title, &ctx, &module);
    respond(&state, &ctx, &page, &policy, state.chrome_version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRecord;
    use crate::store::memory::InMemoryStore;
    use intranet_access::{Identity, ModuleSet, RoleClass};

    #[tokio::test]
    async fn home_content_lists_units_for_signed_in_users() {
        let store = InMemoryStore::new();
        store
            .insert_module(ModuleRecord::new(132, "compliance", "Compliance"))
            .await;
        store
            .insert_module(ModuleRecord::new(190, "hr", "Human Resources"))
            .await;
        store
            .insert_user(
                UserRecord::new("jdoe", RoleClass::Administrator, 132)
                    .with_admin_modules(ModuleSet::from_iter([190u32])),
            )
            .await;
        let ctx = PageContext::load(
            &store,
            Identity::user("jdoe"),
            PageRequest::new(ModuleId::NONE, "/index.php"),
        )
        .await
        .expect("context");
        let content = home_content(&ctx).expect("content");
        assert!(content.contains("Welcome, jdoe."));
        assert!(content.contains("<a href=\"compliance/index.php\">Compliance</a>"));
        assert!(content.contains("<a href=\"hr/index.php\">Human Resources</a>"));

        let guest = PageContext::load(
            &store,
            Identity::Guest,
            PageRequest::new(ModuleId::NONE, "/index.php"),
        )
        .await
        .expect("context");
        assert!(home_content(&guest).expect("content").contains("Sign in"));
    }

    #[tokio::test]
    async fn unit_breadcrumb_follows_root_path() {
        let store = InMemoryStore::new();
        let module = ModuleRecord::new(132, "compliance", "Compliance");
        store.insert_module(module.clone()).await;
        let ctx = PageContext::load(
            &store,
            Identity::Guest,
            PageRequest::new(module.module_id, "/compliance/forms/index.php"),
        )
        .await
        .expect("context");
        let page = unit_page("Intranet", &ctx, &module);
        assert_eq!(
            page.breadcrumbs()[0].href.as_deref(),
            Some("../../index.php")
        );
        assert_eq!(page.title(), "Compliance");
    }
}
