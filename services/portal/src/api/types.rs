//! HTTP API request/response types.
//!
//! # Purpose
//! Payload shapes for the portal's JSON endpoints and OpenAPI schema
//! generation. Conversions into the access model validate input and report
//! problems as 400s.
use crate::api::error::{ApiError, api_validation_error};
use crate::chrome::{Breadcrumb, ChromeVersion, Page};
use crate::context::PageContext;
use crate::model::ModuleRecord;
use chrono::DateTime;
use intranet_access::{ModuleId, RestrictionPolicy, RoleClass};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SystemInfo {
    pub site_name: String,
    pub chrome_version: String,
    pub storage_backend: String,
    pub durable_storage: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ModuleSummary {
    pub module_id: u32,
    pub short_name: String,
    pub name: String,
}

impl From<&ModuleRecord> for ModuleSummary {
    fn from(record: &ModuleRecord) -> Self {
        Self {
            module_id: record.module_id.get(),
            short_name: record.short_name.clone(),
            name: record.name.clone(),
        }
    }
}

/// The resolved session of the current request.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SessionResponse {
    pub identity: String,
    pub signed_in: bool,
    /// Whether the signed-in user has a directory record.
    pub registered: bool,
    pub role_class: u8,
    pub role: String,
    pub editor: bool,
    pub primary_module: Option<ModuleSummary>,
    pub secondary_modules: Vec<u32>,
    pub admin_modules: Vec<ModuleSummary>,
}

impl From<&PageContext> for SessionResponse {
    fn from(ctx: &PageContext) -> Self {
        let actor = ctx.actor();
        Self {
            identity: actor.identity.to_string(),
            signed_in: ctx.is_signed_in(),
            registered: ctx.user().is_some(),
            role_class: actor.role_class.as_u8(),
            role: actor.role_class.as_str().to_string(),
            editor: ctx.is_editor(),
            primary_module: ctx.primary_module_record().map(ModuleSummary::from),
            secondary_modules: actor.secondary_modules.iter().map(ModuleId::get).collect(),
            admin_modules: ctx
                .admin_module_records()
                .iter()
                .map(ModuleSummary::from)
                .collect(),
        }
    }
}

/// A page restriction. Omitted fields take the page defaults: no module,
/// class 2, no user list, secondary modules allowed.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default)]
pub struct AccessCheckRequest {
    pub restrict_module: Option<u32>,
    pub restrict_class: Option<i64>,
    pub restrict_user: Option<String>,
    pub allow_secondary_module: Option<bool>,
}

impl AccessCheckRequest {
    pub fn to_policy(&self) -> Result<RestrictionPolicy, ApiError> {
        let mut policy = RestrictionPolicy::default();
        if let Some(module) = self.restrict_module {
            policy = policy.restrict_to_module(ModuleId::new(module));
        }
        if let Some(class) = self.restrict_class {
            let class = RoleClass::from_stored(class)
                .map_err(|err| api_validation_error(&err.to_string()))?;
            policy = policy.restrict_to_class(class);
        }
        if let Some(users) = self.restrict_user.as_deref().filter(|u| !u.trim().is_empty()) {
            policy = policy.restrict_to_users(users);
        }
        if let Some(allow) = self.allow_secondary_module {
            policy = policy.allow_secondary_module(allow);
        }
        Ok(policy)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct AccessCheckResponse {
    pub allowed: bool,
    /// `module`, `class`, or `user` when denied.
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct BreadcrumbEntry {
    pub label: String,
    pub href: Option<String>,
}

/// A page to wrap in the site chrome.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RenderPageRequest {
    #[serde(default)]
    pub page_module: u32,
    /// Site-relative script path, used for the root path depth.
    #[serde(default = "default_page_path")]
    pub path: String,
    pub title: Option<String>,
    pub stylesheet: Option<String>,
    #[serde(default)]
    pub breadcrumbs: Vec<BreadcrumbEntry>,
    #[serde(default)]
    pub content: String,
    pub print_sidebar: Option<bool>,
    pub print_top_nav: Option<bool>,
    pub suppress_default_menu: Option<bool>,
    /// Unix timestamp shown as "Last modified on" by the classic chrome.
    pub modified_at: Option<i64>,
    pub policy: Option<AccessCheckRequest>,
    /// `classic` or `bootstrap`; the configured version when omitted.
    pub chrome_version: Option<String>,
}

fn default_page_path() -> String {
    "/index.php".to_string()
}

impl RenderPageRequest {
    pub fn to_page(&self, default_title: &str) -> Result<Page, ApiError> {
        let mut page = Page::new(default_title)
            .with_content(self.content.clone())
            .with_sidebar(self.print_sidebar.unwrap_or(true))
            .with_top_nav(self.print_top_nav.unwrap_or(true))
            .suppress_default_menu(self.suppress_default_menu.unwrap_or(false))
            .with_breadcrumbs(
                self.breadcrumbs
                    .iter()
                    .map(|crumb| Breadcrumb::new(crumb.label.clone(), crumb.href.clone()))
                    .collect(),
            );
        if let Some(title) = &self.title {
            page.set_title(title);
        }
        if let Some(stylesheet) = &self.stylesheet {
            page.add_stylesheet(stylesheet);
        }
        if let Some(ts) = self.modified_at {
            let modified = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| api_validation_error("modified_at is out of range"))?;
            page = page.modified_at(modified);
        }
        Ok(page)
    }

    pub fn version(&self, configured: ChromeVersion) -> Result<ChromeVersion, ApiError> {
        match self.chrome_version.as_deref() {
            Some(value) => value
                .parse()
                .map_err(|err: crate::chrome::UnknownChromeVersion| {
                    api_validation_error(&err.to_string())
                }),
            None => Ok(configured),
        }
    }

    pub fn validate_path(&self) -> Result<(), ApiError> {
        if !self.path.starts_with('/') {
            return Err(api_validation_error("path must start with '/'"));
        }
        Ok(())
    }
}
