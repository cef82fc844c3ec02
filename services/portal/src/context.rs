//! Request-scoped page context.
//!
//! # Purpose
//! Everything a page needs to know about the current request, loaded once
//! from the directory: who is asking, their role class and modules, the
//! page's own module, and how deep the request path sits under the site
//! root.
//!
//! # Key invariants
//! - A context is immutable after [`PageContext::load`].
//! - Guests and signed-in users without a directory record are
//!   [`RoleClass::Unregistered`] with no module memberships; a missing
//!   record is not an error. A proxy value of `guest` is the anonymous
//!   guest and is never looked up.
//! - Access checks go through [`PageContext::authorize`], which is the only
//!   place decisions are logged and counted.
use crate::model::{ModuleRecord, UserRecord};
use crate::observability::{ACCESS_DECISIONS_TOTAL, DIRECTORY_MISSES_TOTAL};
use crate::store::{DirectoryStore, StoreResult};
use intranet_access::{
    AccessResult, Actor, Identity, ModuleId, RestrictionPolicy, RoleClass, enforce,
};

/// Request facts the page context is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Module the page belongs to; [`ModuleId::NONE`] for site-level pages.
    pub page_module: ModuleId,
    /// Site-relative script path, e.g. `/compliance/index.php`.
    pub path: String,
    pub host: Option<String>,
}

impl PageRequest {
    pub fn new(page_module: ModuleId, path: impl Into<String>) -> Self {
        Self {
            page_module,
            path: path.into(),
            host: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct PageContext {
    identity: Identity,
    user: Option<UserRecord>,
    page_module: ModuleId,
    page_module_record: Option<ModuleRecord>,
    primary_module_record: Option<ModuleRecord>,
    admin_module_records: Vec<ModuleRecord>,
    root_path: String,
    path: String,
    host: Option<String>,
}

impl PageContext {
    /// Load the directory rows for `identity` and the requested page.
    ///
    /// # Errors
    /// - Store failures and malformed stored rows. Lookup misses are not errors.
    pub async fn load(
        store: &dyn DirectoryStore,
        identity: Identity,
        request: PageRequest,
    ) -> StoreResult<Self> {
        let user = match &identity {
            Identity::Guest => None,
            Identity::User(user_id) => {
                let user = store.find_user(user_id).await?;
                if user.is_none() {
                    metrics::counter!(DIRECTORY_MISSES_TOTAL).increment(1);
                    tracing::debug!(user_id = %user_id, "no directory record for signed-in user");
                }
                user
            }
        };

        let mut primary_module_record = None;
        let mut admin_module_records = Vec::new();
        if let Some(user) = &user {
            if !user.module.is_none() {
                primary_module_record = store.find_module(user.module).await?;
            }
            for module_id in user.admin_modules.iter() {
                match store.find_module(module_id).await? {
                    Some(record) => admin_module_records.push(record),
                    None => {
                        tracing::debug!(
                            user_id = %user.user_id,
                            module_id = %module_id,
                            "skipping unknown admin module"
                        );
                    }
                }
            }
        }

        let page_module_record = if request.page_module.is_none() {
            None
        } else {
            store.find_module(request.page_module).await?
        };

        Ok(Self {
            identity,
            user,
            page_module: request.page_module,
            page_module_record,
            primary_module_record,
            admin_module_records,
            root_path: root_path_for(&request.path),
            path: request.path,
            host: request.host,
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        !self.identity.is_guest()
    }

    pub fn role_class(&self) -> RoleClass {
        self.user
            .as_ref()
            .map(|user| user.role_class)
            .unwrap_or(RoleClass::Unregistered)
    }

    pub fn is_editor(&self) -> bool {
        self.role_class().is_editor()
    }

    pub fn page_module(&self) -> ModuleId {
        self.page_module
    }

    pub fn page_module_record(&self) -> Option<&ModuleRecord> {
        self.page_module_record.as_ref()
    }

    pub fn primary_module_record(&self) -> Option<&ModuleRecord> {
        self.primary_module_record.as_ref()
    }

    pub fn admin_module_records(&self) -> &[ModuleRecord] {
        &self.admin_module_records
    }

    /// Relative prefix from the page's directory back to the site root.
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn actor(&self) -> Actor {
        match &self.user {
            Some(user) => user.to_actor(),
            None => Actor::new(self.identity.clone(), RoleClass::Unregistered),
        }
    }

    /// Check the page restriction for this request.
    ///
    /// # Errors
    /// - [`intranet_access::AccessError::AccessDenied`] when the actor may not view the page.
    pub fn authorize(&self, policy: &RestrictionPolicy) -> AccessResult<()> {
        let result = enforce(&self.actor(), policy);
        match &result {
            Ok(()) => {
                metrics::counter!(ACCESS_DECISIONS_TOTAL, "outcome" => "allow").increment(1);
                tracing::debug!(
                    identity = %self.identity,
                    page_module = %self.page_module,
                    "page access allowed"
                );
            }
            Err(err) => {
                metrics::counter!(ACCESS_DECISIONS_TOTAL, "outcome" => "deny").increment(1);
                tracing::info!(
                    identity = %self.identity,
                    page_module = %self.page_module,
                    path = %self.path,
                    error = %err,
                    "page access denied"
                );
            }
        }
        result
    }
}

/// One `../` per directory between the site root and the requested script.
pub fn root_path_for(path: &str) -> String {
    let depth = path.split('/').count().saturating_sub(2);
    "../".repeat(depth)
}
