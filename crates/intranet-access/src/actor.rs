//! The actor: who is asking to see a page.
use crate::{Identity, ModuleId, ModuleSet, RoleClass};
use serde::Serialize;

/// Request-scoped view of the current user, built once per request.
///
/// # Invariants
/// - Unregistered or anonymous users carry [`RoleClass::Unregistered`] and no
///   module memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub identity: Identity,
    pub role_class: RoleClass,
    pub primary_module: ModuleId,
    pub secondary_modules: ModuleSet,
    pub admin_modules: ModuleSet,
}

impl Actor {
    pub fn new(identity: Identity, role_class: RoleClass) -> Self {
        Self {
            identity,
            role_class,
            primary_module: ModuleId::NONE,
            secondary_modules: ModuleSet::new(),
            admin_modules: ModuleSet::new(),
        }
    }

    /// The anonymous visitor.
    pub fn guest() -> Self {
        Self::new(Identity::Guest, RoleClass::Unregistered)
    }

    pub fn with_primary_module(mut self, module: ModuleId) -> Self {
        self.primary_module = module;
        self
    }

    pub fn with_secondary_modules(mut self, modules: ModuleSet) -> Self {
        self.secondary_modules = modules;
        self
    }

    pub fn with_admin_modules(mut self, modules: ModuleSet) -> Self {
        self.admin_modules = modules;
        self
    }

    pub fn is_editor(&self) -> bool {
        self.role_class.is_editor()
    }
}
