//! Registered user records.
use intranet_access::{AccessResult, Actor, Identity, ModuleId, ModuleSet, RoleClass};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub user_id: String,
    pub role_class: RoleClass,
    pub module: ModuleId,
    pub secondary_modules: ModuleSet,
    pub admin_modules: ModuleSet,
}

impl UserRecord {
    pub fn new(user_id: impl Into<String>, role_class: RoleClass, module: u32) -> Self {
        Self {
            user_id: user_id.into(),
            role_class,
            module: ModuleId::new(module),
            secondary_modules: ModuleSet::new(),
            admin_modules: ModuleSet::new(),
        }
    }

    /// Build a record from stored column values.
    ///
    /// # Errors
    /// - Invalid class numbers, negative module ids, or malformed module lists.
    pub fn from_stored(
        user_id: String,
        class: i64,
        module: i64,
        secondary_modules: &str,
        admin_modules: &str,
    ) -> AccessResult<Self> {
        Ok(Self {
            user_id,
            role_class: RoleClass::from_stored(class)?,
            module: ModuleId::from_stored(module)?,
            secondary_modules: ModuleSet::parse(secondary_modules)?,
            admin_modules: ModuleSet::parse(admin_modules)?,
        })
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

    pub fn to_actor(&self) -> Actor {
        Actor::new(Identity::user(self.user_id.clone()), self.role_class)
            .with_primary_module(self.module)
            .with_secondary_modules(self.secondary_modules.clone())
            .with_admin_modules(self.admin_modules.clone())
    }
}
