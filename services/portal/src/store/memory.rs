//! In-memory directory store.
//!
//! # Purpose
//! Backs local development and tests. Records are held in `HashMap`s behind
//! `tokio::sync::RwLock` and can be seeded from a YAML file:
//!
//! ```yaml
//! modules:
//!   - module_id: 132
//!     short_name: compliance
//!     name: Compliance
//! users:
//!   - user_id: jdoe
//!     class: 2
//!     module: 132
//!     secondary_modules: "134 135"
//! ```
//!
//! # Durability
//! Not durable; state is lost on restart.
use super::{DirectoryStore, StoreError, StoreResult};
use crate::model::{ModuleRecord, UserRecord};
use anyhow::Context;
use async_trait::async_trait;
use intranet_access::ModuleId;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Debug, Default, Deserialize)]
struct DirectorySeed {
    #[serde(default)]
    modules: Vec<ModuleRecord>,
    #[serde(default)]
    users: Vec<SeedUser>,
}

/// User rows in the same shape as the `users` table.
#[derive(Debug, Deserialize)]
struct SeedUser {
    user_id: String,
    #[serde(default = "default_class")]
    class: i64,
    #[serde(default)]
    module: i64,
    #[serde(default)]
    secondary_modules: String,
    #[serde(default)]
    admin_modules: String,
}

fn default_class() -> i64 {
    2
}

// x500 lookups ignore case.
fn user_key(user_id: &str) -> String {
    user_id.to_ascii_lowercase()
}

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
    modules: RwLock<HashMap<ModuleId, ModuleRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a YAML seed document.
    ///
    /// # Errors
    /// - Malformed YAML or invalid class/module values.
    pub fn from_seed_yaml(contents: &str) -> StoreResult<Self> {
        let seed: DirectorySeed =
            serde_yaml::from_str(contents).context("parse directory seed yaml")?;
        let mut users = HashMap::with_capacity(seed.users.len());
        for row in seed.users {
            let user = UserRecord::from_stored(
                row.user_id,
                row.class,
                row.module,
                &row.secondary_modules,
                &row.admin_modules,
            )?;
            users.insert(user_key(&user.user_id), user);
        }
        let mut modules = HashMap::with_capacity(seed.modules.len());
        for module in seed.modules {
            if module.module_id.is_none() {
                return Err(StoreError::InvalidRecord(format!(
                    "module {} uses reserved id 0",
                    module.short_name
                )));
            }
            modules.insert(module.module_id, module);
        }
        tracing::info!(
            users = users.len(),
            modules = modules.len(),
            "seeded in-memory directory"
        );
        Ok(Self {
            users: RwLock::new(users),
            modules: RwLock::new(modules),
        })
    }

    pub fn from_seed_file(path: &Path) -> StoreResult<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read directory seed: {}", path.display()))?;
        Self::from_seed_yaml(&contents)
    }

    pub async fn insert_user(&self, user: UserRecord) {
        self.users.write().await.insert(user_key(&user.user_id), user);
    }

    pub async fn insert_module(&self, module: ModuleRecord) {
        self.modules.write().await.insert(module.module_id, module);
    }
}

#[async_trait]
impl DirectoryStore for InMemoryStore {
    async fn find_user(&self, user_id: &str) -> StoreResult<Option<UserRecord>> {
        Ok(self.users.read().await.get(&user_key(user_id)).cloned())
    }

    async fn find_module(&self, module_id: ModuleId) -> StoreResult<Option<ModuleRecord>> {
        Ok(self.modules.read().await.get(&module_id).cloned())
    }

    async fn find_module_by_short_name(
        &self,
        short_name: &str,
    ) -> StoreResult<Option<ModuleRecord>> {
        Ok(self
            .modules
            .read()
            .await
            .values()
            .find(|module| module.short_name == short_name)
            .cloned())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
