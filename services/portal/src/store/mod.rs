//! Directory lookups: users by x500 and modules by id or short name.
//!
//! # Purpose
//! The portal only reads the directory. Lookups return `Ok(None)` for a
//! miss; the caller decides what a miss means (unregistered users fall back
//! to guest-like defaults, unknown unit pages are 404s).
use crate::model::{ModuleRecord, UserRecord};
use async_trait::async_trait;
use intranet_access::{AccessError, ModuleId};
use thiserror::Error;

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid stored record: {0}")]
    InvalidRecord(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unexpected(err.into())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Unexpected(err.into())
    }
}

impl From<AccessError> for StoreError {
    fn from(err: AccessError) -> Self {
        StoreError::InvalidRecord(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn find_user(&self, user_id: &str) -> StoreResult<Option<UserRecord>>;
    async fn find_module(&self, module_id: ModuleId) -> StoreResult<Option<ModuleRecord>>;
    async fn find_module_by_short_name(
        &self,
        short_name: &str,
    ) -> StoreResult<Option<ModuleRecord>>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
