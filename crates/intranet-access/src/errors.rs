use crate::{DenyReason, Identity};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("invalid role class: {0}")]
    InvalidRoleClass(i64),
    #[error("invalid module list entry: {0}")]
    InvalidModuleList(String),
    #[error("access denied for {identity}: {reason} restriction")]
    AccessDenied {
        identity: Identity,
        reason: DenyReason,
    },
}

pub type AccessResult<T> = Result<T, AccessError>;
