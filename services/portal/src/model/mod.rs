//! Directory data model.
//!
//! # Purpose
//! Typed user and module records loaded by the store layer. Both backends
//! convert their stored shapes through the `from_stored` constructors so
//! validation lives in one place.
mod module;
mod user;

pub use module::ModuleRecord;
pub use user::UserRecord;
