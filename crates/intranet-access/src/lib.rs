//! Access primitives for the athletics intranet.
//!
//! # Purpose
//! Models who is asking (an [`Actor`] with a [`RoleClass`] and module
//! memberships), what a page demands (a [`RestrictionPolicy`]), and the
//! decision that joins them.
//!
//! # How it fits
//! The portal service loads user and module rows from storage, builds an
//! [`Actor`] once per request, and asks [`enforce`] whether the page may be
//! served. This crate performs no I/O.
//!
//! # Key invariants
//! - Role class 0 (site administrator) bypasses module and user restrictions.
//! - Lower role class numbers are more privileged; comparisons are numeric.
//! - Module id 0 means "no module": an unrestricted policy, or a root page.
//!
//! # Examples
//! ```rust
//! use intranet_access::{Actor, Identity, ModuleId, ModuleSet, RestrictionPolicy, RoleClass, is_allowed};
//!
//! let actor = Actor::new(Identity::user("jdoe"), RoleClass::User)
//!     .with_primary_module(ModuleId::new(5))
//!     .with_secondary_modules(ModuleSet::parse("7").unwrap());
//! let policy = RestrictionPolicy::default().restrict_to_module(ModuleId::new(7));
//! assert!(is_allowed(&actor, &policy));
//! ```
//!
//! # Common pitfalls
//! - Stored module lists are whitespace separated; parse them with
//!   [`ModuleSet::parse`] rather than matching substrings.

mod actor;
mod decision;
mod errors;
mod identity;
mod module;
mod policy;
mod role;

pub use actor::Actor;
pub use decision::{Decision, DenyReason, enforce, evaluate, is_allowed};
pub use errors::{AccessError, AccessResult};
pub use identity::{GUEST_IDENTIFIER, Identity};
pub use module::{ModuleId, ModuleSet};
pub use policy::{RestrictionPolicy, UserPattern};
pub use role::RoleClass;
