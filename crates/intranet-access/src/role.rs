//! Role classes (privilege tiers).
//!
//! # Key invariants
//! - Discriminants are the stored integers; ordering follows them, so
//!   `SiteAdmin < Administrator < ... < Unregistered`.
use crate::{AccessError, AccessResult};
use serde::{Deserialize, Serialize};

/// Privilege tier of an actor. Lower is more privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
#[repr(u8)]
pub enum RoleClass {
    SiteAdmin = 0,
    Administrator = 1,
    User = 2,
    Limited = 3,
    Unregistered = 4,
}

impl RoleClass {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoleClass::SiteAdmin => "site_admin",
            RoleClass::Administrator => "administrator",
            RoleClass::User => "user",
            RoleClass::Limited => "limited",
            RoleClass::Unregistered => "unregistered",
        }
    }

    pub fn is_site_admin(self) -> bool {
        self == RoleClass::SiteAdmin
    }

    /// Editors may change page content: site administrators and administrators.
    pub fn is_editor(self) -> bool {
        self < RoleClass::User
    }

    /// Parse a stored class number.
    ///
    /// # Errors
    /// - [`AccessError::InvalidRoleClass`] for values outside `0..=4`.
    pub fn from_stored(value: i64) -> AccessResult<Self> {
        match value {
            0 => Ok(RoleClass::SiteAdmin),
            1 => Ok(RoleClass::Administrator),
            2 => Ok(RoleClass::User),
            3 => Ok(RoleClass::Limited),
            4 => Ok(RoleClass::Unregistered),
            other => Err(AccessError::InvalidRoleClass(other)),
        }
    }
}

impl TryFrom<i64> for RoleClass {
    type Error = AccessError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        RoleClass::from_stored(value)
    }
}

impl From<RoleClass> for u8 {
    fn from(value: RoleClass) -> Self {
        value.as_u8()
    }
}

impl std::fmt::Display for RoleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_u8(), self.as_str())
    }
}
