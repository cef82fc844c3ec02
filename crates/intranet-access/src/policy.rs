//! Page restriction policies.
//!
//! # Purpose
//! A page declares who may view it: an optional owning module, a maximum
//! role class, and optionally a list of specific users.
//!
//! # Key invariants
//! - Defaults are module 0 (unrestricted), class 2 (registered users), no
//!   user restriction, secondary module members allowed.
//! - A user pattern admits any identifier it contains, ignoring ASCII case.
//!   Separators between listed users are not interpreted.
use crate::{Identity, ModuleId, RoleClass};
use serde::{Deserialize, Serialize};

/// Free-form list of permitted user identifiers, e.g. `"smit0001|jdoe"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserPattern(String);

impl UserPattern {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the identity's identifier occurs anywhere in the pattern,
    /// ignoring ASCII case. Guests are matched by their `guest` identifier.
    pub fn matches(&self, identity: &Identity) -> bool {
        self.0
            .to_ascii_lowercase()
            .contains(&identity.as_str().to_ascii_lowercase())
    }
}

/// Restriction declared by a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictionPolicy {
    pub restrict_module: ModuleId,
    pub restrict_class: RoleClass,
    pub restrict_user: Option<UserPattern>,
    pub allow_secondary_module: bool,
}

impl Default for RestrictionPolicy {
    fn default() -> Self {
        Self {
            restrict_module: ModuleId::NONE,
            restrict_class: RoleClass::User,
            restrict_user: None,
            allow_secondary_module: true,
        }
    }
}

impl RestrictionPolicy {
    /// A policy every actor passes, including guests.
    pub fn public() -> Self {
        Self {
            restrict_class: RoleClass::Unregistered,
            ..Self::default()
        }
    }

    pub fn restrict_to_module(mut self, module: ModuleId) -> Self {
        self.restrict_module = module;
        self
    }

    pub fn restrict_to_class(mut self, class: RoleClass) -> Self {
        self.restrict_class = class;
        self
    }

    pub fn restrict_to_users(mut self, pattern: impl Into<String>) -> Self {
        self.restrict_user = Some(UserPattern::new(pattern));
        self
    }

    pub fn allow_secondary_module(mut self, allow: bool) -> Self {
        self.allow_secondary_module = allow;
        self
    }

    /// The user pattern, when a non-empty one is set.
    pub fn user_pattern(&self) -> Option<&UserPattern> {
        self.restrict_user
            .as_ref()
            .filter(|pattern| !pattern.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_page_defaults() {
        let policy = RestrictionPolicy::default();
        assert!(policy.restrict_module.is_none());
        assert_eq!(policy.restrict_class, RoleClass::User);
        assert!(policy.user_pattern().is_none());
        assert!(policy.allow_secondary_module);
    }

    #[test]
    fn pattern_matches_contained_identifier_ignoring_case() {
        let pattern = UserPattern::new("alice, BOB;carol  dave");
        assert!(pattern.matches(&Identity::user("Alice")));
        assert!(pattern.matches(&Identity::user("bob")));
        assert!(pattern.matches(&Identity::user("DAVE")));
        assert!(!pattern.matches(&Identity::user("erin")));
    }

    #[test]
    fn pattern_ignores_separators() {
        let pattern = UserPattern::new("smit0001|jdoe/kim42:lee");
        assert!(pattern.matches(&Identity::user("jdoe")));
        assert!(pattern.matches(&Identity::user("KIM42")));
        assert!(pattern.matches(&Identity::user("lee")));
        assert!(!pattern.matches(&Identity::user("smit0002")));
    }

    #[test]
    fn pattern_matches_substrings() {
        let pattern = UserPattern::new("alice");
        assert!(pattern.matches(&Identity::user("ALI")));
        assert!(pattern.matches(&Identity::user("lic")));
        assert!(!pattern.matches(&Identity::user("alicia")));
    }

    #[test]
    fn guest_matches_only_when_listed() {
        assert!(!UserPattern::new("alice bob").matches(&Identity::Guest));
        assert!(UserPattern::new("alice GUEST").matches(&Identity::Guest));
    }

    #[test]
    fn only_empty_pattern_counts_as_unset() {
        let policy = RestrictionPolicy::default().restrict_to_users("");
        assert!(policy.user_pattern().is_none());
        let policy = RestrictionPolicy::default().restrict_to_users("  , ");
        assert!(policy.user_pattern().is_some());
    }

    #[test]
    fn deserializes_with_defaults() {
        let policy: RestrictionPolicy =
            serde_json::from_str(r#"{"restrict_module": 132}"#).expect("policy");
        assert_eq!(policy.restrict_module, ModuleId::new(132));
        assert_eq!(policy.restrict_class, RoleClass::User);
        assert!(policy.allow_secondary_module);
    }
}
