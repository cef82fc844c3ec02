//! The page access decision.
//!
//! Checks run in a fixed order and the first failing check names the reason:
//! module membership, then role class, then the user list. Site
//! administrators skip the module and user checks; the class check cannot
//! reject them because class 0 is the minimum.
use crate::{AccessError, AccessResult, Actor, RestrictionPolicy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// Page belongs to a module the actor has no membership in.
    Module,
    /// Actor's role class is above the page maximum.
    Class,
    /// Page is limited to named users and the actor is not one of them.
    User,
}

impl DenyReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenyReason::Module => "module",
            DenyReason::Class => "class",
            DenyReason::User => "user",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn reason(self) -> Option<DenyReason> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(reason),
        }
    }
}

pub fn evaluate(actor: &Actor, policy: &RestrictionPolicy) -> Decision {
    let site_admin = actor.role_class.is_site_admin();
    let module = policy.restrict_module;

    if !site_admin
        && !module.is_none()
        && actor.primary_module != module
        && !actor.admin_modules.contains(module)
        && (!policy.allow_secondary_module || !actor.secondary_modules.contains(module))
    {
        Decision::Deny(DenyReason::Module)
    } else if actor.role_class > policy.restrict_class {
        Decision::Deny(DenyReason::Class)
    } else if !site_admin
        && policy
            .user_pattern()
            .is_some_and(|pattern| !pattern.matches(&actor.identity))
    {
        Decision::Deny(DenyReason::User)
    } else {
        Decision::Allow
    }
}

pub fn is_allowed(actor: &Actor, policy: &RestrictionPolicy) -> bool {
    evaluate(actor, policy).is_allowed()
}

/// Evaluate and convert a denial into [`AccessError::AccessDenied`].
///
/// Callers propagate the error with `?` so nothing after the check runs for a
/// denied request.
pub fn enforce(actor: &Actor, policy: &RestrictionPolicy) -> AccessResult<()> {
    match evaluate(actor, policy) {
        Decision::Allow => Ok(()),
        Decision::Deny(reason) => Err(AccessError::AccessDenied {
            identity: actor.identity.clone(),
            reason,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identity, ModuleId, ModuleSet, RoleClass};

    fn member(class: RoleClass) -> Actor {
        Actor::new(Identity::user("jdoe"), class)
            .with_primary_module(ModuleId::new(5))
            .with_secondary_modules(ModuleSet::from_iter([7u32]))
    }

    #[test]
    fn secondary_membership_allows_when_permitted() {
        let policy = RestrictionPolicy::default().restrict_to_module(ModuleId::new(7));
        assert!(is_allowed(&member(RoleClass::User), &policy));
    }

    #[test]
    fn secondary_membership_denied_when_disallowed() {
        let policy = RestrictionPolicy::default()
            .restrict_to_module(ModuleId::new(7))
            .allow_secondary_module(false);
        assert_eq!(
            evaluate(&member(RoleClass::User), &policy),
            Decision::Deny(DenyReason::Module)
        );
    }

    #[test]
    fn primary_module_allows() {
        let policy = RestrictionPolicy::default()
            .restrict_to_module(ModuleId::new(5))
            .allow_secondary_module(false);
        assert!(is_allowed(&member(RoleClass::User), &policy));
    }

    #[test]
    fn admin_module_allows_even_without_secondary() {
        let actor = member(RoleClass::Administrator)
            .with_admin_modules(ModuleSet::from_iter([132u32, 134]));
        let policy = RestrictionPolicy::default()
            .restrict_to_module(ModuleId::new(134))
            .allow_secondary_module(false);
        assert!(is_allowed(&actor, &policy));
    }

    #[test]
    fn class_above_maximum_is_denied() {
        let actor = Actor::new(Identity::user("jdoe"), RoleClass::Limited);
        let policy = RestrictionPolicy::default().restrict_to_class(RoleClass::User);
        assert_eq!(evaluate(&actor, &policy), Decision::Deny(DenyReason::Class));
    }

    #[test]
    fn module_check_runs_before_class_check() {
        let actor = Actor::new(Identity::user("jdoe"), RoleClass::Limited);
        let policy = RestrictionPolicy::default().restrict_to_module(ModuleId::new(9));
        assert_eq!(evaluate(&actor, &policy), Decision::Deny(DenyReason::Module));
    }

    #[test]
    fn user_list_excludes_others() {
        let actor = Actor::new(Identity::user("bob"), RoleClass::Administrator);
        let policy = RestrictionPolicy::default().restrict_to_users("alice");
        assert_eq!(evaluate(&actor, &policy), Decision::Deny(DenyReason::User));
    }

    #[test]
    fn user_list_matches_case_insensitively() {
        let actor = Actor::new(Identity::user("Alice"), RoleClass::User);
        let policy = RestrictionPolicy::default().restrict_to_users("alice");
        assert!(is_allowed(&actor, &policy));
    }

    #[test]
    fn user_list_admits_any_separator() {
        let actor = Actor::new(Identity::user("jdoe"), RoleClass::User);
        let policy = RestrictionPolicy::default().restrict_to_users("smit0001|jdoe");
        assert!(is_allowed(&actor, &policy));
    }

    #[test]
    fn user_list_admits_contained_identifier() {
        let actor = Actor::new(Identity::user("ALI"), RoleClass::User);
        let policy = RestrictionPolicy::default().restrict_to_users("alice");
        assert!(is_allowed(&actor, &policy));
    }

    #[test]
    fn site_admin_bypasses_everything() {
        let actor = Actor::new(Identity::user("root"), RoleClass::SiteAdmin);
        let policy = RestrictionPolicy::default()
            .restrict_to_module(ModuleId::new(77))
            .restrict_to_class(RoleClass::SiteAdmin)
            .restrict_to_users("someone-else")
            .allow_secondary_module(false);
        assert!(is_allowed(&actor, &policy));
    }

    #[test]
    fn guest_denied_by_default_policy() {
        assert_eq!(
            evaluate(&Actor::guest(), &RestrictionPolicy::default()),
            Decision::Deny(DenyReason::Class)
        );
        assert!(is_allowed(&Actor::guest(), &RestrictionPolicy::public()));
    }

    #[test]
    fn enforce_reports_identity_and_reason() {
        let actor = Actor::new(Identity::user("bob"), RoleClass::User);
        let policy = RestrictionPolicy::default().restrict_to_users("alice");
        let err = enforce(&actor, &policy).expect_err("denied");
        match err {
            AccessError::AccessDenied { identity, reason } => {
                assert_eq!(identity.as_str(), "bob");
                assert_eq!(reason, DenyReason::User);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(enforce(&actor, &RestrictionPolicy::default()).is_ok());
    }
}
