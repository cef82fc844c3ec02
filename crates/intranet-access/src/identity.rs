//! Request identity: a signed-in x500 or the anonymous guest.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier reported for requests without a signed-in user.
pub const GUEST_IDENTIFIER: &str = "guest";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Identity {
    #[default]
    Guest,
    User(String),
}

impl Identity {
    /// Build a user identity. Blank input and the literal `guest` resolve to
    /// [`Identity::Guest`].
    pub fn user(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == GUEST_IDENTIFIER {
            return Identity::Guest;
        }
        if trimmed.len() == value.len() {
            Identity::User(value)
        } else {
            Identity::User(trimmed.to_string())
        }
    }

    /// Resolve an optional remote-user value.
    pub fn from_remote_user(value: Option<&str>) -> Self {
        value.map(Identity::user).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Identity::Guest => GUEST_IDENTIFIER,
            Identity::User(id) => id,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Identity::Guest)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Identity::user(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_guest_resolve_to_guest() {
        assert!(Identity::user("").is_guest());
        assert!(Identity::user("   ").is_guest());
        assert!(Identity::user("guest").is_guest());
        assert!(Identity::from_remote_user(None).is_guest());
    }

    #[test]
    fn user_is_trimmed() {
        assert_eq!(Identity::user("  jdoe "), Identity::User("jdoe".to_string()));
        assert_eq!(Identity::from_remote_user(Some("smit0001")).as_str(), "smit0001");
    }

    #[test]
    fn guest_displays_as_guest() {
        assert_eq!(Identity::Guest.to_string(), "guest");
        let json = serde_json::to_string(&Identity::Guest).expect("serialize");
        assert_eq!(json, "\"guest\"");
    }
}
