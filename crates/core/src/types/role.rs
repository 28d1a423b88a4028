//! Account privilege role.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Privilege level held by an account.
///
/// Stored verbatim in the account document; accounts created on first
/// sign-in default to [`Role::Standard`] and are only ever mutated by an
/// explicit elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular diner account.
    #[default]
    Standard,
    /// Elevated account allowed to mutate menu items and accounts.
    Administrator,
}

impl Role {
    /// Whether this role grants administrative privilege.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// The wire/storage representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Administrator => "administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_representation() {
        assert_eq!(
            serde_json::to_string(&Role::Administrator).unwrap(),
            "\"administrator\""
        );
        assert_eq!(serde_json::to_string(&Role::Standard).unwrap(), "\"standard\"");

        let role: Role = serde_json::from_str("\"administrator\"").unwrap();
        assert!(role.is_admin());
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Role::default(), Role::Standard);
        assert!(!Role::default().is_admin());
    }
}
