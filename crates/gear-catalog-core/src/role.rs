//! Roles and UI Capabilities
//!
//! The role hierarchy and which roles each one may hand out. This table
//! only decides what the client renders; the backend enforces the same
//! hierarchy on every request.

use serde::{Deserialize, Serialize};

/// Access tier, lowest privilege first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Moderateur,
    Responsable,
    Createur,
}

/// Which roles a session of a given role may assign to new accounts
const CREATABLE_ROLES: &[(Role, &[Role])] = &[
    (Role::Moderateur, &[]),
    (Role::Responsable, &[Role::Moderateur]),
    (Role::Createur, &[Role::Moderateur, Role::Responsable]),
];

impl Role {
    pub const LOWEST: Role = Role::Moderateur;

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Moderateur => "moderateur",
            Role::Responsable => "responsable",
            Role::Createur => "createur",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "moderateur" => Some(Role::Moderateur),
            "responsable" => Some(Role::Responsable),
            "createur" => Some(Role::Createur),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Moderateur => "Modérateur",
            Role::Responsable => "Responsable",
            Role::Createur => "Créateur",
        }
    }

    pub fn is_lowest(&self) -> bool {
        *self == Self::LOWEST
    }

    pub fn creatable_roles(&self) -> &'static [Role] {
        CREATABLE_ROLES
            .iter()
            .find(|(role, _)| role == self)
            .map(|(_, roles)| *roles)
            .unwrap_or(&[])
    }
}

/// What the current session may see in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_delete_gears: bool,
    pub can_review_suggestions: bool,
    pub can_create_users: bool,
    pub assignable_roles: &'static [Role],
}

impl Capabilities {
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(role) if !role.is_lowest() => Self {
                can_delete_gears: true,
                can_review_suggestions: true,
                can_create_users: !role.creatable_roles().is_empty(),
                assignable_roles: role.creatable_roles(),
            },
            _ => Self::default(),
        }
    }

    pub fn can_assign(&self, role: Role) -> bool {
        self.assignable_roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        assert!(Role::Moderateur.creatable_roles().is_empty());
        assert_eq!(Role::Responsable.creatable_roles(), &[Role::Moderateur]);
        assert_eq!(
            Role::Createur.creatable_roles(),
            &[Role::Moderateur, Role::Responsable]
        );
    }

    #[test]
    fn test_lowest_role_sees_nothing() {
        let caps = Capabilities::for_role(Some(Role::Moderateur));
        assert!(!caps.can_delete_gears);
        assert!(!caps.can_review_suggestions);
        assert!(!caps.can_create_users);
        assert_eq!(caps, Capabilities::for_role(None));
    }

    #[test]
    fn test_elevated_roles() {
        let responsable = Capabilities::for_role(Some(Role::Responsable));
        assert!(responsable.can_review_suggestions);
        assert!(responsable.can_assign(Role::Moderateur));
        assert!(!responsable.can_assign(Role::Responsable));

        let createur = Capabilities::for_role(Some(Role::Createur));
        assert!(createur.can_delete_gears);
        assert!(createur.can_assign(Role::Responsable));
        assert!(!createur.can_assign(Role::Createur));
    }

    #[test]
    fn test_role_ordering_and_parse() {
        assert!(Role::Moderateur < Role::Responsable);
        assert!(Role::Responsable < Role::Createur);
        assert_eq!(Role::parse("createur"), Some(Role::Createur));
        assert_eq!(Role::parse("admin"), None);
    }
}
