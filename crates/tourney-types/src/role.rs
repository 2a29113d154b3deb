use std::fmt;

use serde::{Deserialize, Serialize};

/// Privilege tier attached to a session.
///
/// Roles are ordered by privilege: `Owner > Admin > Referee > Captain >
/// Player = Substitute > Guest`. A session carries exactly one role; a
/// missing or unrecognized role normalizes to [`Role::Guest`], the
/// lowest-privilege tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Tournament owner; holds every capability.
    Owner,
    /// Operations admin.
    Admin,
    /// Match referee.
    Referee,
    /// Team captain.
    Captain,
    /// Rostered player.
    Player,
    /// Rostered substitute.
    Substitute,
    /// Unauthenticated or unrecognized identity.
    #[default]
    Guest,
}

impl Role {
    /// Every role, in descending privilege order.
    pub const ALL: &'static [Role] = &[
        Role::Owner,
        Role::Admin,
        Role::Referee,
        Role::Captain,
        Role::Player,
        Role::Substitute,
        Role::Guest,
    ];

    /// Privilege rank from 0 (lowest) to 5 (highest).
    ///
    /// `Player` and `Substitute` share a tier.
    pub fn privilege(&self) -> u8 {
        match self {
            Self::Owner => 5,
            Self::Admin => 4,
            Self::Referee => 3,
            Self::Captain => 2,
            Self::Player | Self::Substitute => 1,
            Self::Guest => 0,
        }
    }

    /// Parse a wire-format role name, normalizing anything unrecognized
    /// to [`Role::Guest`].
    pub fn from_wire(s: &str) -> Self {
        match s {
            "OWNER" => Self::Owner,
            "ADMIN" => Self::Admin,
            "REFEREE" => Self::Referee,
            "CAPTAIN" => Self::Captain,
            "PLAYER" => Self::Player,
            "SUBSTITUTE" => Self::Substitute,
            _ => Self::Guest,
        }
    }

    /// Wire-format name (`SCREAMING_SNAKE_CASE`).
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
            Self::Referee => "REFEREE",
            Self::Captain => "CAPTAIN",
            Self::Player => "PLAYER",
            Self::Substitute => "SUBSTITUTE",
            Self::Guest => "GUEST",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_guest() {
        assert_eq!(Role::default(), Role::Guest);
    }

    #[test]
    fn unknown_wire_name_normalizes_to_guest() {
        assert_eq!(Role::from_wire("SUPERUSER"), Role::Guest);
        assert_eq!(Role::from_wire(""), Role::Guest);
        assert_eq!(Role::from_wire("owner"), Role::Guest); // case-sensitive
    }

    #[test]
    fn wire_roundtrip_for_all_roles() {
        for role in Role::ALL {
            assert_eq!(Role::from_wire(role.as_wire()), *role);
        }
    }

    #[test]
    fn privilege_ordering() {
        assert!(Role::Owner.privilege() > Role::Admin.privilege());
        assert!(Role::Admin.privilege() > Role::Referee.privilege());
        assert!(Role::Referee.privilege() > Role::Captain.privilege());
        assert!(Role::Captain.privilege() > Role::Player.privilege());
        assert_eq!(Role::Player.privilege(), Role::Substitute.privilege());
        assert!(Role::Player.privilege() > Role::Guest.privilege());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::Captain).unwrap();
        assert_eq!(json, "\"CAPTAIN\"");
        let parsed: Role = serde_json::from_str("\"REFEREE\"").unwrap();
        assert_eq!(parsed, Role::Referee);
    }
}
