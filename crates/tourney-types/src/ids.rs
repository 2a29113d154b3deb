use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            /// The raw identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id! {
    /// Identifier of an authenticated subject (user account).
    SubjectId
}

string_id! {
    /// Identifier of a registered team.
    TeamId
}

string_id! {
    /// Identifier of a tournament.
    TournamentId
}

string_id! {
    /// Identifier of a match within a bracket.
    MatchId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_string() {
        let id = TeamId::from("team-42");
        assert_eq!(id.to_string(), "team-42");
        assert_eq!(id.as_str(), "team-42");
    }

    #[test]
    fn ids_of_different_kinds_are_distinct_types() {
        // Compile-time property; this just exercises the conversions.
        let subject = SubjectId::from("u1".to_string());
        let team = TeamId::from("u1");
        assert_eq!(subject.as_str(), team.as_str());
    }

    #[test]
    fn serde_roundtrip() {
        let id = MatchId::from("m-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"m-7\"");
        let parsed: MatchId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
