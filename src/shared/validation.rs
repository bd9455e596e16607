//! Identifier Validation
//!
//! Chat room ids and sender ids share one rule: ASCII letters and digits
//! only, at least two characters long. Anything else never reaches storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Check whether `value` is a valid chat room or sender identifier
///
/// Equivalent to the pattern `^[0-9a-zA-Z][0-9a-zA-Z]+$`.
pub fn is_alphanumeric_id(value: &str) -> bool {
    value.len() >= 2 && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse a raw value, returning `None` if it is not alphanumeric
            pub fn parse(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                is_alphanumeric_id(&value).then_some(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value.clone())
                    .ok_or_else(|| format!("`{}` is not an alphanumeric identifier", value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

identifier! {
    /// Identifier of a chat room
    ChatId
}

identifier! {
    /// Identifier of a message author within a chat room
    SenderId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_alphanumeric() {
        for id in ["ab", "room1", "Alice", "42", "a1B2c3", "ROOM"] {
            assert!(is_alphanumeric_id(id), "{} should be accepted", id);
        }
    }

    #[test]
    fn test_rejects_short_and_punctuated() {
        for id in ["", "a", "7", "room 1", "room-1", "room_1", "alice!", " ab", "ab\n"] {
            assert!(!is_alphanumeric_id(id), "{:?} should be rejected", id);
        }
    }

    #[test]
    fn test_rejects_non_ascii_letters() {
        assert!(!is_alphanumeric_id("café"));
        assert!(!is_alphanumeric_id("łódź"));
        assert!(!is_alphanumeric_id("١٢"));
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!(ChatId::parse("room1").unwrap().as_str(), "room1");
        assert!(SenderId::parse("a").is_none());
        assert_eq!(SenderId::parse("alice").unwrap().to_string(), "alice");
    }

    #[test]
    fn test_identifier_deserialization_checks_rule() {
        let id: ChatId = serde_json::from_str("\"room1\"").unwrap();
        assert_eq!(id.as_str(), "room1");
        assert!(serde_json::from_str::<ChatId>("\"room 1\"").is_err());
    }
}
