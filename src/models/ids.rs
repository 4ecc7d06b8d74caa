//! Typed record identifiers
//!
//! Categories and expenses are keyed by UUIDs wrapped in distinct newtypes so
//! one can never be passed where the other is expected. Users see and type a
//! short prefixed form (`cat-1a2b3c4d`, `exp-9f8e7d6c`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the hex prefix shown to users
const SHORT_LEN: usize = 8;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident => $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Whether `input` is the full UUID, the short form, or at least
            /// eight leading hex digits of this ID
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim().to_ascii_lowercase();
                match Uuid::parse_str(&input) {
                    Ok(uuid) => uuid == self.0,
                    Err(_) => {
                        let hex = input.strip_prefix($prefix).unwrap_or(&input);
                        hex.len() >= SHORT_LEN && self.0.simple().to_string().starts_with(hex)
                    }
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let hex = self.0.simple().to_string();
                write!(f, "{}{}", $prefix, &hex[..SHORT_LEN])
            }
        }

        /// Parses a full UUID, with or without the display prefix
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Uuid::parse_str(s.strip_prefix($prefix).unwrap_or(s)).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifies a [`Category`](super::Category)
    CategoryId => "cat-"
);
define_id!(
    /// Identifies an [`Expense`](super::Expense)
    ExpenseId => "exp-"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_prefixed_short_form() {
        let shown = CategoryId::new().to_string();
        assert!(shown.starts_with(CategoryId::PREFIX));
        assert_eq!(shown.len(), CategoryId::PREFIX.len() + SHORT_LEN);
        assert!(ExpenseId::new().to_string().starts_with("exp-"));
    }

    #[test]
    fn test_matches_accepts_typed_forms() {
        let id = ExpenseId::new();
        let shown = id.to_string();

        assert!(id.matches(&shown));
        assert!(id.matches(&shown.to_uppercase()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(id.matches(&shown[4..]));
        assert!(!id.matches("exp-"));
        assert!(!id.matches(&shown[..8]));
        assert!(!id.matches(&ExpenseId::new().to_string()));
    }

    #[test]
    fn test_from_str_requires_full_uuid() {
        let raw = "550e8400-e29b-41d4-a716-446655440000";
        let id: CategoryId = raw.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), raw);
        assert_eq!(format!("cat-{raw}").parse::<CategoryId>().unwrap(), id);
        assert!("cat-550e8400".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        assert_eq!(serde_json::from_str::<ExpenseId>(&json).unwrap(), id);
    }
}
