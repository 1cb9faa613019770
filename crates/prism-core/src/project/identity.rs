//! Identity derivation for design tokens
//!
//! Turns a human-readable token name ("Large Heading") into the identifiers
//! used by generated code ("largeHeading", "large_heading").

use heck::{ToLowerCamelCase, ToSnakeCase};
use std::fmt;

/// Derived identifiers for a named design token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Human-readable name the identity was derived from
    pub name: String,
    /// lowerCamelCase form
    pub camelcase: String,
    /// snake_case form
    pub snakecase: String,
}

impl Identity {
    /// Derive both identifier forms from a raw name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            camelcase: name.to_lower_camel_case(),
            snakecase: name.to_snake_case(),
            name,
        }
    }

    /// Check whether `word` equals either derived form verbatim
    pub fn matches(&self, word: &str) -> bool {
        self.camelcase == word || self.snakecase == word
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.camelcase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_both_forms() {
        let identity = Identity::new("Large Heading");
        assert_eq!(identity.camelcase, "largeHeading");
        assert_eq!(identity.snakecase, "large_heading");
    }

    #[test]
    fn test_single_word() {
        let identity = Identity::new("Body");
        assert_eq!(identity.camelcase, "body");
        assert_eq!(identity.snakecase, "body");
    }

    #[test]
    fn test_separators_and_digits() {
        let identity = Identity::new("gray-100 dark");
        assert_eq!(identity.camelcase, "gray100Dark");
        assert_eq!(identity.snakecase, "gray_100_dark");
    }

    #[test]
    fn test_case_changes_are_word_boundaries() {
        let identity = Identity::new("BlueSky");
        assert_eq!(identity.camelcase, "blueSky");
        assert_eq!(identity.snakecase, "blue_sky");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(Identity::new("Clear Reddish"), Identity::new("Clear Reddish"));
    }

    #[test]
    fn test_different_names_may_collide() {
        let spaced = Identity::new("Blue Sky");
        let snaked = Identity::new("blue_sky");
        assert_eq!(spaced.camelcase, snaked.camelcase);
        assert_eq!(spaced.snakecase, snaked.snakecase);
    }

    #[test]
    fn test_matches_either_form() {
        let identity = Identity::new("Clear Reddish");
        assert!(identity.matches("clearReddish"));
        assert!(identity.matches("clear_reddish"));
        assert!(!identity.matches("ClearReddish"));
    }
}
