//! Sort key types for comparing products

use super::traits::SortKey;
use chrono::{DateTime, Utc};

/// Case-folded, trimmed product name
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NameKey(String);

impl NameKey {
    /// Normalize a display name: lower-case first, then strip surrounding
    /// whitespace, including the ASCII separators U+001C to U+001F.
    pub fn new(name: &str) -> Self {
        NameKey(name.to_lowercase().trim_matches(is_padding).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SortKey for NameKey {}

fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Creation instant of a product
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct InstantKey(DateTime<Utc>);

impl InstantKey {
    pub fn new(value: DateTime<Utc>) -> Self {
        InstantKey(value)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl SortKey for InstantKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::SortDirection;
    use chrono::TimeZone;
    use std::cmp::Ordering;

    #[test]
    fn test_name_key_folds_case_and_whitespace() {
        assert_eq!(NameKey::new("  Banana "), NameKey::new("banana"));
        assert_eq!(NameKey::new("\tAPPLE\n").as_str(), "apple");
        assert!(NameKey::new("apple") < NameKey::new("Banana"));
    }

    #[test]
    fn test_name_key_strips_separator_controls() {
        assert_eq!(NameKey::new("\u{1c}Cherry\u{1f}").as_str(), "cherry");
        assert_eq!(NameKey::new("\u{1d} \u{1e}apple").as_str(), "apple");
        assert_eq!(NameKey::new("a\u{1f}b").as_str(), "a\u{1f}b");
    }

    #[test]
    fn test_direction_flips_comparison() {
        let early = InstantKey::new(Utc.timestamp_opt(1, 0).unwrap());
        let late = InstantKey::new(Utc.timestamp_opt(2, 0).unwrap());

        assert_eq!(
            early.compare_with_direction(&late, SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            early.compare_with_direction(&late, SortDirection::Descending),
            Ordering::Greater
        );
        assert_eq!(
            early.compare_with_direction(&early, SortDirection::Descending),
            Ordering::Equal
        );
    }
}
