//! Submitted sort selectors
//!
//! Listing forms submit a single machine key such as `name_d`. The key is
//! parsed once into a logical dimension and a direction; everything past
//! this boundary works with the typed pair.

use super::fields::{CreatedDateField, NameField};
use super::traits::SortFieldMarker;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const ASCENDING_SUFFIX: &str = "_a";
const DESCENDING_SUFFIX: &str = "_d";

/// Sort direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn suffix(&self) -> &'static str {
        match self {
            SortDirection::Ascending => ASCENDING_SUFFIX,
            SortDirection::Descending => DESCENDING_SUFFIX,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

/// Logical attribute a selector sorts on, independent of direction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortDimension {
    Name,
    CreatedDate,
    /// Anything no shipped modifier understands, including the empty key
    Other(String),
}

impl SortDimension {
    pub fn from_key(key: &str) -> Self {
        if key == NameField::ID {
            SortDimension::Name
        } else if key == CreatedDateField::ID {
            SortDimension::CreatedDate
        } else {
            SortDimension::Other(key.to_string())
        }
    }

    pub fn as_key(&self) -> &str {
        match self {
            SortDimension::Name => NameField::ID,
            SortDimension::CreatedDate => CreatedDateField::ID,
            SortDimension::Other(key) => key,
        }
    }
}

/// A parsed `{dimension, direction}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortSelector {
    pub dimension: SortDimension,
    pub direction: SortDirection,
}

impl SortSelector {
    pub fn new(dimension: SortDimension, direction: SortDirection) -> Self {
        Self {
            dimension,
            direction,
        }
    }

    /// Parse a machine key. A trailing `_a` or `_d` sets the direction and
    /// is stripped; keys without a suffix sort ascending.
    pub fn parse(raw: &str) -> Self {
        let (logical, direction) =
            if let Some(logical) = raw.strip_suffix(ASCENDING_SUFFIX) {
                (logical, SortDirection::Ascending)
            } else if let Some(logical) = raw.strip_suffix(DESCENDING_SUFFIX) {
                (logical, SortDirection::Descending)
            } else {
                (raw, SortDirection::Ascending)
            };

        Self::new(SortDimension::from_key(logical), direction)
    }

    /// Canonical machine key, always suffixed.
    pub fn to_key(&self) -> String {
        format!("{}{}", self.dimension.as_key(), self.direction.suffix())
    }
}

impl FromStr for SortSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SortSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_set_direction() {
        let asc = SortSelector::parse("name_a");
        assert_eq!(asc.dimension, SortDimension::Name);
        assert_eq!(asc.direction, SortDirection::Ascending);

        let desc = SortSelector::parse("created_date_d");
        assert_eq!(desc.dimension, SortDimension::CreatedDate);
        assert!(desc.direction.is_descending());
    }

    #[test]
    fn test_missing_suffix_is_ascending() {
        let selector = SortSelector::parse("name");
        assert_eq!(selector.dimension, SortDimension::Name);
        assert_eq!(selector.direction, SortDirection::Ascending);
        assert_eq!(selector.to_key(), "name_a");
    }

    #[test]
    fn test_unknown_and_empty_keys() {
        assert_eq!(
            SortSelector::parse("price_d").dimension,
            SortDimension::Other("price".to_string())
        );
        assert_eq!(
            SortSelector::parse("").dimension,
            SortDimension::Other(String::new())
        );
        // Only the last suffix is stripped
        assert_eq!(
            SortSelector::parse("name_a_d").dimension,
            SortDimension::Other("name_a".to_string())
        );
    }

    #[test]
    fn test_from_str_and_display_round_trip_canonical_keys() {
        let selector: SortSelector = "created_date_d".parse().unwrap();
        assert_eq!(selector.to_string(), "created_date_d");
    }
}
