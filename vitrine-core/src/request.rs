//! Per-request inputs handed to listing modifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form field carrying the submitted sort selector.
pub const SORT_FIELD: &str = "sort";

/// Context of the listing request being served.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRequest {
    /// Active language code, if the storefront negotiated one.
    pub language: Option<String>,
}

impl ListingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }
}

/// Cleaned form data submitted with a listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortData(BTreeMap<String, String>);

impl SortData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data holding only a `sort` selector.
    pub fn with_sort(selector: impl Into<String>) -> Self {
        Self::new().with(SORT_FIELD, selector)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The submitted sort selector, if the key is present at all.
    pub fn sort(&self) -> Option<&str> {
        self.get(SORT_FIELD)
    }
}

impl<K, V> FromIterator<(K, V)> for SortData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
