//! Field marker types for product sorting
//!
//! These zero-sized types represent the product fields a listing can be
//! sorted on. Each marker's `ID` is the logical dimension used in submitted
//! selectors such as `name_a` or `created_date_d`.

use super::keys::{InstantKey, NameKey};
use super::traits::SortFieldMarker;
use vitrine_model::ListedProduct;

/// Sort by display name (case-insensitive, whitespace-trimmed)
#[derive(Copy, Clone, Debug)]
pub struct NameField;

impl SortFieldMarker for NameField {
    type Key = NameKey;
    const ID: &'static str = "name";

    fn extract<P: ListedProduct + ?Sized>(&self, product: &P) -> NameKey {
        NameKey::new(product.name())
    }
}

/// Sort by creation instant
#[derive(Copy, Clone, Debug)]
pub struct CreatedDateField;

impl SortFieldMarker for CreatedDateField {
    type Key = InstantKey;
    const ID: &'static str = "created_date";

    fn extract<P: ListedProduct + ?Sized>(&self, product: &P) -> InstantKey {
        InstantKey::new(product.created_on())
    }
}
