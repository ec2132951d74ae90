//! Core traits for sortable product fields
//!
//! A field marker names one dimension of a product and knows how to pull a
//! comparable key out of any [`ListedProduct`].

use super::selector::SortDirection;
use std::cmp::Ordering;
use vitrine_model::ListedProduct;

/// Individual sort field with associated key type
///
/// Each field marker type implements this trait to specify
/// its comparison key type and how it is read from a product.
pub trait SortFieldMarker: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Logical dimension name used in submitted selectors
    const ID: &'static str;

    /// Extract the key for `product`
    fn extract<P: ListedProduct + ?Sized>(&self, product: &P) -> Self::Key;
}

/// Keys that can be compared for sorting
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Compare two keys in the requested direction.
    ///
    /// Descending flips the comparator instead of reversing an ascending
    /// result, so equal keys keep their input order either way.
    #[inline]
    fn compare_with_direction(
        &self,
        other: &Self,
        direction: SortDirection,
    ) -> Ordering {
        match direction {
            SortDirection::Ascending => self.cmp(other),
            SortDirection::Descending => other.cmp(self),
        }
    }
}
