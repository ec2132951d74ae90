//! Sorting strategies applied to fetched product collections.

use super::selector::SortDirection;
use super::traits::{SortFieldMarker, SortKey};
use super::utils::{is_sorted_by, reorder_by_indices};
use std::marker::PhantomData;
use vitrine_model::ListedProduct;

/// A reordering of a product collection.
///
/// Strategies take the collection by value and hand back a permutation of
/// it: nothing is dropped, duplicated or rebuilt.
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: Vec<T>) -> Vec<T>;
}

/// Stable single field sort strategy
#[derive(Debug, Clone, Copy)]
pub struct FieldSort<T, F>
where
    F: SortFieldMarker,
{
    pub field: F,
    pub direction: SortDirection,
    _phantom: PhantomData<fn(T)>,
}

impl<T, F> FieldSort<T, F>
where
    T: ListedProduct,
    F: SortFieldMarker,
{
    /// Create a new field sort strategy
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self {
            field,
            direction,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> SortStrategy<T> for FieldSort<T, F>
where
    T: ListedProduct,
    F: SortFieldMarker,
{
    fn sort(&self, items: Vec<T>) -> Vec<T> {
        // Extract keys once for efficiency
        let mut keys: Vec<(usize, F::Key)> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, self.field.extract(item)))
            .collect();

        if is_sorted_by(&keys, |a, b| {
            a.1.compare_with_direction(&b.1, self.direction)
        }) {
            tracing::trace!(
                target: "listing::sort",
                field = F::ID,
                count = items.len(),
                "already in order"
            );
            return items;
        }

        // `sort_by` is stable, so ties keep their input order in both
        // directions.
        keys.sort_by(|a, b| a.1.compare_with_direction(&b.1, self.direction));

        tracing::trace!(
            target: "listing::sort",
            field = F::ID,
            direction = ?self.direction,
            count = items.len(),
            "sorted products"
        );

        let indices: Vec<usize> = keys.into_iter().map(|(i, _)| i).collect();
        reorder_by_indices(items, &indices)
    }
}
