//! Utility functions for sorting operations

/// Move items into the order given by `indices`.
///
/// Each index in `indices` names the position in `items` of the element that
/// belongs at that slot. `indices` must be a permutation of `0..items.len()`.
pub fn reorder_by_indices<T>(items: Vec<T>, indices: &[usize]) -> Vec<T> {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    indices
        .iter()
        .filter_map(|&idx| slots.get_mut(idx).and_then(Option::take))
        .collect()
}

/// Whether `items` is already ordered under `compare`.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    items.windows(2).all(|w| {
        matches!(
            compare(&w[0], &w[1]),
            std::cmp::Ordering::Less | std::cmp::Ordering::Equal
        )
    })
}
