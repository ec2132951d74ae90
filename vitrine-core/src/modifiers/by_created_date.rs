use super::base::ProductListModifier;
use super::descriptor::ModifierDescriptor;
use super::fields::{FieldDescriptor, FieldWidget, SortOption};
use crate::i18n::Label;
use crate::request::{ListingRequest, SORT_FIELD, SortData};
use crate::sorting::{
    CreatedDateField, FieldSort, SortDimension, SortSelector, SortStrategy,
};
use vitrine_model::{Category, ListedProduct};

/// Sorting by creation instant; newest first is the only offered option.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortProductListByCreatedDate;

impl SortProductListByCreatedDate {
    pub const DESCRIPTOR: ModifierDescriptor = ModifierDescriptor::new(
        "sort_products_by_date_created",
        "Sort products by date created",
        "sort_products_by_date_created_ordering",
        "Ordering for sort by date created",
    );
}

impl<P: ListedProduct> ProductListModifier<P> for SortProductListByCreatedDate {
    fn descriptor(&self) -> &ModifierDescriptor {
        &Self::DESCRIPTOR
    }

    fn get_fields(
        &self,
        _request: &ListingRequest,
        _category: Option<&Category>,
    ) -> Vec<(String, FieldDescriptor)> {
        vec![(
            SORT_FIELD.to_string(),
            FieldDescriptor::Char {
                label: Label::new("Sort"),
                required: false,
                widget: FieldWidget::Select,
            },
        )]
    }

    fn get_choices_for_fields(&self) -> Vec<(String, Vec<SortOption>)> {
        vec![(
            SORT_FIELD.to_string(),
            vec![SortOption::new("created_date_d", Label::new("Date created"))],
        )]
    }

    fn sort_products(
        &self,
        _request: &ListingRequest,
        products: Vec<P>,
        data: &SortData,
    ) -> Vec<P> {
        // No default selector here: a missing key behaves like an empty one.
        let selector = SortSelector::parse(data.sort().unwrap_or_default());

        if selector.dimension != SortDimension::CreatedDate {
            tracing::debug!(
                target: "listing::sort",
                modifier = Self::DESCRIPTOR.is_active_key,
                selector = %selector.dimension.as_key(),
                "selector not handled, keeping order"
            );
            return products;
        }

        FieldSort::<P, _>::new(CreatedDateField, selector.direction)
            .sort(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vitrine_model::Product;

    fn dated(entries: &[(&str, i64)]) -> Vec<Product> {
        entries
            .iter()
            .map(|(name, secs)| {
                Product::new(*name, Utc.timestamp_opt(*secs, 0).unwrap())
            })
            .collect()
    }

    fn sort(products: Vec<Product>, data: &SortData) -> Vec<Product> {
        SortProductListByCreatedDate.sort_products(
            &ListingRequest::new(),
            products,
            data,
        )
    }

    fn names(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let input = dated(&[("A", 3), ("B", 1), ("C", 2)]);
        let out = sort(input, &SortData::with_sort("created_date_d"));
        assert_eq!(names(&out), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_ascending_variants() {
        let input = dated(&[("A", 3), ("B", 1), ("C", 2)]);

        let suffixed = sort(input.clone(), &SortData::with_sort("created_date_a"));
        let bare = sort(input, &SortData::with_sort("created_date"));

        assert_eq!(names(&suffixed), vec!["B", "C", "A"]);
        assert_eq!(suffixed, bare);
    }

    #[test]
    fn test_missing_selector_has_no_default() {
        let input = dated(&[("A", 3), ("B", 1)]);
        assert_eq!(sort(input.clone(), &SortData::new()), input);
        assert_eq!(sort(input.clone(), &SortData::with_sort("")), input);
    }

    #[test]
    fn test_name_selector_passes_through() {
        let input = dated(&[("b", 3), ("a", 1)]);
        assert_eq!(sort(input.clone(), &SortData::with_sort("name_a")), input);
    }

    #[test]
    fn test_offers_single_descending_choice() {
        let modifier: &dyn ProductListModifier<Product> =
            &SortProductListByCreatedDate;

        let choices = modifier.get_choices_for_fields();
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].1, vec![SortOption::new(
            "created_date_d",
            Label::new("Date created")
        )]);
        assert_eq!(
            modifier.descriptor().ordering_key,
            "sort_products_by_date_created_ordering"
        );
    }
}
