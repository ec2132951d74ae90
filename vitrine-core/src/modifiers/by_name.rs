use super::base::ProductListModifier;
use super::descriptor::ModifierDescriptor;
use super::fields::{FieldDescriptor, FieldWidget, SortOption};
use crate::i18n::Label;
use crate::request::{ListingRequest, SORT_FIELD, SortData};
use crate::sorting::{
    FieldSort, NameField, SortDimension, SortSelector, SortStrategy,
};
use vitrine_model::{Category, ListedProduct};

/// Selector used when the form carries no `sort` value.
pub const DEFAULT_NAME_SORT: &str = "name_a";

/// Alphabetical sorting by product name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortProductListByName;

impl SortProductListByName {
    pub const DESCRIPTOR: ModifierDescriptor = ModifierDescriptor::new(
        "sort_products_by_name",
        "Sort products by name",
        "sort_products_by_name_ordering",
        "Ordering for sort by name",
    );
}

impl<P: ListedProduct> ProductListModifier<P> for SortProductListByName {
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
            vec![
                SortOption::new("name_a", Label::new("Name - A-Z")),
                SortOption::new("name_d", Label::new("Name - Z-A")),
            ],
        )]
    }

    fn sort_products(
        &self,
        _request: &ListingRequest,
        products: Vec<P>,
        data: &SortData,
    ) -> Vec<P> {
        let selector = SortSelector::parse(
            data.sort()
                .filter(|sort| !sort.is_empty())
                .unwrap_or(DEFAULT_NAME_SORT),
        );

        if selector.dimension != SortDimension::Name {
            tracing::debug!(
                target: "listing::sort",
                modifier = Self::DESCRIPTOR.is_active_key,
                selector = %selector.dimension.as_key(),
                "selector not handled, keeping order"
            );
            return products;
        }

        FieldSort::<P, _>::new(NameField, selector.direction).sort(products)
    }
}
