//! Registry of listing modifiers and the listing pipeline built on it.
//!
//! The listing controller asks the registry which modifiers are active for
//! the current configuration, builds the shopper form from their fields and
//! choices, and threads the fetched products through their sorts in
//! priority order.

use super::base::ProductListModifier;
use super::by_created_date::SortProductListByCreatedDate;
use super::by_name::SortProductListByName;
use super::fields::{FieldDescriptor, SortOption};
use crate::error::Result;
use crate::request::{ListingRequest, SortData};
use std::fmt;
use vitrine_config::ListingConfiguration;
use vitrine_model::{Category, ListedProduct};

/// Ordered set of registered modifiers.
pub struct ModifierRegistry<P> {
    modifiers: Vec<Box<dyn ProductListModifier<P>>>,
}

impl<P> Default for ModifierRegistry<P> {
    fn default() -> Self {
        Self {
            modifiers: Vec::new(),
        }
    }
}

impl<P> fmt::Debug for ModifierRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.modifiers
                    .iter()
                    .map(|m| m.descriptor().is_active_key),
            )
            .finish()
    }
}

impl<P: ListedProduct> ModifierRegistry<P> {
    /// Registry holding the name and creation date sorts, in that order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register(SortProductListByName)
            .register(SortProductListByCreatedDate);
        registry
    }
}

impl<P> ModifierRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        modifier: impl ProductListModifier<P> + 'static,
    ) -> &mut Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// All registered modifiers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ProductListModifier<P>> {
        self.modifiers.iter().map(|m| m.as_ref())
    }

    /// Modifiers switched on by `configuration`, lowest ordering first.
    /// Modifiers with equal ordering keep their registration order.
    pub fn active(
        &self,
        configuration: Option<&ListingConfiguration>,
    ) -> Result<Vec<&dyn ProductListModifier<P>>> {
        let mut active = Vec::new();
        for modifier in self.iter() {
            if modifier.should_use(configuration) {
                active.push((modifier.get_ordering(configuration)?, modifier));
            }
        }
        active.sort_by_key(|(ordering, _)| *ordering);

        tracing::debug!(
            target: "listing::sort",
            active = ?active
                .iter()
                .map(|(ordering, m)| (m.descriptor().is_active_key, *ordering))
                .collect::<Vec<_>>(),
            "resolved active modifiers"
        );

        Ok(active.into_iter().map(|(_, modifier)| modifier).collect())
    }

    /// Admin fields of every registered modifier, active or not.
    pub fn admin_fields(&self) -> Vec<(String, FieldDescriptor)> {
        self.iter()
            .flat_map(|modifier| modifier.get_admin_fields())
            .collect()
    }

    /// Combined shopper form fields of the active modifiers.
    ///
    /// The first declaration of a key wins, except that choice fields
    /// declared again under the same key contribute their choices.
    pub fn form_fields(
        &self,
        request: &ListingRequest,
        category: Option<&Category>,
        configuration: Option<&ListingConfiguration>,
    ) -> Result<Vec<(String, FieldDescriptor)>> {
        let mut fields: Vec<(String, FieldDescriptor)> = Vec::new();
        for modifier in self.active(configuration)? {
            for (key, field) in modifier.get_fields(request, category) {
                match fields.iter_mut().find(|(existing, _)| *existing == key) {
                    Some((
                        _,
                        FieldDescriptor::Choice {
                            choices: existing, ..
                        },
                    )) => {
                        if let FieldDescriptor::Choice { choices, .. } = field {
                            existing.extend(choices);
                        }
                    }
                    Some(_) => {}
                    None => fields.push((key, field)),
                }
            }
        }
        Ok(fields)
    }

    /// Choices per field key, concatenated across active modifiers in
    /// priority order.
    pub fn field_choices(
        &self,
        configuration: Option<&ListingConfiguration>,
    ) -> Result<Vec<(String, Vec<SortOption>)>> {
        let mut merged: Vec<(String, Vec<SortOption>)> = Vec::new();
        for modifier in self.active(configuration)? {
            for (key, choices) in modifier.get_choices_for_fields() {
                match merged.iter_mut().find(|(existing, _)| *existing == key) {
                    Some((_, existing)) => existing.extend(choices),
                    None => merged.push((key, choices)),
                }
            }
        }
        Ok(merged)
    }

    /// Run every active modifier's sort over `products`, in priority order.
    pub fn sort_products(
        &self,
        request: &ListingRequest,
        products: Vec<P>,
        data: &SortData,
        configuration: Option<&ListingConfiguration>,
    ) -> Result<Vec<P>> {
        let active = self.active(configuration)?;
        let count = products.len();

        let sorted = active.into_iter().fold(products, |products, modifier| {
            modifier.sort_products(request, products, data)
        });

        debug_assert_eq!(sorted.len(), count);
        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListingError;
    use crate::i18n::Label;
    use crate::modifiers::ModifierDescriptor;
    use chrono::{TimeZone, Utc};
    use vitrine_config::ConfigError;
    use vitrine_model::Product;

    /// Offers a choice field and never reorders anything.
    struct FeaturedFirst;

    impl FeaturedFirst {
        const DESCRIPTOR: ModifierDescriptor = ModifierDescriptor::new(
            "featured_first",
            "Featured first",
            "featured_first_ordering",
            "Ordering for featured first",
        );
    }

    impl ProductListModifier<Product> for FeaturedFirst {
        fn descriptor(&self) -> &ModifierDescriptor {
            &Self::DESCRIPTOR
        }

        fn get_fields(
            &self,
            _request: &ListingRequest,
            _category: Option<&Category>,
        ) -> Vec<(String, FieldDescriptor)> {
            vec![
                (
                    "sort".to_string(),
                    FieldDescriptor::Choice {
                        label: Label::new("Sort"),
                        required: false,
                        choices: vec![SortOption::new(
                            "featured",
                            Label::new("Featured"),
                        )],
                    },
                ),
                (
                    "featured_only".to_string(),
                    FieldDescriptor::Boolean {
                        label: Label::new("Featured only"),
                        required: false,
                        initial: false,
                    },
                ),
            ]
        }

        fn get_choices_for_fields(&self) -> Vec<(String, Vec<SortOption>)> {
            vec![(
                "sort".to_string(),
                vec![SortOption::new("featured", Label::new("Featured"))],
            )]
        }

        fn sort_products(
            &self,
            _request: &ListingRequest,
            products: Vec<Product>,
            _data: &SortData,
        ) -> Vec<Product> {
            products
        }
    }

    fn both_active(name_order: i64, date_order: i64) -> ListingConfiguration {
        ListingConfiguration::new()
            .with("sort_products_by_name", true)
            .with("sort_products_by_name_ordering", name_order)
            .with("sort_products_by_date_created", true)
            .with("sort_products_by_date_created_ordering", date_order)
    }

    fn active_keys(
        registry: &ModifierRegistry<Product>,
        config: Option<&ListingConfiguration>,
    ) -> Vec<&'static str> {
        registry
            .active(config)
            .unwrap()
            .into_iter()
            .map(|m| m.descriptor().is_active_key)
            .collect()
    }

    #[test]
    fn test_nothing_active_without_configuration() {
        let registry = ModifierRegistry::<Product>::with_defaults();
        assert_eq!(registry.len(), 2);
        assert!(active_keys(&registry, None).is_empty());
        assert!(
            active_keys(&registry, Some(&ListingConfiguration::new()))
                .is_empty()
        );
    }

    #[test]
    fn test_active_sorted_by_ordering() {
        let registry = ModifierRegistry::<Product>::with_defaults();

        let config = both_active(2, 1);
        assert_eq!(
            active_keys(&registry, Some(&config)),
            vec!["sort_products_by_date_created", "sort_products_by_name"]
        );

        let tied = both_active(1, 1);
        assert_eq!(
            active_keys(&registry, Some(&tied)),
            vec!["sort_products_by_name", "sort_products_by_date_created"]
        );
    }

    #[test]
    fn test_invalid_ordering_surfaces_config_error() {
        let registry = ModifierRegistry::<Product>::with_defaults();
        let config = ListingConfiguration::new()
            .with("sort_products_by_name", true)
            .with("sort_products_by_name_ordering", "soon");

        let err = registry
            .sort_products(
                &ListingRequest::new(),
                Vec::new(),
                &SortData::new(),
                Some(&config),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            ListingError::Config(ConfigError::InvalidOrdering { ref key, .. })
                if key == "sort_products_by_name_ordering"
        ));
    }

    #[test]
    fn test_admin_fields_cover_every_modifier() {
        let registry = ModifierRegistry::<Product>::with_defaults();
        let keys: Vec<String> =
            registry.admin_fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "sort_products_by_name",
                "sort_products_by_name_ordering",
                "sort_products_by_date_created",
                "sort_products_by_date_created_ordering",
            ]
        );
    }

    #[test]
    fn test_form_fields_deduplicate_by_key() {
        let registry = ModifierRegistry::<Product>::with_defaults();
        let fields = registry
            .form_fields(&ListingRequest::new(), None, Some(&both_active(1, 2)))
            .unwrap();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "sort");
    }

    #[test]
    fn test_choice_fields_accumulate_choices() {
        let mut registry = ModifierRegistry::<Product>::new();
        registry.register(FeaturedFirst).register(FeaturedFirst);
        let config = ListingConfiguration::new().with("featured_first", true);

        let fields = registry
            .form_fields(&ListingRequest::new(), None, Some(&config))
            .unwrap();

        assert_eq!(fields.len(), 2);
        match &fields[0].1 {
            FieldDescriptor::Choice { choices, .. } => assert_eq!(choices.len(), 2),
            other => panic!("expected choice field, got {other:?}"),
        }
        assert_eq!(fields[1].0, "featured_only");
    }

    #[test]
    fn test_field_choices_follow_priority() {
        let mut registry = ModifierRegistry::<Product>::with_defaults();
        registry.register(FeaturedFirst);
        let config = both_active(3, 2)
            .with("featured_first", true)
            .with("featured_first_ordering", 1);

        let choices = registry.field_choices(Some(&config)).unwrap();

        assert_eq!(choices.len(), 1);
        let values: Vec<&str> =
            choices[0].1.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["featured", "created_date_d", "name_a", "name_d"]);
    }

    #[test]
    fn test_pipeline_threads_products_through_active_sorts() {
        let registry = ModifierRegistry::<Product>::with_defaults();
        let products = vec![
            Product::new("b", Utc.timestamp_opt(1, 0).unwrap()),
            Product::new("a", Utc.timestamp_opt(2, 0).unwrap()),
        ];

        let by_date = registry
            .sort_products(
                &ListingRequest::new(),
                products.clone(),
                &SortData::with_sort("created_date_d"),
                Some(&both_active(1, 2)),
            )
            .unwrap();
        assert_eq!(by_date[0].name, "a");

        // Name sort is inactive here, so its missing-key default never runs.
        let date_only = ListingConfiguration::new()
            .with("sort_products_by_date_created", true);
        let untouched = registry
            .sort_products(
                &ListingRequest::new(),
                products.clone(),
                &SortData::new(),
                Some(&date_only),
            )
            .unwrap();
        assert_eq!(untouched, products);
    }

    #[test]
    fn test_debug_lists_modifier_keys() {
        let registry = ModifierRegistry::<Product>::with_defaults();
        assert_eq!(
            format!("{registry:?}"),
            r#"["sort_products_by_name", "sort_products_by_date_created"]"#
        );
    }
}
