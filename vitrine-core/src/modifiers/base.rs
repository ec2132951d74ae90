//! The contract every listing modifier implements.

use super::descriptor::ModifierDescriptor;
use super::fields::{FieldDescriptor, SortOption};
use crate::request::{ListingRequest, SortData};
use vitrine_config::{ConfigError, ListingConfiguration};
use vitrine_model::Category;

/// A pluggable sorting capability for product listings.
///
/// Implementations are stateless, so one instance can serve any number of
/// concurrent requests. Configuration handling is provided through the
/// [`ModifierDescriptor`]; implementors supply the fields, the choices and
/// the sort itself.
pub trait ProductListModifier<P>: Send + Sync {
    /// Settings keys and labels identifying this modifier
    fn descriptor(&self) -> &ModifierDescriptor;

    /// Whether the modifier takes part in listings under `configuration`
    fn should_use(&self, configuration: Option<&ListingConfiguration>) -> bool {
        self.descriptor().is_active(configuration)
    }

    /// Relative priority among active modifiers; lower values run first
    fn get_ordering(
        &self,
        configuration: Option<&ListingConfiguration>,
    ) -> Result<i64, ConfigError> {
        self.descriptor().ordering(configuration)
    }

    /// Fields an administrator edits to configure the modifier
    fn get_admin_fields(&self) -> Vec<(String, FieldDescriptor)> {
        self.descriptor().admin_fields()
    }

    /// Fields this modifier adds to the shopper-facing listing form
    fn get_fields(
        &self,
        request: &ListingRequest,
        category: Option<&Category>,
    ) -> Vec<(String, FieldDescriptor)>;

    /// Options offered for each of the modifier's fields
    fn get_choices_for_fields(&self) -> Vec<(String, Vec<SortOption>)>;

    /// Reorder `products` according to the submitted `data`.
    ///
    /// Must return a permutation of the input. Selectors the modifier does
    /// not understand leave the products untouched.
    fn sort_products(
        &self,
        request: &ListingRequest,
        products: Vec<P>,
        data: &SortData,
    ) -> Vec<P>;
}
