//! Product listing sort modifiers for the Vitrine storefront.
//!
//! Modifiers are small, stateless plugins that add a sort control to a
//! product listing. The listing controller keeps a [`ModifierRegistry`],
//! resolves the modifiers the current [`ListingConfiguration`] switches on,
//! renders their fields, and threads the fetched products through each
//! active modifier's sort.
//!
//! ```
//! use vitrine_core::{ListingRequest, ModifierRegistry, SortData};
//! use vitrine_core::config::ListingConfiguration;
//! use vitrine_core::model::{Product, chrono::Utc};
//!
//! let registry = ModifierRegistry::with_defaults();
//! let config = ListingConfiguration::new().with("sort_products_by_name", true);
//! let now = Utc::now();
//! let products = vec![
//!     Product::new("Banana", now),
//!     Product::new("apple", now),
//!     Product::new("Cherry", now),
//! ];
//!
//! let sorted = registry
//!     .sort_products(
//!         &ListingRequest::new(),
//!         products,
//!         &SortData::with_sort("name_d"),
//!         Some(&config),
//!     )
//!     .unwrap();
//! let names: Vec<_> = sorted.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Cherry", "Banana", "apple"]);
//! ```

#![allow(missing_docs)]

pub mod error;
pub mod i18n;
pub mod modifiers;
pub mod request;
pub mod sorting;
pub mod widget;

pub use vitrine_config as config;
pub use vitrine_model as model;

pub use error::{ListingError, Result};
pub use i18n::{IdentityTranslator, Label, Translate};
pub use modifiers::{
    FieldDescriptor, FieldWidget, ModifierDescriptor, ModifierRegistry,
    ProductListModifier, SortOption, SortProductListByCreatedDate,
    SortProductListByName,
};
pub use request::{ListingRequest, SORT_FIELD, SortData};
pub use sorting::{SortDimension, SortDirection, SortSelector};
pub use vitrine_config::ListingConfiguration;
pub use widget::{
    FILTER_CHOICE_TEMPLATE, FilterChoiceContext, FilterWidget, Markup,
    RenderError, TemplateRenderer,
};
