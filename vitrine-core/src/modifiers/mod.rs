//! Product listing modifiers
//!
//! A modifier adds one sorting capability to a product listing. Each one is
//! switched on and prioritized through the listing configuration, declares
//! the form fields and choices it needs, and reorders the fetched products
//! once the shopper submits a selection.

pub mod base;
pub mod by_created_date;
pub mod by_name;
pub mod descriptor;
pub mod fields;
pub mod registry;

pub use base::ProductListModifier;
pub use by_created_date::SortProductListByCreatedDate;
pub use by_name::SortProductListByName;
pub use descriptor::ModifierDescriptor;
pub use fields::{FieldDescriptor, FieldWidget, SortOption};
pub use registry::ModifierRegistry;
