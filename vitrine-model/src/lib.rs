//! Core data model definitions shared across Vitrine crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod category;
pub mod ids;
pub mod product;

pub use category::Category;
pub use ids::{CategoryId, ProductId};
pub use product::{ListedProduct, Product};
