//! Sorting primitives for product listings
//!
//! This module provides:
//! - Core traits for sort keys and sortable fields
//! - Field marker types for the dimensions a listing can be sorted on
//! - Parsing of submitted sort selectors into dimension and direction
//! - The stable field sort strategy the modifiers run

pub mod fields;
pub mod keys;
pub mod selector;
pub mod strategy;
pub mod traits;
pub mod utils;

pub use fields::*;
pub use keys::*;
pub use selector::*;
pub use strategy::*;
pub use traits::*;
