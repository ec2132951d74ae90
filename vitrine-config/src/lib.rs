//! Listing configuration for Vitrine.
//!
//! Administrators toggle listing modifiers and set their priority through a
//! flat settings mapping. This crate owns that mapping, the truthiness and
//! ordering rules modifiers read it with, and the loader that builds it from
//! files or the environment.

pub mod configuration;
pub mod error;
pub mod loader;

pub use configuration::{DEFAULT_ORDERING, ListingConfiguration, is_truthy};
pub use error::{ConfigError, Result};
pub use loader::ConfigSource;
