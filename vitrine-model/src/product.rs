//! Product records as seen by listing modifiers.
//!
//! The listing controller owns the product collection; modifiers only read
//! the handful of attributes exposed through [`ListedProduct`].

use crate::ids::ProductId;
use chrono::{DateTime, Utc};

/// Read access to the product attributes a listing can be sorted on.
pub trait ListedProduct {
    /// Displayable product name
    fn name(&self) -> &str;

    /// Instant the product was created
    fn created_on(&self) -> DateTime<Utc>;
}

/// A product record as fetched by the listing controller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub created_on: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, created_on: DateTime<Utc>) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            created_on,
        }
    }
}

impl ListedProduct for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }
}

impl<T: ListedProduct + ?Sized> ListedProduct for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn created_on(&self) -> DateTime<Utc> {
        (**self).created_on()
    }
}

impl<T: ListedProduct + ?Sized> ListedProduct for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn created_on(&self) -> DateTime<Utc> {
        (**self).created_on()
    }
}

impl<T: ListedProduct + ?Sized> ListedProduct for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn created_on(&self) -> DateTime<Utc> {
        (**self).created_on()
    }
}
