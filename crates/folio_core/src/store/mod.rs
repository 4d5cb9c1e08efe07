//! Immutable, preloaded catalog stores.
//!
//! # Responsibility
//! - Own the fixed portfolio content and its registries.
//! - Validate store-level invariants once, at construction.
//!
//! # Invariants
//! - Item ids are unique within a store.
//! - Stores are never mutated after construction; views borrow from them.

use crate::model::item::{CatalogItem, ItemId};
use crate::model::period::PeriodError;
use crate::registry::RegistryError;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod content;

pub use content::{
    education_categories, education_store, education_tags, experience_categories,
    experience_store, projects, skills,
};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateId(ItemId),
    InvalidPeriod { id: ItemId, source: PeriodError },
    Registry(RegistryError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "catalog item id is duplicated: {id}"),
            Self::InvalidPeriod { id, source } => {
                write!(f, "catalog item `{id}` has an invalid period: {source}")
            }
            Self::Registry(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::InvalidPeriod { source, .. } => Some(source),
            Self::Registry(err) => Some(err),
        }
    }
}

impl From<RegistryError> for StoreError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

/// Ordered, id-unique sequence of catalog items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore<C> {
    items: Vec<CatalogItem<C>>,
}

impl<C> CatalogStore<C> {
    /// Builds a store, keeping the given order.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when two items share an id.
    pub fn new(items: Vec<CatalogItem<C>>) -> StoreResult<Self> {
        {
            let mut seen = HashSet::with_capacity(items.len());
            for item in &items {
                if !seen.insert(item.id.as_str()) {
                    return Err(StoreError::DuplicateId(item.id.clone()));
                }
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem<C>] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem<C>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogStore, StoreError, StoreResult};
    use crate::model::category::EducationCategory;
    use crate::model::item::CatalogItem;
    use crate::registry::{RegistryError, Tag, TagRegistry};
    use std::error::Error;

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = CatalogStore::new(vec![
            CatalogItem::new("a", EducationCategory::Degree, "A"),
            CatalogItem::new("a", EducationCategory::Course, "A again"),
        ])
        .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("a".to_string()));
    }

    #[test]
    fn get_finds_items_by_id() {
        let store = CatalogStore::new(vec![CatalogItem::new(
            "a",
            EducationCategory::Degree,
            "A",
        )])
        .expect("unique ids");
        assert_eq!(store.get("a").map(|item| item.title.as_str()), Some("A"));
        assert!(store.get("b").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn registry_failures_surface_as_store_errors() {
        let build = || -> StoreResult<TagRegistry> {
            Ok(TagRegistry::from_tags([
                Tag::new("finance", "Finance", "red"),
                Tag::new("finance", "Finance", "red"),
            ])?)
        };

        let err = build().unwrap_err();
        assert_eq!(
            err,
            StoreError::Registry(RegistryError::DuplicateId("finance".to_string()))
        );
        assert!(err.source().is_some());
    }
}
