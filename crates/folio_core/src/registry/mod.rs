//! Static tag and category registries.
//!
//! # Responsibility
//! - Hold display metadata (name, icon, color) for tags and categories.
//! - Resolve identifiers to metadata with an explicit absent case.
//!
//! # Invariants
//! - Ids are unique within one registry; registration order is display order.
//! - Lookup never fails: unknown ids resolve to `None`.

use crate::model::category::Category;
use crate::model::item::CatalogItem;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registration errors. Lookup itself has no error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidId(String),
    DuplicateId(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(value) => write!(f, "registry id is invalid: `{value}`"),
            Self::DuplicateId(value) => write!(f, "registry id already registered: {value}"),
        }
    }
}

impl Error for RegistryError {}

/// Cross-cutting label with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Palette name for the badge (`blue`, `amber`, ...).
    pub color: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Ordered tag registry.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: Vec<Tag>,
    index: BTreeMap<String, usize>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one tag at the end of display order.
    pub fn register(&mut self, tag: Tag) -> Result<(), RegistryError> {
        let id = tag.id.trim();
        if id.is_empty() || id != tag.id {
            return Err(RegistryError::InvalidId(tag.id));
        }
        if self.index.contains_key(id) {
            return Err(RegistryError::DuplicateId(tag.id));
        }
        self.index.insert(tag.id.clone(), self.tags.len());
        self.tags.push(tag);
        Ok(())
    }

    /// Builds a registry from tags in display order.
    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for tag in tags {
            registry.register(tag)?;
        }
        Ok(registry)
    }

    /// Returns tag metadata, or `None` for unknown ids.
    pub fn resolve_tag(&self, tag_id: &str) -> Option<&Tag> {
        self.index.get(tag_id).map(|position| &self.tags[*position])
    }

    /// Tags in display order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Resolves an item's labels, silently dropping unknown ones.
///
/// Output keeps the item's tag order.
pub fn resolve_item_tags<'r, C>(registry: &'r TagRegistry, item: &CatalogItem<C>) -> Vec<&'r Tag> {
    item.tags
        .iter()
        .filter_map(|tag_id| registry.resolve_tag(tag_id))
        .collect()
}

/// Display metadata for one category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo<C> {
    pub category: C,
    pub name: String,
    pub icon: String,
}

impl<C: Category> CategoryInfo<C> {
    pub fn new(category: C, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            icon: icon.into(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.category.as_str()
    }
}

/// Ordered category registry for one catalog.
#[derive(Debug, Clone)]
pub struct CategoryRegistry<C> {
    entries: Vec<CategoryInfo<C>>,
}

impl<C: Category> CategoryRegistry<C> {
    /// Builds a registry; each category value may appear once.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CategoryInfo<C>>,
    ) -> Result<Self, RegistryError> {
        let mut collected: Vec<CategoryInfo<C>> = Vec::new();
        for entry in entries {
            if collected.iter().any(|known| known.category == entry.category) {
                return Err(RegistryError::DuplicateId(entry.id().to_string()));
            }
            collected.push(entry);
        }
        Ok(Self { entries: collected })
    }

    /// Returns category metadata for a textual id, or `None` when the id is
    /// unknown or not registered.
    pub fn resolve_category(&self, category_id: &str) -> Option<&CategoryInfo<C>> {
        let category = C::parse(category_id).ok()?;
        self.info(category)
    }

    /// Returns metadata for a typed category.
    pub fn info(&self, category: C) -> Option<&CategoryInfo<C>> {
        self.entries.iter().find(|entry| entry.category == category)
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[CategoryInfo<C>] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::{
        resolve_item_tags, CategoryInfo, CategoryRegistry, RegistryError, Tag, TagRegistry,
    };
    use crate::model::category::EducationCategory;
    use crate::model::item::CatalogItem;

    fn sample_tags() -> TagRegistry {
        TagRegistry::from_tags([
            Tag::new("engineering", "Engineering", "blue"),
            Tag::new("finance", "Finance", "red"),
        ])
        .expect("valid registry")
    }

    #[test]
    fn resolve_tag_returns_none_for_unknown_id() {
        let registry = sample_tags();
        assert_eq!(
            registry.resolve_tag("finance").map(|tag| tag.name.as_str()),
            Some("Finance")
        );
        assert!(registry.resolve_tag("nonexistent").is_none());
    }

    #[test]
    fn register_rejects_duplicates_and_blank_ids() {
        let mut registry = sample_tags();
        assert_eq!(
            registry.register(Tag::new("finance", "Again", "red")),
            Err(RegistryError::DuplicateId("finance".to_string()))
        );
        assert_eq!(
            registry.register(Tag::new(" ", "Blank", "gray")),
            Err(RegistryError::InvalidId(" ".to_string()))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn resolve_item_tags_drops_unknown_labels_in_order() {
        let registry = sample_tags();
        let item = CatalogItem::new("x", EducationCategory::Degree, "X")
            .with_tags(["finance", "ghost", "engineering"]);

        let names: Vec<&str> = resolve_item_tags(&registry, &item)
            .into_iter()
            .map(|tag| tag.id.as_str())
            .collect();
        assert_eq!(names, vec!["finance", "engineering"]);
    }

    #[test]
    fn category_registry_resolves_registered_ids_only() {
        let registry = CategoryRegistry::from_entries([CategoryInfo::new(
            EducationCategory::Degree,
            "Degrees",
            "🎓",
        )])
        .expect("valid registry");

        assert!(registry.resolve_category("degree").is_some());
        assert!(registry.resolve_category("course").is_none());
        assert!(registry.resolve_category("spaceship").is_none());
    }
}
