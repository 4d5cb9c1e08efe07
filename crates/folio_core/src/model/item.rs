//! Catalog item domain model.
//!
//! # Responsibility
//! - Define the single record shape shared by education and experience views.
//! - Keep category typing closed per catalog via the `Category` parameter.
//!
//! # Invariants
//! - `id` is stable across renders and unique within one store.
//! - `tags` behave as a set: inserting an existing label is a no-op.
//! - `span` is present only for items that take part in chronological views.

use crate::model::category::{EducationCategory, ExperienceCategory};
use crate::model::period::PeriodSpan;
use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = String;

/// One displayable record of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem<C> {
    pub id: ItemId,
    pub category: C,
    /// Degree name or job position.
    pub title: String,
    /// Institution or company.
    pub organization: String,
    pub location: String,
    /// Human-readable period, rendered as-is.
    pub period: String,
    /// Sortable period keys. `None` for items without dates.
    #[serde(default)]
    pub span: Option<PeriodSpan>,
    pub summary: String,
    #[serde(default)]
    pub details: Vec<String>,
    /// Labels referencing a tag registry; unknown labels are dropped at render.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Emphasized card in the experience view.
    #[serde(default)]
    pub highlight: bool,
}

/// Education catalog entry.
pub type EducationItem = CatalogItem<EducationCategory>;
/// Work experience catalog entry.
pub type ExperienceItem = CatalogItem<ExperienceCategory>;

impl<C> CatalogItem<C> {
    /// Creates an item with empty display fields and no span or tags.
    pub fn new(id: impl Into<ItemId>, category: C, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            organization: String::new(),
            location: String::new(),
            period: String::new(),
            span: None,
            summary: String::new(),
            details: Vec::new(),
            tags: Vec::new(),
            highlight: false,
        }
    }

    pub fn at(mut self, organization: impl Into<String>, location: impl Into<String>) -> Self {
        self.organization = organization.into();
        self.location = location.into();
        self
    }

    pub fn during(mut self, period: impl Into<String>, span: Option<PeriodSpan>) -> Self {
        self.period = period.into();
        self.span = span;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    /// Adds labels in order, skipping ones already present.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// Set-membership test used by tag filtering.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogItem;
    use crate::model::category::EducationCategory;

    #[test]
    fn new_sets_empty_defaults() {
        let item = CatalogItem::new("master", EducationCategory::Degree, "Master");

        assert_eq!(item.id, "master");
        assert_eq!(item.category, EducationCategory::Degree);
        assert!(item.span.is_none());
        assert!(item.tags.is_empty());
        assert!(item.details.is_empty());
        assert!(!item.highlight);
    }

    #[test]
    fn with_tags_collapses_duplicates_in_first_seen_order() {
        let item = CatalogItem::new("a", EducationCategory::Course, "A")
            .with_tags(["management", "analytics", "management"]);

        assert_eq!(item.tags, vec!["management", "analytics"]);
        assert!(item.has_tag("analytics"));
        assert!(!item.has_tag("finance"));
    }
}
