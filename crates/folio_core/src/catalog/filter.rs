//! Category and tag filtering over catalog stores.
//!
//! # Invariants
//! - Filtering is stable: retained items keep their input order.
//! - `All` + `Any` is the identity view.
//! - Filtering is idempotent for the same criteria.

use crate::model::category::{Category, CategoryParseError};
use crate::model::item::CatalogItem;
use crate::model::showcase::Project;
use log::debug;

/// Textual id of the "no category exclusion" choice.
pub const ALL_CATEGORIES: &str = "all";

/// Active category criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Category> CategoryFilter<C> {
    /// Parses `all` or one category id.
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        if value.trim() == ALL_CATEGORIES {
            return Ok(Self::All);
        }
        C::parse(value).map(Self::Only)
    }

    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Header click semantics: choosing the active category returns to `All`.
    pub fn toggle(self, category: C) -> Self {
        match self {
            Self::Only(selected) if selected == category => Self::All,
            _ => Self::Only(category),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category.as_str(),
        }
    }
}

/// Active tag criterion. The empty tag means no exclusion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    #[default]
    Any,
    Tag(String),
}

impl TagFilter {
    /// Maps the empty string to `Any`; any other value is kept verbatim as an
    /// exact tag, whitespace included.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            Self::Any
        } else {
            Self::Tag(value.to_string())
        }
    }

    /// Badge click semantics: choosing the active tag clears the filter.
    pub fn toggle(self, tag: &str) -> Self {
        match self {
            Self::Tag(active) if active == tag => Self::Any,
            _ => Self::parse(tag),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Tag(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => "",
            Self::Tag(tag) => tag.as_str(),
        }
    }

    fn admits(&self, has_tag: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Self::Any => true,
            Self::Tag(tag) => has_tag(tag),
        }
    }
}

/// Returns items passing both criteria, in input order.
///
/// Never fails; an empty result is the "nothing matches" view.
pub fn filter_items<'a, C: Category>(
    items: &'a [CatalogItem<C>],
    category: &CategoryFilter<C>,
    tag: &TagFilter,
) -> Vec<&'a CatalogItem<C>> {
    let retained: Vec<&CatalogItem<C>> = items
        .iter()
        .filter(|item| category.matches(item.category))
        .filter(|item| tag.admits(|label| item.has_tag(label)))
        .collect();
    debug!(
        "event=catalog_filter module=catalog status=ok category={} tag_active={} input={} output={}",
        category.as_str(),
        tag.is_active(),
        items.len(),
        retained.len()
    );
    retained
}

/// Tag filtering over project technology labels, in input order.
pub fn filter_projects<'a>(projects: &'a [Project], tag: &TagFilter) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| tag.admits(|label| project.uses(label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_items, CategoryFilter, TagFilter};
    use crate::model::category::ExperienceCategory;
    use crate::model::item::CatalogItem;

    #[test]
    fn tag_filter_parse_treats_only_empty_as_any() {
        assert_eq!(TagFilter::parse(""), TagFilter::Any);
        assert_eq!(TagFilter::parse("   "), TagFilter::Tag("   ".to_string()));
        assert_eq!(
            TagFilter::parse(" finance "),
            TagFilter::Tag(" finance ".to_string())
        );
    }

    #[test]
    fn whitespace_tags_match_nothing() {
        let items =
            vec![CatalogItem::new("a", ExperienceCategory::Data, "A").with_tags(["finance"])];

        let blank = filter_items(&items, &CategoryFilter::All, &TagFilter::parse(" "));
        assert!(blank.is_empty());
        let padded = filter_items(
            &items,
            &CategoryFilter::All,
            &TagFilter::parse(" finance "),
        );
        assert!(padded.is_empty());
        let exact = filter_items(&items, &CategoryFilter::All, &TagFilter::parse("finance"));
        assert_eq!(exact.len(), 1);
    }

    #[test]
    fn tag_toggle_clears_active_tag_and_switches_otherwise() {
        let selected = TagFilter::Any.toggle("finance");
        assert_eq!(selected, TagFilter::Tag("finance".to_string()));
        assert_eq!(selected.clone().toggle("finance"), TagFilter::Any);
        assert_eq!(
            selected.toggle("analytics"),
            TagFilter::Tag("analytics".to_string())
        );
    }

    #[test]
    fn category_toggle_returns_to_all_on_second_click() {
        let filter = CategoryFilter::All.toggle(ExperienceCategory::Pmo);
        assert_eq!(filter, CategoryFilter::Only(ExperienceCategory::Pmo));
        assert_eq!(filter.toggle(ExperienceCategory::Pmo), CategoryFilter::All);
        assert_eq!(
            filter.toggle(ExperienceCategory::Data),
            CategoryFilter::Only(ExperienceCategory::Data)
        );
    }

    #[test]
    fn category_filter_parses_all_and_ids() {
        assert_eq!(
            CategoryFilter::<ExperienceCategory>::parse("all").expect("all parses"),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::<ExperienceCategory>::parse("data").expect("id parses"),
            CategoryFilter::Only(ExperienceCategory::Data)
        );
        assert!(CategoryFilter::<ExperienceCategory>::parse("degree").is_err());
    }

    #[test]
    fn both_predicates_must_hold() {
        let items = vec![
            CatalogItem::new("a", ExperienceCategory::Data, "A").with_tags(["python"]),
            CatalogItem::new("b", ExperienceCategory::Pmo, "B").with_tags(["python"]),
            CatalogItem::new("c", ExperienceCategory::Data, "C").with_tags(["excel"]),
        ];

        let ids: Vec<&str> = filter_items(
            &items,
            &CategoryFilter::Only(ExperienceCategory::Data),
            &TagFilter::parse("python"),
        )
        .into_iter()
        .map(|item| item.id.as_str())
        .collect();
        assert_eq!(ids, vec!["a"]);
    }
}
