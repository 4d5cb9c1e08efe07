//! Small derived views consumed by the presentation layer.

use crate::model::category::Category;
use crate::model::item::CatalogItem;
use crate::registry::{CategoryInfo, CategoryRegistry};

/// Item count per registered category, in registry display order.
///
/// Counts the whole store, independent of any active filter.
pub fn count_by_category<'r, C: Category>(
    items: &[CatalogItem<C>],
    registry: &'r CategoryRegistry<C>,
) -> Vec<(&'r CategoryInfo<C>, usize)> {
    registry
        .entries()
        .iter()
        .map(|info| {
            let count = items
                .iter()
                .filter(|item| item.category == info.category)
                .count();
            (info, count)
        })
        .collect()
}

/// Expand/collapse semantics for a single open card.
///
/// Toggling the open card collapses it; any other id becomes the open one.
pub fn toggle_expanded(current: Option<&str>, id: &str) -> Option<String> {
    match current {
        Some(open) if open == id => None,
        _ => Some(id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{count_by_category, toggle_expanded};
    use crate::model::category::EducationCategory;
    use crate::model::item::CatalogItem;
    use crate::registry::{CategoryInfo, CategoryRegistry};

    #[test]
    fn counts_follow_registry_order_and_include_zeroes() {
        let registry = CategoryRegistry::from_entries([
            CategoryInfo::new(EducationCategory::Degree, "Degrees", "🎓"),
            CategoryInfo::new(EducationCategory::Program, "Programs", "🌍"),
            CategoryInfo::new(EducationCategory::Course, "Courses", "📚"),
        ])
        .expect("valid registry");
        let items = vec![
            CatalogItem::new("a", EducationCategory::Course, "A"),
            CatalogItem::new("b", EducationCategory::Degree, "B"),
            CatalogItem::new("c", EducationCategory::Degree, "C"),
        ];

        let counts: Vec<(&str, usize)> = count_by_category(&items, &registry)
            .into_iter()
            .map(|(info, count)| (info.id(), count))
            .collect();
        assert_eq!(counts, vec![("degree", 2), ("program", 0), ("course", 1)]);
    }

    #[test]
    fn toggle_expanded_opens_switches_and_collapses() {
        let opened = toggle_expanded(None, "danieli");
        assert_eq!(opened.as_deref(), Some("danieli"));
        assert_eq!(toggle_expanded(opened.as_deref(), "danieli"), None);
        assert_eq!(
            toggle_expanded(opened.as_deref(), "boato").as_deref(),
            Some("boato")
        );
    }
}
