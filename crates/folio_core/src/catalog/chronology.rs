//! Recency ordering and timeline markers.
//!
//! # Invariants
//! - Recency sort is keyed on span start only and is stable.
//! - Undated items sort after dated ones.
//! - Timeline markers depend on wall-clock time only through `now`.

use crate::model::item::CatalogItem;
use crate::model::period::YearMonth;
use log::debug;
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Orders items by span start, most recent first.
///
/// Items sharing a start month keep their input order.
pub fn sort_by_recency<C>(items: &[CatalogItem<C>]) -> Vec<&CatalogItem<C>> {
    let mut ordered: Vec<&CatalogItem<C>> = items.iter().collect();
    ordered.sort_by_key(|item| recency_key(item));
    ordered
}

/// Same ordering over an already derived view (e.g. a filter result).
pub fn sort_view_by_recency<'a, C>(view: &[&'a CatalogItem<C>]) -> Vec<&'a CatalogItem<C>> {
    let mut ordered = view.to_vec();
    ordered.sort_by_key(|item| recency_key(item));
    ordered
}

// Dated items lead; among them, later starts first.
fn recency_key<C>(item: &CatalogItem<C>) -> (bool, Reverse<Option<YearMonth>>) {
    let start = item.span.map(|span| span.start());
    (start.is_none(), Reverse(start))
}

/// Distinct span years across all items, newest first.
///
/// `present` ends are resolved against the supplied `now`.
pub fn derive_timeline_markers<C>(items: &[CatalogItem<C>], now: YearMonth) -> Vec<String> {
    let years: BTreeSet<u16> = items
        .iter()
        .filter_map(|item| item.span)
        .flat_map(|span| [span.start(), span.end().resolve(now)])
        .map(YearMonth::year)
        .collect();
    debug!(
        "event=timeline_derive module=catalog status=ok input={} markers={} now={}",
        items.len(),
        years.len(),
        now
    );
    years
        .into_iter()
        .rev()
        .map(|year| format!("{year:04}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{derive_timeline_markers, sort_by_recency};
    use crate::model::category::ExperienceCategory;
    use crate::model::item::CatalogItem;
    use crate::model::period::PeriodSpan;

    fn dated(id: &str, start: &str, end: &str) -> CatalogItem<ExperienceCategory> {
        CatalogItem::new(id, ExperienceCategory::Data, id)
            .during("", Some(PeriodSpan::parse(start, end).expect("valid span")))
    }

    fn ids<C>(items: &[&CatalogItem<C>]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn undated_items_trail_in_input_order() {
        let items = vec![
            CatalogItem::new("u1", ExperienceCategory::Pmo, "u1"),
            dated("old", "2020-01", "2020-05"),
            CatalogItem::new("u2", ExperienceCategory::Pmo, "u2"),
            dated("new", "2024-01", "present"),
        ];

        assert_eq!(ids(&sort_by_recency(&items)), vec!["new", "old", "u1", "u2"]);
    }

    #[test]
    fn markers_span_every_year_boundary_only() {
        let items = vec![dated("a", "2018-09", "2022-07")];
        let markers = derive_timeline_markers(&items, "2025-01".parse().expect("valid now"));
        assert_eq!(markers, vec!["2022", "2018"]);
    }
}
