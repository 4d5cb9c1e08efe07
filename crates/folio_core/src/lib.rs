//! Core catalog logic for the folio portfolio.
//! This crate owns the portfolio content and every derived view over it.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod registry;
pub mod store;

pub use catalog::chronology::{derive_timeline_markers, sort_by_recency, sort_view_by_recency};
pub use catalog::clock::{Clock, FixedClock, SystemClock};
pub use catalog::filter::{filter_items, filter_projects, CategoryFilter, TagFilter, ALL_CATEGORIES};
pub use catalog::view::{count_by_category, toggle_expanded};
pub use logging::{default_log_level, init_logging, init_logging_with, logging_status, LogConfig};
pub use model::category::{Category, CategoryParseError, EducationCategory, ExperienceCategory};
pub use model::item::{CatalogItem, EducationItem, ExperienceItem, ItemId};
pub use model::period::{PeriodEnd, PeriodError, PeriodSpan, YearMonth, PRESENT_KEY};
pub use model::showcase::{Project, Skill, SkillLevel};
pub use registry::{
    resolve_item_tags, CategoryInfo, CategoryRegistry, RegistryError, Tag, TagRegistry,
};
pub use store::{
    education_categories, education_store, education_tags, experience_categories,
    experience_store, projects, skills, CatalogStore, StoreError, StoreResult,
};

/// Minimal health-check API for host wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
