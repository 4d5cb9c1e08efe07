//! Pure catalog views: filtering, recency ordering and timeline markers.
//!
//! # Responsibility
//! - Derive displayed subsets and orderings from immutable stores.
//! - Take UI state (active filters, open card, current month) as parameters.
//!
//! # Invariants
//! - No function here mutates its input or fails.
//! - Output depends only on arguments.

pub mod chronology;
pub mod clock;
pub mod filter;
pub mod view;
