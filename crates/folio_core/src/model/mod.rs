//! Domain model for portfolio catalogs.
//!
//! # Responsibility
//! - Define canonical data structures consumed by catalog functions.
//! - Keep one item shape for education and experience projections.
//!
//! # Invariants
//! - Every catalog item is identified by a stable string id.
//! - Categories form closed sets; unknown ids never reach a store.

pub mod category;
pub mod item;
pub mod period;
pub mod showcase;
