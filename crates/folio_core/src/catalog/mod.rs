//! Catalog listing logic: facets, filtering, counts and loading.
//!
//! # Responsibility
//! - Turn an immutable record collection plus a selected facet into the
//!   visible subset and per-facet counts.
//! - Load and validate the bundled record collections once.
//!
//! # Invariants
//! - Filtering is stable: output is a subsequence of the input.
//! - Counts use the exact predicate used by filtering.

pub mod facet;
pub mod filter;
pub mod selection;
pub mod stats;
pub mod store;
