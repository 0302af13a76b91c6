//! Catalog domain model for the portfolio listings.
//!
//! # Responsibility
//! - Define the canonical record shapes shown by listing and detail pages.
//! - Keep wire naming aligned with the bundled JSON fixtures.
//!
//! # Invariants
//! - Every record is identified by a stable string id used as routing key.
//! - Records are immutable once loaded into a `Catalog`.
//!
//! # See also
//! - crate::catalog::store

pub mod experiment;
pub mod project;
