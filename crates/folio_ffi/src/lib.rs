//! UI-shell bindings for the folio core.

pub mod api;
