//! Assistant widget query routing.
//!
//! # Responsibility
//! - Classify free-text queries into a closed set of intents.
//! - Dispatch each intent to exactly one injected navigation action.
//!
//! # Invariants
//! - Classification is total: every string resolves to an intent.
//! - The router holds no navigation-framework state.

pub mod action;
pub mod intent;
pub mod quick_actions;
