//! Core logic for the folio portfolio site.
//! Catalog filtering and assistant routing live here; presentation shells
//! only render what this crate returns.

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;

pub use assistant::action::{dispatch, ActionTable, ExternalAction, IntentRouter, Navigator};
pub use assistant::intent::{classify, classify_with_fallback, Intent, IntentRule, INTENT_RULES};
pub use assistant::quick_actions::{find_quick_action, quick_actions, QuickAction};
pub use catalog::facet::{
    ExperimentFacet, Facet, FacetParseError, ProjectFacet, TechnologyGroup, EXPERIMENT_TABS,
    PROJECT_TABS,
};
pub use catalog::filter::{count, counts_for, facet_counts, filter, FacetCount};
pub use catalog::selection::FacetSelection;
pub use catalog::stats::ExperimentStats;
pub use catalog::store::{Catalog, CatalogError, CatalogResult, CollectionKind};
pub use config::{ConfigError, NavigationItem, SiteConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::experiment::{
    Experiment, ExperimentKind, ExperimentStatus, MediaItem, MediaKind,
};
pub use model::project::{Project, RecordId};

/// Minimal health-check API for shell integration.
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
