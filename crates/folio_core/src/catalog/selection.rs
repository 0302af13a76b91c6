//! Listing-page facet selection state.
//!
//! # Invariants
//! - Initialized once from the incoming query string, then changed only by
//!   explicit `select` calls.
//! - Never persisted.

use crate::catalog::facet::{Facet, ProjectFacet};
use crate::catalog::filter::filter;
use crate::config::SiteConfig;

/// Currently selected facet of one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetSelection<F: Facet> {
    current: F,
}

impl<F: Facet> FacetSelection<F> {
    pub fn new(initial: F) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> F {
        self.current
    }

    /// Applies an explicit user selection.
    pub fn select(&mut self, facet: F) {
        self.current = facet;
    }

    pub fn is_selected(&self, facet: F) -> bool {
        self.current == facet
    }

    /// Records visible under the current selection.
    pub fn visible<'a>(&self, records: &'a [F::Record]) -> Vec<&'a F::Record> {
        filter(records, self.current)
    }
}

impl FacetSelection<ProjectFacet> {
    /// Builds the projects selection from a raw query string.
    ///
    /// The pair configured as `SiteConfig::featured_query` starts on
    /// `Featured`; anything else starts on `All`. A leading `?` is accepted.
    pub fn from_query(query: &str, config: &SiteConfig) -> Self {
        let Some(expected) = config.featured_pair() else {
            return Self::new(ProjectFacet::All);
        };
        let query = query.trim().trim_start_matches('?');
        let featured = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|pair| pair == expected);
        if featured {
            Self::new(ProjectFacet::Featured)
        } else {
            Self::new(ProjectFacet::All)
        }
    }
}

impl<F: Facet + Default> Default for FacetSelection<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}
