//! Stable facet filtering and per-facet counts.
//!
//! # Invariants
//! - `filter` output is a subsequence of its input in original order.
//! - `count(records, f) == filter(records, f).len()` for every facet.
//! - Both functions are total; empty results are not errors.

use crate::catalog::facet::Facet;

/// Count of records matching one facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetCount<F> {
    pub facet: F,
    pub count: usize,
}

impl<F: Facet> FacetCount<F> {
    pub fn key(&self) -> &'static str {
        self.facet.key()
    }

    pub fn label(&self) -> &'static str {
        self.facet.label()
    }
}

/// Returns the records matching `facet`, preserving input order.
pub fn filter<F: Facet>(records: &[F::Record], facet: F) -> Vec<&F::Record> {
    records.iter().filter(|record| facet.matches(record)).collect()
}

/// Counts the records matching `facet` with the filtering predicate.
pub fn count<F: Facet>(records: &[F::Record], facet: F) -> usize {
    records.iter().filter(|record| facet.matches(record)).count()
}

/// Counts every facet of the fixed enumeration independently.
pub fn facet_counts<F: Facet>(records: &[F::Record]) -> Vec<FacetCount<F>> {
    counts_for(records, F::all())
}

/// Counts an explicit ordered facet list, e.g. the tabs of a listing page.
pub fn counts_for<F: Facet>(records: &[F::Record], facets: &[F]) -> Vec<FacetCount<F>> {
    facets
        .iter()
        .map(|facet| FacetCount {
            facet: *facet,
            count: count(records, *facet),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{count, facet_counts, filter};
    use crate::catalog::facet::{ExperimentFacet, Facet, ProjectFacet};
    use crate::model::experiment::{Experiment, ExperimentKind, ExperimentStatus};
    use crate::model::project::Project;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    }

    fn experiment(id: &str, status: ExperimentStatus) -> Experiment {
        Experiment::new(id, id, ExperimentKind::Ai, status, date())
    }

    #[test]
    fn status_filter_keeps_order_and_counts_match() {
        let records = vec![
            experiment("p1", ExperimentStatus::Active),
            experiment("p2", ExperimentStatus::Completed),
            experiment("p3", ExperimentStatus::Active),
        ];

        let active = filter(&records, ExperimentFacet::Status(ExperimentStatus::Active));
        let ids: Vec<_> = active.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);

        assert_eq!(
            count(&records, ExperimentFacet::Status(ExperimentStatus::Active)),
            2
        );
        assert_eq!(
            count(&records, ExperimentFacet::Status(ExperimentStatus::Completed)),
            1
        );
        assert_eq!(count(&records, ExperimentFacet::All), 3);
    }

    #[test]
    fn empty_collection_yields_empty_results_for_every_facet() {
        let records: Vec<Project> = Vec::new();
        for facet in ProjectFacet::all() {
            assert!(filter(&records, *facet).is_empty());
        }
        assert!(facet_counts::<ProjectFacet>(&records)
            .iter()
            .all(|entry| entry.count == 0));
    }

    #[test]
    fn facet_counts_cover_the_whole_enumeration_in_order() {
        let records = vec![Project::new("a", "A", date())];
        let counts = facet_counts::<ProjectFacet>(&records);
        let keys: Vec<_> = counts.iter().map(|entry| entry.key()).collect();
        assert_eq!(keys, vec!["all", "featured", "web", "ai", "robotics"]);
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[0].label(), "All Projects");
    }
}
