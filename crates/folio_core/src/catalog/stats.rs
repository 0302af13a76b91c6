//! Summary numbers shown above the experiments grid.

use crate::model::experiment::{Experiment, ExperimentStatus};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperimentStats {
    pub active: usize,
    pub completed: usize,
    pub paused: usize,
    /// Distinct technology tags across all experiments (case-sensitive).
    pub technologies: usize,
    /// Total media items across all experiments.
    pub media_files: usize,
}

impl ExperimentStats {
    pub fn collect(experiments: &[Experiment]) -> Self {
        let mut stats = Self::default();
        let mut technologies = BTreeSet::new();

        for experiment in experiments {
            match experiment.status {
                ExperimentStatus::Active => stats.active += 1,
                ExperimentStatus::Completed => stats.completed += 1,
                ExperimentStatus::Paused => stats.paused += 1,
            }
            technologies.extend(experiment.technologies.iter().map(String::as_str));
            stats.media_files += experiment.media.len();
        }

        stats.technologies = technologies.len();
        stats
    }
}
