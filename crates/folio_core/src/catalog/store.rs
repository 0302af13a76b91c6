//! Immutable record collections loaded once per process.
//!
//! # Responsibility
//! - Decode project/experiment JSON documents into typed records.
//! - Enforce routing-key invariants at load time so callers fail fast.
//! - Serve detail-page and featured-section lookups.
//!
//! # Invariants
//! - Record ids are non-blank and unique per collection. Any other string is
//!   a valid id; path building encodes it.
//! - A loaded `Catalog` is never mutated.

use crate::catalog::facet::{ExperimentFacet, ProjectFacet};
use crate::catalog::filter::{counts_for, FacetCount};
use crate::catalog::stats::ExperimentStats;
use crate::model::experiment::Experiment;
use crate::model::project::Project;
use log::info;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File name of the project collection inside a catalog directory.
pub const PROJECTS_FILE_NAME: &str = "projects.json";
/// File name of the experiment collection inside a catalog directory.
pub const EXPERIMENTS_FILE_NAME: &str = "experiments.json";

const BUNDLED_PROJECTS_JSON: &str = include_str!("../data/projects.json");
const BUNDLED_EXPERIMENTS_JSON: &str = include_str!("../data/experiments.json");

/// Which collection a load error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Projects,
    Experiments,
}

impl CollectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Experiments => "experiments",
        }
    }
}

/// Catalog load error.
#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        collection: CollectionKind,
        source: serde_json::Error,
    },
    /// Blank id at `position` (zero-based) in the collection.
    EmptyId {
        collection: CollectionKind,
        position: usize,
    },
    DuplicateId {
        collection: CollectionKind,
        id: String,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog file `{}`: {source}", path.display())
            }
            Self::Parse { collection, source } => {
                write!(f, "invalid {} document: {source}", collection.as_str())
            }
            Self::EmptyId {
                collection,
                position,
            } => {
                write!(f, "empty {} id at position {position}", collection.as_str())
            }
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate {} id `{id}`", collection.as_str())
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::EmptyId { .. } | Self::DuplicateId { .. } => None,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Project and experiment collections shown by the site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
    experiments: Vec<Experiment>,
}

impl Catalog {
    /// Validates and wraps already-decoded collections.
    pub fn new(projects: Vec<Project>, experiments: Vec<Experiment>) -> CatalogResult<Self> {
        validate_ids(
            CollectionKind::Projects,
            projects.iter().map(|p| p.id.as_str()),
        )?;
        validate_ids(
            CollectionKind::Experiments,
            experiments.iter().map(|e| e.id.as_str()),
        )?;
        Ok(Self {
            projects,
            experiments,
        })
    }

    /// Loads the collections compiled into the binary.
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json_strs(BUNDLED_PROJECTS_JSON, BUNDLED_EXPERIMENTS_JSON)
    }

    /// Decodes both collections from JSON array documents.
    pub fn from_json_strs(projects_json: &str, experiments_json: &str) -> CatalogResult<Self> {
        let projects = decode(CollectionKind::Projects, projects_json)?;
        let experiments = decode(CollectionKind::Experiments, experiments_json)?;
        let catalog = Self::new(projects, experiments)?;
        info!(
            "event=catalog_load module=catalog status=ok projects={} experiments={}",
            catalog.projects.len(),
            catalog.experiments.len()
        );
        Ok(catalog)
    }

    /// Loads `projects.json` and `experiments.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> CatalogResult<Self> {
        let dir = dir.as_ref();
        let projects_json = read_file(dir.join(PROJECTS_FILE_NAME))?;
        let experiments_json = read_file(dir.join(EXPERIMENTS_FILE_NAME))?;
        Self::from_json_strs(&projects_json, &experiments_json)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Detail-page lookup. `None` maps to the not-found page.
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn find_experiment(&self, id: &str) -> Option<&Experiment> {
        self.experiments.iter().find(|experiment| experiment.id == id)
    }

    /// Featured projects in collection order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_featured()).collect()
    }

    pub fn project_tab_counts(&self, tabs: &[ProjectFacet]) -> Vec<FacetCount<ProjectFacet>> {
        counts_for(&self.projects, tabs)
    }

    pub fn experiment_tab_counts(
        &self,
        tabs: &[ExperimentFacet],
    ) -> Vec<FacetCount<ExperimentFacet>> {
        counts_for(&self.experiments, tabs)
    }

    pub fn experiment_stats(&self) -> ExperimentStats {
        ExperimentStats::collect(&self.experiments)
    }
}

fn decode<T: DeserializeOwned>(collection: CollectionKind, json: &str) -> CatalogResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { collection, source })
}

fn read_file(path: PathBuf) -> CatalogResult<String> {
    std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
}

fn validate_ids<'a>(
    collection: CollectionKind,
    ids: impl Iterator<Item = &'a str>,
) -> CatalogResult<()> {
    let mut seen = BTreeSet::new();
    for (position, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId {
                collection,
                position,
            });
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
