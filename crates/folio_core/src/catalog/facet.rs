//! Facet vocabularies for project and experiment listings.
//!
//! # Invariants
//! - Each facet enum is closed; `Facet::all()` is the full enumeration.
//! - Technology reference lists are static configuration, never derived
//!   from record data.
//! - Unknown facet keys are rejected, not mapped to `all`.

use crate::model::experiment::{Experiment, ExperimentKind, ExperimentStatus};
use crate::model::project::Project;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed filter dimension over one record type.
pub trait Facet: Copy + Eq + 'static {
    type Record;

    /// Full fixed enumeration, in presentation order.
    fn all() -> &'static [Self];

    /// Stable key used by query strings and FFI callers.
    fn key(self) -> &'static str;

    /// Tab label shown next to the count.
    fn label(self) -> &'static str;

    /// Membership predicate shared by filtering and counting.
    fn matches(self, record: &Self::Record) -> bool;

    /// Parses one key from the fixed enumeration.
    fn parse(key: &str) -> Result<Self, FacetParseError> {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(FacetParseError::EmptyKey);
        }
        Self::all()
            .iter()
            .copied()
            .find(|facet| facet.key() == trimmed)
            .ok_or_else(|| FacetParseError::UnknownFacet(trimmed.to_string()))
    }
}

/// Facet key parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetParseError {
    EmptyKey,
    UnknownFacet(String),
}

impl Display for FacetParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "facet key must not be empty"),
            Self::UnknownFacet(value) => write!(f, "facet key is unknown: {value}"),
        }
    }
}

impl Error for FacetParseError {}

const WEB_TECHNOLOGIES: &[&str] = &[
    "React",
    "Next.js",
    "JavaScript",
    "TypeScript",
    "WebGL",
    "Three.js",
];
const AI_TECHNOLOGIES: &[&str] = &[
    "AI",
    "TensorFlow",
    "PyTorch",
    "Machine Learning",
    "Computer Vision",
];
const ROBOTICS_TECHNOLOGIES: &[&str] = &["ROS", "Arduino", "Robotics", "Hardware"];

/// Technology bucket used by project facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechnologyGroup {
    Web,
    Ai,
    Robotics,
}

impl TechnologyGroup {
    /// Fixed reference list a project must intersect to belong to the group.
    pub fn reference_technologies(self) -> &'static [&'static str] {
        match self {
            Self::Web => WEB_TECHNOLOGIES,
            Self::Ai => AI_TECHNOLOGIES,
            Self::Robotics => ROBOTICS_TECHNOLOGIES,
        }
    }

    pub fn contains(self, project: &Project) -> bool {
        project.uses_any(self.reference_technologies())
    }
}

/// Filter tabs of the projects listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectFacet {
    #[default]
    All,
    Featured,
    Group(TechnologyGroup),
}

const PROJECT_FACETS: &[ProjectFacet] = &[
    ProjectFacet::All,
    ProjectFacet::Featured,
    ProjectFacet::Group(TechnologyGroup::Web),
    ProjectFacet::Group(TechnologyGroup::Ai),
    ProjectFacet::Group(TechnologyGroup::Robotics),
];

impl Facet for ProjectFacet {
    type Record = Project;

    fn all() -> &'static [Self] {
        PROJECT_FACETS
    }

    fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::Group(TechnologyGroup::Web) => "web",
            Self::Group(TechnologyGroup::Ai) => "ai",
            Self::Group(TechnologyGroup::Robotics) => "robotics",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Featured => "Featured",
            Self::Group(TechnologyGroup::Web) => "Web & 3D",
            Self::Group(TechnologyGroup::Ai) => "AI/ML",
            Self::Group(TechnologyGroup::Robotics) => "Robotics",
        }
    }

    fn matches(self, record: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Featured => record.is_featured(),
            Self::Group(group) => group.contains(record),
        }
    }
}

/// Filter tabs of the experiments listing.
///
/// `ThreeDOrWebGl` is a composite: it matches either kind and is not a
/// third kind value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExperimentFacet {
    #[default]
    All,
    Status(ExperimentStatus),
    Kind(ExperimentKind),
    ThreeDOrWebGl,
}

const EXPERIMENT_FACETS: &[ExperimentFacet] = &[
    ExperimentFacet::All,
    ExperimentFacet::Status(ExperimentStatus::Active),
    ExperimentFacet::Status(ExperimentStatus::Completed),
    ExperimentFacet::Status(ExperimentStatus::Paused),
    ExperimentFacet::Kind(ExperimentKind::Ai),
    ExperimentFacet::Kind(ExperimentKind::Ml),
    ExperimentFacet::Kind(ExperimentKind::Robotics),
    ExperimentFacet::Kind(ExperimentKind::WebGl),
    ExperimentFacet::Kind(ExperimentKind::ThreeD),
    ExperimentFacet::Kind(ExperimentKind::Research),
    ExperimentFacet::ThreeDOrWebGl,
];

impl Facet for ExperimentFacet {
    type Record = Experiment;

    fn all() -> &'static [Self] {
        EXPERIMENT_FACETS
    }

    fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Status(status) => status.as_str(),
            Self::Kind(kind) => kind.as_str(),
            Self::ThreeDOrWebGl => "3D/WebGL",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Status(ExperimentStatus::Active) => "Active",
            Self::Status(ExperimentStatus::Completed) => "Completed",
            Self::Status(ExperimentStatus::Paused) => "Paused",
            Self::Kind(kind) => kind.as_str(),
            Self::ThreeDOrWebGl => "3D/WebGL",
        }
    }

    fn matches(self, record: &Experiment) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => record.status == status,
            Self::Kind(kind) => record.kind == kind,
            Self::ThreeDOrWebGl => {
                matches!(record.kind, ExperimentKind::ThreeD | ExperimentKind::WebGl)
            }
        }
    }
}

/// Tabs rendered by the projects page, in order.
pub const PROJECT_TABS: &[ProjectFacet] = PROJECT_FACETS;

/// Tabs rendered by the experiments page, in order.
pub const EXPERIMENT_TABS: &[ExperimentFacet] = &[
    ExperimentFacet::All,
    ExperimentFacet::Status(ExperimentStatus::Active),
    ExperimentFacet::Status(ExperimentStatus::Completed),
    ExperimentFacet::Kind(ExperimentKind::Ai),
    ExperimentFacet::Kind(ExperimentKind::Ml),
    ExperimentFacet::Kind(ExperimentKind::Robotics),
    ExperimentFacet::ThreeDOrWebGl,
];
