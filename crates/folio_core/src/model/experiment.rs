//! Experiment domain model.
//!
//! # Responsibility
//! - Define the record rendered by the experiments listing.
//! - Own the closed `type` and `status` vocabularies.
//!
//! # Invariants
//! - `ExperimentKind` and `ExperimentStatus` wire strings are case-sensitive.

use crate::model::project::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Research area tag of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperimentKind {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "ML")]
    Ml,
    Robotics,
    #[serde(rename = "WebGL")]
    WebGl,
    #[serde(rename = "3D")]
    ThreeD,
    Research,
}

impl ExperimentKind {
    pub const ALL: [ExperimentKind; 6] = [
        Self::Ai,
        Self::Ml,
        Self::Robotics,
        Self::WebGl,
        Self::ThreeD,
        Self::Research,
    ];

    /// Stable wire string, identical to the serde name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Ml => "ML",
            Self::Robotics => "Robotics",
            Self::WebGl => "WebGL",
            Self::ThreeD => "3D",
            Self::Research => "Research",
        }
    }
}

/// Lifecycle state of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentStatus {
    Active,
    Completed,
    Paused,
}

impl ExperimentStatus {
    pub const ALL: [ExperimentStatus; 3] = [Self::Active, Self::Completed, Self::Paused];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
    Gif,
}

/// One media attachment shown in an experiment card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub alt: String,
}

/// Research/experiment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub id: RecordId,
    pub name: String,
    /// Serialized as `type` to match the fixture schema.
    #[serde(rename = "type")]
    pub kind: ExperimentKind,
    pub description: String,
    pub media: Vec<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    pub status: ExperimentStatus,
    pub start_date: NaiveDate,
    pub technologies: Vec<String>,
}

impl Experiment {
    /// Creates an experiment without media, results or technologies.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        kind: ExperimentKind,
        status: ExperimentStatus,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            description: String::new(),
            media: Vec::new(),
            results: None,
            status,
            start_date,
            technologies: Vec::new(),
        }
    }
}
