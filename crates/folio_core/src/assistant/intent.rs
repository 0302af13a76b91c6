//! Decision-list intent classification.
//!
//! # Invariants
//! - `INTENT_RULES` is evaluated top to bottom; the first rule with a
//!   keyword contained in the lowercased query wins.
//! - Matching is plain substring containment ("projector" hits "project").
//! - Queries matching no rule resolve to the router fallback, which is
//!   `ShowProjects` unless configured otherwise.

use serde::{Deserialize, Serialize};

/// Classified purpose of an assistant query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    ShowProjects,
    ShowExperiments,
    ShowFeatured,
    DownloadResume,
    Contact,
    ShowHome,
    Unrecognized,
}

impl Intent {
    pub const ALL: [Intent; 7] = [
        Self::ShowProjects,
        Self::ShowExperiments,
        Self::ShowFeatured,
        Self::DownloadResume,
        Self::Contact,
        Self::ShowHome,
        Self::Unrecognized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShowProjects => "show-projects",
            Self::ShowExperiments => "show-experiments",
            Self::ShowFeatured => "show-featured",
            Self::DownloadResume => "download-resume",
            Self::Contact => "contact",
            Self::ShowHome => "show-home",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// One (keywords, outcome) row of the decision list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    /// Lowercase keywords; any one contained in the query satisfies the rule.
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

impl IntentRule {
    fn is_satisfied_by(&self, lowered_query: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_query.contains(keyword))
    }
}

/// Ordered decision list. Order encodes priority.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["project", "work"],
        intent: Intent::ShowProjects,
    },
    IntentRule {
        keywords: &["experiment", "research"],
        intent: Intent::ShowExperiments,
    },
    IntentRule {
        keywords: &["resume", "cv"],
        intent: Intent::DownloadResume,
    },
    IntentRule {
        keywords: &["contact", "email", "touch"],
        intent: Intent::Contact,
    },
    IntentRule {
        keywords: &["home", "about"],
        intent: Intent::ShowHome,
    },
];

/// Outcome when no rule matches.
pub const DEFAULT_FALLBACK_INTENT: Intent = Intent::ShowProjects;

/// Classifies `text` with the default fallback.
pub fn classify(text: &str) -> Intent {
    classify_with_fallback(text, DEFAULT_FALLBACK_INTENT)
}

/// Classifies `text`, returning `fallback` when no rule matches.
pub fn classify_with_fallback(text: &str, fallback: Intent) -> Intent {
    let lowered = text.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.is_satisfied_by(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or(fallback)
}
