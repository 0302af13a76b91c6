//! Site routing configuration consumed by the assistant and listings.
//!
//! # Responsibility
//! - Hold the destinations behind every assistant action.
//! - Build detail/featured paths from the configured prefixes.
//!
//! # Invariants
//! - Internal paths start with `/`.
//! - External targets (resume, contact) are non-empty.
//! - `featured_query` is a single `key=value` pair.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_HOME_PATH: &str = "/";
const DEFAULT_PROJECTS_PATH: &str = "/projects";
const DEFAULT_EXPERIMENTS_PATH: &str = "/experiments";
const DEFAULT_FEATURED_QUERY: &str = "featured=true";
const DEFAULT_RESUME_URL: &str = "/resume.pdf";
const DEFAULT_CONTACT_URL: &str = "mailto:hello@example.dev";

/// Destinations used by navigation chrome and assistant actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub home_path: String,
    pub projects_path: String,
    pub experiments_path: String,
    /// Query appended to `projects_path` to open the featured tab.
    pub featured_query: String,
    /// Opened in a new context, may be site-relative.
    pub resume_url: String,
    /// Opened in a new context, typically a `mailto:` link.
    ///
    /// Defaults to a placeholder mailbox; deployments set their own.
    pub contact_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_path: DEFAULT_HOME_PATH.to_string(),
            projects_path: DEFAULT_PROJECTS_PATH.to_string(),
            experiments_path: DEFAULT_EXPERIMENTS_PATH.to_string(),
            featured_query: DEFAULT_FEATURED_QUERY.to_string(),
            resume_url: DEFAULT_RESUME_URL.to_string(),
            contact_url: DEFAULT_CONTACT_URL.to_string(),
        }
    }
}

/// Entry of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub href: String,
}

impl SiteConfig {
    /// Parses and validates a JSON config document.
    ///
    /// Missing fields fall back to defaults; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_path("home_path", &self.home_path)?;
        require_path("projects_path", &self.projects_path)?;
        require_path("experiments_path", &self.experiments_path)?;
        require_target("resume_url", &self.resume_url)?;
        require_target("contact_url", &self.contact_url)?;

        if self.featured_pair().is_none() {
            return Err(ConfigError::InvalidQuery(self.featured_query.clone()));
        }
        Ok(())
    }

    /// `featured_query` split into its key and value.
    ///
    /// `None` when the query is not a single non-empty `key=value` pair.
    pub fn featured_pair(&self) -> Option<(&str, &str)> {
        let (key, value) = self.featured_query.split_once('=')?;
        if key.is_empty() || value.is_empty() || key.contains('&') || value.contains(['&', '=']) {
            return None;
        }
        Some((key, value))
    }

    /// Detail page path addressed by a project id, percent-encoded.
    pub fn project_path(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.projects_path.trim_end_matches('/'),
            urlencoding::encode(id)
        )
    }

    /// Projects listing opened on the featured tab.
    pub fn featured_path(&self) -> String {
        format!("{}?{}", self.projects_path, self.featured_query)
    }

    pub fn navigation_items(&self) -> Vec<NavigationItem> {
        vec![
            NavigationItem {
                label: "Home",
                href: self.home_path.clone(),
            },
            NavigationItem {
                label: "Projects",
                href: self.projects_path.clone(),
            },
            NavigationItem {
                label: "Experiments",
                href: self.experiments_path.clone(),
            },
        ]
    }
}

fn require_path(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with('/') && !value.contains(char::is_whitespace) {
        return Ok(());
    }
    Err(ConfigError::InvalidPath {
        field,
        value: value.to_string(),
    })
}

fn require_target(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyTarget(field));
    }
    Ok(())
}

/// Site config parse/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidPath { field: &'static str, value: String },
    EmptyTarget(&'static str),
    InvalidQuery(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid site config: {err}"),
            Self::InvalidPath { field, value } => {
                write!(f, "{field} must be an absolute site path, got `{value}`")
            }
            Self::EmptyTarget(field) => write!(f, "{field} must not be empty"),
            Self::InvalidQuery(value) => {
                write!(f, "featured_query must be a single key=value pair, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
