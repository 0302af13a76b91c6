//! Intent-to-action table and dispatch.
//!
//! # Responsibility
//! - Map every `Intent` to one external action built from `SiteConfig`.
//! - Execute that action through an injected `Navigator`.
//!
//! # Invariants
//! - `ActionTable::action` is total over `Intent`.
//! - `dispatch` performs exactly one navigator call per invocation.
//! - Query text is never logged; only its length.

use crate::assistant::intent::{classify_with_fallback, Intent, DEFAULT_FALLBACK_INTENT};
use crate::config::SiteConfig;
use log::debug;

/// Side effect requested by an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAction {
    /// Transition the current view to a site path.
    Navigate(String),
    /// Open a resource in a new context (tab, mail client).
    OpenExternal(String),
}

impl ExternalAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::OpenExternal(_) => "open_external",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Navigate(target) | Self::OpenExternal(target) => target,
        }
    }

    /// Hands this action to the navigation collaborator.
    pub fn perform<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        match self {
            Self::Navigate(path) => navigator.navigate(path),
            Self::OpenExternal(url) => navigator.open_external(url),
        }
    }
}

/// Navigation collaborator supplied by the presentation shell.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
    fn open_external(&mut self, url: &str);
}

/// Total mapping from intents to actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTable {
    projects: ExternalAction,
    experiments: ExternalAction,
    featured: ExternalAction,
    resume: ExternalAction,
    contact: ExternalAction,
    home: ExternalAction,
}

impl ActionTable {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            projects: ExternalAction::Navigate(config.projects_path.clone()),
            experiments: ExternalAction::Navigate(config.experiments_path.clone()),
            featured: ExternalAction::Navigate(config.featured_path()),
            resume: ExternalAction::OpenExternal(config.resume_url.clone()),
            contact: ExternalAction::OpenExternal(config.contact_url.clone()),
            home: ExternalAction::Navigate(config.home_path.clone()),
        }
    }

    /// Action bound to `intent`.
    ///
    /// `Unrecognized` lands on the projects listing, like the fallback rule.
    pub fn action(&self, intent: Intent) -> &ExternalAction {
        match intent {
            Intent::ShowProjects | Intent::Unrecognized => &self.projects,
            Intent::ShowExperiments => &self.experiments,
            Intent::ShowFeatured => &self.featured,
            Intent::DownloadResume => &self.resume,
            Intent::Contact => &self.contact,
            Intent::ShowHome => &self.home,
        }
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Performs the action bound to `intent`, exactly once.
pub fn dispatch<N: Navigator + ?Sized>(intent: Intent, actions: &ActionTable, navigator: &mut N) {
    let action = actions.action(intent);
    debug!(
        "event=intent_dispatch module=assistant intent={} action={}",
        intent.as_str(),
        action.kind()
    );
    action.perform(navigator);
}

/// Classify-then-dispatch front door used by the assistant widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRouter {
    actions: ActionTable,
    fallback: Intent,
}

impl IntentRouter {
    pub fn new(actions: ActionTable) -> Self {
        Self {
            actions,
            fallback: DEFAULT_FALLBACK_INTENT,
        }
    }

    /// Overrides the outcome for queries no rule matches.
    pub fn with_fallback(mut self, fallback: Intent) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    pub fn classify(&self, text: &str) -> Intent {
        classify_with_fallback(text, self.fallback)
    }

    /// Classifies `text`, dispatches its action and returns the intent.
    pub fn route<N: Navigator + ?Sized>(&self, text: &str, navigator: &mut N) -> Intent {
        let intent = self.classify(text);
        debug!(
            "event=assistant_query module=assistant query_len={} intent={}",
            text.chars().count(),
            intent.as_str()
        );
        dispatch(intent, &self.actions, navigator);
        intent
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new(ActionTable::default())
    }
}
