//! One-click shortcuts listed under the assistant input.

use crate::assistant::intent::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub id: &'static str,
    pub label: &'static str,
    pub intent: Intent,
}

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        id: "view-projects",
        label: "Show my projects",
        intent: Intent::ShowProjects,
    },
    QuickAction {
        id: "view-experiments",
        label: "Browse experiments",
        intent: Intent::ShowExperiments,
    },
    QuickAction {
        id: "download-resume",
        label: "Download resume",
        intent: Intent::DownloadResume,
    },
    QuickAction {
        id: "contact",
        label: "Get in touch",
        intent: Intent::Contact,
    },
    QuickAction {
        id: "featured-projects",
        label: "Show featured work",
        intent: Intent::ShowFeatured,
    },
];

/// Quick actions in display order.
pub fn quick_actions() -> &'static [QuickAction] {
    QUICK_ACTIONS
}

pub fn find_quick_action(id: &str) -> Option<&'static QuickAction> {
    QUICK_ACTIONS.iter().find(|action| action.id == id.trim())
}
