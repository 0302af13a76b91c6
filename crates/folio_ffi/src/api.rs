//! FFI use-case API for the site shell.
//!
//! # Responsibility
//! - Expose listing, detail and assistant use-cases as sync calls.
//! - Fold every failure into a response envelope message.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The catalog is decoded once per process and reused.
//! - The site config is fixed by the first `configure_site` call, or by the
//!   first call that needs it (defaults).
//! - Assistant responses describe the action; the shell performs it.

use folio_core::{
    core_version as core_version_inner, find_quick_action, init_logging as init_logging_inner,
    ping as ping_inner, quick_actions, ActionTable, Catalog, Experiment, ExperimentFacet, Facet,
    FacetCount, FacetSelection, Intent, IntentRouter, Navigator, Project, ProjectFacet,
    SiteConfig, EXPERIMENT_TABS, PROJECT_TABS,
};
use log::{info, warn};
use std::sync::OnceLock;

static CATALOG: OnceLock<Result<Catalog, String>> = OnceLock::new();
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();
static ROUTER: OnceLock<IntentRouter> = OnceLock::new();

/// Minimal health-check API for shell smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Installs the site routing config from a JSON document.
///
/// Missing fields keep their defaults; unknown fields are rejected.
///
/// # FFI contract
/// - Call before any listing or assistant call to take effect.
/// - Repeating the same config is a no-op; a different one is rejected.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_site(config_json: String) -> String {
    let requested = match SiteConfig::from_json_str(config_json.as_str()) {
        Ok(config) => config,
        Err(err) => return format!("configure_site failed: {err}"),
    };
    let active = SITE_CONFIG.get_or_init(|| {
        info!("event=site_configure module=ffi status=ok");
        requested.clone()
    });
    if *active == requested {
        String::new()
    } else {
        "configure_site failed: site config already fixed; refusing to switch".to_string()
    }
}

/// Top navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: String,
    pub href: String,
}

/// Top navigation entries for the active site config.
#[flutter_rust_bridge::frb(sync)]
pub fn site_navigation() -> Vec<NavigationEntry> {
    site_config()
        .navigation_items()
        .into_iter()
        .map(|item| NavigationEntry {
            label: item.label.to_string(),
            href: item.href,
        })
        .collect()
}

/// Action the shell must perform for an assistant request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRouteResponse {
    pub ok: bool,
    /// Intent wire name (`show-projects`, `contact`, ...), empty on failure.
    pub intent: String,
    /// `navigate` or `open_external`, empty on failure.
    pub action_kind: String,
    /// Site path or external URL.
    pub target: String,
    pub message: String,
}

impl AssistantRouteResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            intent: String::new(),
            action_kind: String::new(),
            target: String::new(),
            message: message.into(),
        }
    }
}

/// Quick action entry rendered below the assistant input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickActionItem {
    pub id: String,
    pub label: String,
    pub intent: String,
}

/// Filter tab with its live count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetTabItem {
    pub key: String,
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub demo_link: Option<String>,
    pub source_link: Option<String>,
    pub featured: bool,
    /// Card placeholder letters.
    pub initials: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub completed_date: String,
    /// Detail page path, id percent-encoded.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub ok: bool,
    pub items: Vec<ProjectItem>,
    /// Effective facet key; `all` when the request failed.
    pub applied_facet: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentItem {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub status: String,
    pub description: String,
    pub media_count: u32,
    pub results: Option<String>,
    pub start_date: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentListResponse {
    pub ok: bool,
    pub items: Vec<ExperimentItem>,
    pub applied_facet: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentStatsResponse {
    pub active: u32,
    pub completed: u32,
    pub paused: u32,
    pub technologies: u32,
    pub media_files: u32,
}

/// Classifies assistant text and returns the bound action.
///
/// # FFI contract
/// - Never panics; any text (including empty) resolves to an action.
#[flutter_rust_bridge::frb(sync)]
pub fn assistant_route(query: String) -> AssistantRouteResponse {
    let mut capture = ActionCapture::default();
    let intent = router().route(query.as_str(), &mut capture);
    capture.into_response(intent)
}

/// Runs one quick action by id.
///
/// Unknown ids return `ok=false` instead of falling back.
#[flutter_rust_bridge::frb(sync)]
pub fn assistant_quick_action(id: String) -> AssistantRouteResponse {
    let Some(action) = find_quick_action(id.as_str()) else {
        return AssistantRouteResponse::failure(format!("unknown quick action: {}", id.trim()));
    };
    let mut capture = ActionCapture::default();
    folio_core::dispatch(action.intent, router().actions(), &mut capture);
    capture.into_response(action.intent)
}

#[flutter_rust_bridge::frb(sync)]
pub fn assistant_quick_actions() -> Vec<QuickActionItem> {
    quick_actions()
        .iter()
        .map(|action| QuickActionItem {
            id: action.id.to_string(),
            label: action.label.to_string(),
            intent: action.intent.as_str().to_string(),
        })
        .collect()
}

/// Lists projects under one facet key (`all|featured|web|ai|robotics`).
///
/// # FFI contract
/// - Unknown facet keys return `ok=false` with an empty list.
/// - Item order follows the bundled collection.
#[flutter_rust_bridge::frb(sync)]
pub fn projects_list(facet: String) -> ProjectListResponse {
    match ProjectFacet::parse(facet.as_str()) {
        Ok(facet) => list_projects(facet),
        Err(err) => project_list_failure(format!("projects_list failed: {err}")),
    }
}

/// Lists projects for the listing page's incoming query string.
///
/// The configured featured pair (default `featured=true`) opens the
/// featured tab; any other query lists everything.
#[flutter_rust_bridge::frb(sync)]
pub fn projects_list_for_query(query: String) -> ProjectListResponse {
    let selection = FacetSelection::<ProjectFacet>::from_query(query.as_str(), site_config());
    list_projects(selection.current())
}

/// Project filter tabs with counts, in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn project_facet_tabs() -> Vec<FacetTabItem> {
    match catalog() {
        Ok(catalog) => to_tab_items(catalog.project_tab_counts(PROJECT_TABS)),
        Err(_) => Vec::new(),
    }
}

/// Detail-page lookup. `None` means the shell should render not-found.
#[flutter_rust_bridge::frb(sync)]
pub fn project_detail(id: String) -> Option<ProjectItem> {
    let catalog = catalog().ok()?;
    catalog
        .find_project(id.trim())
        .map(|project| to_project_item(project, site_config()))
}

/// Lists experiments under one facet key (`all|active|...|AI|...|3D/WebGL`).
#[flutter_rust_bridge::frb(sync)]
pub fn experiments_list(facet: String) -> ExperimentListResponse {
    let failure = |message: String| ExperimentListResponse {
        ok: false,
        items: Vec::new(),
        applied_facet: ExperimentFacet::All.key().to_string(),
        message,
    };
    let catalog = match catalog() {
        Ok(catalog) => catalog,
        Err(err) => return failure(format!("experiments_list failed: {err}")),
    };
    let facet = match ExperimentFacet::parse(facet.as_str()) {
        Ok(facet) => facet,
        Err(err) => return failure(format!("experiments_list failed: {err}")),
    };

    let items = folio_core::filter(catalog.experiments(), facet)
        .into_iter()
        .map(to_experiment_item)
        .collect::<Vec<_>>();
    ExperimentListResponse {
        ok: true,
        message: listing_message(items.len(), "experiments"),
        items,
        applied_facet: facet.key().to_string(),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn experiment_facet_tabs() -> Vec<FacetTabItem> {
    match catalog() {
        Ok(catalog) => to_tab_items(catalog.experiment_tab_counts(EXPERIMENT_TABS)),
        Err(_) => Vec::new(),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn experiment_stats() -> ExperimentStatsResponse {
    let stats = catalog()
        .map(Catalog::experiment_stats)
        .unwrap_or_default();
    ExperimentStatsResponse {
        active: to_u32(stats.active),
        completed: to_u32(stats.completed),
        paused: to_u32(stats.paused),
        technologies: to_u32(stats.technologies),
        media_files: to_u32(stats.media_files),
    }
}

/// Navigator that records the requested action instead of performing it.
#[derive(Debug, Default)]
struct ActionCapture {
    action: Option<(&'static str, String)>,
}

impl Navigator for ActionCapture {
    fn navigate(&mut self, path: &str) {
        self.action = Some(("navigate", path.to_string()));
    }

    fn open_external(&mut self, url: &str) {
        self.action = Some(("open_external", url.to_string()));
    }
}

impl ActionCapture {
    fn into_response(self, intent: Intent) -> AssistantRouteResponse {
        match self.action {
            Some((kind, target)) => AssistantRouteResponse {
                ok: true,
                intent: intent.as_str().to_string(),
                action_kind: kind.to_string(),
                target,
                message: String::new(),
            },
            None => AssistantRouteResponse::failure("no action dispatched"),
        }
    }
}

fn catalog() -> Result<&'static Catalog, &'static str> {
    CATALOG
        .get_or_init(|| {
            Catalog::bundled().map_err(|err| {
                warn!("event=catalog_load module=ffi status=error error={err}");
                err.to_string()
            })
        })
        .as_ref()
        .map_err(String::as_str)
}

fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(SiteConfig::default)
}

fn router() -> &'static IntentRouter {
    ROUTER.get_or_init(|| IntentRouter::new(ActionTable::from_config(site_config())))
}

fn list_projects(facet: ProjectFacet) -> ProjectListResponse {
    let catalog = match catalog() {
        Ok(catalog) => catalog,
        Err(err) => return project_list_failure(format!("projects_list failed: {err}")),
    };
    let config = site_config();
    let items = folio_core::filter(catalog.projects(), facet)
        .into_iter()
        .map(|project| to_project_item(project, config))
        .collect::<Vec<_>>();
    ProjectListResponse {
        ok: true,
        message: listing_message(items.len(), "projects"),
        items,
        applied_facet: facet.key().to_string(),
    }
}

fn project_list_failure(message: String) -> ProjectListResponse {
    ProjectListResponse {
        ok: false,
        items: Vec::new(),
        applied_facet: ProjectFacet::All.key().to_string(),
        message,
    }
}

fn listing_message(count: usize, noun: &str) -> String {
    if count == 0 {
        format!("No {noun} found.")
    } else {
        format!("Found {count} {noun}.")
    }
}

fn to_tab_items<F: Facet>(counts: Vec<FacetCount<F>>) -> Vec<FacetTabItem> {
    counts
        .into_iter()
        .map(|entry| FacetTabItem {
            key: entry.key().to_string(),
            label: entry.label().to_string(),
            count: to_u32(entry.count),
        })
        .collect()
}

fn to_project_item(project: &Project, config: &SiteConfig) -> ProjectItem {
    ProjectItem {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
        images: project.images.clone(),
        demo_link: project.demo_link.clone(),
        source_link: project.source_link.clone(),
        featured: project.featured,
        initials: project.initials(),
        completed_date: project.completed_date.to_string(),
        path: config.project_path(&project.id),
    }
}

fn to_experiment_item(experiment: &Experiment) -> ExperimentItem {
    ExperimentItem {
        id: experiment.id.clone(),
        name: experiment.name.clone(),
        kind: experiment.kind.as_str().to_string(),
        status: experiment.status.as_str().to_string(),
        description: experiment.description.clone(),
        media_count: to_u32(experiment.media.len()),
        results: experiment.results.clone(),
        start_date: experiment.start_date.to_string(),
        technologies: experiment.technologies.clone(),
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
