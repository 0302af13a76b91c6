use folio_core::{
    classify, dispatch, find_quick_action, quick_actions, ActionTable, ExternalAction,
    FacetSelection, Intent, IntentRouter, Navigator, ProjectFacet, SiteConfig,
};

#[derive(Debug, Default)]
struct RecordingNavigator {
    navigations: Vec<String>,
    external_opens: Vec<String>,
}

impl RecordingNavigator {
    fn total_calls(&self) -> usize {
        self.navigations.len() + self.external_opens.len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
    }

    fn open_external(&mut self, url: &str) {
        self.external_opens.push(url.to_string());
    }
}

#[test]
fn classifies_documented_queries() {
    let cases = [
        ("", Intent::ShowProjects),
        ("Show me your projects", Intent::ShowProjects),
        ("browse experiments please", Intent::ShowExperiments),
        ("send me your CV", Intent::DownloadResume),
        ("how can I get in touch", Intent::Contact),
        ("tell me about yourself", Intent::ShowHome),
        ("projector screen", Intent::ShowProjects),
        ("what is your email?", Intent::Contact),
        ("latest RESEARCH", Intent::ShowExperiments),
        ("download resume", Intent::DownloadResume),
        ("take me home", Intent::ShowHome),
        ("zzz", Intent::ShowProjects),
    ];
    for (query, expected) in cases {
        assert_eq!(classify(query), expected, "query {query:?}");
    }
}

#[test]
fn dispatch_invokes_exactly_one_action_per_intent() {
    let table = ActionTable::default();
    for intent in Intent::ALL {
        let mut navigator = RecordingNavigator::default();
        dispatch(intent, &table, &mut navigator);
        assert_eq!(navigator.total_calls(), 1, "intent {}", intent.as_str());
    }
}

#[test]
fn dispatch_uses_external_open_for_resume_and_contact() {
    let table = ActionTable::default();

    let mut navigator = RecordingNavigator::default();
    dispatch(Intent::DownloadResume, &table, &mut navigator);
    assert_eq!(navigator.external_opens, vec!["/resume.pdf"]);
    assert!(navigator.navigations.is_empty());

    let mut navigator = RecordingNavigator::default();
    dispatch(Intent::Contact, &table, &mut navigator);
    assert_eq!(navigator.external_opens.len(), 1);
    assert!(navigator.external_opens[0].starts_with("mailto:"));
}

#[test]
fn router_routes_free_text_to_site_paths() {
    let router = IntentRouter::default();
    let cases = [
        ("show projects", "/projects"),
        ("experiments", "/experiments"),
        ("about", "/"),
        ("???", "/projects"),
    ];
    for (query, path) in cases {
        let mut navigator = RecordingNavigator::default();
        router.route(query, &mut navigator);
        assert_eq!(navigator.navigations, vec![path.to_string()], "query {query:?}");
        assert!(navigator.external_opens.is_empty());
    }
}

#[test]
fn router_fallback_can_be_reconfigured() {
    let router = IntentRouter::default().with_fallback(Intent::Unrecognized);
    let mut navigator = RecordingNavigator::default();
    let intent = router.route("hello there", &mut navigator);
    assert_eq!(intent, Intent::Unrecognized);
    assert_eq!(navigator.total_calls(), 1);
}

#[test]
fn router_follows_custom_site_config() {
    let config = SiteConfig {
        projects_path: "/work".to_string(),
        ..SiteConfig::default()
    };
    let router = IntentRouter::new(ActionTable::from_config(&config));
    let mut navigator = RecordingNavigator::default();
    router.route("featured", &mut navigator);
    assert_eq!(navigator.navigations, vec!["/work"]);
    assert_eq!(
        router.actions().action(Intent::ShowFeatured),
        &ExternalAction::Navigate("/work?featured=true".to_string())
    );
}

#[test]
fn quick_actions_share_intent_actions() {
    let table = ActionTable::default();
    let featured = find_quick_action("featured-projects").unwrap();

    let mut navigator = RecordingNavigator::default();
    dispatch(featured.intent, &table, &mut navigator);
    assert_eq!(navigator.navigations, vec!["/projects?featured=true"]);

    for action in quick_actions() {
        let mut navigator = RecordingNavigator::default();
        dispatch(action.intent, &table, &mut navigator);
        assert_eq!(navigator.total_calls(), 1, "quick action {}", action.id);
    }
}

#[test]
fn show_featured_target_opens_the_featured_tab() {
    for featured_query in ["featured=true", "highlight=yes"] {
        let config = SiteConfig {
            featured_query: featured_query.to_string(),
            ..SiteConfig::default()
        };
        config.validate().expect("featured query should validate");

        let table = ActionTable::from_config(&config);
        let target = table.action(Intent::ShowFeatured).target();
        let (path, query) = target.split_once('?').expect("featured target has a query");
        assert_eq!(path, config.projects_path);

        let selection = FacetSelection::<ProjectFacet>::from_query(query, &config);
        assert_eq!(selection.current(), ProjectFacet::Featured, "query {query:?}");
    }
}
