use chrono::NaiveDate;
use folio_core::{
    count, facet_counts, filter, Catalog, Experiment, ExperimentFacet, ExperimentKind,
    ExperimentStatus, Facet, FacetSelection, Project, ProjectFacet, SiteConfig, TechnologyGroup,
    EXPERIMENT_TABS,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn project(id: &str, featured: bool, techs: &[&str]) -> Project {
    let mut project = Project::new(id, id, date(2024, 1, 1));
    project.featured = featured;
    project.technologies = techs.iter().map(|tech| tech.to_string()).collect();
    project
}

fn experiment(id: &str, kind: ExperimentKind, status: ExperimentStatus) -> Experiment {
    Experiment::new(id, id, kind, status, date(2024, 1, 1))
}

fn sample_projects() -> Vec<Project> {
    vec![
        project("site", true, &["Next.js", "Three.js"]),
        project("arm", true, &["ROS", "Computer Vision"]),
        project("fluid", false, &["WebGL", "GLSL"]),
        project("notes", false, &["react", "SQLite"]),
        project("mesh", false, &["Hardware"]),
    ]
}

fn sample_experiments() -> Vec<Experiment> {
    vec![
        experiment("e1", ExperimentKind::Ai, ExperimentStatus::Completed),
        experiment("e2", ExperimentKind::ThreeD, ExperimentStatus::Active),
        experiment("e3", ExperimentKind::WebGl, ExperimentStatus::Active),
        experiment("e4", ExperimentKind::Ml, ExperimentStatus::Paused),
        experiment("e5", ExperimentKind::ThreeD, ExperimentStatus::Completed),
        experiment("e6", ExperimentKind::Research, ExperimentStatus::Active),
    ]
}

fn ids<T>(records: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
    records.iter().map(|record| id(*record).to_string()).collect()
}

fn project_ids(records: &[&Project]) -> Vec<String> {
    ids(records, |p| p.id.as_str())
}

fn experiment_ids(records: &[&Experiment]) -> Vec<String> {
    ids(records, |e| e.id.as_str())
}

fn is_subsequence(sub: &[String], full: &[String]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|candidate| candidate == wanted))
}

#[test]
fn all_facet_is_identity() {
    let projects = sample_projects();
    let all: Vec<Project> = filter(&projects, ProjectFacet::All)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(all, projects);

    let experiments = sample_experiments();
    assert_eq!(
        filter(&experiments, ExperimentFacet::All).len(),
        experiments.len()
    );
}

#[test]
fn every_facet_yields_an_ordered_subsequence() {
    let projects = sample_projects();
    let all_projects: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();
    for facet in ProjectFacet::all() {
        let visible = project_ids(&filter(&projects, *facet));
        assert!(is_subsequence(&visible, &all_projects), "facet {}", facet.key());
    }

    let experiments = sample_experiments();
    let all_experiments: Vec<String> = experiments.iter().map(|e| e.id.clone()).collect();
    for facet in ExperimentFacet::all() {
        let visible = experiment_ids(&filter(&experiments, *facet));
        assert!(
            is_subsequence(&visible, &all_experiments),
            "facet {}",
            facet.key()
        );
    }
}

#[test]
fn counts_equal_filter_lengths_for_every_facet() {
    let projects = sample_projects();
    for entry in facet_counts::<ProjectFacet>(&projects) {
        assert_eq!(entry.count, filter(&projects, entry.facet).len());
    }

    let experiments = sample_experiments();
    for entry in facet_counts::<ExperimentFacet>(&experiments) {
        assert_eq!(entry.count, filter(&experiments, entry.facet).len());
    }
}

#[test]
fn filtering_twice_is_idempotent() {
    let projects = sample_projects();
    for facet in ProjectFacet::all() {
        let once: Vec<Project> = filter(&projects, *facet).into_iter().cloned().collect();
        let twice: Vec<Project> = filter(&once, *facet).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    let experiments = sample_experiments();
    for facet in ExperimentFacet::all() {
        let once: Vec<Experiment> = filter(&experiments, *facet)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Experiment> = filter(&once, *facet).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}

#[test]
fn composite_facet_is_ordered_union_of_its_kinds() {
    let experiments = sample_experiments();
    let composite = experiment_ids(&filter(&experiments, ExperimentFacet::ThreeDOrWebGl));
    assert_eq!(composite, vec!["e2", "e3", "e5"]);

    let three_d = experiment_ids(&filter(
        &experiments,
        ExperimentFacet::Kind(ExperimentKind::ThreeD),
    ));
    let webgl = experiment_ids(&filter(
        &experiments,
        ExperimentFacet::Kind(ExperimentKind::WebGl),
    ));
    let union: Vec<String> = experiments
        .iter()
        .map(|e| e.id.clone())
        .filter(|id| three_d.contains(id) || webgl.contains(id))
        .collect();
    assert_eq!(composite, union);
    assert_eq!(three_d, vec!["e2", "e5"]);
}

#[test]
fn status_facets_match_exact_status() {
    let experiments = vec![
        experiment("p1", ExperimentKind::Ai, ExperimentStatus::Active),
        experiment("p2", ExperimentKind::Ai, ExperimentStatus::Completed),
        experiment("p3", ExperimentKind::Ai, ExperimentStatus::Active),
    ];
    let active = ExperimentFacet::Status(ExperimentStatus::Active);
    let completed = ExperimentFacet::Status(ExperimentStatus::Completed);

    assert_eq!(experiment_ids(&filter(&experiments, active)), vec!["p1", "p3"]);
    assert_eq!(count(&experiments, active), 2);
    assert_eq!(count(&experiments, completed), 1);
    assert_eq!(count(&experiments, ExperimentFacet::All), 3);
}

#[test]
fn technology_groups_use_case_sensitive_intersection() {
    let projects = sample_projects();
    assert_eq!(
        project_ids(&filter(&projects, ProjectFacet::Group(TechnologyGroup::Web))),
        vec!["site", "fluid"]
    );
    assert_eq!(
        project_ids(&filter(&projects, ProjectFacet::Group(TechnologyGroup::Ai))),
        vec!["arm"]
    );
    assert_eq!(
        project_ids(&filter(
            &projects,
            ProjectFacet::Group(TechnologyGroup::Robotics)
        )),
        vec!["arm", "mesh"]
    );
    assert_eq!(
        project_ids(&filter(&projects, ProjectFacet::Featured)),
        vec!["site", "arm"]
    );
}

#[test]
fn zero_matches_is_empty_not_error() {
    let experiments = vec![experiment("only", ExperimentKind::Ai, ExperimentStatus::Active)];
    assert!(filter(&experiments, ExperimentFacet::Kind(ExperimentKind::Robotics)).is_empty());
    assert!(filter::<ExperimentFacet>(&[], ExperimentFacet::All).is_empty());
}

#[test]
fn selection_drives_visible_records() {
    let projects = sample_projects();
    let mut selection = FacetSelection::<ProjectFacet>::from_query("featured=true", &SiteConfig::default());
    assert_eq!(project_ids(&selection.visible(&projects)), vec!["site", "arm"]);

    selection.select(ProjectFacet::All);
    assert_eq!(selection.visible(&projects).len(), projects.len());
}

#[test]
fn bundled_catalog_tab_counts_are_consistent() {
    let catalog = Catalog::bundled().expect("bundled catalog");
    for entry in catalog.experiment_tab_counts(EXPERIMENT_TABS) {
        assert_eq!(
            entry.count,
            filter(catalog.experiments(), entry.facet).len(),
            "tab {}",
            entry.label()
        );
    }
    let featured = catalog.featured_projects().len();
    assert_eq!(count(catalog.projects(), ProjectFacet::Featured), featured);
}
