//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Exercise the assistant and catalog from a terminal.
//!
//! Without a subcommand it prints ping and version, like the original probe.

use clap::{Parser, Subcommand};
use folio_core::{
    ActionTable, Catalog, ExperimentFacet, Facet, FacetCount, FacetSelection, IntentRouter,
    Navigator, ProjectFacet, SiteConfig, EXPERIMENT_TABS, PROJECT_TABS,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "folio core probe")]
struct Args {
    /// Site config JSON; defaults apply when omitted.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Route an assistant query and print the resulting action
    Ask {
        /// Free-text query; words are joined with spaces
        text: Vec<String>,
    },
    /// List projects under a facet (all|featured|web|ai|robotics)
    Projects {
        facet: Option<String>,
        /// Listing query string, e.g. `featured=true`
        #[arg(long, conflicts_with = "facet")]
        query: Option<String>,
    },
    /// List experiments under a facet (all|active|completed|paused|AI|...|3D/WebGL)
    Experiments { facet: Option<String> },
}

/// Prints actions instead of performing them.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&mut self, path: &str) {
        println!("action=navigate target={path}");
    }

    fn open_external(&mut self, url: &str) {
        println!("action=open_external target={url}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let Some(command) = args.command else {
        println!("folio_core ping={}", folio_core::ping());
        println!("folio_core version={}", folio_core::core_version());
        return Ok(());
    };
    let config = load_config(args.config.as_deref())?;

    match command {
        Command::Ask { text } => {
            let router = IntentRouter::new(ActionTable::from_config(&config));
            let intent = router.route(&text.join(" "), &mut PrintNavigator);
            println!("intent={}", intent.as_str());
            Ok(())
        }
        Command::Projects { facet, query } => {
            let facet = match query {
                Some(query) => {
                    FacetSelection::<ProjectFacet>::from_query(&query, &config).current()
                }
                None => parse_or_all(facet.as_deref())?,
            };
            list_projects(facet, &config)
        }
        Command::Experiments { facet } => list_experiments(parse_or_all(facet.as_deref())?),
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig, String> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
    SiteConfig::from_json_str(&json).map_err(|err| err.to_string())
}

fn list_projects(facet: ProjectFacet, config: &SiteConfig) -> Result<(), String> {
    let catalog = Catalog::bundled().map_err(|err| err.to_string())?;
    for project in folio_core::filter(catalog.projects(), facet) {
        println!("{}\t{}", config.project_path(&project.id), project.title);
    }
    print_tabs(&catalog.project_tab_counts(PROJECT_TABS));
    Ok(())
}

fn list_experiments(facet: ExperimentFacet) -> Result<(), String> {
    let catalog = Catalog::bundled().map_err(|err| err.to_string())?;
    for experiment in folio_core::filter(catalog.experiments(), facet) {
        println!(
            "{}\t{}\t{}",
            experiment.id,
            experiment.kind.as_str(),
            experiment.status.as_str()
        );
    }
    print_tabs(&catalog.experiment_tab_counts(EXPERIMENT_TABS));
    Ok(())
}

fn parse_or_all<F: Facet + Default>(key: Option<&str>) -> Result<F, String> {
    match key {
        Some(key) => F::parse(key).map_err(|err| err.to_string()),
        None => Ok(F::default()),
    }
}

fn print_tabs<F: Facet>(tabs: &[FacetCount<F>]) {
    let line = tabs
        .iter()
        .map(|tab| format!("{}={}", tab.key(), tab.count))
        .collect::<Vec<_>>()
        .join(" ");
    println!("tabs {line}");
}
