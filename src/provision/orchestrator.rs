use chrono::Utc;
use futures::stream::{self, StreamExt};

use crate::error::ConfigurationError;
use crate::gns3::{Connector, ProjectPolicy, Session, TemplateCatalog};
use crate::targets::{resolve_targets, AddressTemplate, Credentials, Target};
use crate::topology::{StartOrder, TopologyCatalog};

use super::{builder, inject, lifecycle, report};
use super::{ResourceFailure, ResourceKind, RunReport, Stage, TargetOutcome, TargetReport};

/// Per-run knobs shared by every target
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub lab_name: String,
    pub project_policy: ProjectPolicy,
    pub start_order: StartOrder,
    pub max_parallel_targets: usize,
}

/// Catalog templates the backend does not offer, in first-use order
fn missing_templates<'a>(catalog: &'a TopologyCatalog, templates: &TemplateCatalog) -> Vec<&'a str> {
    catalog
        .template_names()
        .into_iter()
        .filter(|name| !templates.contains_key(*name))
        .collect()
}

fn abandon(target: &Target, stage: Stage, error: impl std::fmt::Display) -> TargetOutcome {
    tracing::error!("Abandoning {} at {} stage: {}", target.url, stage, error);
    TargetOutcome::Abandoned {
        target: target.url.clone(),
        stage,
        error: error.to_string(),
    }
}

/// Provision one target: connect, project, nodes, links, start, configs, summary.
/// Only connect/project/catalog failures abandon the target.
pub async fn provision_target(
    connector: &dyn Connector,
    target: &Target,
    catalog: &TopologyCatalog,
    settings: &RunSettings,
) -> TargetOutcome {
    let lab = settings.lab_name.as_str();

    // ── Session ──────────────────────────────────────────────────
    let backend = match connector.connect(target).await {
        Ok(b) => b,
        Err(e) => return abandon(target, Stage::Connect, e),
    };
    let session = match Session::establish(backend).await {
        Ok(s) => s,
        Err(e) => return abandon(target, Stage::Connect, e),
    };

    // ── Project ──────────────────────────────────────────────────
    let project = match session.create_project(lab, settings.project_policy).await {
        Ok(p) => p,
        Err(e) => return abandon(target, Stage::Project, e),
    };
    let project = match session.open(&project).await {
        Ok(p) => p,
        Err(e) => return abandon(target, Stage::Project, e),
    };

    let templates = match session.list_templates().await {
        Ok(t) => t,
        Err(e) => return abandon(target, Stage::Catalog, e),
    };
    tracing::debug!("Available templates on {}: {:?}", target.url, templates.keys().collect::<Vec<_>>());
    let missing = missing_templates(catalog, &templates);
    if !missing.is_empty() {
        tracing::warn!("{} lacks templates: {}", target.url, missing.join(", "));
    }

    let backend = session.backend();
    let mut failures: Vec<ResourceFailure> = Vec::new();

    // ── Nodes, then links ────────────────────────────────────────
    let nodes = builder::build_nodes(backend, &project, catalog, &templates).await;
    failures.extend(nodes.failures);
    let links = builder::build_links(backend, &project, catalog, &nodes.succeeded).await;
    failures.extend(links.failures);

    // ── Lifecycle, then configs ──────────────────────────────────
    let started = lifecycle::start_all(backend, &project, settings.start_order, catalog).await;
    failures.extend(started.failures);
    let configured = inject::apply_configs(backend, &project, &catalog.configs).await;
    failures.extend(configured.failures);

    let summary = match report::summarize(backend, &project, lab).await {
        Ok(s) => Some(s),
        Err(e) => {
            let failure = ResourceFailure::new(ResourceKind::Report, &project.name, e);
            tracing::warn!("Failed {}", failure);
            failures.push(failure);
            None
        }
    };

    tracing::info!(
        "Finished {} on {}: {} nodes, {} links, {} failures",
        lab,
        target.url,
        nodes.succeeded.len(),
        links.succeeded.len(),
        failures.len()
    );

    TargetOutcome::Completed(TargetReport {
        target: target.url.clone(),
        lab: lab.to_string(),
        backend_version: session.version().to_string(),
        nodes_created: nodes.succeeded.into_iter().map(|n| n.name).collect(),
        links_created: links.succeeded.len(),
        nodes_started: started.succeeded,
        configs_applied: configured.succeeded,
        failures,
        summary,
    })
}

/// Provision every target. Outcomes come back in target order regardless
/// of how many run at once.
pub async fn run(
    connector: &dyn Connector,
    targets: &[Target],
    catalog: &TopologyCatalog,
    settings: &RunSettings,
) -> RunReport {
    let started_at = Utc::now();
    let parallel = settings.max_parallel_targets.max(1);

    let outcomes = stream::iter(targets)
        .map(|target| provision_target(connector, target, catalog, settings))
        .buffered(parallel)
        .collect::<Vec<_>>()
        .await;

    RunReport {
        lab: settings.lab_name.clone(),
        started_at,
        finished_at: Utc::now(),
        targets: outcomes,
    }
}

/// Resolve the raw target source, then run. An unusable source fails
/// before any target is contacted.
pub async fn run_from_source(
    connector: &dyn Connector,
    raw: &str,
    address: &AddressTemplate,
    credentials: &Credentials,
    catalog: &TopologyCatalog,
    settings: &RunSettings,
) -> Result<RunReport, ConfigurationError> {
    let targets = resolve_targets(raw, address, credentials)?;
    tracing::info!("Targets: {}", targets.len());
    Ok(run(connector, &targets, catalog, settings).await)
}
