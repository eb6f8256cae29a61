pub mod builder;
pub mod inject;
pub mod lifecycle;
pub mod orchestrator;
pub mod report;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

pub use orchestrator::{run_from_source, RunSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Node,
    Link,
    Lifecycle,
    Config,
    Report,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Node => "node",
            ResourceKind::Link => "link",
            ResourceKind::Lifecycle => "lifecycle",
            ResourceKind::Config => "config",
            ResourceKind::Report => "report",
        })
    }
}

/// A resource-local failure: logged, recorded, and then skipped past
#[derive(Debug, Clone, Serialize)]
pub struct ResourceFailure {
    pub kind: ResourceKind,
    pub name: String,
    pub cause: String,
}

impl ResourceFailure {
    pub fn new(kind: ResourceKind, name: impl Into<String>, cause: impl fmt::Display) -> Self {
        Self {
            kind,
            name: name.into(),
            cause: cause.to_string(),
        }
    }
}

impl fmt::Display for ResourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind, self.name, self.cause)
    }
}

/// Successes and failures of one provisioning phase
#[derive(Debug)]
pub struct PhaseOutcome<T> {
    pub succeeded: Vec<T>,
    pub failures: Vec<ResourceFailure>,
}

impl<T> Default for PhaseOutcome<T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> PhaseOutcome<T> {
    fn fail(&mut self, failure: ResourceFailure) {
        tracing::warn!("Failed {}", failure);
        self.failures.push(failure);
    }
}

/// Step at which a target was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Connect,
    Project,
    Catalog,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Connect => "connect",
            Stage::Project => "project",
            Stage::Catalog => "template catalog",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkSummary {
    pub links: Vec<String>,
    pub status_line: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub target: String,
    pub lab: String,
    pub backend_version: String,
    pub nodes_created: Vec<String>,
    pub links_created: usize,
    pub nodes_started: Vec<String>,
    pub configs_applied: Vec<String>,
    pub failures: Vec<ResourceFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<LinkSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TargetOutcome {
    Completed(TargetReport),
    Abandoned {
        target: String,
        stage: Stage,
        error: String,
    },
}

#[cfg(test)]
impl TargetOutcome {
    pub fn target(&self) -> &str {
        match self {
            TargetOutcome::Completed(report) => &report.target,
            TargetOutcome::Abandoned { target, .. } => target,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub lab: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub targets: Vec<TargetOutcome>,
}

impl RunReport {
    pub fn abandoned_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| matches!(t, TargetOutcome::Abandoned { .. }))
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.targets
            .iter()
            .map(|t| match t {
                TargetOutcome::Completed(report) => report.failures.len(),
                TargetOutcome::Abandoned { .. } => 0,
            })
            .sum()
    }
}
