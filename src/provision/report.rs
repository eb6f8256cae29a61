use std::collections::HashMap;

use crate::error::BackendError;
use crate::gns3::{Backend, LinkNode, Node, Project};

use super::{LinkSummary, RunReport, TargetOutcome};

const RULE: &str = "-----------------------------------------------------------------------";

fn describe_end(nodes: &HashMap<&str, &Node>, end: &LinkNode) -> String {
    match nodes.get(end.node_id.as_str()) {
        Some(node) => format!("{}: {}", node.name, node.port_label(end.adapter_number, end.port_number)),
        None => format!("{}: {}/{}", end.node_id, end.adapter_number, end.port_number),
    }
}

/// List every link currently in the project. Read-only.
pub async fn summarize(
    backend: &dyn Backend,
    project: &Project,
    lab: &str,
) -> Result<LinkSummary, BackendError> {
    let nodes = backend.list_nodes(&project.project_id).await?;
    let links = backend.list_links(&project.project_id).await?;
    let by_id: HashMap<&str, &Node> = nodes.iter().map(|n| (n.node_id.as_str(), n)).collect();

    let lines = links
        .iter()
        .map(|link| {
            link.nodes
                .iter()
                .map(|end| describe_end(&by_id, end))
                .collect::<Vec<_>>()
                .join(" ---- ")
        })
        .collect();

    Ok(LinkSummary {
        links: lines,
        status_line: format!(
            "{} build is Complete on {}. It is now safe to open the project in GNS3",
            lab,
            backend.url()
        ),
    })
}

/// Human-readable block for one target
pub fn render_target(outcome: &TargetOutcome) -> String {
    let mut lines: Vec<String> = vec![RULE.to_string()];
    match outcome {
        TargetOutcome::Completed(report) => {
            lines.push("Nodes created, linked, autostart set, and router configs applied.".to_string());
            if let Some(summary) = &report.summary {
                lines.extend(summary.links.iter().cloned());
            }
            lines.push(RULE.to_string());
            lines.push(format!(
                "{} nodes, {} links, {} started, {} configs applied, {} failures",
                report.nodes_created.len(),
                report.links_created,
                report.nodes_started.len(),
                report.configs_applied.len(),
                report.failures.len()
            ));
            lines.extend(report.failures.iter().map(|f| format!("  [!] {}", f)));
            lines.push(match &report.summary {
                Some(summary) => summary.status_line.clone(),
                None => format!("{} build finished on {}", report.lab, report.target),
            });
        }
        TargetOutcome::Abandoned { target, stage, error } => {
            lines.push(format!("[!] Abandoned {} at {} stage: {}", target, stage, error));
        }
    }
    lines.join("\n") + "\n"
}

/// One-line tally across all targets
pub fn render_totals(report: &RunReport) -> String {
    format!(
        "{}: {} target(s), {} abandoned, {} resource failure(s)",
        report.lab,
        report.targets.len(),
        report.abandoned_count(),
        report.failure_count()
    )
}
