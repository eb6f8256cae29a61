use crate::error::BackendError;
use crate::gns3::{Backend, Node, NodeUpdate, Project};
use crate::topology::{StartOrder, TopologyCatalog};

use super::{PhaseOutcome, ResourceFailure, ResourceKind};

/// Refresh the node, flag it for autostart, push the flag, then start it
async fn autostart_node(backend: &dyn Backend, project: &Project, node: &Node) -> Result<(), BackendError> {
    let live = backend.get_node(&project.project_id, &node.node_id).await?;
    let update = NodeUpdate {
        auto_start: Some(true),
        ..Default::default()
    };
    backend.update_node(&project.project_id, &live.node_id, &update).await?;
    backend.start_node(&project.project_id, &live.node_id).await
}

/// Start every node the backend knows in the project, one attempt each.
/// No ordering is implied by links unless `order` asks for it.
pub async fn start_all(
    backend: &dyn Backend,
    project: &Project,
    order: StartOrder,
    catalog: &TopologyCatalog,
) -> PhaseOutcome<String> {
    let mut outcome = PhaseOutcome::default();

    let mut nodes = match backend.list_nodes(&project.project_id).await {
        Ok(nodes) => nodes,
        Err(e) => {
            outcome.fail(ResourceFailure::new(
                ResourceKind::Lifecycle,
                &project.name,
                format!("node listing failed: {}", e),
            ));
            return outcome;
        }
    };

    let ranks = order.ranks(catalog);
    nodes.sort_by_key(|n| ranks.get(&n.name).copied().unwrap_or(usize::MAX));

    for node in &nodes {
        match autostart_node(backend, project, node).await {
            Ok(()) => {
                tracing::info!("Node {} set to autostart and started", node.name);
                outcome.succeeded.push(node.name.clone());
            }
            Err(e) => outcome.fail(ResourceFailure::new(ResourceKind::Lifecycle, &node.name, e)),
        }
    }

    outcome
}
