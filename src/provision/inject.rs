use std::collections::HashMap;

use crate::error::BackendError;
use crate::gns3::{Backend, Node, NodeUpdate, Project};
use crate::topology::ConfigSpec;

use super::{PhaseOutcome, ResourceFailure, ResourceKind};

/// Upload one opaque config payload to the node called `node_name`
pub async fn apply_config(
    backend: &dyn Backend,
    project: &Project,
    nodes: &HashMap<String, Node>,
    node_name: &str,
    config_text: &str,
) -> Result<Node, BackendError> {
    let node = nodes
        .get(node_name)
        .ok_or_else(|| BackendError::NodeNotFound(node_name.to_string()))?;

    let live = backend.get_node(&project.project_id, &node.node_id).await?;
    let update = NodeUpdate {
        config: Some(config_text.to_string()),
        ..Default::default()
    };
    backend.update_node(&project.project_id, &live.node_id, &update).await
}

/// Apply every config in order; a failed one never stops the rest
pub async fn apply_configs(
    backend: &dyn Backend,
    project: &Project,
    configs: &[ConfigSpec],
) -> PhaseOutcome<String> {
    let mut outcome = PhaseOutcome::default();

    let nodes: HashMap<String, Node> = match backend.list_nodes(&project.project_id).await {
        Ok(nodes) => nodes.into_iter().map(|n| (n.name.clone(), n)).collect(),
        Err(e) => {
            for config in configs {
                outcome.fail(ResourceFailure::new(
                    ResourceKind::Config,
                    &config.node,
                    format!("node listing failed: {}", e),
                ));
            }
            return outcome;
        }
    };

    for config in configs {
        match apply_config(backend, project, &nodes, &config.node, &config.text).await {
            Ok(_) => {
                tracing::info!("Applied config to {}", config.node);
                outcome.succeeded.push(config.node.clone());
            }
            Err(e) => outcome.fail(ResourceFailure::new(ResourceKind::Config, &config.node, e)),
        }
    }

    outcome
}
