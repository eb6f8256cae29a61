use std::collections::{HashMap, HashSet};

use crate::error::BackendError;
use crate::gns3::{Backend, Link, LinkCreate, LinkNode, Node, NodeCreate, Project, TemplateCatalog};
use crate::topology::{DeviceSpec, Endpoint, LinkSpec, TopologyCatalog};

use super::{PhaseOutcome, ResourceFailure, ResourceKind};

const COMPUTE_ID: &str = "local";

/// Instantiate one device from its template
pub async fn create_node(
    backend: &dyn Backend,
    project: &Project,
    templates: &TemplateCatalog,
    device: &DeviceSpec,
) -> Result<Node, BackendError> {
    let template_id = templates
        .get(device.template.name())
        .ok_or_else(|| BackendError::TemplateNotFound(device.template.name().to_string()))?;

    let req = NodeCreate {
        name: device.name.clone(),
        x: device.x,
        y: device.y,
        compute_id: COMPUTE_ID.to_string(),
    };
    backend.create_node(&project.project_id, template_id, &req).await
}

fn resolve_endpoint(nodes: &HashMap<String, Node>, end: &Endpoint) -> Result<LinkNode, BackendError> {
    let node = nodes
        .get(&end.node)
        .ok_or_else(|| BackendError::EndpointMissing(end.node.clone()))?;
    let port = node.find_port(&end.interface).ok_or_else(|| BackendError::PortNotFound {
        node: end.node.clone(),
        port: end.interface.clone(),
    })?;

    Ok(LinkNode {
        node_id: node.node_id.clone(),
        adapter_number: port.adapter_number,
        port_number: port.port_number,
    })
}

/// Connect two interfaces. Both endpoints must be among `nodes`, the set
/// created by this build; nothing is sent to the backend otherwise.
pub async fn create_link(
    backend: &dyn Backend,
    project: &Project,
    nodes: &HashMap<String, Node>,
    link: &LinkSpec,
) -> Result<Link, BackendError> {
    let a = resolve_endpoint(nodes, &link.a)?;
    let b = resolve_endpoint(nodes, &link.b)?;
    backend
        .create_link(&project.project_id, &LinkCreate { nodes: vec![a, b] })
        .await
}

/// Create every catalog device; each one is attempted independently
pub async fn build_nodes(
    backend: &dyn Backend,
    project: &Project,
    catalog: &TopologyCatalog,
    templates: &TemplateCatalog,
) -> PhaseOutcome<Node> {
    let mut outcome = PhaseOutcome::default();

    // Names already present (e.g. a reused project) would collide
    let mut taken: HashSet<String> = match backend.list_nodes(&project.project_id).await {
        Ok(nodes) => nodes.into_iter().map(|n| n.name).collect(),
        Err(e) => {
            tracing::warn!("Could not list existing nodes in {}: {}", project.name, e);
            HashSet::new()
        }
    };

    for device in &catalog.devices {
        if taken.contains(&device.name) {
            outcome.fail(ResourceFailure::new(
                ResourceKind::Node,
                &device.name,
                BackendError::DuplicateNode(device.name.clone()),
            ));
            continue;
        }

        match create_node(backend, project, templates, device).await {
            Ok(node) => {
                tracing::info!("Created node {} ({})", node.name, device.template);
                taken.insert(node.name.clone());
                outcome.succeeded.push(node);
            }
            Err(e) => outcome.fail(ResourceFailure::new(ResourceKind::Node, &device.name, e)),
        }
    }

    outcome
}

/// Create every catalog link against the nodes created by `build_nodes`
pub async fn build_links(
    backend: &dyn Backend,
    project: &Project,
    catalog: &TopologyCatalog,
    created: &[Node],
) -> PhaseOutcome<Link> {
    let mut outcome = PhaseOutcome::default();
    let nodes: HashMap<String, Node> = created
        .iter()
        .map(|n| (n.name.clone(), n.clone()))
        .collect();

    for link in &catalog.links {
        match create_link(backend, project, &nodes, link).await {
            Ok(created) => {
                tracing::info!("Created link {}", link);
                outcome.succeeded.push(created);
            }
            Err(e) => outcome.fail(ResourceFailure::new(ResourceKind::Link, link.to_string(), e)),
        }
    }

    outcome
}
