//! In-memory backend used by the test suites.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::BackendError;
use crate::targets::Target;

use super::types::*;
use super::{Backend, Connector};

/// Templates referenced by the built-in lab
pub const LAB_TEMPLATES: &[&str] = &[
    "Cisco IOSv 15.5(3)M",
    "Cisco IOSvL2 15.2.1",
    "Windows 10 w/ Edge",
    "Windows Server 2022",
    "ubuntu",
    "Cloud",
];

#[derive(Default)]
struct FakeState {
    unreachable: bool,
    fail_open: bool,
    templates: Vec<Template>,
    projects: Vec<Project>,
    nodes: Vec<(String, Node)>,
    links: Vec<(String, Link)>,
    fail_start: HashSet<String>,
    fail_update: HashSet<String>,
    start_attempts: HashMap<String, usize>,
    start_order: Vec<String>,
    calls: Vec<String>,
    next_id: u64,
}

impl FakeState {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }

    fn node_mut(&mut self, project_id: &str, node_id: &str) -> Result<&mut Node, BackendError> {
        self.nodes
            .iter_mut()
            .find(|(p, n)| p == project_id && n.node_id == node_id)
            .map(|(_, n)| n)
            .ok_or_else(|| not_found("node", node_id))
    }
}

fn not_found(what: &str, id: &str) -> BackendError {
    BackendError::Status {
        method: "GET",
        endpoint: format!("/{}/{}", what, id),
        status: 404,
        body: format!("{} {} not found", what, id),
    }
}

fn conflict(endpoint: &str, body: String) -> BackendError {
    BackendError::Status {
        method: "POST",
        endpoint: endpoint.to_string(),
        status: 409,
        body,
    }
}

/// Every fake node exposes the same adapters
fn fake_ports() -> Vec<Port> {
    let mut ports: Vec<Port> = (0..8)
        .map(|i| Port {
            name: format!("GigabitEthernet0/{}", i),
            short_name: Some(format!("Gi0/{}", i)),
            adapter_number: i,
            port_number: 0,
        })
        .collect();
    for (i, name) in ["eth0", "NIC1", "Ethernet0"].iter().enumerate() {
        ports.push(Port {
            name: name.to_string(),
            short_name: None,
            adapter_number: 8 + i as u32,
            port_number: 0,
        });
    }
    ports
}

/// Cheaply cloneable handle to shared fake backend state
#[derive(Clone)]
pub struct FakeBackend {
    url: String,
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            state: Arc::new(Mutex::new(FakeState::default())),
        }
    }

    /// Fake backend carrying every template the built-in lab uses
    pub fn with_lab_templates(url: &str) -> Self {
        Self::new(url).with_templates(LAB_TEMPLATES)
    }

    pub fn with_templates(self, names: &[&str]) -> Self {
        {
            let mut state = self.lock();
            for name in names {
                let template_id = state.id("tmpl");
                state.templates.push(Template {
                    template_id,
                    name: name.to_string(),
                    category: None,
                });
            }
        }
        self
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn record(&self, call: String) -> Result<MutexGuard<'_, FakeState>, BackendError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.unreachable {
            return Err(BackendError::Status {
                method: "GET",
                endpoint: "/version".to_string(),
                status: 503,
                body: "unreachable".to_string(),
            });
        }
        Ok(state)
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.lock().unreachable = unreachable;
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.lock().fail_open = fail;
    }

    pub fn fail_start(&self, node_name: &str) {
        self.lock().fail_start.insert(node_name.to_string());
    }

    pub fn fail_update(&self, node_name: &str) {
        self.lock().fail_update.insert(node_name.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn project_count(&self) -> usize {
        self.lock().projects.len()
    }

    pub fn node_names(&self) -> Vec<String> {
        self.lock().nodes.iter().map(|(_, n)| n.name.clone()).collect()
    }

    pub fn node(&self, name: &str) -> Option<Node> {
        self.lock()
            .nodes
            .iter()
            .find(|(_, n)| n.name == name)
            .map(|(_, n)| n.clone())
    }

    pub fn link_count(&self) -> usize {
        self.lock().links.len()
    }

    /// Node names at both ends of every stored link
    pub fn link_endpoints(&self) -> Vec<(String, String)> {
        let state = self.lock();
        let names: HashMap<&str, &str> = state
            .nodes
            .iter()
            .map(|(_, n)| (n.node_id.as_str(), n.name.as_str()))
            .collect();
        state
            .links
            .iter()
            .map(|(_, l)| {
                let a = names.get(l.nodes[0].node_id.as_str()).copied().unwrap_or("?");
                let b = names.get(l.nodes[1].node_id.as_str()).copied().unwrap_or("?");
                (a.to_string(), b.to_string())
            })
            .collect()
    }

    pub fn start_attempts(&self, node_name: &str) -> usize {
        self.lock().start_attempts.get(node_name).copied().unwrap_or(0)
    }

    pub fn start_order(&self) -> Vec<String> {
        self.lock().start_order.clone()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    fn url(&self) -> &str {
        &self.url
    }

    async fn version(&self) -> Result<Version, BackendError> {
        self.record("version".to_string())?;
        Ok(Version {
            version: "2.2.44".to_string(),
            local: false,
        })
    }

    async fn list_templates(&self) -> Result<Vec<Template>, BackendError> {
        let state = self.record("list_templates".to_string())?;
        Ok(state.templates.clone())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, BackendError> {
        let state = self.record("list_projects".to_string())?;
        Ok(state.projects.clone())
    }

    async fn create_project(&self, name: &str) -> Result<Project, BackendError> {
        let mut state = self.record(format!("create_project {}", name))?;
        if state.projects.iter().any(|p| p.name == name) {
            return Err(conflict("/projects", format!("project {} exists", name)));
        }
        let project = Project {
            project_id: state.id("proj"),
            name: name.to_string(),
            status: Some("closed".to_string()),
        };
        state.projects.push(project.clone());
        Ok(project)
    }

    async fn open_project(&self, project_id: &str) -> Result<Project, BackendError> {
        let mut state = self.record(format!("open_project {}", project_id))?;
        if state.fail_open {
            return Err(BackendError::Status {
                method: "POST",
                endpoint: format!("/projects/{}/open", project_id),
                status: 500,
                body: "cannot open".to_string(),
            });
        }
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.project_id == project_id)
            .ok_or_else(|| not_found("project", project_id))?;
        project.status = Some("opened".to_string());
        Ok(project.clone())
    }

    async fn create_node(
        &self,
        project_id: &str,
        template_id: &str,
        node: &NodeCreate,
    ) -> Result<Node, BackendError> {
        let mut state = self.record(format!("create_node {}", node.name))?;
        if !state.templates.iter().any(|t| t.template_id == template_id) {
            return Err(not_found("template", template_id));
        }
        if state.nodes.iter().any(|(p, n)| p == project_id && n.name == node.name) {
            return Err(conflict("/nodes", format!("node {} exists", node.name)));
        }
        let created = Node {
            node_id: state.id("node"),
            name: node.name.clone(),
            status: Some("stopped".to_string()),
            template_id: Some(template_id.to_string()),
            x: node.x,
            y: node.y,
            ports: fake_ports(),
            config: None,
            auto_start: false,
        };
        state.nodes.push((project_id.to_string(), created.clone()));
        Ok(created)
    }

    async fn list_nodes(&self, project_id: &str) -> Result<Vec<Node>, BackendError> {
        let state = self.record("list_nodes".to_string())?;
        Ok(state
            .nodes
            .iter()
            .filter(|(p, _)| p == project_id)
            .map(|(_, n)| n.clone())
            .collect())
    }

    async fn get_node(&self, project_id: &str, node_id: &str) -> Result<Node, BackendError> {
        let mut state = self.record(format!("get_node {}", node_id))?;
        state.node_mut(project_id, node_id).map(|n| n.clone())
    }

    async fn update_node(
        &self,
        project_id: &str,
        node_id: &str,
        update: &NodeUpdate,
    ) -> Result<Node, BackendError> {
        let mut state = self.record(format!("update_node {}", node_id))?;
        let failing = state.fail_update.clone();
        let node = state.node_mut(project_id, node_id)?;
        if failing.contains(&node.name) {
            return Err(BackendError::Status {
                method: "PUT",
                endpoint: format!("/nodes/{}", node_id),
                status: 500,
                body: "update rejected".to_string(),
            });
        }
        if let Some(name) = &update.name {
            node.name = name.clone();
        }
        if let Some(config) = &update.config {
            node.config = Some(config.clone());
        }
        if let Some(auto_start) = update.auto_start {
            node.auto_start = auto_start;
        }
        Ok(node.clone())
    }

    async fn start_node(&self, project_id: &str, node_id: &str) -> Result<(), BackendError> {
        let mut state = self.record(format!("start_node {}", node_id))?;
        let name = state.node_mut(project_id, node_id)?.name.clone();
        *state.start_attempts.entry(name.clone()).or_insert(0) += 1;
        state.start_order.push(name.clone());
        if state.fail_start.contains(&name) {
            return Err(BackendError::Status {
                method: "POST",
                endpoint: format!("/nodes/{}/start", node_id),
                status: 500,
                body: "qemu failed to start".to_string(),
            });
        }
        state.node_mut(project_id, node_id)?.status = Some("started".to_string());
        Ok(())
    }

    async fn create_link(&self, project_id: &str, link: &LinkCreate) -> Result<Link, BackendError> {
        let mut state = self.record("create_link".to_string())?;
        for end in &link.nodes {
            state.node_mut(project_id, &end.node_id)?;
            let in_use = state
                .links
                .iter()
                .any(|(p, l)| p == project_id && l.nodes.contains(end));
            if in_use {
                return Err(conflict("/links", format!("port {}/{} in use", end.adapter_number, end.port_number)));
            }
        }
        let created = Link {
            link_id: state.id("link"),
            nodes: link.nodes.clone(),
        };
        state.links.push((project_id.to_string(), created.clone()));
        Ok(created)
    }

    async fn list_links(&self, project_id: &str) -> Result<Vec<Link>, BackendError> {
        let state = self.record("list_links".to_string())?;
        Ok(state
            .links
            .iter()
            .filter(|(p, _)| p == project_id)
            .map(|(_, l)| l.clone())
            .collect())
    }
}

/// Hands out pre-registered fake backends by target suffix
#[derive(Default)]
pub struct FakeConnector {
    backends: BTreeMap<u32, FakeBackend>,
    connects: Mutex<Vec<u32>>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, suffix: u32, backend: FakeBackend) {
        self.backends.insert(suffix, backend);
    }

    pub fn connect_count(&self) -> usize {
        self.connects.lock().unwrap().len()
    }
}

#[async_trait]
impl Connector for FakeConnector {
    async fn connect(&self, target: &Target) -> Result<Box<dyn Backend>, BackendError> {
        self.connects.lock().unwrap().push(target.suffix);
        let backend = self
            .backends
            .get(&target.suffix)
            .cloned()
            .unwrap_or_else(|| {
                let b = FakeBackend::new(&target.url);
                b.set_unreachable(true);
                b
            });
        Ok(Box::new(backend))
    }
}
