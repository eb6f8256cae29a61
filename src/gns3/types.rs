use serde::{Deserialize, Serialize};

// --- GNS3 v2 API types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub version: String,
    #[serde(default)]
    pub local: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub template_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    pub adapter_number: u32,
    pub port_number: u32,
}

impl Port {
    /// Interface labels may use either the long or the short port name
    pub fn matches(&self, label: &str) -> bool {
        self.name == label || self.short_name.as_deref() == Some(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub node_id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default)]
    pub auto_start: bool,
}

impl Node {
    pub fn find_port(&self, label: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.matches(label))
    }

    /// Display name for an (adapter, port) pair, falling back to the numbers
    pub fn port_label(&self, adapter_number: u32, port_number: u32) -> String {
        self.ports
            .iter()
            .find(|p| p.adapter_number == adapter_number && p.port_number == port_number)
            .map(|p| p.short_name.clone().unwrap_or_else(|| p.name.clone()))
            .unwrap_or_else(|| format!("{}/{}", adapter_number, port_number))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkNode {
    pub node_id: String,
    pub adapter_number: u32,
    pub port_number: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub link_id: String,
    #[serde(default)]
    pub nodes: Vec<LinkNode>,
}

// --- Create / update request types ---

#[derive(Debug, Serialize)]
pub struct ProjectCreate {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeCreate {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub compute_id: String,
}

/// Partial node update; only the fields that are set are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct NodeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_start: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkCreate {
    pub nodes: Vec<LinkNode>,
}
