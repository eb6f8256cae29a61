pub mod boot_order;
mod nightingale;
mod router_configs;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::error::ConfigurationError;

pub use boot_order::StartOrder;

/// Backend-resident image a device is instantiated from, referenced by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceTemplate {
    Router,
    Switch,
    Desktop,
    Server,
    Linux,
    /// Uplink passthrough
    Cloud,
    Other(String),
}

impl DeviceTemplate {
    pub fn name(&self) -> &str {
        match self {
            DeviceTemplate::Router => "Cisco IOSv 15.5(3)M",
            DeviceTemplate::Switch => "Cisco IOSvL2 15.2.1",
            DeviceTemplate::Desktop => "Windows 10 w/ Edge",
            DeviceTemplate::Server => "Windows Server 2022",
            DeviceTemplate::Linux => "ubuntu",
            DeviceTemplate::Cloud => "Cloud",
            DeviceTemplate::Other(name) => name,
        }
    }

    pub fn is_uplink(&self) -> bool {
        matches!(self, DeviceTemplate::Cloud)
    }
}

impl From<String> for DeviceTemplate {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Cisco IOSv 15.5(3)M" => DeviceTemplate::Router,
            "Cisco IOSvL2 15.2.1" => DeviceTemplate::Switch,
            "Windows 10 w/ Edge" => DeviceTemplate::Desktop,
            "Windows Server 2022" => DeviceTemplate::Server,
            "ubuntu" => DeviceTemplate::Linux,
            "Cloud" => DeviceTemplate::Cloud,
            _ => DeviceTemplate::Other(name),
        }
    }
}

impl From<DeviceTemplate> for String {
    fn from(t: DeviceTemplate) -> Self {
        t.name().to_string()
    }
}

impl fmt::Display for DeviceTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub name: String,
    pub template: DeviceTemplate,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub node: String,
    pub interface: String,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.interface)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: Endpoint,
    pub b: Endpoint,
}

impl LinkSpec {
    pub fn new(node_a: &str, iface_a: &str, node_b: &str, iface_b: &str) -> Self {
        Self {
            a: Endpoint {
                node: node_a.to_string(),
                interface: iface_a.to_string(),
            },
            b: Endpoint {
                node: node_b.to_string(),
                interface: iface_b.to_string(),
            },
        }
    }
}

impl fmt::Display for LinkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.a, self.b)
    }
}

/// Opaque startup configuration for one device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSpec {
    pub node: String,
    pub text: String,
}

impl ConfigSpec {
    pub fn new(node: &str, text: &str) -> Self {
        Self {
            node: node.to_string(),
            text: text.to_string(),
        }
    }
}

/// Read-only description of one lab: devices, links and config payloads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopologyCatalog {
    pub devices: Vec<DeviceSpec>,
    pub links: Vec<LinkSpec>,
    /// Applied in declaration order
    #[serde(default)]
    pub configs: Vec<ConfigSpec>,
}

impl TopologyCatalog {
    /// The built-in multi-site lab (core, US/UK/SG edges, cloud, SOC, OT)
    pub fn nightingale() -> Self {
        nightingale::catalog()
    }

    /// Load an alternate catalog from a JSON file and validate it
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigurationError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::new(format!("failed to read topology file {}: {}", path.display(), e))
        })?;
        let catalog: Self = serde_json::from_str(&raw).map_err(|e| {
            ConfigurationError::new(format!("invalid topology file {}: {}", path.display(), e))
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Distinct template names in first-use order
    pub fn template_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.devices
            .iter()
            .map(|d| d.template.name())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Check structural invariants: unique device names, links and
    /// configs only reference catalog devices, at most one config per device.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut names = HashSet::new();
        for device in &self.devices {
            if !names.insert(device.name.as_str()) {
                return Err(ConfigurationError::new(format!(
                    "duplicate device name '{}' in topology",
                    device.name
                )));
            }
        }

        for link in &self.links {
            for end in [&link.a, &link.b] {
                if !names.contains(end.node.as_str()) {
                    return Err(ConfigurationError::new(format!(
                        "link {} references unknown device '{}'",
                        link, end.node
                    )));
                }
            }
        }

        let mut configured = HashSet::new();
        for config in &self.configs {
            if !names.contains(config.node.as_str()) {
                return Err(ConfigurationError::new(format!(
                    "config assigned to unknown device '{}'",
                    config.node
                )));
            }
            if !configured.insert(config.node.as_str()) {
                return Err(ConfigurationError::new(format!(
                    "device '{}' has more than one config",
                    config.node
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_template_name_round_trip_through_serde() {
        let json = serde_json::to_string(&DeviceTemplate::Switch).unwrap();
        assert_eq!(json, "\"Cisco IOSvL2 15.2.1\"");
        let parsed: DeviceTemplate = serde_json::from_str("\"vyos 1.4\"").unwrap();
        assert_eq!(parsed, DeviceTemplate::Other("vyos 1.4".to_string()));
    }

    #[test]
    fn test_validate_rejects_duplicate_devices() {
        let catalog = TopologyCatalog {
            devices: vec![
                DeviceSpec { name: "r1".into(), template: DeviceTemplate::Router, x: 0, y: 0 },
                DeviceSpec { name: "r1".into(), template: DeviceTemplate::Router, x: 0, y: 0 },
            ],
            ..Default::default()
        };
        assert!(catalog.validate().unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_rejects_dangling_link() {
        let catalog = TopologyCatalog {
            devices: vec![DeviceSpec { name: "r1".into(), template: DeviceTemplate::Router, x: 0, y: 0 }],
            links: vec![LinkSpec::new("r1", "Gi0/0", "r2", "Gi0/0")],
            ..Default::default()
        };
        assert!(catalog.validate().unwrap_err().to_string().contains("'r2'"));
    }

    #[test]
    fn test_validate_rejects_orphan_config() {
        let mut catalog = TopologyCatalog {
            devices: vec![DeviceSpec { name: "r1".into(), template: DeviceTemplate::Router, x: 0, y: 0 }],
            ..Default::default()
        };
        catalog.configs.push(ConfigSpec::new("r9", "hostname r9\n"));
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_second_config_for_device() {
        let catalog = TopologyCatalog {
            devices: vec![DeviceSpec { name: "r1".into(), template: DeviceTemplate::Router, x: 0, y: 0 }],
            configs: vec![
                ConfigSpec::new("r1", "hostname r1\n"),
                ConfigSpec::new("r1", "hostname other\n"),
            ],
            ..Default::default()
        };
        assert!(catalog.validate().unwrap_err().to_string().contains("more than one config"));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "devices": [
                    {{"name": "wan", "template": "Cloud", "x": 0, "y": 0}},
                    {{"name": "r1", "template": "Cisco IOSv 15.5(3)M"}}
                ],
                "links": [
                    {{"a": {{"node": "wan", "interface": "eth0"}}, "b": {{"node": "r1", "interface": "Gi0/0"}}}}
                ],
                "configs": [{{"node": "r1", "text": "hostname r1\n"}}]
            }}"#
        )
        .unwrap();

        let catalog = TopologyCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.devices.len(), 2);
        assert_eq!(catalog.devices[1].template, DeviceTemplate::Router);
        assert_eq!(catalog.links[0].to_string(), "wan:eth0 <-> r1:Gi0/0");
        assert_eq!(catalog.configs, vec![ConfigSpec::new("r1", "hostname r1\n")]);
    }

    #[test]
    fn test_from_json_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(TopologyCatalog::from_json_file(file.path()).is_err());
    }
}
