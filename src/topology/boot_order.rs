use std::collections::{HashMap, VecDeque};
use std::str::FromStr;

use crate::error::ConfigurationError;

use super::TopologyCatalog;

/// Order in which the lifecycle phase starts nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartOrder {
    /// Whatever order the backend lists nodes in; ignores links
    #[default]
    Listed,
    /// Breadth-first from the uplinks over the link table
    Topology,
}

impl FromStr for StartOrder {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "listed" => Ok(Self::Listed),
            "topology" => Ok(Self::Topology),
            other => Err(ConfigurationError::new(format!(
                "unknown start order '{}' (expected listed or topology)",
                other
            ))),
        }
    }
}

impl StartOrder {
    /// Rank per device name. Unranked names sort after ranked ones and
    /// keep their relative backend order.
    pub fn ranks(&self, catalog: &TopologyCatalog) -> HashMap<String, usize> {
        match self {
            StartOrder::Listed => HashMap::new(),
            StartOrder::Topology => topology_order(catalog)
                .into_iter()
                .enumerate()
                .map(|(rank, name)| (name.to_string(), rank))
                .collect(),
        }
    }
}

/// Breadth-first walk from every uplink device, visiting neighbours in
/// link-table order. Devices with no path to an uplink are omitted.
pub fn topology_order(catalog: &TopologyCatalog) -> Vec<&str> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for link in &catalog.links {
        adjacency.entry(&link.a.node).or_default().push(&link.b.node);
        adjacency.entry(&link.b.node).or_default().push(&link.a.node);
    }

    let mut order: Vec<&str> = Vec::new();
    let mut queue: VecDeque<&str> = catalog
        .devices
        .iter()
        .filter(|d| d.template.is_uplink())
        .map(|d| d.name.as_str())
        .collect();

    while let Some(name) = queue.pop_front() {
        if order.contains(&name) {
            continue;
        }
        order.push(name);
        if let Some(neighbours) = adjacency.get(name) {
            queue.extend(neighbours.iter().copied().filter(|n| !order.contains(n)));
        }
    }

    order
}
