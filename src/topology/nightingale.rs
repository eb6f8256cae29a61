use super::router_configs::ROUTER_CONFIGS;
use super::{ConfigSpec, DeviceSpec, DeviceTemplate, LinkSpec, TopologyCatalog};

/// Lab device definition
struct LabNode {
    name: &'static str,
    template: DeviceTemplate,
    x: i32,
    y: i32,
}

/// Link: node_a, iface_a, node_b, iface_b
struct LabLink {
    node_a: &'static str,
    iface_a: &'static str,
    node_b: &'static str,
    iface_b: &'static str,
}

use DeviceTemplate::{Cloud, Desktop, Linux, Router, Server, Switch};

const NIGHTINGALE_NODES: &[LabNode] = &[
    // ── Core / SOC / cloud / OT ──────────────────────────────────
    LabNode { name: "internet",       template: Cloud,   x: -200, y: -200 },
    LabNode { name: "core-rtr",       template: Router,  x: -50,  y: -200 },
    LabNode { name: "soc-rtr",        template: Router,  x: 200,  y: -200 },
    LabNode { name: "soc-sw",         template: Switch,  x: 200,  y: -100 },
    LabNode { name: "soc-siem-01",    template: Linux,   x: 350,  y: -100 },
    LabNode { name: "soc-analyst-01", template: Desktop, x: 350,  y: -10 },
    LabNode { name: "cloud-rtr",      template: Router,  x: -50,  y: 0 },
    LabNode { name: "cloud-sw",       template: Switch,  x: -50,  y: 100 },
    LabNode { name: "cloud-web-01",   template: Linux,   x: -200, y: 100 },
    LabNode { name: "cloud-api-01",   template: Linux,   x: -200, y: 180 },
    LabNode { name: "ot-rtr",         template: Router,  x: 200,  y: 50 },
    LabNode { name: "ot-sw",          template: Switch,  x: 200,  y: 150 },
    LabNode { name: "plc-sim-01",     template: Linux,   x: 350,  y: 150 },
    LabNode { name: "bms-01",         template: Desktop, x: 350,  y: 230 },
    // ── US site ──────────────────────────────────────────────────
    LabNode { name: "us-edge",        template: Router,  x: -300, y: -50 },
    LabNode { name: "us-sw",          template: Switch,  x: -300, y: 50 },
    LabNode { name: "us-ehr-01",      template: Server,  x: -450, y: 50 },
    LabNode { name: "us-iot-gw-01",   template: Linux,   x: -450, y: 130 },
    LabNode { name: "us-ad-01",       template: Server,  x: -450, y: -30 },
    // ── UK site ──────────────────────────────────────────────────
    LabNode { name: "uk-edge",        template: Router,  x: 0,    y: -50 },
    LabNode { name: "uk-sw",          template: Switch,  x: 0,    y: 50 },
    LabNode { name: "uk-img-01",      template: Server,  x: 150,  y: 50 },
    LabNode { name: "uk-ehr-01",      template: Linux,   x: 150,  y: -30 },
    // ── Singapore site ───────────────────────────────────────────
    LabNode { name: "sg-edge",        template: Router,  x: -150, y: 150 },
    LabNode { name: "sg-sw",          template: Switch,  x: -150, y: 250 },
    LabNode { name: "sg-web-01",      template: Linux,   x: -300, y: 250 },
    LabNode { name: "sg-db-01",       template: Linux,   x: -300, y: 330 },
];

const NIGHTINGALE_LINKS: &[LabLink] = &[
    LabLink { node_a: "internet",       iface_a: "eth0",      node_b: "core-rtr",  iface_b: "Gi0/0" },
    LabLink { node_a: "core-rtr",       iface_a: "Gi0/1",     node_b: "us-edge",   iface_b: "Gi0/0" },
    LabLink { node_a: "core-rtr",       iface_a: "Gi0/2",     node_b: "uk-edge",   iface_b: "Gi0/0" },
    LabLink { node_a: "core-rtr",       iface_a: "Gi0/3",     node_b: "sg-edge",   iface_b: "Gi0/0" },
    LabLink { node_a: "core-rtr",       iface_a: "Gi0/4",     node_b: "cloud-rtr", iface_b: "Gi0/0" },
    LabLink { node_a: "core-rtr",       iface_a: "Gi0/5",     node_b: "soc-rtr",   iface_b: "Gi0/0" },
    LabLink { node_a: "core-rtr",       iface_a: "Gi0/6",     node_b: "ot-rtr",    iface_b: "Gi0/0" },

    LabLink { node_a: "soc-rtr",        iface_a: "Gi0/1",     node_b: "soc-sw",    iface_b: "Gi0/0" },
    LabLink { node_a: "soc-siem-01",    iface_a: "NIC1",      node_b: "soc-sw",    iface_b: "Gi0/1" },
    LabLink { node_a: "soc-analyst-01", iface_a: "NIC1",      node_b: "soc-sw",    iface_b: "Gi0/2" },

    LabLink { node_a: "cloud-rtr",      iface_a: "Gi0/1",     node_b: "cloud-sw",  iface_b: "Gi0/0" },
    LabLink { node_a: "cloud-web-01",   iface_a: "NIC1",      node_b: "cloud-sw",  iface_b: "Gi0/1" },
    LabLink { node_a: "cloud-api-01",   iface_a: "NIC1",      node_b: "cloud-sw",  iface_b: "Gi0/2" },

    LabLink { node_a: "ot-rtr",         iface_a: "Gi0/1",     node_b: "ot-sw",     iface_b: "Gi0/0" },
    LabLink { node_a: "plc-sim-01",     iface_a: "NIC1",      node_b: "ot-sw",     iface_b: "Gi0/1" },
    LabLink { node_a: "bms-01",         iface_a: "NIC1",      node_b: "ot-sw",     iface_b: "Gi0/2" },

    LabLink { node_a: "us-edge",        iface_a: "Gi0/1",     node_b: "us-sw",     iface_b: "Gi0/0" },
    LabLink { node_a: "us-ehr-01",      iface_a: "Ethernet0", node_b: "us-sw",     iface_b: "Gi0/1" },
    LabLink { node_a: "us-iot-gw-01",   iface_a: "NIC1",      node_b: "us-sw",     iface_b: "Gi0/2" },
    LabLink { node_a: "us-ad-01",       iface_a: "Ethernet0", node_b: "us-sw",     iface_b: "Gi0/3" },

    LabLink { node_a: "uk-edge",        iface_a: "Gi0/1",     node_b: "uk-sw",     iface_b: "Gi0/0" },
    LabLink { node_a: "uk-img-01",      iface_a: "Ethernet0", node_b: "uk-sw",     iface_b: "Gi0/1" },
    LabLink { node_a: "uk-ehr-01",      iface_a: "NIC1",      node_b: "uk-sw",     iface_b: "Gi0/2" },

    LabLink { node_a: "sg-edge",        iface_a: "Gi0/1",     node_b: "sg-sw",     iface_b: "Gi0/0" },
    LabLink { node_a: "sg-web-01",      iface_a: "NIC1",      node_b: "sg-sw",     iface_b: "Gi0/1" },
    LabLink { node_a: "sg-db-01",       iface_a: "NIC1",      node_b: "sg-sw",     iface_b: "Gi0/2" },
];

pub(super) fn catalog() -> TopologyCatalog {
    TopologyCatalog {
        devices: NIGHTINGALE_NODES
            .iter()
            .map(|n| DeviceSpec {
                name: n.name.to_string(),
                template: n.template.clone(),
                x: n.x,
                y: n.y,
            })
            .collect(),
        links: NIGHTINGALE_LINKS
            .iter()
            .map(|l| LinkSpec::new(l.node_a, l.iface_a, l.node_b, l.iface_b))
            .collect(),
        configs: ROUTER_CONFIGS
            .iter()
            .map(|(name, text)| ConfigSpec::new(name, text))
            .collect(),
    }
}
