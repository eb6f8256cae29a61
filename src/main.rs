mod config;
mod error;
mod gns3;
mod provision;
mod targets;
mod topology;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Cli, Config};
use gns3::Gns3Connector;
use provision::report::{render_target, render_totals};
use topology::TopologyCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let cfg = Config::load().with_overrides(&cli);

    // Pre-flight: nothing below touches a backend until targets resolve
    let settings = cfg.run_settings()?;
    let catalog = match &cfg.topology_file {
        Some(path) => TopologyCatalog::from_json_file(path)?,
        None => TopologyCatalog::nightingale(),
    };
    let raw_targets = targets::read_target_source(&cfg.targets_file)?;

    tracing::info!("Starting LabForge");
    tracing::info!("Lab: {}", settings.lab_name);
    tracing::info!(
        "Topology: {} nodes, {} links, {} configs",
        catalog.devices.len(),
        catalog.links.len(),
        catalog.configs.len()
    );

    let connector = Gns3Connector::new(cfg.request_timeout());
    let report = provision::run_from_source(
        &connector,
        &raw_targets,
        &cfg.address_template(),
        &cfg.credentials(),
        &catalog,
        &settings,
    )
    .await?;

    for outcome in &report.targets {
        print!("{}", render_target(outcome));
    }
    println!("{}", render_totals(&report));

    if let Some(path) = &cfg.report_path {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write run report to {}", path.display()))?;
        tracing::info!("Run report written to {}", path.display());
    }

    Ok(())
}
