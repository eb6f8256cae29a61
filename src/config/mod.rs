use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigurationError;
use crate::provision::RunSettings;
use crate::targets::{AddressTemplate, Credentials};

/// Command-line overrides; anything left unset falls back to the environment
#[derive(Debug, Default, Parser)]
#[command(name = "labforge", version, about = "Provision the multi-site GNS3 lab on every target backend")]
pub struct Cli {
    /// Comma-separated list of target address suffixes
    #[arg(long)]
    pub targets_file: Option<PathBuf>,

    /// Base lab (project) name
    #[arg(long)]
    pub lab_name: Option<String>,

    /// Build/run identifier appended to the lab name
    #[arg(long)]
    pub qualifier: Option<String>,

    /// What to do when the project already exists: reuse | fail
    #[arg(long)]
    pub project_policy: Option<String>,

    /// Node start order: listed | topology
    #[arg(long)]
    pub start_order: Option<String>,

    /// Number of targets provisioned at once
    #[arg(long)]
    pub parallel: Option<usize>,

    /// JSON topology to build instead of the built-in lab
    #[arg(long)]
    pub topology: Option<PathBuf>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Config holds all run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub targets_file: PathBuf,
    pub base_url: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub lab_name: String,
    pub lab_qualifier: String,
    pub request_timeout_secs: u64,
    pub project_policy: String,
    pub start_order: String,
    pub max_parallel_targets: usize,
    pub topology_file: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get_env = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            targets_file: PathBuf::from(get_env("LABFORGE_TARGETS_FILE", "datastore")),
            base_url: get_env("LABFORGE_BASE_URL", "http://10.48.229."),
            port: get_env("LABFORGE_PORT", "80").parse().unwrap_or(80),
            user: get_env("GNS3_USER", "gns3"),
            password: get_env("GNS3_PASSWORD", "gns3"),
            lab_name: get_env("LABFORGE_LAB_NAME", "cit480-operation-nightingale-1"),
            lab_qualifier: get_env("LAB_QUALIFIER", ""),
            request_timeout_secs: get_env("LABFORGE_REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .unwrap_or(30),
            project_policy: get_env("LABFORGE_PROJECT_POLICY", "reuse"),
            start_order: get_env("LABFORGE_START_ORDER", "listed"),
            max_parallel_targets: get_env("LABFORGE_MAX_PARALLEL_TARGETS", "1")
                .parse::<usize>()
                .unwrap_or(1)
                .max(1),
            topology_file: lookup("LABFORGE_TOPOLOGY_FILE").map(PathBuf::from),
            report_path: lookup("LABFORGE_REPORT_PATH").map(PathBuf::from),
        }
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.targets_file {
            self.targets_file = path.clone();
        }
        if let Some(name) = &cli.lab_name {
            self.lab_name = name.clone();
        }
        if let Some(qualifier) = &cli.qualifier {
            self.lab_qualifier = qualifier.clone();
        }
        if let Some(policy) = &cli.project_policy {
            self.project_policy = policy.clone();
        }
        if let Some(order) = &cli.start_order {
            self.start_order = order.clone();
        }
        if let Some(parallel) = cli.parallel {
            self.max_parallel_targets = parallel.max(1);
        }
        if cli.topology.is_some() {
            self.topology_file = cli.topology.clone();
        }
        if cli.report.is_some() {
            self.report_path = cli.report.clone();
        }
        self
    }

    /// Lab name, qualified with the build/run id when one is set
    pub fn effective_lab_name(&self) -> String {
        let qualifier = self.lab_qualifier.trim();
        if qualifier.is_empty() {
            self.lab_name.clone()
        } else {
            format!("{}-{}", self.lab_name, qualifier)
        }
    }

    pub fn address_template(&self) -> AddressTemplate {
        AddressTemplate {
            prefix: self.base_url.clone(),
            port: self.port,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn run_settings(&self) -> Result<RunSettings, ConfigurationError> {
        Ok(RunSettings {
            lab_name: self.effective_lab_name(),
            project_policy: self.project_policy.parse()?,
            start_order: self.start_order.parse()?,
            max_parallel_targets: self.max_parallel_targets,
        })
    }
}
