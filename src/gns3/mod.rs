pub mod client;
#[cfg(test)]
pub mod fake;
pub mod types;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{BackendError, ConfigurationError};
use crate::targets::Target;

pub use client::Gns3Connector;
pub use types::*;

/// Operations consumed from an emulation backend
#[async_trait]
pub trait Backend: Send + Sync {
    fn url(&self) -> &str;

    async fn version(&self) -> Result<Version, BackendError>;
    async fn list_templates(&self) -> Result<Vec<Template>, BackendError>;

    async fn list_projects(&self) -> Result<Vec<Project>, BackendError>;
    async fn create_project(&self, name: &str) -> Result<Project, BackendError>;
    async fn open_project(&self, project_id: &str) -> Result<Project, BackendError>;

    async fn create_node(
        &self,
        project_id: &str,
        template_id: &str,
        node: &NodeCreate,
    ) -> Result<Node, BackendError>;
    async fn list_nodes(&self, project_id: &str) -> Result<Vec<Node>, BackendError>;
    async fn get_node(&self, project_id: &str, node_id: &str) -> Result<Node, BackendError>;
    async fn update_node(
        &self,
        project_id: &str,
        node_id: &str,
        update: &NodeUpdate,
    ) -> Result<Node, BackendError>;
    async fn start_node(&self, project_id: &str, node_id: &str) -> Result<(), BackendError>;

    async fn create_link(&self, project_id: &str, link: &LinkCreate) -> Result<Link, BackendError>;
    async fn list_links(&self, project_id: &str) -> Result<Vec<Link>, BackendError>;
}

/// Produces a backend handle for a target
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, target: &Target) -> Result<Box<dyn Backend>, BackendError>;
}

/// What to do when a project with the lab name already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectPolicy {
    #[default]
    Reuse,
    Fail,
}

impl FromStr for ProjectPolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reuse" => Ok(Self::Reuse),
            "fail" => Ok(Self::Fail),
            other => Err(ConfigurationError::new(format!(
                "unknown project policy '{}' (expected reuse or fail)",
                other
            ))),
        }
    }
}

/// Template name -> template id
pub type TemplateCatalog = BTreeMap<String, String>;

/// An established connection to one backend
pub struct Session {
    backend: Box<dyn Backend>,
    version: String,
}

impl Session {
    /// Probe the backend; this is the step that gates all further work on a target
    pub async fn establish(backend: Box<dyn Backend>) -> Result<Self, BackendError> {
        let version = backend.version().await?.version;
        tracing::info!("Connecting to GNS3 server {} at {}", version, backend.url());
        Ok(Self { backend, version })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn url(&self) -> &str {
        self.backend.url()
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    pub async fn list_templates(&self) -> Result<TemplateCatalog, BackendError> {
        let templates = self.backend.list_templates().await?;
        Ok(templates
            .into_iter()
            .map(|t| (t.name, t.template_id))
            .collect())
    }

    /// Create the project, or resolve a name collision according to `policy`
    pub async fn create_project(&self, name: &str, policy: ProjectPolicy) -> Result<Project, BackendError> {
        if let Some(existing) = self.find_project(name).await? {
            return self.on_collision(existing, policy);
        }

        match self.backend.create_project(name).await {
            Ok(project) => {
                tracing::info!("Project '{}' created on {}", name, self.url());
                Ok(project)
            }
            // Created by someone else between the lookup and the POST
            Err(e) if e.is_conflict() => match self.find_project(name).await? {
                Some(existing) => self.on_collision(existing, policy),
                None => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    pub async fn open(&self, project: &Project) -> Result<Project, BackendError> {
        self.backend.open_project(&project.project_id).await
    }

    async fn find_project(&self, name: &str) -> Result<Option<Project>, BackendError> {
        let projects = self.backend.list_projects().await?;
        Ok(projects.into_iter().find(|p| p.name == name))
    }

    fn on_collision(&self, existing: Project, policy: ProjectPolicy) -> Result<Project, BackendError> {
        match policy {
            ProjectPolicy::Reuse => {
                tracing::info!("Reusing existing project '{}' on {}", existing.name, self.url());
                Ok(existing)
            }
            ProjectPolicy::Fail => Err(BackendError::ProjectExists(existing.name)),
        }
    }
}
