use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::BackendError;
use crate::targets::Target;

use super::types::*;
use super::{Backend, Connector};

/// GNS3 v2 REST API client
pub struct Gns3Client {
    base_url: String,
    user: String,
    password: String,
    client: Client,
}

impl Gns3Client {
    pub fn new(url: &str, user: &str, password: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
            user: user.to_string(),
            password: password.to_string(),
            client,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v2{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.api_url(path))
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json")
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.api_url(path))
            .basic_auth(&self.user, Some(&self.password))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.client
            .put(self.api_url(path))
            .basic_auth(&self.user, Some(&self.password))
    }

    /// Send a request and check the status, returning the raw response
    async fn send(
        &self,
        method: &'static str,
        path: &str,
        req: RequestBuilder,
    ) -> Result<reqwest::Response, BackendError> {
        let resp = req.send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                method,
                endpoint: path.to_string(),
                status,
                body,
            });
        }

        Ok(resp)
    }

    /// Helper to send a request and decode a JSON body
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        req: RequestBuilder,
    ) -> Result<T, BackendError> {
        Ok(self.send(method, path, req).await?.json().await?)
    }
}

#[async_trait]
impl Backend for Gns3Client {
    fn url(&self) -> &str {
        &self.base_url
    }

    async fn version(&self) -> Result<Version, BackendError> {
        self.send_json("GET", "/version", self.get("/version")).await
    }

    async fn list_templates(&self) -> Result<Vec<Template>, BackendError> {
        self.send_json("GET", "/templates", self.get("/templates")).await
    }

    // --- Projects ---

    async fn list_projects(&self) -> Result<Vec<Project>, BackendError> {
        self.send_json("GET", "/projects", self.get("/projects")).await
    }

    async fn create_project(&self, name: &str) -> Result<Project, BackendError> {
        let body = ProjectCreate { name: name.to_string() };
        self.send_json("POST", "/projects", self.post("/projects").json(&body))
            .await
    }

    async fn open_project(&self, project_id: &str) -> Result<Project, BackendError> {
        let path = format!("/projects/{}/open", project_id);
        self.send_json("POST", &path, self.post(&path)).await
    }

    // --- Nodes ---

    async fn create_node(
        &self,
        project_id: &str,
        template_id: &str,
        node: &NodeCreate,
    ) -> Result<Node, BackendError> {
        let path = format!("/projects/{}/templates/{}", project_id, template_id);
        self.send_json("POST", &path, self.post(&path).json(node)).await
    }

    async fn list_nodes(&self, project_id: &str) -> Result<Vec<Node>, BackendError> {
        let path = format!("/projects/{}/nodes", project_id);
        self.send_json("GET", &path, self.get(&path)).await
    }

    async fn get_node(&self, project_id: &str, node_id: &str) -> Result<Node, BackendError> {
        let path = format!("/projects/{}/nodes/{}", project_id, node_id);
        self.send_json("GET", &path, self.get(&path)).await
    }

    async fn update_node(
        &self,
        project_id: &str,
        node_id: &str,
        update: &NodeUpdate,
    ) -> Result<Node, BackendError> {
        let path = format!("/projects/{}/nodes/{}", project_id, node_id);
        self.send_json("PUT", &path, self.put(&path).json(update)).await
    }

    async fn start_node(&self, project_id: &str, node_id: &str) -> Result<(), BackendError> {
        let path = format!("/projects/{}/nodes/{}/start", project_id, node_id);
        self.send("POST", &path, self.post(&path)).await?;
        Ok(())
    }

    // --- Links ---

    async fn create_link(&self, project_id: &str, link: &LinkCreate) -> Result<Link, BackendError> {
        let path = format!("/projects/{}/links", project_id);
        self.send_json("POST", &path, self.post(&path).json(link)).await
    }

    async fn list_links(&self, project_id: &str) -> Result<Vec<Link>, BackendError> {
        let path = format!("/projects/{}/links", project_id);
        self.send_json("GET", &path, self.get(&path)).await
    }
}

/// Builds a REST client per target with a shared per-request timeout
pub struct Gns3Connector {
    timeout: Duration,
}

impl Gns3Connector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Connector for Gns3Connector {
    async fn connect(&self, target: &Target) -> Result<Box<dyn Backend>, BackendError> {
        let client = Gns3Client::new(
            &target.url,
            &target.credentials.user,
            &target.credentials.password,
            self.timeout,
        )?;
        Ok(Box::new(client))
    }
}
