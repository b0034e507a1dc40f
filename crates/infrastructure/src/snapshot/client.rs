use async_trait::async_trait;
use dns_edges_application::ports::ClusterClient;
use dns_edges_domain::config::aggregation::namespace_in_scope;
use dns_edges_domain::{ClusterClientError, Pod, Service};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub const DNS_LOG_FILE: &str = "dns.log";
pub const PODS_FILE: &str = "pods.json";
pub const SERVICES_FILE: &str = "services.json";

/// Cluster client reading a previously captured snapshot from a directory:
///
/// ```text
/// <dir>/dns.log        raw cluster DNS log text
/// <dir>/pods.json      [{"name": "...", "ip_address": "10.0.0.5", "namespace": "..."}]
/// <dir>/services.json  [{"name": "...", "namespace": "..."}]
/// ```
pub struct SnapshotClusterClient {
    snapshot_dir: PathBuf,
}

impl SnapshotClusterClient {
    pub fn new(snapshot_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_dir: snapshot_dir.into(),
        }
    }

    async fn read(&self, file: &str) -> Result<String, ClusterClientError> {
        let path = self.snapshot_dir.join(file);
        fs::read_to_string(&path)
            .await
            .map_err(|e| read_error(&path, e))
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, ClusterClientError> {
        let contents = self.read(file).await?;
        serde_json::from_str(&contents).map_err(|e| {
            ClusterClientError::InvalidData(format!("Failed to parse {}: {}", file, e))
        })
    }
}

fn read_error(path: &Path, error: std::io::Error) -> ClusterClientError {
    let description = format!("Failed to read {}: {}", path.display(), error);
    match error.kind() {
        ErrorKind::NotFound => ClusterClientError::NotFound(description),
        _ => ClusterClientError::Io(description),
    }
}

#[async_trait]
impl ClusterClient for SnapshotClusterClient {
    async fn get_dns_logs(&self) -> Result<String, ClusterClientError> {
        self.read(DNS_LOG_FILE).await
    }

    async fn get_pods_from_namespaces(
        &self,
        namespaces: &[String],
        include_kube_namespaces: bool,
    ) -> Result<Vec<Pod>, ClusterClientError> {
        let pods: Vec<Pod> = self.read_json(PODS_FILE).await?;
        let total = pods.len();

        let pods: Vec<Pod> = pods
            .into_iter()
            .filter(|pod| namespace_in_scope(&pod.namespace, namespaces, include_kube_namespaces))
            .collect();

        debug!(total, in_scope = pods.len(), "Snapshot pods loaded");
        Ok(pods)
    }

    async fn get_services_from_namespaces(
        &self,
        namespaces: &[String],
        include_kube_namespaces: bool,
    ) -> Result<Vec<Service>, ClusterClientError> {
        let services: Vec<Service> = self.read_json(SERVICES_FILE).await?;
        let total = services.len();

        let services: Vec<Service> = services
            .into_iter()
            .filter(|service| {
                namespace_in_scope(&service.namespace, namespaces, include_kube_namespaces)
            })
            .collect();

        debug!(total, in_scope = services.len(), "Snapshot services loaded");
        Ok(services)
    }
}
