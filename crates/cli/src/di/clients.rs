use dns_edges_application::ports::ClusterClient;
use dns_edges_domain::ClusterConfig;
use dns_edges_infrastructure::{KubeClusterClient, SnapshotClusterClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub async fn build_cluster_client(
    cluster: &ClusterConfig,
    snapshot_dir: Option<PathBuf>,
) -> anyhow::Result<Arc<dyn ClusterClient>> {
    if let Some(dir) = snapshot_dir {
        info!(snapshot = %dir.display(), "Reading cluster snapshot");
        return Ok(Arc::new(SnapshotClusterClient::new(dir)));
    }

    let client = KubeClusterClient::connect(cluster).await?;
    Ok(Arc::new(client))
}
