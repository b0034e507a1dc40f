use async_trait::async_trait;
use dns_edges_domain::{ClusterClientError, Pod, Service};

/// Read access to the orchestration platform.
///
/// `namespaces` follows the aggregation config convention: empty or `*`
/// selects every namespace, and `kube-*` namespaces are only returned when
/// `include_kube_namespaces` is set.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Raw log text of the cluster DNS servers.
    async fn get_dns_logs(&self) -> Result<String, ClusterClientError>;

    async fn get_pods_from_namespaces(
        &self,
        namespaces: &[String],
        include_kube_namespaces: bool,
    ) -> Result<Vec<Pod>, ClusterClientError>;

    async fn get_services_from_namespaces(
        &self,
        namespaces: &[String],
        include_kube_namespaces: bool,
    ) -> Result<Vec<Service>, ClusterClientError>;
}
