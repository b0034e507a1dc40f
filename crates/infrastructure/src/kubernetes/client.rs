use super::mapper::{map_kube_error, pod_from_kube, service_from_kube};
use async_trait::async_trait;
use dns_edges_application::ports::ClusterClient;
use dns_edges_domain::config::aggregation::{namespace_in_scope, selects_all_namespaces};
use dns_edges_domain::{ClusterClientError, ClusterConfig, Pod, Service};
use futures::future::try_join_all;
use k8s_openapi::api::core::v1::{Pod as KubePod, Service as KubeService};
use k8s_openapi::NamespaceResourceScope;
use kube::api::{Api, ListParams, LogParams};
use kube::config::KubeConfigOptions;
use kube::{Client, Config, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, info};

/// Cluster client backed by the Kubernetes API server.
///
/// DNS logs are read from the pods matching `dns_label_selector` in
/// `dns_namespace` (CoreDNS in a default installation).
pub struct KubeClusterClient {
    client: Client,
    dns_namespace: String,
    dns_label_selector: String,
    log_tail_lines: Option<i64>,
}

impl KubeClusterClient {
    /// Connect using the configured kubeconfig context, or the inferred
    /// configuration (in-cluster service account or current context).
    pub async fn connect(config: &ClusterConfig) -> Result<Self, ClusterClientError> {
        let kube_config = match &config.context {
            Some(context) => Config::from_kubeconfig(&KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            })
            .await
            .map_err(|e| ClusterClientError::Connection(e.to_string()))?,
            None => Config::infer()
                .await
                .map_err(|e| ClusterClientError::Connection(e.to_string()))?,
        };

        let client = Client::try_from(kube_config)
            .map_err(|e| ClusterClientError::Connection(e.to_string()))?;

        info!(
            context = config.context.as_deref().unwrap_or("<inferred>"),
            "Connected to Kubernetes cluster"
        );
        Ok(Self::new(client, config))
    }

    pub fn new(client: Client, config: &ClusterConfig) -> Self {
        Self {
            client,
            dns_namespace: config.dns_namespace.clone(),
            dns_label_selector: config.dns_label_selector.clone(),
            log_tail_lines: config.log_tail_lines,
        }
    }

    async fn list_in_namespaces<K>(&self, namespaces: &[String]) -> Result<Vec<K>, ClusterClientError>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        if selects_all_namespaces(namespaces) {
            let api: Api<K> = Api::all(self.client.clone());
            let list = api
                .list(&ListParams::default())
                .await
                .map_err(map_kube_error)?;
            return Ok(list.items);
        }

        let mut items = Vec::new();
        for namespace in namespaces {
            let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
            let list = api
                .list(&ListParams::default())
                .await
                .map_err(map_kube_error)?;
            items.extend(list.items);
        }
        Ok(items)
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    async fn get_dns_logs(&self) -> Result<String, ClusterClientError> {
        let api: Api<KubePod> = Api::namespaced(self.client.clone(), &self.dns_namespace);
        let dns_pods = api
            .list(&ListParams::default().labels(&self.dns_label_selector))
            .await
            .map_err(map_kube_error)?;

        let pod_names: Vec<String> = dns_pods
            .items
            .into_iter()
            .filter_map(|pod| pod.metadata.name)
            .collect();

        if pod_names.is_empty() {
            return Err(ClusterClientError::NotFound(format!(
                "no DNS pods matching '{}' in namespace '{}'",
                self.dns_label_selector, self.dns_namespace
            )));
        }

        let params = LogParams {
            tail_lines: self.log_tail_lines,
            ..LogParams::default()
        };
        let logs = try_join_all(pod_names.iter().map(|name| api.logs(name, &params)))
            .await
            .map_err(map_kube_error)?;

        debug!(dns_pods = pod_names.len(), "DNS logs fetched");
        Ok(logs.join("\n"))
    }

    async fn get_pods_from_namespaces(
        &self,
        namespaces: &[String],
        include_kube_namespaces: bool,
    ) -> Result<Vec<Pod>, ClusterClientError> {
        let pods: Vec<Pod> = self
            .list_in_namespaces::<KubePod>(namespaces)
            .await?
            .into_iter()
            .filter_map(pod_from_kube)
            .filter(|pod| namespace_in_scope(&pod.namespace, namespaces, include_kube_namespaces))
            .collect();

        debug!(pods = pods.len(), "Pods fetched");
        Ok(pods)
    }

    async fn get_services_from_namespaces(
        &self,
        namespaces: &[String],
        include_kube_namespaces: bool,
    ) -> Result<Vec<Service>, ClusterClientError> {
        let services: Vec<Service> = self
            .list_in_namespaces::<KubeService>(namespaces)
            .await?
            .into_iter()
            .filter_map(service_from_kube)
            .filter(|service| {
                namespace_in_scope(&service.namespace, namespaces, include_kube_namespaces)
            })
            .collect();

        debug!(services = services.len(), "Services fetched");
        Ok(services)
    }
}
