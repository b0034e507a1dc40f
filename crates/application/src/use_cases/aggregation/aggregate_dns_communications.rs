use crate::ports::ClusterClient;
use crate::services::{parse_logs, DnsQueryAnalyzer};
use dns_edges_domain::{AggregationConfig, AggregationFailure, ClusterClientError, Communication};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Use case: derive communication edges from the cluster DNS logs.
///
/// Fetches logs, pods and services in that order and stops at the first
/// client failure.
pub struct AggregateDnsCommunicationsUseCase {
    config: AggregationConfig,
    cluster_client: Arc<dyn ClusterClient>,
}

impl AggregateDnsCommunicationsUseCase {
    pub fn new(config: AggregationConfig, cluster_client: Arc<dyn ClusterClient>) -> Self {
        Self {
            config,
            cluster_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<HashSet<Communication>, AggregationFailure> {
        info!("Aggregating communications from cluster DNS logs");

        let dns_logs = self
            .cluster_client
            .get_dns_logs()
            .await
            .map_err(Self::abort)?;
        let known_pods = self
            .cluster_client
            .get_pods_from_namespaces(
                &self.config.namespaces,
                self.config.include_kube_namespaces,
            )
            .await
            .map_err(Self::abort)?;
        let known_services = self
            .cluster_client
            .get_services_from_namespaces(
                &self.config.namespaces,
                self.config.include_kube_namespaces,
            )
            .await
            .map_err(Self::abort)?;

        debug!(
            log_bytes = dns_logs.len(),
            pods = known_pods.len(),
            services = known_services.len(),
            "Cluster data fetched"
        );

        let dns_queries = parse_logs(&dns_logs);
        let analyzer = DnsQueryAnalyzer::new(known_pods, known_services);
        let communications = analyzer.analyze(&dns_queries);

        info!(
            queries = dns_queries.len(),
            communications = communications.len(),
            "DNS aggregation finished"
        );
        Ok(communications)
    }

    fn abort(error: ClusterClientError) -> AggregationFailure {
        warn!(error = %error, "Cluster request failed, aborting DNS aggregation");
        error.into()
    }
}
