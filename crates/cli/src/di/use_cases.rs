use dns_edges_application::ports::ClusterClient;
use dns_edges_application::use_cases::AggregateDnsCommunicationsUseCase;
use dns_edges_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub aggregate_dns: Arc<AggregateDnsCommunicationsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, cluster_client: Arc<dyn ClusterClient>) -> Self {
        Self {
            aggregate_dns: Arc::new(AggregateDnsCommunicationsUseCase::new(
                config.aggregation.clone(),
                cluster_client,
            )),
        }
    }
}
