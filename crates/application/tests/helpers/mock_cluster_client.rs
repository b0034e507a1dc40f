use async_trait::async_trait;
use dns_edges_application::ports::ClusterClient;
use dns_edges_domain::{ClusterClientError, Pod, Service};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockClusterClient {
    dns_logs: String,
    pods: Vec<Pod>,
    services: Vec<Service>,
    dns_logs_error: Option<ClusterClientError>,
    pods_error: Option<ClusterClientError>,
    services_error: Option<ClusterClientError>,
    calls: Mutex<Vec<&'static str>>,
    requested_scopes: Mutex<Vec<(Vec<String>, bool)>>,
}

impl MockClusterClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dns_logs(mut self, logs: &str) -> Self {
        self.dns_logs = logs.to_string();
        self
    }

    pub fn with_pods(mut self, pods: Vec<Pod>) -> Self {
        self.pods = pods;
        self
    }

    pub fn with_services(mut self, services: Vec<Service>) -> Self {
        self.services = services;
        self
    }

    pub fn failing_dns_logs(mut self, error: ClusterClientError) -> Self {
        self.dns_logs_error = Some(error);
        self
    }

    pub fn failing_pods(mut self, error: ClusterClientError) -> Self {
        self.pods_error = Some(error);
        self
    }

    pub fn failing_services(mut self, error: ClusterClientError) -> Self {
        self.services_error = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn requested_scopes(&self) -> Vec<(Vec<String>, bool)> {
        self.requested_scopes.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn record_scope(&self, namespaces: &[String], include_kube_namespaces: bool) {
        self.requested_scopes
            .lock()
            .unwrap()
            .push((namespaces.to_vec(), include_kube_namespaces));
    }
}

#[async_trait]
impl ClusterClient for MockClusterClient {
    async fn get_dns_logs(&self) -> Result<String, ClusterClientError> {
        self.record("dns_logs");
        match &self.dns_logs_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.dns_logs.clone()),
        }
    }

    async fn get_pods_from_namespaces(
        &self,
        namespaces: &[String],
        include_kube_namespaces: bool,
    ) -> Result<Vec<Pod>, ClusterClientError> {
        self.record("pods");
        self.record_scope(namespaces, include_kube_namespaces);
        match &self.pods_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.pods.clone()),
        }
    }

    async fn get_services_from_namespaces(
        &self,
        namespaces: &[String],
        include_kube_namespaces: bool,
    ) -> Result<Vec<Service>, ClusterClientError> {
        self.record("services");
        self.record_scope(namespaces, include_kube_namespaces);
        match &self.services_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.services.clone()),
        }
    }
}
