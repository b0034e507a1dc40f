use dns_edges_domain::{Communication, CommunicationTarget, DnsQuery, Pod, Service};
use fancy_regex::Regex;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::sync::{Arc, LazyLock};
use tracing::debug;

pub const SERVICE_ZONE_SUFFIX: &str = ".svc.cluster.local.";
pub const POD_ZONE_SUFFIX: &str = ".pod.cluster.local.";

static IP_ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$")
        .expect("IP address pattern must compile")
});

/// Resolves DNS queries to communication edges against a fixed inventory.
///
/// Lookups keep the first matching entry of the inventory lists, so a name
/// shared by several namespaces resolves to whichever came first.
pub struct DnsQueryAnalyzer {
    known_pods: Vec<Pod>,
    known_services: Vec<Service>,
    pods_by_ip: HashMap<Ipv4Addr, usize>,
    pods_by_name: HashMap<Arc<str>, usize>,
    services_by_name: HashMap<Arc<str>, usize>,
}

impl DnsQueryAnalyzer {
    pub fn new(known_pods: Vec<Pod>, known_services: Vec<Service>) -> Self {
        let mut pods_by_ip = HashMap::with_capacity(known_pods.len());
        let mut pods_by_name = HashMap::with_capacity(known_pods.len());
        for (idx, pod) in known_pods.iter().enumerate() {
            pods_by_ip.entry(pod.ip_address).or_insert(idx);
            pods_by_name.entry(pod.name.clone()).or_insert(idx);
        }

        let mut services_by_name = HashMap::with_capacity(known_services.len());
        for (idx, service) in known_services.iter().enumerate() {
            services_by_name.entry(service.name.clone()).or_insert(idx);
        }

        Self {
            known_pods,
            known_services,
            pods_by_ip,
            pods_by_name,
            services_by_name,
        }
    }

    /// Resolve every query independently and collect the distinct edges.
    pub fn analyze(&self, dns_queries: &[DnsQuery]) -> HashSet<Communication> {
        let resolved: Vec<Communication> = dns_queries
            .par_iter()
            .filter_map(|query| self.resolve(query))
            .collect();

        let dropped = dns_queries.len() - resolved.len();
        let communications: HashSet<Communication> = resolved.into_iter().collect();

        debug!(
            queries = dns_queries.len(),
            dropped,
            communications = communications.len(),
            "DNS queries analyzed"
        );
        communications
    }

    /// Resolve a single query; `None` when its source or target is unknown.
    pub fn resolve(&self, dns_query: &DnsQuery) -> Option<Communication> {
        let source = self.pod_by_ip(dns_query.source_ip_address)?;
        let target = self.resolve_target(dns_query)?;

        Some(Communication::new(source.clone(), target))
    }

    fn resolve_target(&self, dns_query: &DnsQuery) -> Option<CommunicationTarget> {
        let domain: &str = &dns_query.target_domain;

        if domain.ends_with(SERVICE_ZONE_SUFFIX) {
            self.service_by_name(dns_query.leading_label())
                .cloned()
                .map(CommunicationTarget::Service)
        } else if domain.ends_with(POD_ZONE_SUFFIX) {
            self.pod_by_reference(dns_query.leading_label())
                .cloned()
                .map(CommunicationTarget::Pod)
        } else {
            Some(CommunicationTarget::external(
                domain.strip_suffix('.').unwrap_or(domain),
            ))
        }
    }

    /// A pod zone label is either a dash-encoded IPv4 address or a pod name.
    fn pod_by_reference(&self, pod_reference: &str) -> Option<&Pod> {
        let pod_ip_address = pod_reference.replace('-', ".");

        if IP_ADDRESS_PATTERN.is_match(&pod_ip_address).unwrap_or(false) {
            // Out of range octets never equal a pod address.
            let ip = pod_ip_address.parse::<Ipv4Addr>().ok()?;
            self.pod_by_ip(ip)
        } else {
            self.pods_by_name
                .get(pod_reference)
                .map(|&idx| &self.known_pods[idx])
        }
    }

    fn pod_by_ip(&self, ip: Ipv4Addr) -> Option<&Pod> {
        self.pods_by_ip.get(&ip).map(|&idx| &self.known_pods[idx])
    }

    fn service_by_name(&self, name: &str) -> Option<&Service> {
        self.services_by_name
            .get(name)
            .map(|&idx| &self.known_services[idx])
    }
}
