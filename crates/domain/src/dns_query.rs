use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// A single name lookup observed in the cluster DNS logs.
///
/// `target_domain` is kept exactly as logged, i.e. fully qualified with the
/// trailing `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnsQuery {
    pub source_ip_address: Ipv4Addr,
    pub target_domain: Arc<str>,
}

impl DnsQuery {
    pub fn new(source_ip_address: Ipv4Addr, target_domain: impl Into<Arc<str>>) -> Self {
        Self {
            source_ip_address,
            target_domain: target_domain.into(),
        }
    }

    /// First DNS label of the queried name (everything before the first `.`).
    pub fn leading_label(&self) -> &str {
        self.target_domain.split('.').next().unwrap_or_default()
    }
}
