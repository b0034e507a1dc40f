use dns_edges_domain::{CommunicationTarget, DnsQuery, Pod, Service};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn pod(name: &str, ip: &str) -> Pod {
    pod_in(name, ip, "default")
}

pub fn pod_in(name: &str, ip: &str, namespace: &str) -> Pod {
    Pod::new(name, Ipv4Addr::from_str(ip).unwrap(), namespace)
}

pub fn service(name: &str) -> Service {
    Service::new(name, "default")
}

pub fn query(source_ip: &str, domain: &str) -> DnsQuery {
    DnsQuery::new(Ipv4Addr::from_str(source_ip).unwrap(), domain)
}

pub fn external(domain: &str) -> CommunicationTarget {
    CommunicationTarget::external(domain)
}
