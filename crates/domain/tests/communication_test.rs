use dns_edges_domain::{Communication, CommunicationTarget, DnsQuery, Pod, Service};
use std::collections::HashSet;
use std::net::Ipv4Addr;

fn frontend() -> Pod {
    Pod::new("frontend", Ipv4Addr::new(10, 0, 0, 5), "default")
}

#[test]
fn test_structurally_equal_edges_collapse_in_set() {
    let mut edges = HashSet::new();
    edges.insert(Communication::new(
        frontend(),
        CommunicationTarget::Service(Service::new("backend", "default")),
    ));
    edges.insert(Communication::new(
        frontend(),
        CommunicationTarget::Service(Service::new("backend", "default")),
    ));
    edges.insert(Communication::new(
        frontend(),
        CommunicationTarget::external("api.example.com"),
    ));

    assert_eq!(edges.len(), 2);
}

#[test]
fn test_targets_of_different_kinds_are_distinct() {
    let pod_target = CommunicationTarget::Pod(Pod::new(
        "backend",
        Ipv4Addr::new(10, 0, 0, 9),
        "default",
    ));
    let service_target = CommunicationTarget::Service(Service::new("backend", "default"));

    assert_ne!(pod_target, service_target);
    assert_ne!(service_target, CommunicationTarget::external("backend"));
}

#[test]
fn test_communication_display() {
    let edge = Communication::new(
        frontend(),
        CommunicationTarget::Service(Service::new("backend", "shop")),
    );

    assert_eq!(
        edge.to_string(),
        "pod default/frontend (10.0.0.5) -> service shop/backend"
    );
    assert_eq!(
        CommunicationTarget::external("api.example.com").to_string(),
        "external api.example.com"
    );
}

#[test]
fn test_communication_serializes_with_target_kind() {
    let edge = Communication::new(frontend(), CommunicationTarget::external("api.example.com"));

    let json = serde_json::to_value(&edge).unwrap();

    assert_eq!(json["source"]["name"], "frontend");
    assert_eq!(json["source"]["ip_address"], "10.0.0.5");
    assert_eq!(json["target"]["kind"], "external");
    assert_eq!(json["target"]["domain"], "api.example.com");
}

#[test]
fn test_pod_target_serialization_keeps_pod_fields() {
    let target = CommunicationTarget::Pod(Pod::new("worker-1", Ipv4Addr::new(10, 0, 0, 9), "jobs"));

    let json = serde_json::to_value(&target).unwrap();

    assert_eq!(json["kind"], "pod");
    assert_eq!(json["name"], "worker-1");
    assert_eq!(json["namespace"], "jobs");
}

#[test]
fn test_dns_query_leading_label() {
    let query = DnsQuery::new(
        Ipv4Addr::new(10, 0, 0, 5),
        "backend.default.svc.cluster.local.",
    );
    assert_eq!(query.leading_label(), "backend");

    let query = DnsQuery::new(Ipv4Addr::new(10, 0, 0, 5), "localhost");
    assert_eq!(query.leading_label(), "localhost");
}
