use dns_edges_domain::{ClusterClientError, Pod, Service};
use k8s_openapi::api::core::v1::{Pod as KubePod, Service as KubeService};
use std::net::Ipv4Addr;

/// Convert a Kubernetes pod into the inventory entity.
///
/// Pods without an IPv4 pod IP (pending, host-less, IPv6-only) cannot be the
/// source or target of a logged query and are skipped.
pub fn pod_from_kube(pod: KubePod) -> Option<Pod> {
    let name = pod.metadata.name?;
    let namespace = pod.metadata.namespace?;
    let ip_address = pod.status?.pod_ip?.parse::<Ipv4Addr>().ok()?;

    Some(Pod::new(name, ip_address, namespace))
}

pub fn service_from_kube(service: KubeService) -> Option<Service> {
    let name = service.metadata.name?;
    let namespace = service.metadata.namespace?;

    Some(Service::new(name, namespace))
}

/// HTTP 401/403 become `Unauthorized`, 404 `NotFound`; transport failures
/// become `Connection`.
pub fn map_kube_error(error: kube::Error) -> ClusterClientError {
    match error {
        kube::Error::Api(ref response) => match response.code {
            401 | 403 => ClusterClientError::Unauthorized(error.to_string()),
            404 => ClusterClientError::NotFound(error.to_string()),
            _ => ClusterClientError::Api(error.to_string()),
        },
        kube::Error::Auth(_) => ClusterClientError::Unauthorized(error.to_string()),
        kube::Error::HyperError(_) | kube::Error::Service(_) => {
            ClusterClientError::Connection(error.to_string())
        }
        _ => ClusterClientError::Api(error.to_string()),
    }
}
