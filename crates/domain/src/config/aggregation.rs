use serde::{Deserialize, Serialize};

/// Wildcard namespace entry selecting every namespace of the cluster
pub const ALL_NAMESPACES: &str = "*";

/// Prefix shared by the namespaces Kubernetes itself runs in
pub const KUBE_NAMESPACE_PREFIX: &str = "kube-";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AggregationConfig {
    /// Namespaces whose pods and services form the known inventory.
    /// An empty list, or a list containing `*`, selects all namespaces.
    #[serde(default)]
    pub namespaces: Vec<String>,

    /// Keep `kube-*` namespaces in the inventory
    #[serde(default)]
    pub include_kube_namespaces: bool,
}

pub fn selects_all_namespaces(namespaces: &[String]) -> bool {
    namespaces.is_empty() || namespaces.iter().any(|ns| ns == ALL_NAMESPACES)
}

/// Whether `namespace` belongs to the inventory described by `namespaces`
/// and `include_kube_namespaces`.
///
/// System namespaces are excluded unless the flag is set, even when listed
/// explicitly.
pub fn namespace_in_scope(
    namespace: &str,
    namespaces: &[String],
    include_kube_namespaces: bool,
) -> bool {
    if !include_kube_namespaces && namespace.starts_with(KUBE_NAMESPACE_PREFIX) {
        return false;
    }
    selects_all_namespaces(namespaces) || namespaces.iter().any(|ns| ns == namespace)
}
