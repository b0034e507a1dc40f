use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClusterConfig {
    /// Kubeconfig context to use; the current context when unset
    #[serde(default)]
    pub context: Option<String>,

    /// Namespace the cluster DNS pods run in
    #[serde(default = "default_dns_namespace")]
    pub dns_namespace: String,

    /// Label selector matching the cluster DNS pods
    #[serde(default = "default_dns_label_selector")]
    pub dns_label_selector: String,

    /// Only read the last N lines of each DNS pod log
    #[serde(default)]
    pub log_tail_lines: Option<i64>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            context: None,
            dns_namespace: default_dns_namespace(),
            dns_label_selector: default_dns_label_selector(),
            log_tail_lines: None,
        }
    }
}

fn default_dns_namespace() -> String {
    "kube-system".to_string()
}

fn default_dns_label_selector() -> String {
    "k8s-app=kube-dns".to_string()
}
