use crate::pod::Pod;
use crate::service::Service;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Component a workload was observed talking to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommunicationTarget {
    Pod(Pod),
    Service(Service),
    /// Domain outside the cluster zones, without the trailing `.`.
    External { domain: Arc<str> },
}

impl CommunicationTarget {
    pub fn external(domain: impl Into<Arc<str>>) -> Self {
        Self::External {
            domain: domain.into(),
        }
    }
}

impl fmt::Display for CommunicationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pod(pod) => write!(f, "pod {}", pod),
            Self::Service(service) => write!(f, "service {}", service),
            Self::External { domain } => write!(f, "external {}", domain),
        }
    }
}

/// Directed communication edge between a source pod and a target component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Communication {
    pub source: Pod,
    pub target: CommunicationTarget,
}

impl Communication {
    pub fn new(source: Pod, target: CommunicationTarget) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for Communication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pod {} -> {}", self.source, self.target)
    }
}
