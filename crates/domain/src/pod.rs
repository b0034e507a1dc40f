use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pod {
    pub name: Arc<str>,
    pub ip_address: Ipv4Addr,
    pub namespace: Arc<str>,
}

impl Pod {
    pub fn new(
        name: impl Into<Arc<str>>,
        ip_address: Ipv4Addr,
        namespace: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            ip_address,
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for Pod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.namespace, self.name, self.ip_address)
    }
}
