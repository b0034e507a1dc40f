//! DNS Edges Infrastructure Layer
pub mod kubernetes;
pub mod snapshot;

pub use kubernetes::KubeClusterClient;
pub use snapshot::SnapshotClusterClient;
