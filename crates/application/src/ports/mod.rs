mod cluster_client;

pub use cluster_client::ClusterClient;
