#![allow(dead_code)]

pub mod builders;
pub mod mock_cluster_client;

pub use builders::{external, pod, query, service};
pub use mock_cluster_client::MockClusterClient;
