pub mod client;
pub mod mapper;

pub use client::KubeClusterClient;
