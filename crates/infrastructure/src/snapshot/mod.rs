pub mod client;

pub use client::SnapshotClusterClient;
