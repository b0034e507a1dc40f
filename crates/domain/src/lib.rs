//! DNS Edges Domain Layer
pub mod communication;
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod pod;
pub mod service;

pub use communication::{Communication, CommunicationTarget};
pub use config::{AggregationConfig, CliOverrides, ClusterConfig, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use errors::{AggregationFailure, ClusterClientError};
pub use pod::Pod;
pub use service::Service;
