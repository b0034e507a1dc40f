pub mod aggregation;
pub mod cluster;
pub mod errors;
pub mod logging;
pub mod root;

pub use aggregation::AggregationConfig;
pub use cluster::ClusterConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
