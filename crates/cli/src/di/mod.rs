mod clients;
mod use_cases;

pub use clients::build_cluster_client;
pub use use_cases::UseCases;
