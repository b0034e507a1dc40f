pub mod aggregation;

pub use aggregation::AggregateDnsCommunicationsUseCase;
