pub mod aggregate_dns_communications;

pub use aggregate_dns_communications::AggregateDnsCommunicationsUseCase;
