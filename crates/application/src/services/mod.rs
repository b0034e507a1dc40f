pub mod dns_log_parser;
pub mod dns_query_analyzer;

pub use dns_log_parser::{parse_log_line, parse_logs};
pub use dns_query_analyzer::DnsQueryAnalyzer;
