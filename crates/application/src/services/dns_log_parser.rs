use dns_edges_domain::DnsQuery;
use fancy_regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;
use tracing::debug;

// CoreDNS `log` plugin, default format:
// [INFO] 10.244.0.5:41234 - 12345 "A IN backend.default.svc.cluster.local. udp 51 false 512" NOERROR qr,aa,rd 106 0.000123s
static QUERY_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\[INFO\]\s+(?P<source>[0-9]{1,3}(?:\.[0-9]{1,3}){3}):[0-9]+\s+-\s+[0-9]+\s+"\S+\s+\S+\s+(?P<domain>\S+\.)\s"#,
    )
    .expect("DNS query line pattern must compile")
});

/// Extract every DNS query from raw cluster DNS log text.
///
/// Lines that are not query entries are skipped.
pub fn parse_logs(raw_logs: &str) -> Vec<DnsQuery> {
    let mut skipped = 0usize;
    let queries: Vec<DnsQuery> = raw_logs
        .lines()
        .filter_map(|line| {
            let query = parse_log_line(line);
            if query.is_none() {
                skipped += 1;
            }
            query
        })
        .collect();

    debug!(queries = queries.len(), skipped, "DNS logs parsed");
    queries
}

pub fn parse_log_line(line: &str) -> Option<DnsQuery> {
    let captures = QUERY_LINE_PATTERN.captures(line).ok().flatten()?;

    let source_ip_address = captures
        .name("source")?
        .as_str()
        .parse::<Ipv4Addr>()
        .ok()?;
    let target_domain = captures.name("domain")?.as_str();

    Some(DnsQuery::new(source_ip_address, target_domain))
}
