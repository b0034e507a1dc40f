#![allow(dead_code)]

use dns_edges_infrastructure::snapshot::client::{DNS_LOG_FILE, PODS_FILE, SERVICES_FILE};
use std::fs;
use tempfile::TempDir;

/// Write a snapshot directory; `None` leaves the file out.
pub fn write_snapshot(logs: Option<&str>, pods: Option<&str>, services: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (file, contents) in [(DNS_LOG_FILE, logs), (PODS_FILE, pods), (SERVICES_FILE, services)] {
        if let Some(contents) = contents {
            fs::write(dir.path().join(file), contents).unwrap();
        }
    }
    dir
}
