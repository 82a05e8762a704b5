//! Wayback Machine availability API.
//!
//! `GET /wayback/available?url=<domain>` answers with
//! `{"url": ..., "archived_snapshots": {"closest": {...}}}` when a snapshot
//! exists and `{"archived_snapshots": {}}` when none does.

use serde::Deserialize;
use serde_json::{Map, Value};

pub const AVAILABILITY_ENDPOINT: &str = "http://archive.org/wayback/available";

#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    #[serde(default)]
    archived_snapshots: Option<Map<String, Value>>,
}

pub fn availability_url(endpoint: &str, domain: &str) -> String {
    format!("{endpoint}?url={domain}")
}

/// Whether the body carries a non-empty `archived_snapshots` object.
pub fn has_snapshot(body: &str) -> Result<bool, serde_json::Error> {
    let response: AvailabilityResponse = serde_json::from_str(body)?;
    Ok(response
        .archived_snapshots
        .is_some_and(|snapshots| !snapshots.is_empty()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
