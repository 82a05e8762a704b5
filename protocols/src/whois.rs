//! # WHOIS (RFC 3912)
//!
//! A WHOIS exchange is a single line query over TCP port 43 followed by a
//! free-form text answer. Registries disagree on the answer layout, so parsing
//! is limited to what the availability probe needs: "no record" detection,
//! status lines and the expiration date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;
use tracing::debug;

pub const WHOIS_PORT: u16 = 43;
pub const IANA_SERVER: &str = "whois.iana.org";

const SERVERS: &[(&str, &str)] = &[
    ("com", "whois.verisign-grs.com"),
    ("net", "whois.verisign-grs.com"),
    ("org", "whois.pir.org"),
    ("io", "whois.nic.io"),
    ("ai", "whois.nic.ai"),
    ("co", "whois.nic.co"),
    ("xyz", "whois.nic.xyz"),
    ("app", "whois.nic.google"),
    ("dev", "whois.nic.google"),
];

const NOT_FOUND_MARKERS: &[&str] = &[
    "no match for",
    "not found",
    "no data found",
    "no entries found",
    "no object found",
    "domain not found",
    "status: free",
    "status: available",
];

const RATE_LIMIT_MARKERS: &[&str] = &["limit exceeded", "too many requests", "quota exceeded"];

const EXPIRY_KEYS: &[&str] = &[
    "registry expiry date",
    "registrar registration expiration date",
    "expiration date",
    "expiry date",
    "expires on",
    "expires",
    "paid-till",
];

const STATUS_KEYS: &[&str] = &["domain status", "status"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhoisError {
    #[error("empty whois response")]
    Empty,
    #[error("whois server rate limited the query")]
    RateLimited,
}

/// Registration data extracted from a WHOIS answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WhoisRecord {
    pub statuses: Vec<String>,
    pub expires: Option<DateTime<Utc>>,
    /// An expiry line was present but its date layout is unknown.
    pub expiry_unreadable: bool,
}

impl WhoisRecord {
    /// True when the record has a status and an expiration still ahead of
    /// `now`. An unreadable expiration counts as still ahead.
    pub fn is_registered_at(&self, now: DateTime<Utc>) -> bool {
        !self.statuses.is_empty()
            && (self.expiry_unreadable || self.expires.is_some_and(|expires| expires > now))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhoisAnswer {
    NotFound,
    Record(WhoisRecord),
}

/// Returns the authoritative server for `domain`'s TLD, if it is a known one.
pub fn server_for(domain: &str) -> Option<&'static str> {
    let tld = domain.rsplit('.').next()?.to_ascii_lowercase();
    SERVERS
        .iter()
        .find(|(known, _)| *known == tld)
        .map(|(_, server)| *server)
}

pub fn encode_query(domain: &str) -> Vec<u8> {
    format!("{domain}\r\n").into_bytes()
}

/// Extracts the `refer:` / `whois:` server from an IANA answer.
pub fn referral_server(raw: &str) -> Option<String> {
    key_values(raw)
        .find(|(key, value)| (key == "refer" || key == "whois") && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub fn parse_response(raw: &str) -> Result<WhoisAnswer, WhoisError> {
    if raw.trim().is_empty() {
        return Err(WhoisError::Empty);
    }

    let mut record = WhoisRecord::default();

    for line in raw.lines() {
        let lower = line.trim().to_ascii_lowercase();
        if NOT_FOUND_MARKERS.iter().any(|marker| lower.starts_with(marker)) {
            return Ok(WhoisAnswer::NotFound);
        }
        if RATE_LIMIT_MARKERS.iter().any(|marker| lower.contains(marker)) {
            return Err(WhoisError::RateLimited);
        }
    }

    let mut expiry_seen = false;
    for (key, value) in key_values(raw) {
        if value.is_empty() {
            continue;
        }
        if STATUS_KEYS.contains(&key.as_str()) {
            record.statuses.push(value.to_string());
        } else if record.expires.is_none() && EXPIRY_KEYS.contains(&key.as_str()) {
            expiry_seen = true;
            record.expires = parse_date(value);
            if record.expires.is_none() {
                debug!(key = %key, value, "unrecognized expiry date");
            }
        }
    }

    record.expiry_unreadable = expiry_seen && record.expires.is_none();
    Ok(WhoisAnswer::Record(record))
}

fn key_values(raw: &str) -> impl Iterator<Item = (String, &str)> {
    raw.lines().filter_map(|line| {
        let (key, value) = line.split_once(':')?;
        Some((key.trim().to_ascii_lowercase(), value.trim()))
    })
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    // Some registries append a timezone name after the timestamp.
    let token = value.split_whitespace().next()?;

    if let Ok(parsed) = DateTime::parse_from_rfc3339(token) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(token, format) {
            return Some(naive.and_utc());
        }
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%d-%b-%Y", "%Y.%m.%d", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
