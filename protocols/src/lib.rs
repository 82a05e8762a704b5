//! Wire formats spoken by the external services `domscout` probes.
//!
//! Everything here is pure: request encoding and response parsing only.
//! Opening sockets and issuing HTTP requests lives in `domscout-core`.

pub mod expired;
pub mod rss;
pub mod wayback;
pub mod whois;

pub use whois::{WhoisAnswer, WhoisError, WhoisRecord};

use thiserror::Error;

/// Failure to extract data from an HTML/XML document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid css selector `{0}`")]
    Selector(String),
    #[error("expected element `{0}` not found in document")]
    MissingElement(&'static str),
}
