//! # Ports
//!
//! Contracts between the pipeline and the outside world. The pipeline only
//! depends on these traits; [`crate::network`], [`crate::sources`],
//! [`crate::publish`] and [`crate::persist`] hold the live implementations
//! and tests substitute in-memory ones.

use std::path::PathBuf;

use async_trait::async_trait;
use domscout_common::domain::Candidate;
use domscout_common::error::LookupError;

use crate::persist::SaveError;

/// Registration data as reported by the registry.
pub use domscout_protocols::whois::WhoisRecord as Registration;

/// Registry lookup. `Err(NotFound)` means nobody holds the name.
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    async fn lookup(&self, candidate: &Candidate) -> Result<Registration, LookupError>;
}

/// Web-archive lookup. `Ok(true)` when at least one snapshot exists.
#[async_trait]
pub trait ArchiveLookup: Send + Sync {
    async fn has_snapshot(&self, candidate: &Candidate) -> Result<bool, LookupError>;
}

/// Relative quality score of a domain.
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn score(&self, candidate: &Candidate) -> Result<u32, LookupError>;
}

/// One generator feeding the new-domain pipeline.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn generate(&self) -> anyhow::Result<Vec<Candidate>>;
}

/// Feed of recently expired names for the expired-domain pipeline.
#[async_trait]
pub trait ExpiredListSource: Send + Sync {
    async fn fetch_expired(&self) -> anyhow::Result<Vec<Candidate>>;
}

/// Lists a surviving candidate somewhere. Fire-and-continue.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, candidate: &Candidate);
}

/// Stores the final lines of a pipeline run.
pub trait ResultSink: Send + Sync {
    fn save(&self, pipeline: &str, lines: &[String]) -> Result<PathBuf, SaveError>;
}

/// Observer for worker pool progress. Cosmetic only.
pub trait Progress: Send + Sync {
    fn start(&self, label: &str, total: usize);
    fn advance(&self);
    fn finish(&self);
}

/// A [`Progress`] that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&self, _label: &str, _total: usize) {}
    fn advance(&self) {}
    fn finish(&self) {}
}
