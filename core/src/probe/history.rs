use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domscout_common::domain::{Candidate, History};
use domscout_common::error::LookupError;

use super::{Backoff, Probe, RetryPolicy, Signal};
use crate::ports::ArchiveLookup;

pub type HistoryProbe = Probe<ArchiveSignal>;

/// Asks the web archive whether a candidate was ever captured.
pub struct ArchiveSignal {
    archive: Arc<dyn ArchiveLookup>,
}

impl ArchiveSignal {
    pub fn new(archive: Arc<dyn ArchiveLookup>) -> Self {
        Self { archive }
    }
}

#[async_trait]
impl Signal for ArchiveSignal {
    type Outcome = History;

    fn name(&self) -> &'static str {
        "history"
    }

    async fn query(&self, candidate: &Candidate) -> Result<History, LookupError> {
        match self.archive.has_snapshot(candidate).await? {
            true => Ok(History::Archived),
            false => Ok(History::Clean),
        }
    }

    fn no_record(&self) -> History {
        History::Clean
    }

    fn fallback(&self) -> History {
        History::Archived
    }
}

impl Probe<ArchiveSignal> {
    /// Three attempts, waiting 2s then 4s between them.
    pub fn history(archive: Arc<dyn ArchiveLookup>) -> Self {
        let policy = RetryPolicy::new(3, Backoff::Linear { step: Duration::from_secs(2) });
        Probe::new(ArchiveSignal::new(archive), policy)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
