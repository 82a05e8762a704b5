use std::ops::RangeInclusive;

use async_trait::async_trait;
use domscout_common::config::Credentials;
use domscout_common::domain::Candidate;
use domscout_common::error::LookupError;
use domscout_common::warn;

use crate::ports::Scorer;

pub const SCORE_RANGE: RangeInclusive<u32> = 5..=40;

/// Stand-in for a domain authority API: a uniform random score in
/// [`SCORE_RANGE`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedScorer;

impl SimulatedScorer {
    pub fn from_credentials(credentials: &Credentials) -> Self {
        if credentials.has_moz() {
            warn!("Moz credentials found but the Moz API is not integrated, scores stay simulated");
        }
        Self
    }
}

#[async_trait]
impl Scorer for SimulatedScorer {
    async fn score(&self, _candidate: &Candidate) -> Result<u32, LookupError> {
        Ok(rand::random_range(SCORE_RANGE))
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
