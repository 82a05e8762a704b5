use std::sync::Arc;

use async_trait::async_trait;
use domscout_common::domain::Candidate;
use domscout_common::error::LookupError;

use super::{Probe, RetryPolicy, Signal};
use crate::ports::Scorer;

pub type ScoreProbe = Probe<ScoreSignal>;

/// Quality score. Unknown domains score zero.
pub struct ScoreSignal {
    scorer: Arc<dyn Scorer>,
}

impl ScoreSignal {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }
}

#[async_trait]
impl Signal for ScoreSignal {
    type Outcome = u32;

    fn name(&self) -> &'static str {
        "score"
    }

    async fn query(&self, candidate: &Candidate) -> Result<u32, LookupError> {
        self.scorer.score(candidate).await
    }

    fn no_record(&self) -> u32 {
        0
    }

    fn fallback(&self) -> u32 {
        0
    }
}

impl Probe<ScoreSignal> {
    pub fn score(scorer: Arc<dyn Scorer>) -> Self {
        Probe::new(ScoreSignal::new(scorer), RetryPolicy::once())
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
