use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use domscout_common::domain::{Availability, Candidate};
use domscout_common::error::LookupError;

use super::{Backoff, Probe, RetryPolicy, Signal};
use crate::ports::RegistrationLookup;

pub type AvailabilityProbe = Probe<RegistrationSignal>;

/// Asks the registry whether a candidate is currently held.
pub struct RegistrationSignal {
    lookup: Arc<dyn RegistrationLookup>,
}

impl RegistrationSignal {
    pub fn new(lookup: Arc<dyn RegistrationLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl Signal for RegistrationSignal {
    type Outcome = Availability;

    fn name(&self) -> &'static str {
        "availability"
    }

    async fn query(&self, candidate: &Candidate) -> Result<Availability, LookupError> {
        let registration = self.lookup.lookup(candidate).await?;
        if registration.is_registered_at(Utc::now()) {
            Ok(Availability::Unavailable)
        } else {
            Ok(Availability::Available)
        }
    }

    fn no_record(&self) -> Availability {
        Availability::Available
    }

    fn fallback(&self) -> Availability {
        Availability::Unavailable
    }
}

impl Probe<RegistrationSignal> {
    /// Three attempts, waiting 1s then 2s between them.
    pub fn availability(lookup: Arc<dyn RegistrationLookup>) -> Self {
        let policy = RetryPolicy::new(3, Backoff::Exponential { base: Duration::from_secs(1) });
        Probe::new(RegistrationSignal::new(lookup), policy)
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
