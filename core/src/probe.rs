//! Single-candidate checks against one external signal.
//!
//! Every probe shares the same shape: a [`Signal`] that knows how to ask one
//! service, wrapped in a [`Probe`] that owns the [`RetryPolicy`]. The probe
//! never fails. Transient errors are retried with backoff, a "no record"
//! answer maps to the signal's own outcome, and running out of attempts maps
//! to the signal's conservative fallback.
//!
//! * [`availability`]: registry status, fail-closed to *unavailable*.
//! * [`history`]: web-archive presence, fail-closed to *archived*.
//! * [`score`]: quality score, single attempt, fallback `0`.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use domscout_common::domain::Candidate;
use domscout_common::error::LookupError;
use domscout_common::warn;
use tracing::debug;

pub mod availability;
pub mod history;
pub mod score;

pub use availability::{AvailabilityProbe, RegistrationSignal};
pub use history::{ArchiveSignal, HistoryProbe};
pub use score::{ScoreProbe, ScoreSignal};

/// One external service, queried once per call.
#[async_trait]
pub trait Signal: Send + Sync + 'static {
    type Outcome: Copy + Debug + Send + Sync + 'static;

    fn name(&self) -> &'static str;

    async fn query(&self, candidate: &Candidate) -> Result<Self::Outcome, LookupError>;

    /// Outcome for a definitive "no record" answer.
    fn no_record(&self) -> Self::Outcome;

    /// Outcome once every attempt failed transiently.
    fn fallback(&self) -> Self::Outcome;
}

/// Delay schedule between attempts, indexed by the attempt that just failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// `base * 2^attempt`: 1s, 2s, 4s... for a one second base.
    Exponential { base: Duration },
    /// `step * (attempt + 1)`: 2s, 4s, 6s... for a two second step.
    Linear { step: Duration },
    None,
}

impl Backoff {
    pub fn delay(&self, attempt: u32) -> Duration {
        match *self {
            Backoff::Exponential { base } => base.saturating_mul(2u32.saturating_pow(attempt)),
            Backoff::Linear { step } => step.saturating_mul(attempt.saturating_add(1)),
            Backoff::None => Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub fn new(attempts: u32, backoff: Backoff) -> Self {
        Self {
            attempts: attempts.max(1),
            backoff,
        }
    }

    pub fn once() -> Self {
        Self::new(1, Backoff::None)
    }

    /// Wait before the next attempt, or `None` when `attempt` was the last one.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        (attempt + 1 < self.attempts).then(|| self.backoff.delay(attempt))
    }
}

/// A [`Signal`] with its retry policy applied.
pub struct Probe<S> {
    signal: S,
    policy: RetryPolicy,
}

impl<S: Signal> Probe<S> {
    pub fn new(signal: S, policy: RetryPolicy) -> Self {
        Self { signal, policy }
    }

    pub fn name(&self) -> &'static str {
        self.signal.name()
    }

    pub fn signal(&self) -> &S {
        &self.signal
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn fallback(&self) -> S::Outcome {
        self.signal.fallback()
    }

    /// Runs the signal against `candidate` until it answers or attempts run out.
    pub async fn check(&self, candidate: &Candidate) -> S::Outcome {
        let probe = self.signal.name();

        for attempt in 0..self.policy.attempts {
            debug!(%candidate, probe, attempt, "probing");

            match self.signal.query(candidate).await {
                Ok(outcome) => return outcome,
                Err(LookupError::NotFound) => return self.signal.no_record(),
                Err(LookupError::Transient(reason)) => {
                    let Some(delay) = self.policy.delay_after(attempt) else {
                        debug!(%candidate, probe, %reason, "final attempt failed");
                        break;
                    };
                    debug!(%candidate, probe, %reason, delay_ms = delay.as_millis() as u64, "retrying");
                    tokio::time::sleep(delay).await;
                }
            }
        }

        let fallback = self.signal.fallback();
        warn!(
            "{probe} probe gave up on {candidate} after {} attempts, assuming {fallback:?}",
            self.policy.attempts
        );
        fallback
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Replays a fixed script of answers, repeating the last one.
    struct Scripted {
        answers: Mutex<Vec<Result<u8, LookupError>>>,
        calls: AtomicU32,
    }

    impl Scripted {
        fn new(mut answers: Vec<Result<u8, LookupError>>) -> Self {
            answers.reverse();
            Self {
                answers: Mutex::new(answers),
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl Signal for Scripted {
        type Outcome = u8;

        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn query(&self, _candidate: &Candidate) -> Result<u8, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut answers = self.answers.lock().unwrap();
            if answers.len() > 1 {
                answers.pop().unwrap()
            } else {
                answers[0].clone()
            }
        }

        fn no_record(&self) -> u8 {
            100
        }

        fn fallback(&self) -> u8 {
            200
        }
    }

    fn candidate() -> Candidate {
        Candidate::new("probe.com").unwrap()
    }

    fn transient() -> Result<u8, LookupError> {
        Err(LookupError::transient("connection reset"))
    }

    #[test]
    fn exponential_backoff_doubles() {
        let backoff = Backoff::Exponential {
            base: Duration::from_secs(1),
        };
        assert_eq!(backoff.delay(0), Duration::from_secs(1));
        assert_eq!(backoff.delay(1), Duration::from_secs(2));
        assert_eq!(backoff.delay(2), Duration::from_secs(4));
    }

    #[test]
    fn linear_backoff_steps() {
        let backoff = Backoff::Linear {
            step: Duration::from_secs(2),
        };
        assert_eq!(backoff.delay(0), Duration::from_secs(2));
        assert_eq!(backoff.delay(1), Duration::from_secs(4));
    }

    #[test]
    fn delay_after_stops_at_last_attempt() {
        let policy = RetryPolicy::new(3, Backoff::Linear { step: Duration::from_secs(2) });
        assert_eq!(policy.delay_after(0), Some(Duration::from_secs(2)));
        assert_eq!(policy.delay_after(1), Some(Duration::from_secs(4)));
        assert_eq!(policy.delay_after(2), None);
        assert_eq!(RetryPolicy::once().delay_after(0), None);
        assert_eq!(RetryPolicy::new(0, Backoff::None).attempts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn success_returns_immediately() {
        let probe = Probe::new(Scripted::new(vec![Ok(7)]), RetryPolicy::new(3, Backoff::None));
        assert_eq!(probe.check(&candidate()).await, 7);
        assert_eq!(probe.signal.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_is_not_retried() {
        let probe = Probe::new(
            Scripted::new(vec![Err(LookupError::NotFound)]),
            RetryPolicy::new(3, Backoff::Exponential { base: Duration::from_secs(1) }),
        );
        let start = tokio::time::Instant::now();
        assert_eq!(probe.check(&candidate()).await, 100);
        assert_eq!(probe.signal.calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn transient_then_success_recovers() {
        let probe = Probe::new(
            Scripted::new(vec![transient(), Ok(9)]),
            RetryPolicy::new(3, Backoff::Exponential { base: Duration::from_secs(1) }),
        );
        let start = tokio::time::Instant::now();
        assert_eq!(probe.check(&candidate()).await, 9);
        assert_eq!(probe.signal.calls.load(Ordering::SeqCst), 2);
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_attempts_use_fallback() {
        let probe = Probe::new(
            Scripted::new(vec![transient()]),
            RetryPolicy::new(3, Backoff::Exponential { base: Duration::from_secs(1) }),
        );
        let start = tokio::time::Instant::now();
        assert_eq!(probe.check(&candidate()).await, 200);
        assert_eq!(probe.signal.calls.load(Ordering::SeqCst), 3);
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert!(start.elapsed() < Duration::from_secs(4));
    }
}
