//! Filtering passes between pipeline steps.
//!
//! A stage never adds candidates. Probe-backed stages keep whatever the
//! predicate accepts from the pool output; the length stage is a plain
//! synchronous filter that keeps input order.

use std::sync::Arc;

use domscout_common::domain::Candidate;
use tracing::debug;

use crate::pool::WorkerPool;
use crate::ports::Progress;
use crate::probe::{Probe, Signal};

/// Keeps the pairs whose outcome satisfies `predicate`.
pub fn keep_pairs<O, F>(pairs: Vec<(Candidate, O)>, predicate: F) -> Vec<(Candidate, O)>
where
    F: Fn(&O) -> bool,
{
    pairs
        .into_iter()
        .filter(|(candidate, outcome)| {
            let kept = predicate(outcome);
            if !kept {
                debug!(%candidate, "dropped by stage");
            }
            kept
        })
        .collect()
}

/// Like [`keep_pairs`] but returns only the candidates.
pub fn keep<O, F>(pairs: Vec<(Candidate, O)>, predicate: F) -> Vec<Candidate>
where
    F: Fn(&O) -> bool,
{
    keep_pairs(pairs, predicate)
        .into_iter()
        .map(|(candidate, _)| candidate)
        .collect()
}

/// Keeps candidates whose name portion has at most `max_len` characters.
pub fn filter_by_length(candidates: Vec<Candidate>, max_len: usize) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|candidate| {
            let fits = candidate.name_len() <= max_len;
            if !fits {
                debug!(%candidate, max_len, "rejected, name too long");
            }
            fits
        })
        .collect()
}

/// Probes `items` on `pool` and keeps the pairs accepted by `predicate`.
pub async fn probe_stage<S, F>(
    pool: &WorkerPool,
    probe: Arc<Probe<S>>,
    items: Vec<Candidate>,
    label: &str,
    progress: &dyn Progress,
    predicate: F,
) -> Vec<(Candidate, S::Outcome)>
where
    S: Signal,
    F: Fn(&S::Outcome) -> bool,
{
    let pairs = pool.run(probe, items, label, progress).await;
    keep_pairs(pairs, predicate)
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
    use domscout_common::domain::{Availability, History};

    fn c(name: &str) -> Candidate {
        Candidate::new(name).unwrap()
    }

    #[test]
    fn keep_filters_on_availability() {
        let pairs = vec![
            (c("a.com"), Availability::Unavailable),
            (c("b.io"), Availability::Available),
        ];
        assert_eq!(keep(pairs, |a| a.is_available()), vec![c("b.io")]);
    }

    #[test]
    fn keep_filters_on_clean_history() {
        let pairs = vec![(c("old.com"), History::Archived), (c("new.com"), History::Clean)];
        assert_eq!(keep(pairs, |h| h.is_clean()), vec![c("new.com")]);
    }

    #[test]
    fn score_threshold_is_strict() {
        let threshold = 20;
        let pairs = vec![(c("twenty.com"), 20u32), (c("twentyone.com"), 21), (c("five.com"), 5)];
        let kept = keep_pairs(pairs, |score| *score > threshold);
        assert_eq!(kept, vec![(c("twentyone.com"), 21)]);
    }

    #[test]
    fn stages_only_shrink() {
        let input = vec![
            (c("a.com"), 1u32),
            (c("b.com"), 30),
            (c("c.com"), 40),
            (c("d.com"), 2),
        ];
        let names: Vec<Candidate> = input.iter().map(|(c, _)| c.clone()).collect();

        for threshold in [0, 1, 20, 39, 40, 100] {
            let output = keep(input.clone(), |s| *s > threshold);
            assert!(output.len() <= input.len());
            assert!(output.iter().all(|c| names.contains(c)));
        }
    }

    #[test]
    fn length_filter_boundary() {
        let input = vec![
            c("thisoneisjustonthe.com"),
            c("shortname.com"),
            c("exactlyfifteen1.io"),
            c("sixteencharacter.ai"),
        ];
        let kept = filter_by_length(input, 15);
        assert_eq!(kept, vec![c("shortname.com"), c("exactlyfifteen1.io")]);
    }

    #[test]
    fn length_filter_ignores_suffix() {
        let kept = filter_by_length(vec![c("abc.averyveryverylongsuffix")], 3);
        assert_eq!(kept.len(), 1);
    }
}
