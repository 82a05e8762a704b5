//! Candidate generators for both pipelines.
//!
//! * [`wordlist`]: dictionary words and trend keywords read from text files.
//! * [`news`]: keywords mined from RSS headlines.
//! * [`expired`]: the scraped list of recently expired domains.
//!
//! Generators report failures as errors; the pipeline decides that a failing
//! generator contributes nothing.

pub mod expired;
pub mod news;
pub mod wordlist;

pub use expired::ExpiredListScraper;
pub use news::NewsSource;
pub use wordlist::{DictionarySource, TrendSource};

use domscout_common::domain::Candidate;

/// Builds `base + suffix + tld` for every combination, skipping invalid names.
///
/// An empty `suffixes` slice means "no suffix".
pub(crate) fn expand<B: AsRef<str>>(bases: &[B], suffixes: &[String], tlds: &[String]) -> Vec<Candidate> {
    let no_suffix = [String::new()];
    let suffixes: &[String] = if suffixes.is_empty() { &no_suffix } else { suffixes };

    let mut candidates = Vec::with_capacity(bases.len() * suffixes.len() * tlds.len());
    for base in bases {
        for suffix in suffixes {
            for tld in tlds {
                if let Some(candidate) = Candidate::new(format!("{}{suffix}{tld}", base.as_ref())) {
                    candidates.push(candidate);
                }
            }
        }
    }
    candidates
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
