use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A domain name (name + TLD) under evaluation.
///
/// Stored lowercase and trimmed. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate(String);

impl Candidate {
    /// Normalises `raw`, returning `None` for blank input or inner whitespace.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let normalized: String = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first dot, e.g. `google` for `google.com`.
    pub fn name(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(name, _)| name)
    }

    /// Everything after the first dot, empty when there is none.
    pub fn suffix(&self) -> &str {
        self.0.split_once('.').map_or("", |(_, suffix)| suffix)
    }

    pub fn name_len(&self) -> usize {
        self.name().chars().count()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Candidate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Candidate::new(s).ok_or_else(|| format!("invalid domain candidate: {s:?}"))
    }
}

/// Merges the output of several generators into one duplicate-free,
/// lexicographically ordered list.
pub fn merge_unique<I>(batches: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = Vec<Candidate>>,
{
    batches
        .into_iter()
        .flatten()
        .collect::<BTreeSet<Candidate>>()
        .into_iter()
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
