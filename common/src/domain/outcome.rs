use std::fmt;

use super::Candidate;

/// Registration status as seen by the availability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}

/// Web-archive footprint as seen by the history probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum History {
    /// No archived snapshot.
    Clean,
    /// At least one archived snapshot exists.
    Archived,
}

impl History {
    pub fn is_clean(self) -> bool {
        self == Self::Clean
    }
}

/// A candidate paired with its quality score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub candidate: Candidate,
    pub score: u32,
}

impl Scored {
    /// Highest score first, name ascending on ties.
    pub fn sort_by_rank(items: &mut [Scored]) {
        items.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.candidate.cmp(&b.candidate)));
    }
}

impl fmt::Display for Scored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (DA: {})", self.candidate, self.score)
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
