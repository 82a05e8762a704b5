//! # Domain Models
//!
//! * [`candidate`]: a domain name under evaluation and the merge helper that dedups them.
//! * [`outcome`]: what each probe can say about a candidate.

pub mod candidate;
pub mod outcome;

pub use candidate::Candidate;
pub use outcome::{Availability, History, Scored};
