//! Core scheduling types.
//!
//! A [`Candidate`] is one concrete program occurrence selected for recording.
//! Candidates are produced by the rule expander, then sorted, conflict-marked,
//! and de-duplicated by the scheduler before the host consumes them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which category of recording rule produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// One exact channel + start + end instance.
    Single,
    /// Recurring daily timeslot on one channel, matched by title.
    Timeslot,
    /// Every airing of a title, any channel.
    AllEpisodes,
}

/// A concrete program occurrence selected for recording.
///
/// Invariant: `start < end`. Two candidates are duplicates when their
/// (title, subtitle, description) triples are equal — exact string equality,
/// no fuzzy matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub channel: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Rule category that produced this candidate. Consuming a `Single`
    /// candidate deletes its originating rule from the rule store.
    pub kind: RuleKind,
    /// Set by conflict marking when this candidate's interval overlaps
    /// another candidate's interval.
    pub conflicting: bool,
}

impl Candidate {
    /// Duplicate identity: exact equality of title, subtitle, and description.
    pub fn same_program(&self, other: &Candidate) -> bool {
        self.title == other.title
            && self.subtitle == other.subtitle
            && self.description == other.description
    }
}
