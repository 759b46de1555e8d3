//! The recording list manager.
//!
//! Owns the candidate list and drives it through the refresh cycle:
//! expand rules → sort by start time → mark conflicts → prune duplicates →
//! re-mark conflicts. The host then repeatedly peeks at or consumes the
//! earliest candidate.
//!
//! Single-threaded and synchronous: no call suspends mid-algorithm, and the
//! scheduler holds no internal locks. A concurrent host must serialize calls
//! through its own critical section.

use chrono::{Local, NaiveDateTime};

use crate::conflict::mark_conflicts;
use crate::error::ScheduleError;
use crate::expander::expand_rules;
use crate::prune::prune_duplicates;
use crate::store::{format_store_timestamp, GuideStore, RuleStore};
use crate::types::{Candidate, RuleKind};

/// Recording scheduler over a rule store and a guide store.
pub struct Scheduler<R, G> {
    rules: R,
    guide: G,
    recordings: Vec<Candidate>,
    has_conflicts: bool,
    faults: Vec<ScheduleError>,
}

impl<R, G> Scheduler<R, G>
where
    R: RuleStore,
    G: GuideStore,
{
    pub fn new(rules: R, guide: G) -> Self {
        Scheduler {
            rules,
            guide,
            recordings: Vec::new(),
            has_conflicts: false,
            faults: Vec::new(),
        }
    }

    /// Rebuild the recording list from the stores, anchored at the current
    /// wall-clock time. Returns whether any conflict remains after pruning.
    pub fn refresh(&mut self) -> bool {
        self.refresh_at(Local::now().naive_local())
    }

    /// Rebuild the recording list from the stores, anchored at `now`.
    ///
    /// All current candidates are discarded and the stores are re-queried
    /// from scratch. The resulting batch is sorted by ascending start time
    /// (order among equal starts is unspecified), conflict-marked, pruned of
    /// duplicates, then re-marked — pruning changes which pairs overlap, so
    /// the final marking pass is required.
    ///
    /// Returns whether any conflict remains after pruning. Store failures and
    /// malformed rows never abort the refresh; they are logged and kept in
    /// [`Scheduler::last_faults`].
    pub fn refresh_at(&mut self, now: NaiveDateTime) -> bool {
        self.recordings.clear();
        self.has_conflicts = false;

        let expansion = expand_rules(&self.rules, &self.guide, now);
        for fault in &expansion.faults {
            log::warn!("refresh fault: {fault}");
        }
        self.faults = expansion.faults;
        self.recordings = expansion.candidates;

        if !self.recordings.is_empty() {
            self.recordings.sort_by_key(|c| c.start);
            mark_conflicts(&mut self.recordings);
            prune_duplicates(&mut self.recordings);
            self.has_conflicts = mark_conflicts(&mut self.recordings);
        }

        log::debug!(
            "refresh: {} candidate(s), {} fault(s), conflicts={}",
            self.recordings.len(),
            self.faults.len(),
            self.has_conflicts
        );

        self.has_conflicts
    }

    /// The candidate with the earliest start time, without removing it.
    /// `None` on an empty list — an empty schedule is a value, not a fault.
    pub fn peek_next(&self) -> Option<&Candidate> {
        self.recordings.first()
    }

    /// Remove the earliest candidate from the list.
    ///
    /// A single-instance candidate is consumed for good: its originating rule
    /// is deleted from the rule store, keyed by channel + exact start + exact
    /// end in store-timestamp form. A failed delete is logged but never
    /// blocks in-memory removal — the schedule makes progress even when the
    /// store is unreachable.
    pub fn consume_next(&mut self) {
        if self.recordings.is_empty() {
            return;
        }

        let rec = self.recordings.remove(0);

        if rec.kind == RuleKind::Single {
            let start = format_store_timestamp(rec.start);
            let end = format_store_timestamp(rec.end);
            if let Err(e) = self.rules.delete_single_rule(&rec.channel, &start, &end) {
                log::warn!(
                    "failed to delete single rule (channel {}, {start}..{end}): {e}",
                    rec.channel
                );
            }
        }
    }

    /// The current candidate list, sorted by ascending start time.
    pub fn recordings(&self) -> &[Candidate] {
        &self.recordings
    }

    /// Whether the last refresh left any conflict unresolved.
    pub fn has_conflicts(&self) -> bool {
        self.has_conflicts
    }

    /// Faults (store failures, malformed rows) from the last refresh.
    pub fn last_faults(&self) -> &[ScheduleError] {
        &self.faults
    }

    /// The underlying rule store.
    pub fn rule_store(&self) -> &R {
        &self.rules
    }

    /// The underlying guide store.
    pub fn guide_store(&self) -> &G {
        &self.guide
    }
}
