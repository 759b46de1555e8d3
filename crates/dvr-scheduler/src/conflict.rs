//! Conflict marking -- flags candidates whose recording intervals overlap.
//!
//! Pairwise O(n²) comparison over the candidate list. Both members of an
//! overlapping pair are flagged; the scheduler surfaces "any conflict remains"
//! to the host, which decides how to present it.

use crate::types::Candidate;

/// The overlap predicate used for conflict marking.
///
/// `(a.start <= b.start && b.start < a.end) || (b.end <= a.end && a.start < b.end)`
///
/// This is deliberately NOT the textbook symmetric interval test
/// (`a.start < b.end && b.start < a.end`): the asymmetric form is the
/// long-standing behavior, and duplicate pruning's tie-breaking depends on
/// its exact truth table. Back-to-back recordings (`a.end == b.start`) do
/// not conflict.
pub fn overlaps(a: &Candidate, b: &Candidate) -> bool {
    (a.start <= b.start && b.start < a.end) || (b.end <= a.end && a.start < b.end)
}

/// Clear every `conflicting` flag, then flag both members of every pair that
/// overlaps under [`overlaps`]. Returns whether any pair conflicted.
///
/// Two separated passes (clear, then mark) so the marking pass reads a clean
/// slate regardless of prior state.
pub fn mark_conflicts(candidates: &mut [Candidate]) -> bool {
    for c in candidates.iter_mut() {
        c.conflicting = false;
    }

    let mut any = false;
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            if overlaps(&candidates[i], &candidates[j]) {
                candidates[i].conflicting = true;
                candidates[j].conflicting = true;
                any = true;
            }
        }
    }

    any
}
