//! Duplicate pruning -- removes redundant candidates for the same program.
//!
//! Two candidates are duplicates when their (title, subtitle, description)
//! triples match exactly. Exactly one of each duplicate pair is removed,
//! preferring to keep a non-conflicting copy over a conflicting one.
//!
//! This is a single backward pass, not a fixed-point loop: pruning changes
//! which pairs conflict, and the caller re-runs conflict marking afterward
//! (see the refresh sequence in [`crate::scheduler`]).

use crate::types::Candidate;

/// Remove duplicate candidates in one backward pass.
///
/// The outer index walks from the back of the list toward the front; for each
/// position, the inner index walks the remaining earlier elements. On a
/// duplicate pair (`i` later in the list, `j` earlier):
///
/// - if the earlier copy is conflicting and the later one is not, the earlier
///   copy is removed and the inner scan continues;
/// - otherwise the later copy is removed and the outer scan moves on to the
///   element now preceding it.
///
/// Post-condition: no two surviving candidates share the identity triple.
pub fn prune_duplicates(candidates: &mut Vec<Candidate>) {
    let mut i = candidates.len();
    while i > 0 {
        i -= 1;
        let mut j = i;
        while j > 0 {
            j -= 1;
            if !candidates[i].same_program(&candidates[j]) {
                continue;
            }

            if candidates[j].conflicting && !candidates[i].conflicting {
                candidates.remove(j);
                // Everything above j shifts down one, including i.
                i -= 1;
            } else {
                candidates.remove(i);
                break;
            }
        }
    }
}
