//! Recombination: the last resort after the greedy pass fails.
//!
//! The greedy pass may have removed a suffix that was really part of the
//! root (`memakan` loses `kan`, leaving `mema`). Here the removed suffixes are
//! put back one piece at a time onto the suffix-free base of the original
//! word, and each candidate is looked up and then run through prefix removal.

use super::orchestrator::Session;
use super::prefix::{Guard, PrefixOutcome, remove_prefixes};
use super::suffix::Fragments;
use super::trace::{Stage, Stages};
use crate::Lexicon;

pub(crate) fn recombine<L: Lexicon + ?Sized>(
    session: &mut Session<'_, L>,
    original: &str,
    fragments: &Fragments,
) -> Option<String> {
    let order = fragments.reattach_order();
    let removed: usize = order.iter().map(|piece| piece.len()).sum();
    let base = original.get(..original.len().saturating_sub(removed)).unwrap_or(original);

    session.trace.mark(Stages::RECOMBINATION);
    tracing::trace!(base = %base, pieces = ?order, "recombining");

    let mut candidate = base.to_string();
    for piece in order {
        candidate.push_str(piece);

        if session.probe(Stage::Recombination, None, &candidate) {
            return Some(candidate);
        }
        // Recombined words routinely carry a prefix/suffix pairing the greedy
        // pass refused (`me...kan`), so the pairing guard stays off here.
        if let PrefixOutcome::Root(root) = remove_prefixes(session, &candidate, Guard::Off) {
            return Some(root);
        }
    }

    None
}
