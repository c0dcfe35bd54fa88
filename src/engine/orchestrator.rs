//! Top-level cascade for a single word.

use super::prefix::{Guard, MIN_WORD_LEN, PrefixOutcome, remove_prefixes};
use super::recombine::recombine;
use super::suffix::{ChainOutcome, Fragments, strip_suffixes};
use super::trace::{Branch, Stage, Trace};
use crate::Lexicon;
use crate::api::Options;
use crate::rules::chars::char_len;
use crate::rules::suffix::prefix_first;

/// Per-word state shared by every stage: the dictionary and the run trace.
pub(crate) struct Session<'a, L: ?Sized> {
    lexicon: &'a L,
    pub trace: Trace,
}

impl<'a, L: Lexicon + ?Sized> Session<'a, L> {
    pub fn new(lexicon: &'a L, trace: Trace) -> Self {
        Session { lexicon, trace }
    }

    /// Look `word` up and record the probe. An empty candidate never hits,
    /// whatever the lexicon holds.
    pub fn probe(&mut self, stage: Stage, rule: Option<&'static str>, word: &str) -> bool {
        let hit = !word.is_empty() && self.lexicon.contains(word);
        tracing::trace!(stage = stage.name(), rule = rule.unwrap_or("-"), word, hit, "probe");
        self.trace.step(stage, rule, word, hit);
        hit
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub root: String,
    /// Whether `root` was confirmed by the dictionary.
    pub found: bool,
}

impl Outcome {
    fn found(root: String) -> Self {
        Outcome { root, found: true }
    }

    fn unresolved(word: String) -> Self {
        Outcome { root: word, found: false }
    }
}

/// Stem one word.
///
/// ```text
/// lowercase ─ short? ──────────────────────────────────> as is
///           ─ in dictionary? ──────────────────────────> as is
///           ─ prefix-first shape? ─ prefixes ─ suffixes ─┐
///           ─ otherwise ─────────── suffixes ─ prefixes ─┤
///                                                        └─ recombine ─> root or lowercased input
/// ```
pub(crate) fn stem<L: Lexicon + ?Sized>(session: &mut Session<'_, L>, input: &str, options: &Options) -> Outcome {
    let word = input.to_lowercase();

    if char_len(&word) < MIN_WORD_LEN {
        return Outcome::unresolved(word);
    }
    if session.probe(Stage::Lookup, None, &word) {
        return Outcome::found(word);
    }

    let mut fragments = Fragments::default();

    if prefix_first(&word) {
        session.trace.branch = Some(Branch::PrefixFirst);
        match remove_prefixes(session, &word, Guard::Pairing) {
            PrefixOutcome::Root(root) => return Outcome::found(root),
            PrefixOutcome::Stopped { word: reduced, reason } => {
                tracing::trace!(reduced = %reduced, reason = ?reason, "prefixes exhausted, trying suffixes");
                if let ChainOutcome::Root(root) = strip_suffixes(session, &reduced, &mut fragments) {
                    return Outcome::found(root);
                }
            }
        }
    } else {
        session.trace.branch = Some(Branch::SuffixFirst);
        match strip_suffixes(session, &word, &mut fragments) {
            ChainOutcome::Root(root) => return Outcome::found(root),
            ChainOutcome::Exhausted(reduced) => {
                if let PrefixOutcome::Root(root) = remove_prefixes(session, &reduced, Guard::Pairing) {
                    return Outcome::found(root);
                }
            }
        }
    }

    if options.recombination {
        if let Some(root) = recombine(session, &word, &fragments) {
            return Outcome::found(root);
        }
    }

    tracing::debug!(word = %word, "no root found");
    Outcome::unresolved(word)
}
