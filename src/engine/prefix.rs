//! Prefix removal rounds.
//!
//! A word gets at most [`MAX_ROUNDS`] rounds. Each round removes one prefix
//! (see `rules::prefix`), probes the dictionary with the remainder and then
//! with every recoding candidate prepended to it. The loop state is explicit:
//!
//! ```text
//! RoundState { word, rounds_remaining, last_prefix }
//!     │
//!     ├─ rounds_remaining == 0 ───────────────> Stop(RoundsExhausted)
//!     ├─ word shorter than MIN_WORD_LEN ──────> Stop(TooShort)
//!     ├─ guarded and disallowed pairing ──────> Stop(DisallowedPairing)
//!     ├─ word starts with last_prefix ────────> Stop(Cycle)
//!     └─ remove_prefix ─┬─ remainder hit ─────> Found
//!                       ├─ recoding hit ──────> Found
//!                       ├─ word unchanged ────> Stop(NoProgress)
//!                       └─ otherwise ─────────> next RoundState
//! ```
//!
//! A stopped run reports the word as last reduced.

use super::orchestrator::Session;
use super::trace::{Stage, Stages};
use crate::Lexicon;
use crate::rules::chars::char_len;
use crate::rules::prefix::remove_prefix;
use crate::rules::suffix::disallowed_pairing;

pub(crate) const MAX_ROUNDS: usize = 3;

/// Words shorter than this (in characters) carry no strippable affix.
pub(crate) const MIN_WORD_LEN: usize = 3;

/// Whether rounds refuse words that look like a disallowed prefix/suffix pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Guard {
    Pairing,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReason {
    TooShort,
    DisallowedPairing,
    Cycle,
    /// No rule matched, so another round would repeat the same probes.
    NoProgress,
    RoundsExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PrefixOutcome {
    Root(String),
    Stopped { word: String, reason: StopReason },
}

#[derive(Debug, Clone)]
struct RoundState {
    word: String,
    rounds_remaining: usize,
    last_prefix: Option<&'static str>,
}

enum Round {
    Found(String),
    Next(RoundState),
    Stop(String, StopReason),
}

pub(crate) fn remove_prefixes<L: Lexicon + ?Sized>(
    session: &mut Session<'_, L>,
    word: &str,
    guard: Guard,
) -> PrefixOutcome {
    let mut state = RoundState { word: word.to_string(), rounds_remaining: MAX_ROUNDS, last_prefix: None };

    loop {
        match round(session, state, guard) {
            Round::Found(root) => return PrefixOutcome::Root(root),
            Round::Next(next) => state = next,
            Round::Stop(word, reason) => {
                tracing::trace!(word = %word, reason = ?reason, "prefix removal stopped");
                return PrefixOutcome::Stopped { word, reason };
            }
        }
    }
}

fn round<L: Lexicon + ?Sized>(session: &mut Session<'_, L>, state: RoundState, guard: Guard) -> Round {
    let RoundState { word, rounds_remaining, last_prefix } = state;

    if rounds_remaining == 0 {
        return Round::Stop(word, StopReason::RoundsExhausted);
    }
    if char_len(&word) < MIN_WORD_LEN {
        return Round::Stop(word, StopReason::TooShort);
    }
    if guard == Guard::Pairing && disallowed_pairing(&word) {
        return Round::Stop(word, StopReason::DisallowedPairing);
    }
    if matches!((word.get(..2), last_prefix), (Some(head), Some(last)) if head == last) {
        return Round::Stop(word, StopReason::Cycle);
    }

    let strip = remove_prefix(&word);
    let remainder = strip.removal.remainder;
    let rule = strip.rule.or(strip.class.label());

    if remainder != word {
        session.trace.mark(Stages::PREFIX);
    }
    tracing::trace!(word = %word, class = ?strip.class, rule = ?strip.rule, remainder = %remainder, "prefix round");

    if session.probe(Stage::Prefix, rule, &remainder) {
        return Round::Found(remainder);
    }

    for lead in &strip.removal.recoding {
        let candidate = format!("{lead}{remainder}");
        if session.probe(Stage::Recoding, rule, &candidate) {
            session.trace.mark(Stages::RECODING);
            return Round::Found(candidate);
        }
    }

    if remainder == word {
        return Round::Stop(word, StopReason::NoProgress);
    }

    Round::Next(RoundState { word: remainder, rounds_remaining: rounds_remaining - 1, last_prefix: strip.class.label() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dictionary;
    use crate::engine::trace::Trace;

    fn run(dict: &Dictionary, word: &str, guard: Guard) -> PrefixOutcome {
        let mut session = Session::new(dict, Trace::disabled());
        remove_prefixes(&mut session, word, guard)
    }

    fn stopped(word: &str, reason: StopReason) -> PrefixOutcome {
        PrefixOutcome::Stopped { word: word.to_string(), reason }
    }

    #[test]
    fn remainder_hit_wins_before_recoding() {
        let dict = Dictionary::from_words(["ajar", "pajar"]);
        assert_eq!(run(&dict, "pelajar", Guard::Pairing), PrefixOutcome::Root("ajar".into()));
    }

    #[test]
    fn recoding_candidates_are_tried_in_order() {
        let dict = Dictionary::from_words(["makan", "pakan"]);
        assert_eq!(run(&dict, "memakan", Guard::Off), PrefixOutcome::Root("makan".into()));

        let dict = Dictionary::from_words(["pakan"]);
        assert_eq!(run(&dict, "memakan", Guard::Off), PrefixOutcome::Root("pakan".into()));
    }

    #[test]
    fn nasal_fusion_is_undone_by_recoding() {
        let dict = Dictionary::from_words(["tulis", "kambil", "sapu"]);
        assert_eq!(run(&dict, "menulis", Guard::Pairing), PrefixOutcome::Root("tulis".into()));
        assert_eq!(run(&dict, "mengambil", Guard::Pairing), PrefixOutcome::Root("kambil".into()));
        assert_eq!(run(&dict, "penyapu", Guard::Pairing), PrefixOutcome::Root("sapu".into()));
    }

    #[test]
    fn stacked_prefixes_take_several_rounds() {
        let dict = Dictionary::from_words(["ajar"]);
        assert_eq!(run(&dict, "dipelajar", Guard::Pairing), PrefixOutcome::Root("ajar".into()));

        let dict = Dictionary::from_words(["buah"]);
        assert_eq!(run(&dict, "disebuah", Guard::Pairing), PrefixOutcome::Root("buah".into()));
    }

    #[test]
    fn rounds_are_capped_at_three() {
        let dict = Dictionary::from_words(["buah"]);
        assert_eq!(run(&dict, "dikesebuah", Guard::Pairing), PrefixOutcome::Root("buah".into()));
        // `ku-` would be the fourth prefix.
        assert_eq!(run(&dict, "dikesekubuah", Guard::Pairing), stopped("kubuah", StopReason::RoundsExhausted));
    }

    #[test]
    fn repeated_prefix_stops_as_a_cycle() {
        let dict = Dictionary::new();
        assert_eq!(run(&dict, "dididi", Guard::Pairing), stopped("didi", StopReason::Cycle));
        assert_eq!(run(&dict, "kekenyang", Guard::Pairing), stopped("kenyang", StopReason::Cycle));
    }

    #[test]
    fn unmatched_rules_stop_after_one_round() {
        let dict = Dictionary::new();
        assert_eq!(run(&dict, "meow", Guard::Pairing), stopped("meow", StopReason::NoProgress));
        assert_eq!(run(&dict, "xyz", Guard::Pairing), stopped("xyz", StopReason::NoProgress));

        let mut session = Session::new(&dict, Trace::recording());
        remove_prefixes(&mut session, "xyz", Guard::Pairing);
        assert_eq!(session.trace.into_steps().len(), 1);
    }

    #[test]
    fn progress_after_an_earlier_round_reports_the_reduced_word() {
        let dict = Dictionary::new();
        assert_eq!(run(&dict, "dixyz", Guard::Pairing), stopped("xyz", StopReason::NoProgress));
    }

    #[test]
    fn short_remainders_stop_the_loop() {
        let dict = Dictionary::new();
        assert_eq!(run(&dict, "dia", Guard::Pairing), stopped("a", StopReason::TooShort));
        assert_eq!(run(&dict, "ab", Guard::Pairing), stopped("ab", StopReason::TooShort));
    }

    #[test]
    fn guard_refuses_disallowed_pairings() {
        let dict = Dictionary::from_words(["lari"]);
        assert_eq!(run(&dict, "berlari", Guard::Pairing), stopped("berlari", StopReason::DisallowedPairing));
        assert_eq!(run(&dict, "berlari", Guard::Off), PrefixOutcome::Root("lari".into()));
    }

    #[test]
    fn infix_offers_both_readings() {
        let dict = Dictionary::from_words(["getar"]);
        assert_eq!(run(&dict, "gemetar", Guard::Pairing), PrefixOutcome::Root("getar".into()));

        let dict = Dictionary::from_words(["gemetar"]);
        assert_eq!(run(&dict, "gemetar", Guard::Pairing), PrefixOutcome::Root("gemetar".into()));
    }
}
