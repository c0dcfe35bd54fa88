//! The suffix chain: particle, then possessive, then derivational.
//!
//! After each layer that removes something the remainder is looked up; the
//! first hit ends the chain. Whatever was removed is kept in [`Fragments`] so
//! recombination can put it back piece by piece.

use super::orchestrator::Session;
use super::trace::{Stage, Stages};
use crate::Lexicon;
use crate::rules::suffix::{SuffixKind, split};

const LAYERS: [SuffixKind; 3] = [SuffixKind::Particle, SuffixKind::Possessive, SuffixKind::Derivational];

/// Suffixes removed during one run. Empty strings mean the layer matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Fragments {
    pub particle: String,
    pub possessive: String,
    pub derivational: String,
}

impl Fragments {
    fn slot(&mut self, kind: SuffixKind) -> &mut String {
        match kind {
            SuffixKind::Particle => &mut self.particle,
            SuffixKind::Possessive => &mut self.possessive,
            SuffixKind::Derivational => &mut self.derivational,
        }
    }

    /// Pieces to re-attach, innermost first. The leading empty piece stands
    /// for the bare base. `kan` goes back as `k` then `an`, so a root ending
    /// in `k` gets its own chance.
    pub fn reattach_order(&self) -> Vec<&str> {
        let mut order = vec![""];
        if self.derivational == "kan" {
            order.extend(["k", "an"]);
        } else {
            order.push(self.derivational.as_str());
        }
        order.push(self.possessive.as_str());
        order.push(self.particle.as_str());
        order
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChainOutcome {
    Root(String),
    Exhausted(String),
}

fn stage_of(kind: SuffixKind) -> (Stage, Stages) {
    match kind {
        SuffixKind::Particle => (Stage::Particle, Stages::PARTICLE),
        SuffixKind::Possessive => (Stage::Possessive, Stages::POSSESSIVE),
        SuffixKind::Derivational => (Stage::Derivational, Stages::DERIVATIONAL),
    }
}

pub(crate) fn strip_suffixes<L: Lexicon + ?Sized>(
    session: &mut Session<'_, L>,
    word: &str,
    fragments: &mut Fragments,
) -> ChainOutcome {
    let mut current = word.to_string();

    for kind in LAYERS {
        let (remainder, fragment) = split(kind, &current);
        if fragment.is_empty() {
            // Unchanged words were already probed upstream.
            continue;
        }

        let (remainder, fragment) = (remainder.to_string(), fragment.to_string());
        tracing::trace!(layer = kind.name(), fragment = %fragment, remainder = %remainder, "suffix removed");

        let (stage, flag) = stage_of(kind);
        session.trace.mark(flag);
        *fragments.slot(kind) = fragment;
        current = remainder;

        if session.probe(stage, Some(kind.name()), &current) {
            return ChainOutcome::Root(current);
        }
    }

    ChainOutcome::Exhausted(current)
}
