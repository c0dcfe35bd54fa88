//! Prefix classification and the per-family rule tables.
//!
//! A word is classified by its leading characters into one [`PrefixClass`].
//! Plain prefixes (`di-`, `ke-`, `se-`, `ku-`, `kau-`) are cut unconditionally;
//! the four nasal/liquid families (`me-`, `pe-`, `be-`, `te-`) consult their
//! ordered rule table; anything else falls back to the infix rules.
//!
//! The tables are built once per process and shared read-only.

pub(crate) mod be;
pub(crate) mod infix;
pub(crate) mod me;
pub(crate) mod pe;
pub(crate) mod te;


use once_cell::sync::Lazy;

use crate::rules::chars::Shape;
use crate::{AffixRule, Removal};

static ME_RULES: Lazy<Vec<AffixRule>> = Lazy::new(me::get);
static PE_RULES: Lazy<Vec<AffixRule>> = Lazy::new(pe::get);
static BE_RULES: Lazy<Vec<AffixRule>> = Lazy::new(be::get);
static TE_RULES: Lazy<Vec<AffixRule>> = Lazy::new(te::get);
static INFIX_RULES: Lazy<Vec<AffixRule>> = Lazy::new(infix::get);

/// Which prefix (or infix fallback) applies to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PrefixClass {
    Di,
    Ke,
    Se,
    Ku,
    Kau,
    Me,
    Pe,
    Be,
    Te,
    Infix,
}

impl PrefixClass {
    pub fn classify(word: &str) -> Self {
        // Two-letter plain prefixes are checked before `kau-`; `ku` and `kau`
        // never share a first two letters.
        if word.starts_with("di") {
            PrefixClass::Di
        } else if word.starts_with("ke") {
            PrefixClass::Ke
        } else if word.starts_with("se") {
            PrefixClass::Se
        } else if word.starts_with("ku") {
            PrefixClass::Ku
        } else if word.starts_with("kau") {
            PrefixClass::Kau
        } else if word.starts_with("me") {
            PrefixClass::Me
        } else if word.starts_with("pe") {
            PrefixClass::Pe
        } else if word.starts_with("be") {
            PrefixClass::Be
        } else if word.starts_with("te") {
            PrefixClass::Te
        } else {
            PrefixClass::Infix
        }
    }

    /// The prefix this class removes; `None` for the infix fallback.
    pub fn label(self) -> Option<&'static str> {
        match self {
            PrefixClass::Di => Some("di"),
            PrefixClass::Ke => Some("ke"),
            PrefixClass::Se => Some("se"),
            PrefixClass::Ku => Some("ku"),
            PrefixClass::Kau => Some("kau"),
            PrefixClass::Me => Some("me"),
            PrefixClass::Pe => Some("pe"),
            PrefixClass::Be => Some("be"),
            PrefixClass::Te => Some("te"),
            PrefixClass::Infix => None,
        }
    }

    fn rules(self) -> Option<&'static [AffixRule]> {
        match self {
            PrefixClass::Me => Some(ME_RULES.as_slice()),
            PrefixClass::Pe => Some(PE_RULES.as_slice()),
            PrefixClass::Be => Some(BE_RULES.as_slice()),
            PrefixClass::Te => Some(TE_RULES.as_slice()),
            PrefixClass::Infix => Some(INFIX_RULES.as_slice()),
            _ => None,
        }
    }
}

/// Result of one prefix-removal step.
#[derive(Debug, Clone)]
pub(crate) struct PrefixStrip {
    pub class: PrefixClass,
    /// Name of the rule that fired; `None` for plain prefixes and for
    /// families where no rule matched.
    pub rule: Option<&'static str>,
    pub removal: Removal,
}

/// Remove one prefix from `word`.
///
/// ```text
/// word ──classify──┬─ di/ke/se/ku ──> cut 2
///                  ├─ kau ──────────> cut 3
///                  └─ me/pe/be/te/infix ──> first matching rule, else unchanged
/// ```
pub(crate) fn remove_prefix(word: &str) -> PrefixStrip {
    let class = PrefixClass::classify(word);

    let (rule, removal) = match class {
        PrefixClass::Di | PrefixClass::Ke | PrefixClass::Se | PrefixClass::Ku => (None, Removal::drop(word, 2)),
        PrefixClass::Kau => (None, Removal::drop(word, 3)),
        family => match family.rules().and_then(|rules| first_match(rules, word)) {
            Some((name, removal)) => (Some(name), removal),
            None => (None, Removal::unchanged(word)),
        },
    };

    PrefixStrip { class, rule, removal }
}

/// Apply the first rule of `rules` whose pattern matches `word`.
pub(crate) fn first_match(rules: &[AffixRule], word: &str) -> Option<(&'static str, Removal)> {
    let shape = Shape::of(word);
    rules.iter().find_map(|rule| rule.apply(&shape).map(|removal| (rule.name, removal)))
}
