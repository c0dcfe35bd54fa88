extern crate self as akarkata;

#[macro_use]
mod macros;
mod api;
mod dictionary;
mod engine;
mod error;
mod rules;
mod tokenizer;

pub use api::{Options, StemDetails, StemResult, StemResultVerbose, Stemmer, StepSummary};
pub use dictionary::{Dictionary, Lexicon};
pub use engine::{Branch, Stage, Stages};
pub use error::{Error, Result};
pub use tokenizer::Tokenizer;

use rules::chars::Shape;

// --- Internal types ---------------------------------------------------------

/// Output of a single affix rule: the word left after stripping, plus the
/// consonant clusters that may have been absorbed by nasal fusion.
///
/// Recoding candidates are probed in order by prepending each one to
/// `remainder`, so their order decides which root wins when several exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Removal {
    pub remainder: String,
    pub recoding: Vec<String>,
}

impl Removal {
    /// Leave `word` as is (no rule fired).
    pub fn unchanged(word: &str) -> Self {
        Removal { remainder: word.to_string(), recoding: Vec::new() }
    }

    /// Drop the first `count` bytes of `word`.
    ///
    /// Rules only ever drop positions they have matched against ASCII sets,
    /// so the cut always lands on a char boundary; `get` keeps it total anyway.
    pub fn drop(word: &str, count: usize) -> Self {
        Removal { remainder: word.get(count..).unwrap_or("").to_string(), recoding: Vec::new() }
    }

    /// Replace the dropped characters with `lead` (e.g. `meny-` + `sV`).
    pub fn replace(word: &str, count: usize, lead: &str) -> Self {
        let mut remainder = String::with_capacity(word.len());
        remainder.push_str(lead);
        remainder.push_str(word.get(count..).unwrap_or(""));
        Removal { remainder, recoding: Vec::new() }
    }

    pub fn literal(root: &str) -> Self {
        Removal { remainder: root.to_string(), recoding: Vec::new() }
    }

    pub fn recode<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recoding.extend(candidates.into_iter().map(Into::into));
        self
    }
}

/// A prefix (or infix) rule: a name, a shape predicate over the leading
/// characters of a word, and the strip action applied when it matches.
///
/// Rules are grouped into ordered families; within a family the first rule
/// whose `pattern` matches is the only one applied.
pub(crate) struct AffixRule {
    pub name: &'static str,
    pub pattern: fn(&Shape<'_>) -> bool,
    pub strip: fn(&Shape<'_>) -> Removal,
}

impl AffixRule {
    pub fn apply(&self, shape: &Shape<'_>) -> Option<Removal> {
        if (self.pattern)(shape) { Some((self.strip)(shape)) } else { None }
    }
}

impl std::fmt::Debug for AffixRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffixRule")
            .field("name", &self.name)
            .field("pattern", &"<function>")
            .field("strip", &"<function>")
            .finish()
    }
}
