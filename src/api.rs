use crate::engine::{self, Branch, Session, Stages, Trace};
use crate::{Dictionary, Lexicon, Tokenizer};
use std::time::{Duration, Instant};

pub use crate::engine::StepSummary;

/// Options that affect stemming behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Re-attach removed suffixes and retry when the greedy pass finds no
    /// root. Turning this off gives the plain suffix/prefix cascade.
    pub recombination: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { recombination: true }
    }
}

/// Result from [`Stemmer::stem_result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemResult {
    /// The input word, as given.
    pub word: String,
    /// The root, or the lowercased input when no root was found.
    pub root: String,
    /// Whether `root` was confirmed by the dictionary.
    pub found: bool,
    pub elapsed: Duration,
}

/// Additional details returned by [`Stemmer::stem_verbose`].
///
/// One entry per dictionary probe, in the order they were made. Short words
/// and dictionary hits on the input have no branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemDetails {
    pub branch: Option<Branch>,
    pub steps: Vec<StepSummary>,
    /// Stages that stripped something, recoded into a root, or (for
    /// recombination) ran at all.
    pub stages: Stages,
    pub total: Duration,
}

/// Result from [`Stemmer::stem_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemResultVerbose {
    pub word: String,
    pub root: String,
    pub found: bool,
    pub elapsed: Duration,
    pub details: StemDetails,
}

/// Dictionary-backed affix stripper.
///
/// A `Stemmer` holds no mutable state; share one across threads when its
/// lexicon is `Sync`.
///
/// # Example
/// ```
/// use akarkata::{Dictionary, Stemmer};
///
/// let stemmer = Stemmer::new(Dictionary::from_words(["makan", "jual"]));
/// assert_eq!(stemmer.stem("memakan"), "makan");
/// assert_eq!(stemmer.stem("menjuallah"), "jual");
/// ```
#[derive(Debug, Clone)]
pub struct Stemmer<L = Dictionary> {
    lexicon: L,
    options: Options,
    tokenizer: Tokenizer,
}

impl<L: Lexicon> Stemmer<L> {
    pub fn new(lexicon: L) -> Self {
        Self::with_options(lexicon, Options::default())
    }

    pub fn with_options(lexicon: L, options: Options) -> Self {
        Stemmer { lexicon, options, tokenizer: Tokenizer::new() }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Stem a single word. Never fails: when no root is found the lowercased
    /// input comes back unchanged.
    pub fn stem(&self, word: &str) -> String {
        let mut session = Session::new(&self.lexicon, Trace::disabled());
        engine::stem(&mut session, word, &self.options).root
    }

    pub fn stem_result(&self, word: &str) -> StemResult {
        let started = Instant::now();
        let mut session = Session::new(&self.lexicon, Trace::disabled());
        let outcome = engine::stem(&mut session, word, &self.options);

        StemResult { word: word.to_string(), root: outcome.root, found: outcome.found, elapsed: started.elapsed() }
    }

    /// Stem `word` and return the full probe trace.
    ///
    /// The plain [`stem`](Self::stem) path does not allocate these traces.
    pub fn stem_verbose(&self, word: &str) -> StemResultVerbose {
        let started = Instant::now();
        let mut session = Session::new(&self.lexicon, Trace::recording());
        let outcome = engine::stem(&mut session, word, &self.options);
        let elapsed = started.elapsed();

        let trace = session.trace;
        let details =
            StemDetails { branch: trace.branch, stages: trace.stages, steps: trace.into_steps(), total: elapsed };

        StemResultVerbose { word: word.to_string(), root: outcome.root, found: outcome.found, elapsed, details }
    }

    /// Tokenize `text` and stem every token.
    pub fn stem_text(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text).iter().map(|token| self.stem(token)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stage;

    fn roots() -> Dictionary {
        Dictionary::from_words(["makan", "jual", "ajar", "rusak"])
    }

    fn stemmer() -> Stemmer {
        Stemmer::new(roots())
    }

    #[test]
    fn stems_the_reference_words() {
        let stemmer = stemmer();
        assert_eq!(stemmer.stem("memakan"), "makan");
        assert_eq!(stemmer.stem("menjuallah"), "jual");
        assert_eq!(stemmer.stem("dirusak"), "rusak");
        assert_eq!(stemmer.stem("pelajar"), "ajar");
        assert_eq!(stemmer.stem("xyz"), "xyz");
    }

    #[test]
    fn a_root_in_the_dictionary_is_never_stripped() {
        let mut dict = roots();
        dict.add(["pelajar"]);
        let stemmer = Stemmer::new(dict);
        assert_eq!(stemmer.stem("pelajar"), "pelajar");
        assert_eq!(stemmer.stem("pelajarnya"), "pelajar");
    }

    #[test]
    fn roots_are_fixed_points() {
        let dict = roots();
        let stemmer = Stemmer::new(&dict);
        for root in dict.words() {
            assert_eq!(stemmer.stem(root), root);
        }
    }

    #[test]
    fn stemming_a_root_again_changes_nothing() {
        let stemmer = stemmer();
        for word in ["memakan", "menjuallah", "dirusak", "pelajar", "makanannya", "kerusakan"] {
            let root = stemmer.stem(word);
            assert_eq!(stemmer.stem(&root), root, "{}", word);
        }
    }

    #[test]
    fn short_words_pass_through_lowercased() {
        let stemmer = stemmer();
        assert_eq!(stemmer.stem("di"), "di");
        assert_eq!(stemmer.stem("KU"), "ku");
        assert_eq!(stemmer.stem("a"), "a");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn input_is_lowercased() {
        let stemmer = stemmer();
        assert_eq!(stemmer.stem("MEMAKAN"), "makan");
        assert_eq!(stemmer.stem("Tidak"), "tidak");
    }

    #[test]
    fn output_is_a_root_or_the_input() {
        let dict = roots();
        let stemmer = Stemmer::new(&dict);
        let words = [
            "memakan", "memper", "pengeboman", "berlarian", "ketidakadilan", "sepeda", "mengapa", "meme",
            "pepe", "tete", "bebe", "kaukau", "menyanyi", "terpercaya", "gemetar", "kinerja", "perekonomian",
        ];
        for word in words {
            let root = stemmer.stem(word);
            assert!(root == word || dict.contains(&root), "{} -> {}", word, root);
        }
    }

    #[test]
    fn never_panics_on_odd_input() {
        let stemmer = stemmer();
        for word in ["méja", "ménjual", "日本語", "me-", "-nya", "--", "mem🙂kan", "penyéwa", "kaù", "ter ", "lah"] {
            let root = stemmer.stem(word);
            assert!(!root.is_empty(), "{}", word);
        }
    }

    #[test]
    fn repeated_prefixes_terminate() {
        let stemmer = stemmer();
        assert_eq!(stemmer.stem("dididididi"), "dididididi");
        assert_eq!(stemmer.stem("memememe"), "memememe");
        assert_eq!(stemmer.stem("kaukaukau"), "kaukaukau");
    }

    #[test]
    fn recombination_can_be_turned_off() {
        let stemmer = Stemmer::with_options(roots(), Options { recombination: false });
        assert_eq!(stemmer.stem("memakan"), "memakan");
        assert_eq!(stemmer.stem("menjuallah"), "jual");
    }

    #[test]
    fn disallowed_pairings_are_reached_through_recombination() {
        let stemmer = Stemmer::new(Dictionary::from_words(["lari"]));
        assert_eq!(stemmer.stem("berlari"), "lari");
    }

    #[test]
    fn any_lexicon_works() {
        let set: std::collections::HashSet<String> = ["jual".to_string()].into_iter().collect();
        let stemmer = Stemmer::new(set);
        assert_eq!(stemmer.stem("menjual"), "jual");
    }

    #[test]
    fn stem_result_reports_whether_a_root_was_found() {
        let stemmer = stemmer();

        let res = stemmer.stem_result("Memakan");
        assert_eq!(res.word, "Memakan");
        assert_eq!(res.root, "makan");
        assert!(res.found);

        let res = stemmer.stem_result("xyz");
        assert_eq!(res.root, "xyz");
        assert!(!res.found);
    }

    #[test]
    fn stem_verbose_traces_every_probe() {
        let stemmer = stemmer();
        let res = stemmer.stem_verbose("menjuallah");

        assert_eq!(res.root, "jual");
        assert_eq!(res.elapsed, res.details.total);
        assert_eq!(res.details.branch, Some(Branch::SuffixFirst));
        assert!(res.details.stages.contains(Stages::PARTICLE | Stages::PREFIX));

        let first = res.details.steps.first().unwrap();
        assert_eq!(first.stage, Stage::Lookup);
        assert_eq!(first.word, "menjuallah");
        assert!(!first.hit);

        let last = res.details.steps.last().unwrap();
        assert_eq!(last.stage, Stage::Prefix);
        assert_eq!(last.rule, Some("men{c|d|j|s|t|z}"));
        assert_eq!(last.word, "jual");
        assert!(last.hit);
        assert_eq!(res.details.steps.iter().filter(|s| s.hit).count(), 1);
    }

    #[test]
    fn stem_text_tokenizes_first() {
        let stemmer = stemmer();
        assert_eq!(stemmer.stem_text("Dia MEMAKAN nasi, lalu menjuallah!"), vec!["dia", "makan", "nasi", "lalu", "jual"]);
    }

    #[test]
    fn stemmer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stemmer>();
        assert_send_sync::<Stemmer<std::sync::Arc<Dictionary>>>();
    }
}
