//! Character classes and positional word shapes used by the affix rules.
//!
//! Rules never index into a word directly. They look at a [`Shape`], which
//! captures the first eight positions as [`Letter`]s. Positions past the end
//! of the word hold an empty letter that fails every `is` test and passes
//! every `is_not` test except `is_not("")`, which therefore reads as "is
//! present".

pub(crate) const VOWELS: &str = "aiueo";
pub(crate) const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// One position of a word, or nothing when the position is out of range.
///
/// Works on bytes: the classes are ASCII, so any byte of a multi-byte
/// character is a present letter that belongs to no class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Letter(Option<u8>);

impl Letter {
    pub fn at(word: &str, index: usize) -> Self {
        Letter(word.as_bytes().get(index).copied())
    }

    pub fn is(self, set: &str) -> bool {
        match self.0 {
            Some(b) => set.as_bytes().contains(&b),
            None => false,
        }
    }

    pub fn is_not(self, set: &str) -> bool {
        match self.0 {
            Some(_) => !self.is(set),
            None => !set.is_empty(),
        }
    }

    pub fn exists(self) -> bool {
        self.0.is_some()
    }

    pub fn is_consonant(self) -> bool {
        self.is(CONSONANTS)
    }
}

/// The leading eight positions of a word, named `s1..s8` (1-based, matching
/// the way the morphology tables are usually written).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Shape<'a> {
    pub word: &'a str,
    pub s1: Letter,
    pub s2: Letter,
    pub s3: Letter,
    pub s4: Letter,
    pub s5: Letter,
    pub s6: Letter,
    pub s7: Letter,
    pub s8: Letter,
}

impl<'a> Shape<'a> {
    pub fn of(word: &'a str) -> Self {
        Shape {
            word,
            s1: Letter::at(word, 0),
            s2: Letter::at(word, 1),
            s3: Letter::at(word, 2),
            s4: Letter::at(word, 3),
            s5: Letter::at(word, 4),
            s6: Letter::at(word, 5),
            s7: Letter::at(word, 6),
            s8: Letter::at(word, 7),
        }
    }

    /// The first `len` bytes of the word, or `""` when that is not a valid cut.
    pub fn head(&self, len: usize) -> &'a str {
        self.word.get(..len).unwrap_or("")
    }
}

/// Length in characters; every length threshold in the stemmer counts these.
pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}
