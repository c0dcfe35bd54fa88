//! Suffix patterns and whole-word shape tests.
//!
//! Each suffix pattern is anchored at the end of the word and may be preceded
//! by a hyphen, which is stripped together with the suffix. Regex search is
//! leftmost, so among alternatives that all reach the end of the word the
//! longest one wins (`isasi` over `i`, `kan` over `an`, `-nya` over `nya`).

use regex::Regex;

/// The three suffix layers, in the order they are stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SuffixKind {
    Particle,
    Possessive,
    Derivational,
}

impl SuffixKind {
    pub(crate) fn pattern(self) -> &'static Regex {
        match self {
            SuffixKind::Particle => regex!(r"-?(lah|kah|tah|pun)$"),
            SuffixKind::Possessive => regex!(r"-?(ku|mu|nya)$"),
            SuffixKind::Derivational => regex!(r"-?(is|isme|isasi|i|kan|an)$"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SuffixKind::Particle => "particle",
            SuffixKind::Possessive => "possessive",
            SuffixKind::Derivational => "derivational",
        }
    }
}

/// Words whose suffix could otherwise swallow part of a valid prefix strip;
/// these go through prefix removal before the suffix chain.
pub(crate) fn prefix_first(word: &str) -> bool {
    regex!(r"^(be.+lah|be.+an|me.+i|di.+i|pe.+i|ter.+i)$").is_match(word)
}

/// Prefix/suffix pairings that cannot co-occur on one root; a word that still
/// looks like one of these is not reduced any further.
pub(crate) fn disallowed_pairing(word: &str) -> bool {
    regex!(r"^(ber.+i|di.+an|ke.+i|ke.+kan|me.+an|ter.+an|per.+an)$").is_match(word)
}

/// Split `word` into `(remainder, fragment)` for one suffix layer. The
/// fragment is empty when nothing matched.
pub(crate) fn split(kind: SuffixKind, word: &str) -> (&str, &str) {
    match kind.pattern().find(word) {
        Some(m) => word.split_at(m.start()),
        None => (word, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles() {
        assert_eq!(split(SuffixKind::Particle, "bacalah"), ("baca", "lah"));
        assert_eq!(split(SuffixKind::Particle, "apakah"), ("apa", "kah"));
        assert_eq!(split(SuffixKind::Particle, "itupun"), ("itu", "pun"));
        assert_eq!(split(SuffixKind::Particle, "itu-pun"), ("itu", "-pun"));
        assert_eq!(split(SuffixKind::Particle, "makan"), ("makan", ""));
    }

    #[test]
    fn possessives() {
        assert_eq!(split(SuffixKind::Possessive, "bukuku"), ("buku", "ku"));
        assert_eq!(split(SuffixKind::Possessive, "rumahmu"), ("rumah", "mu"));
        assert_eq!(split(SuffixKind::Possessive, "bukunya"), ("buku", "nya"));
        assert_eq!(split(SuffixKind::Possessive, "buku-nya"), ("buku", "-nya"));
    }

    #[test]
    fn derivational_suffix_prefers_the_longest_match() {
        assert_eq!(split(SuffixKind::Derivational, "nasionalisasi"), ("nasional", "isasi"));
        assert_eq!(split(SuffixKind::Derivational, "nasionalisme"), ("nasional", "isme"));
        assert_eq!(split(SuffixKind::Derivational, "sosialis"), ("sosial", "is"));
        assert_eq!(split(SuffixKind::Derivational, "berikan"), ("beri", "kan"));
        assert_eq!(split(SuffixKind::Derivational, "makanan"), ("makan", "an"));
        assert_eq!(split(SuffixKind::Derivational, "lempari"), ("lempar", "i"));
        assert_eq!(split(SuffixKind::Derivational, "jual"), ("jual", ""));
    }

    #[test]
    fn a_whole_word_suffix_leaves_an_empty_remainder() {
        assert_eq!(split(SuffixKind::Particle, "pun"), ("", "pun"));
    }

    #[test]
    fn prefix_first_shapes() {
        for word in ["bermainlah", "berjualan", "memberi", "dicari", "pelari", "terlambati"] {
            assert!(prefix_first(word), "{} should be prefix-first", word);
        }
        for word in ["memakan", "menjuallah", "dirusak", "makanan"] {
            assert!(!prefix_first(word), "{} should be suffix-first", word);
        }
    }

    #[test]
    fn disallowed_pairings() {
        for word in ["berlari", "dimakan", "kebaikani", "kebaikkan", "memakan", "terbaikan", "perbaikan"] {
            assert!(disallowed_pairing(word), "{} should be disallowed", word);
        }
        for word in ["berlar", "dirusak", "menjual"] {
            assert!(!disallowed_pairing(word), "{} should be allowed", word);
        }
    }
}
