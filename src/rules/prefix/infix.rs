use crate::rules::chars::VOWELS;
use crate::{AffixRule, Removal};

// Both rules offer the word with the infix kept and the word with it removed;
// the dictionary decides which reading is real.

/// Ce{r|l|m}V => Ce{r|l|m}V or CV
fn rule_c_erlm_vowel() -> AffixRule {
    affix_rule! {
        name: "Ce{r|l|m}V",
        when: |s| s.s1.is_consonant() && s.s2.is("e") && s.s3.is("rlm") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 3).recode([s.head(3), s.head(1)]),
    }
}

/// CinV => CinV or CV
fn rule_c_in_vowel() -> AffixRule {
    affix_rule! {
        name: "CinV",
        when: |s| s.s1.is_consonant() && s.s2.is("i") && s.s3.is("n") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 3).recode([s.head(3), s.head(1)]),
    }
}

/// Get the infix rules in priority order.
pub fn get() -> Vec<AffixRule> {
    vec![rule_c_erlm_vowel(), rule_c_in_vowel()]
}
