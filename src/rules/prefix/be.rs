use crate::rules::chars::VOWELS;
use crate::{AffixRule, Removal};

/// berV => ber-V or be-rV
fn rule_ber_vowel() -> AffixRule {
    affix_rule! {
        name: "berV",
        when: |s| s.s3.is("r") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 3).recode(["r"]),
    }
}

/// berCAP => ber-CAP where C != 'r' and P != 'er'
fn rule_ber_cap() -> AffixRule {
    affix_rule! {
        name: "berCAP",
        when: |s| s.s3.is("r") && s.s4.is_consonant() && s.s4.is_not("r") && s.s5.exists() && s.s6.is_not("e"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// berCAerV => ber-CAerV where C != 'r'
fn rule_ber_caer_vowel() -> AffixRule {
    affix_rule! {
        name: "berCAerV",
        when: |s| {
            s.s3.is("r")
                && s.s4.is_consonant()
                && s.s4.is_not("r")
                && s.s5.exists()
                && s.s6.is("e")
                && s.s7.is("r")
                && s.s8.is(VOWELS)
        },
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// belajar => bel-ajar
fn rule_belajar() -> AffixRule {
    affix_rule! {
        name: "belajar",
        when: |s| s.word == "belajar",
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// beC1erC2 => be-C1erC2 where C1 != {'r'|'l'}
fn rule_be_c_er_consonant() -> AffixRule {
    affix_rule! {
        name: "beC1erC2",
        when: |s| {
            s.s3.is_consonant() && s.s3.is_not("rl") && s.s4.is("e") && s.s5.is("r") && s.s6.is_consonant()
        },
        strip: |s| Removal::drop(s.word, 2),
    }
}

/// Get all `be-` rules in priority order.
pub fn get() -> Vec<AffixRule> {
    vec![rule_ber_vowel(), rule_ber_cap(), rule_ber_caer_vowel(), rule_belajar(), rule_be_c_er_consonant()]
}
