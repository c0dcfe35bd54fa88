use crate::rules::chars::VOWELS;
use crate::{AffixRule, Removal};

/// terV => ter-V or te-rV
fn rule_ter_vowel() -> AffixRule {
    affix_rule! {
        name: "terV",
        when: |s| s.s3.is("r") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 3).recode(["r"]),
    }
}

/// terCerV => ter-CerV where C != 'r'
fn rule_ter_cer_vowel() -> AffixRule {
    affix_rule! {
        name: "terCerV",
        when: |s| {
            s.s3.is("r")
                && s.s4.is_consonant()
                && s.s4.is_not("r")
                && s.s5.is("e")
                && s.s6.is("r")
                && s.s7.is(VOWELS)
        },
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// terCP => ter-CP where C != 'r' and P != 'er'
fn rule_ter_cp() -> AffixRule {
    affix_rule! {
        name: "terCP",
        when: |s| s.s3.is("r") && s.s4.is_consonant() && s.s4.is_not("r") && s.s5.is_not("e"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// teC1erC2 => te-C1erC2 where C1 != 'r'
fn rule_te_c_er_consonant() -> AffixRule {
    affix_rule! {
        name: "teC1erC2",
        when: |s| s.s3.is_consonant() && s.s3.is_not("r") && s.s4.is("e") && s.s5.is("r") && s.s6.is_consonant(),
        strip: |s| Removal::drop(s.word, 2),
    }
}

/// terC1erC2 => ter-C1erC2 where C1 != 'r'
fn rule_ter_c_er_consonant() -> AffixRule {
    affix_rule! {
        name: "terC1erC2",
        when: |s| {
            s.s3.is("r")
                && s.s4.is_consonant()
                && s.s4.is_not("r")
                && s.s5.is("e")
                && s.s6.is("r")
                && s.s7.is_consonant()
        },
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// Get all `te-` rules in priority order.
pub fn get() -> Vec<AffixRule> {
    vec![
        rule_ter_vowel(),
        rule_ter_cer_vowel(),
        rule_ter_cp(),
        rule_te_c_er_consonant(),
        rule_ter_c_er_consonant(),
    ]
}
