use crate::rules::chars::VOWELS;
use crate::{AffixRule, Removal};

// Rules (priority order: the first matching rule is the only one applied)

/// me{l|r|w|y}V => me-{l|r|w|y}V
fn rule_me_lrwy_vowel() -> AffixRule {
    affix_rule! {
        name: "me{l|r|w|y}V",
        when: |s| s.s3.is("lrwy") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 2),
    }
}

/// mem{b|f|v} => mem-{b|f|v}
fn rule_mem_bfv() -> AffixRule {
    affix_rule! {
        name: "mem{b|f|v}",
        when: |s| s.s3.is("m") && s.s4.is("bfv"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// mempe => mem-pe
fn rule_mempe() -> AffixRule {
    affix_rule! {
        name: "mempe",
        when: |s| s.s3.is("m") && s.s4.is("p") && s.s5.is("e"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// mem{rV|V} => mem-{rV|V} or me-p{rV|V}
fn rule_mem_r_vowel() -> AffixRule {
    affix_rule! {
        name: "mem{rV|V}",
        when: |s| s.s3.is("m") && (s.s4.is(VOWELS) || (s.s4.is("r") && s.s5.is(VOWELS))),
        strip: |s| Removal::drop(s.word, 3).recode(["m", "p"]),
    }
}

/// men{c|d|j|s|t|z} => men-{c|d|j|s|t|z}
fn rule_men_cdjstz() -> AffixRule {
    affix_rule! {
        name: "men{c|d|j|s|t|z}",
        when: |s| s.s3.is("n") && s.s4.is("cdjstz"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// menV => me-nV or me-tV
fn rule_men_vowel() -> AffixRule {
    affix_rule! {
        name: "menV",
        when: |s| s.s3.is("n") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 3).recode(["n", "t"]),
    }
}

/// meng{g|h|q|k} => meng-{g|h|q|k}
fn rule_meng_ghqk() -> AffixRule {
    affix_rule! {
        name: "meng{g|h|q|k}",
        when: |s| s.s3.is("n") && s.s4.is("g") && s.s5.is("ghqk"),
        strip: |s| Removal::drop(s.word, 4),
    }
}

/// mengV => meng-V or meng-kV or me-ngV; menge- drops the whole `menge`.
fn rule_meng_vowel() -> AffixRule {
    affix_rule! {
        name: "mengV",
        when: |s| s.s3.is("n") && s.s4.is("g") && s.s5.is(VOWELS),
        strip: |s| {
            if s.s5.is("e") {
                Removal::drop(s.word, 5)
            } else {
                Removal::drop(s.word, 4).recode(["ng", "k"])
            }
        },
    }
}

/// menyV => meny-sV, or me-nyV when the vowel is `a` (menyala)
fn rule_meny_vowel() -> AffixRule {
    affix_rule! {
        name: "menyV",
        when: |s| s.s3.is("n") && s.s4.is("y") && s.s5.is(VOWELS),
        strip: |s| {
            if s.s5.is("a") {
                Removal::drop(s.word, 2)
            } else {
                Removal::replace(s.word, 4, "s")
            }
        },
    }
}

/// mempA => mem-pA where A != 'e'
fn rule_memp_not_e() -> AffixRule {
    affix_rule! {
        name: "mempA",
        when: |s| s.s3.is("m") && s.s4.is("p") && s.s5.is_not("e"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// Get all `me-` rules in priority order.
pub fn get() -> Vec<AffixRule> {
    vec![
        rule_me_lrwy_vowel(),
        rule_mem_bfv(),
        rule_mempe(),
        rule_mem_r_vowel(),
        rule_men_cdjstz(),
        rule_men_vowel(),
        rule_meng_ghqk(),
        rule_meng_vowel(),
        rule_meny_vowel(),
        rule_memp_not_e(),
    ]
}
