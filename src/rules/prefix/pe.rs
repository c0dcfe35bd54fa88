use crate::rules::chars::VOWELS;
use crate::{AffixRule, Removal};

/// Consonants that never start a `pe-` + `C` split (they belong to the
/// `per-`, `pem-`, `pen-`, `pel-` and glide shapes instead).
const NOT_AFTER_PE: &str = "rwylmn";

// Rules (priority order: the first matching rule is the only one applied)

/// pe{w|y}V => pe-{w|y}V
fn rule_pe_wy_vowel() -> AffixRule {
    affix_rule! {
        name: "pe{w|y}V",
        when: |s| s.s3.is("wy") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 2),
    }
}

/// perV => per-V or pe-rV
fn rule_per_vowel() -> AffixRule {
    affix_rule! {
        name: "perV",
        when: |s| s.s3.is("r") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 3).recode(["r"]),
    }
}

/// perCAP => per-CAP where C != 'r' and P != 'er'
fn rule_per_cap() -> AffixRule {
    affix_rule! {
        name: "perCAP",
        when: |s| s.s3.is("r") && s.s4.is_consonant() && s.s4.is_not("r") && s.s5.exists() && s.s6.is_not("e"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// perCAerV => per-CAerV where C != 'r'
fn rule_per_caer_vowel() -> AffixRule {
    affix_rule! {
        name: "perCAerV",
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

/// pem{b|f|v} => pem-{b|f|v}
fn rule_pem_bfv() -> AffixRule {
    affix_rule! {
        name: "pem{b|f|v}",
        when: |s| s.s3.is("m") && s.s4.is("bfv"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// pem{rV|V} => pe-m{rV|V} or pe-p{rV|V}
fn rule_pem_r_vowel() -> AffixRule {
    affix_rule! {
        name: "pem{rV|V}",
        when: |s| s.s3.is("m") && (s.s4.is(VOWELS) || (s.s4.is("r") && s.s5.is(VOWELS))),
        strip: |s| Removal::drop(s.word, 3).recode(["m", "p"]),
    }
}

/// pen{c|d|j|z} => pen-{c|d|j|z}
fn rule_pen_cdjz() -> AffixRule {
    affix_rule! {
        name: "pen{c|d|j|z}",
        when: |s| s.s3.is("n") && s.s4.is("cdjz"),
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// penV => pe-nV or pe-tV
fn rule_pen_vowel() -> AffixRule {
    affix_rule! {
        name: "penV",
        when: |s| s.s3.is("n") && s.s4.is(VOWELS),
        strip: |s| Removal::drop(s.word, 3).recode(["n", "t"]),
    }
}

/// pengC => peng-C
fn rule_peng_consonant() -> AffixRule {
    affix_rule! {
        name: "pengC",
        when: |s| s.s3.is("n") && s.s4.is("g") && s.s5.is_consonant(),
        strip: |s| Removal::drop(s.word, 4),
    }
}

/// pengV => peng-V or peng-kV; penge- drops the whole `penge`.
fn rule_peng_vowel() -> AffixRule {
    affix_rule! {
        name: "pengV",
        when: |s| s.s3.is("n") && s.s4.is("g") && s.s5.is(VOWELS),
        strip: |s| {
            if s.s5.is("e") {
                Removal::drop(s.word, 5)
            } else {
                Removal::drop(s.word, 4).recode(["k"])
            }
        },
    }
}

/// penyV => peny-sV or pe-nyV
fn rule_peny_vowel() -> AffixRule {
    affix_rule! {
        name: "penyV",
        when: |s| s.s3.is("n") && s.s4.is("y") && s.s5.is(VOWELS),
        strip: |s| Removal::drop(s.word, 4).recode(["s", "ny"]),
    }
}

/// pelV => pe-lV, except pelajar => pel-ajar
fn rule_pel_vowel() -> AffixRule {
    affix_rule! {
        name: "pelV",
        when: |s| s.s3.is("l") && s.s4.is(VOWELS),
        strip: |s| {
            if s.word == "pelajar" {
                Removal::literal("ajar")
            } else {
                Removal::drop(s.word, 2)
            }
        },
    }
}

/// peCerV => per-erV where C != {r|w|y|l|m|n}
fn rule_pe_cer_vowel() -> AffixRule {
    affix_rule! {
        name: "peCerV",
        when: |s| {
            s.s3.is_consonant() && s.s3.is_not(NOT_AFTER_PE) && s.s4.is("e") && s.s5.is("r") && s.s6.is(VOWELS)
        },
        strip: |s| Removal::drop(s.word, 3),
    }
}

/// peCP => pe-CP where C != {r|w|y|l|m|n} and P != 'er'
fn rule_pe_cp() -> AffixRule {
    affix_rule! {
        name: "peCP",
        when: |s| s.s3.is_consonant() && s.s3.is_not(NOT_AFTER_PE) && s.s4.is_not("e"),
        strip: |s| Removal::drop(s.word, 2),
    }
}

/// peC1erC2 => pe-C1erC2 where C1 != {r|w|y|l|m|n}
fn rule_pe_c_er_consonant() -> AffixRule {
    affix_rule! {
        name: "peC1erC2",
        when: |s| {
            s.s3.is_consonant()
                && s.s3.is_not(NOT_AFTER_PE)
                && s.s4.is("e")
                && s.s5.is("r")
                && s.s6.is_consonant()
        },
        strip: |s| Removal::drop(s.word, 2),
    }
}

/// Get all `pe-` rules in priority order.
pub fn get() -> Vec<AffixRule> {
    vec![
        rule_pe_wy_vowel(),
        rule_per_vowel(),
        rule_per_cap(),
        rule_per_caer_vowel(),
        rule_pem_bfv(),
        rule_pem_r_vowel(),
        rule_pen_cdjz(),
        rule_pen_vowel(),
        rule_peng_consonant(),
        rule_peng_vowel(),
        rule_peny_vowel(),
        rule_pel_vowel(),
        rule_pe_cer_vowel(),
        rule_pe_cp(),
        rule_pe_c_er_consonant(),
    ]
}
