#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("static pattern compiles"));
        &*RE
    }};
}

/// Build an [`AffixRule`](crate::AffixRule) from a shape predicate and a strip
/// action. Both bodies must be non-capturing so they coerce to `fn` pointers.
///
/// ```ignore
/// affix_rule! {
///     name: "me{l|r|w|y}V",
///     when: |s| s.s3.is("lrwy") && s.s4.is(VOWELS),
///     strip: |s| Removal::drop(s.word, 2),
/// }
/// ```
#[macro_export]
macro_rules! affix_rule {
    (
        name: $name:expr,
        when: |$when_shape:ident| $when_body:expr,
        strip: |$strip_shape:ident| $strip_body:expr
        $(,)?
    ) => {{
        $crate::AffixRule {
            name: $name,
            pattern: |$when_shape: &$crate::rules::chars::Shape<'_>| -> bool { $when_body },
            strip: |$strip_shape: &$crate::rules::chars::Shape<'_>| -> $crate::Removal { $strip_body },
        }
    }};
}
