//! Sentence tokenizer.
//!
//! Turns free text into the lowercase alphabetic tokens the stemmer expects.
//! The pipeline is:
//!
//! ```text
//! text ─ lowercase ─ unescape entities ─ drop urls/e-mails/@handles/#tags
//!      ─ drop leftover `&...;` ─ symbols -> space ─ collapse whitespace ─ split
//! ```
//!
//! Only ASCII letters survive, so accented or non-Latin characters split a
//! token just like punctuation does.

use regex::Regex;

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let text = html_escape::decode_html_entities(&text);

        let text = url_pattern().replace_all(&text, "");
        let text = email_pattern().replace_all(&text, "");
        let text = handle_pattern().replace_all(&text, "");
        let text = regex!(r"&.*;").replace_all(&text, "");
        let text = regex!(r"[^a-z\s]").replace_all(&text, " ");

        text.split_whitespace().map(str::to_string).collect()
    }
}

fn url_pattern() -> &'static Regex {
    regex!(r"(www\.|https?|s?ftp)\S+")
}

fn email_pattern() -> &'static Regex {
    regex!(r"\S+@\S+")
}

fn handle_pattern() -> &'static Regex {
    regex!(r"(@|#)\S+")
}
