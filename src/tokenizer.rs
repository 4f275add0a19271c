use std::borrow::Cow;
use std::str::SplitWhitespace;

use crate::rules::{is_punctuated_abbreviation, is_sentence_end, is_stopword};

pub(crate) fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer {
        words: text.split_whitespace(),
    }
}

/// Iterator over the whitespace-separated words of a piece of text.
///
/// Leading and trailing whitespace is dropped and runs of whitespace never
/// produce empty tokens.
pub(crate) struct Tokenizer<'a> {
    words: SplitWhitespace<'a>,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.words.next().map(Token::new)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Token<'a> {
    pub original: &'a str,
    pub normalized: Cow<'a, str>,
}

impl<'a> Token<'a> {
    pub fn new(original: &'a str) -> Self {
        let normalized = if original.contains(char::is_uppercase) {
            Cow::Owned(original.to_lowercase())
        } else {
            Cow::Borrowed(original)
        };

        Self {
            original,
            normalized,
        }
    }

    pub fn last_char(&self) -> Option<char> {
        self.original.chars().next_back()
    }

    /// Whether the word after this one starts a new sentence or clause.
    ///
    /// Punctuated abbreviations such as "a.b.r." end in a period but don't
    /// end the sentence.
    pub fn ends_sentence(&self) -> bool {
        match self.last_char() {
            Some('.') => !is_punctuated_abbreviation(self.original),
            Some(c) => is_sentence_end(c),
            None => false,
        }
    }

    pub fn is_stopword(&self) -> bool {
        is_stopword(&self.normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn originals(text: &str) -> Vec<&str> {
        tokenize(text).map(|t| t.original).collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(originals("  tears \t for\n\nfears  "), vec!["tears", "for", "fears"]);
    }

    #[test]
    fn empty_and_blank_text_has_no_tokens() {
        assert!(originals("").is_empty());
        assert!(originals(" \t \n ").is_empty());
    }

    #[test]
    fn normalized_form_is_lowercase() {
        let token = Token::new("THE");
        assert_eq!(token.normalized, "the");
        assert!(token.is_stopword());

        let token = Token::new("the");
        assert!(matches!(token.normalized, Cow::Borrowed(_)));
    }

    #[test]
    fn trailing_punctuation_ends_sentence() {
        assert!(Token::new("world:").ends_sentence());
        assert!(Token::new("-").ends_sentence());
        assert!(Token::new("1.2.3.").ends_sentence());
        assert!(Token::new("a.").ends_sentence());
        assert!(!Token::new("world").ends_sentence());
        assert!(!Token::new("(live)").ends_sentence());
    }

    #[test]
    fn abbreviation_does_not_end_sentence() {
        assert!(!Token::new("a.b.r.").ends_sentence());
        assert!(!Token::new("R.I.P.").ends_sentence());
    }

    #[test]
    fn multibyte_last_char() {
        assert_eq!(Token::new("öö").last_char(), Some('ö'));
        assert!(!Token::new("åå").ends_sentence());
    }
}
