use std::collections::HashSet;

use lazy_static::lazy_static;

/// Minor words that stay lowercase unless they begin a sentence or sit at
/// either end of the text.
pub const STOPWORDS: [&str; 22] = [
    "a", "an", "and", "as", "at", "but", "by", "en", "etc", "for", "from", "if", "in", "of", "on",
    "or", "the", "to", "via", "von", "vs", "with",
];

/// Characters that, when a word ends with them, make the following word start
/// a new sentence or clause.
pub const SENTENCE_ENDINGS: [char; 10] = ['.', ',', ':', ';', '!', '?', '&', '/', '+', '-'];

lazy_static! {
    static ref STOPWORD_SET: HashSet<&'static str> = STOPWORDS.iter().copied().collect();
}

/// Check whether a word is one of the [`STOPWORDS`], ignoring case.
pub fn is_stopword(word: &str) -> bool {
    if word.contains(char::is_uppercase) {
        STOPWORD_SET.contains(word.to_lowercase().as_str())
    } else {
        STOPWORD_SET.contains(word)
    }
}

/// Check whether a character is one of the [`SENTENCE_ENDINGS`].
pub fn is_sentence_end(c: char) -> bool {
    SENTENCE_ENDINGS.contains(&c)
}

/// Check whether a word is a punctuated abbreviation like "a.b." or "R.I.P.":
/// two or more letters, each one followed by a period, and nothing else.
///
/// Digits don't count as letters, so "1.2.3." is not an abbreviation.
pub fn is_punctuated_abbreviation(word: &str) -> bool {
    let mut chars = word.chars();
    let mut groups = 0;

    loop {
        match (chars.next(), chars.next()) {
            (None, _) => return groups >= 2,
            (Some(letter), Some('.')) if letter.is_alphabetic() => groups += 1,
            _ => return false,
        }
    }
}
