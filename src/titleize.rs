use log::{debug, trace};

use crate::titlecase::title_case_word;
use crate::tokenizer::{tokenize, Token};

/// Capitalize text following English title capitalization rules.
///
/// The first word, the last word and every word that starts a new sentence
/// or clause are always capitalized. Other [stopwords](crate::STOPWORDS) are
/// lowercased and everything else is capitalized. Whitespace between words is
/// collapsed to a single space.
///
/// ```
/// use titleize::titleize;
///
/// assert_eq!(
///     titleize("tears for fears @ rule the world: the greatest hits"),
///     "Tears for Fears @ Rule the World: The Greatest Hits"
/// );
/// ```
pub fn titleize(text: &str) -> String {
    let tokens: Vec<Token> = tokenize(text).collect();
    let last_index = match tokens.len().checked_sub(1) {
        Some(index) => index,
        None => return String::new(),
    };

    let mut sentences = SentenceTracker::default();
    let mut words = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let starts_sentence = sentences.advance(token);

        let titleized = if starts_sentence || index == 0 || index == last_index {
            trace!("{:?} at {}: forced capitalization", token.original, index);
            title_case_word(token.original)
        } else if token.is_stopword() {
            trace!("{:?} at {}: stopword", token.original, index);
            token.normalized.clone().into_owned()
        } else {
            trace!("{:?} at {}: capitalized", token.original, index);
            title_case_word(token.original)
        };

        words.push(titleized);
    }

    words.join(" ")
}

/// Tracks whether the current word follows the end of a sentence.
///
/// A word can only be classified once the previous one has been seen, so the
/// decision made for one token is latched and applied to the next.
#[derive(Debug, Default)]
struct SentenceTracker {
    skip_next: bool,
}

impl SentenceTracker {
    /// Feed the next token, returning whether it starts a new sentence.
    fn advance(&mut self, token: &Token) -> bool {
        let starts_sentence = self.skip_next;
        self.skip_next = token.ends_sentence();
        if self.skip_next {
            debug!("sentence boundary after {:?}", token.original);
        }
        starts_sentence
    }
}
