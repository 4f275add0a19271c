//! Reformat text following English title capitalization rules.
//!
//! The first word, the last word and every word that begins a new sentence
//! are capitalized. Minor words are kept lowercase everywhere else:
//!
//! > a, an, and, as, at, but, by, en, etc, for, from,
//! > if, in, of, on, or, the, to, via, von, vs, with
//!
//! A word starts a new sentence when the word before it ends with one of
//! `. , : ; ! ? & / + -`. Punctuated abbreviations like "a.b.r." are the
//! exception: they end with a period but don't end the sentence. Brackets
//! and quotes in front of a word are skipped when capitalizing it.
//!
//! # Example
//!
//! ```
//! use titleize::titleize;
//!
//! assert_eq!(
//!     titleize("bob marley & the wailers - no woman, no cry (live)"),
//!     "Bob Marley & The Wailers - No Woman, No Cry (Live)"
//! );
//! assert_eq!(
//!     titleize("sepultura - r.i.p. (rest in pain)"),
//!     "Sepultura - R.I.P. (Rest in Pain)"
//! );
//! ```
//!
//! These rules are heuristics. They handle most song, album and book titles
//! well, but no attempt is made to actually parse the sentence, so odd input
//! will produce odd output.

pub mod colors;
mod errors;
mod rules;
mod titlecase;
mod titleize;
mod tokenizer;

pub use crate::errors::UnknownColorChoice;
pub use crate::rules::{
    is_punctuated_abbreviation, is_sentence_end, is_stopword, SENTENCE_ENDINGS, STOPWORDS,
};
pub use crate::titlecase::title_case_word;
pub use crate::titleize::titleize;
