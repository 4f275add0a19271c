use std::iter::once;

use unicode_case_mapping::to_titlecase;
use unicode_segmentation::UnicodeSegmentation;

/// Capitalize every word in a string, including the letters that follow
/// periods inside punctuated abbreviations.
///
/// Word boundaries follow Unicode word segmentation, so leading brackets and
/// quotes are skipped over and apostrophes don't split words:
///
/// ```
/// use titleize::title_case_word;
///
/// assert_eq!(title_case_word("(live)"), "(Live)");
/// assert_eq!(title_case_word("satan's"), "Satan's");
/// assert_eq!(title_case_word("r.i.p."), "R.I.P.");
/// ```
///
/// Only the case of letters changes; everything else is copied as is.
pub fn title_case_word(word: &str) -> String {
    // "a.b.r" is a single word as far as segmentation is concerned, so every
    // period-delimited piece gets cased once more on its own.
    let cased = title_case_words(word);
    let pieces: Vec<_> = cased.split('.').map(title_case_words).collect();
    pieces.join(".")
}

fn title_case_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for segment in text.split_word_bounds() {
        if segment.chars().any(char::is_alphanumeric) {
            push_capitalized(&mut result, segment);
        } else {
            result.push_str(segment);
        }
    }
    result
}

fn push_capitalized(result: &mut String, word: &str) {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if is_cased(first) => {
            push_titlecase(result, first);
            result.push_str(&chars.as_str().to_lowercase());
        }
        _ => result.push_str(&word.to_lowercase()),
    }
}

// Titlecase is not uppercase: "ǆ" becomes "ǅ" and "ß" becomes "Ss".
fn push_titlecase(result: &mut String, c: char) {
    let mapped = to_titlecase(c);
    if mapped[0] == 0 {
        result.push(c);
        return;
    }
    result.extend(
        mapped
            .iter()
            .take_while(|&&code| code != 0)
            .filter_map(|&code| char::from_u32(code)),
    );
}

// Titlecase letters like "ǅ" are neither uppercase nor lowercase.
fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || !c.to_lowercase().eq(once(c))
}
