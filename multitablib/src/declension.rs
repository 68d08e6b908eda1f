//! Genitive-case declension of counted Russian nouns.
//!
//! The suffix is picked from static lookup tables by the count's last
//! digit. Two nouns are covered: "компьютер" and "машина".

use crate::error::MultitabError;
use crate::Result;

/// Word used when the caller does not pick one.
pub const DEFAULT_WORD: &str = "компьютер";

/// Suffix triples, indexed by form selector: singular-like, paucal,
/// genitive-plural.
const ENDING_SETS: [[&str; 3]; 2] = [["", "а", "ов"], ["а", "ы", ""]];

/// Known words: dictionary form, stem, index into [`ENDING_SETS`].
const WORD_ROOTS: [(&str, &str, usize); 2] = [
    ("компьютер", "компьютер", 0),
    ("машина", "машин", 1),
];

/// Form selector for each value of `count % 10`. Counts ending in
/// 11..=14 are resolved by their last digit like any other count.
const FORM_BY_TAIL: [usize; 10] = [2, 0, 1, 1, 1, 2, 2, 2, 2, 2];

/// Decline `word` into the genitive form that follows `count`.
///
/// Returns the count and the declined noun as one string, e.g.
/// `"23 компьютера"` or `"5 машин"`.
///
/// # Errors
///
/// Returns [`MultitabError::UnknownWord`] if `word` has no entry in
/// the root table.
pub fn genitive_form(count: u64, word: &str) -> Result<String> {
    let (_, root, set) = WORD_ROOTS
        .iter()
        .find(|(known, _, _)| *known == word)
        .ok_or_else(|| MultitabError::UnknownWord(word.to_string()))?;

    let tail = (count % 10) as usize;
    let suffix = ENDING_SETS[*set][FORM_BY_TAIL[tail]];

    Ok(format!("{} {}{}", count, root, suffix))
}
