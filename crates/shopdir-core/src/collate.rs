//! Locale-aware string ordering for display sorting.
//!
//! Approximates root collation in four levels:
//!
//! 1. Base characters, with accents and case stripped. Whitespace sorts before
//!    punctuation and symbols, which sort before digits, which sort before
//!    letters.
//! 2. Accents: an unaccented letter sorts before its accented forms.
//! 3. Case: lower case sorts before upper case.
//! 4. Raw code points, so distinct strings never compare equal.
//!
//! Letters without a canonical decomposition (`ß`, `æ`, `ø`) keep their own
//! code point as the base and therefore sort after `z`.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Symbol,
    Digit,
    Letter,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Symbol
    }
}

#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| secondary_keys(a).cmp(secondary_keys(b)))
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_keys(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    s.nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(|c| (classify(c), c))
}

fn secondary_keys(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| {
            x.is_uppercase().cmp(&y.is_uppercase())
        })
}
