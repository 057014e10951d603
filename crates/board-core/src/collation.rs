//! Content Ordering
//!
//! Task content is ordered the way a reader alphabetises it, not by code
//! point. Comparison runs in levels, each consulted only on a tie:
//!
//! 1. base letters, ignoring accents and case (`unicase` folding over NFD)
//! 2. accents
//! 3. case, lowercase first
//!
//! Byte order breaks whatever is left so the order is total.

use std::cmp::Ordering;

use unicase::UniCase;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collation order of two task contents
pub fn compare_content(a: &str, b: &str) -> Ordering {
    UniCase::new(base_letters(a))
        .cmp(&UniCase::new(base_letters(b)))
        .then_with(|| UniCase::new(decomposed(a)).cmp(&UniCase::new(decomposed(b))))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn decomposed(s: &str) -> String {
    s.nfd().collect()
}

fn base_letters(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}
