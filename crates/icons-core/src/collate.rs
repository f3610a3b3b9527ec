//! Reading-order comparison for folder and file names.

use std::cmp::Ordering;

/// Compare two names the way a reader scans a list.
///
/// Case is ignored first, and punctuation sorts before digits, which sort
/// before letters. Names equal under that rule put lowercase first, then fall
/// back to raw bytes so the order is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}

fn primary(name: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}
