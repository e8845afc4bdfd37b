//! Name orderings used by the use cases.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Locale-aware, case-insensitive comparison.
///
/// Names are compared on their base letters first (accents and case folded
/// away), so "Ángel" sorts with the A's. Accents only break ties between
/// otherwise equal names. Names that differ only in case compare equal, so a
/// stable sort keeps their input order.
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
}

/// Canonical decomposition with combining marks dropped, lowercased.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Canonical decomposition, lowercased. Marks sort after their base letter.
fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Numeric-aware comparison: runs of ASCII digits compare by value, so
/// `"Form 9" < "Form 10"`. Everything else compares character by character.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let (l_digits, r_digits) = (take_digits(&mut left), take_digits(&mut right));
                let ordering = compare_digit_runs(&l_digits, &r_digits);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    // Same length after stripping zeros means lexical order is numeric order
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
