//! Text normalization for search and ordering
//!
//! Provides:
//! - `fold`: trimmed, lowercased text for substring search
//! - `collate`: a fixed, locale-independent ordering for name columns
//!
//! The collation compares in levels, in the spirit of the Unicode default
//! collation:
//! 1. base letters (NFKD, combining marks removed, lowercased)
//! 2. accents (NFKD, lowercased)
//! 3. case (lowercase sorts before uppercase)
//! 4. raw code points, so distinct strings never compare equal

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for case-insensitive substring matching.
///
/// No Unicode normalization is applied: composing or decomposing would make
/// some names stop containing queries they contain as typed.
///
/// # Examples
///
/// ```
/// use product_catalog::normalize::fold;
///
/// assert_eq!(fold("  Apple "), "apple");
/// assert!(fold("Cafe\u{301}").contains(&fold("CAFE")));
/// ```
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Compare two strings with the crate's fixed collation.
///
/// # Examples
///
/// ```
/// use product_catalog::normalize::collate;
/// use std::cmp::Ordering;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("éclair", "eclairs"), Ordering::Less);
/// assert_eq!(collate("a", "A"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(s: &str) -> String {
    s.nfkd().flat_map(char::to_lowercase).collect()
}

/// Per-character case flags; `false` (lowercase) sorts first
fn tertiary_key(s: &str) -> Vec<bool> {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}
