//! Static lookup tables shared by the mutation tiers.
//!
//! Everything here is read-only after process start. The year range is
//! computed from the local calendar on first use so the pool always reaches
//! the current year without a release.

use chrono::{Datelike, Local};
use once_cell::sync::Lazy;

/// Punctuation symbols used for affixes and interior insertion.
pub const SYMBOLS: [char; 9] = ['!', '@', '#', '_', '-', '.', '*', '?', '/'];

/// Bracket pairs used by the wrapping affix forms.
///
/// The last pair wraps in bangs rather than brackets proper, which shows up
/// often enough in leaked lists to earn its place here.
pub const BRACKETS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('{', '}'), ('!', '!')];

/// Numeric suffixes applied at every mutation level.
pub const BASE_SUFFIXES: [&str; 3] = ["123", "1234", "321"];

/// First year of the year-suffix range.
pub const FIRST_YEAR: i32 = 1900;

/// Four-digit years from [`FIRST_YEAR`] through the current calendar year.
pub static YEARS: Lazy<Vec<String>> = Lazy::new(|| {
    (FIRST_YEAR..=Local::now().year())
        .map(|year| year.to_string())
        .collect()
});

/// Look-alike replacements for a character, or an empty slice when the
/// character has none. Matching is ASCII case-insensitive.
pub fn leet_alternatives(c: char) -> &'static [char] {
    match c.to_ascii_lowercase() {
        'a' => &['4', '@'],
        'e' => &['3', '€', '&'],
        'i' => &['1'],
        'o' => &['0'],
        's' => &['$', '5'],
        't' => &['7'],
        _ => &[],
    }
}
