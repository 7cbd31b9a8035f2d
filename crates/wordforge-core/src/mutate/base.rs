//! Base-form expansion applied to every seed at every level.

use std::collections::HashSet;

use crate::text;

/// Expand one seed into its trivial variants.
///
/// Emits the word itself, its lowercase, uppercase, and capitalized forms,
/// its character-wise reversal, and the two starter suffixes "123" and "!".
/// Forms that collide (an all-lowercase palindrome collapses several) are
/// deduplicated by the returned set.
pub fn expand(word: &str) -> HashSet<String> {
    let mut forms = HashSet::new();
    forms.insert(word.to_string());
    forms.insert(word.to_lowercase());
    forms.insert(word.to_uppercase());
    forms.insert(text::capitalize(word));
    forms.insert(text::reverse(word));
    forms.insert(format!("{}123", word));
    forms.insert(format!("{}!", word));
    forms
}
