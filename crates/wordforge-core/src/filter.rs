//! Length filtering of the candidate set.

use std::collections::HashSet;

use wordforge_types::LengthWindow;

/// Keep only candidates whose character count falls inside the window.
pub fn by_length(candidates: HashSet<String>, window: LengthWindow) -> HashSet<String> {
    candidates
        .into_iter()
        .filter(|word| window.contains(word))
        .collect()
}
