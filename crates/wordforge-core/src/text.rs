//! Small text helpers shared by the mutation tiers.

/// Capitalize a word: first character uppercased, every following character
/// lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Reverse a word by characters, not bytes.
pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bob"), "Bob");
        assert_eq!(capitalize("BOB"), "Bob");
        assert_eq!(capitalize("mcFLY"), "Mcfly");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_multibyte() {
        assert_eq!(capitalize("éric"), "Éric");
        assert_eq!(capitalize("ÉRIC"), "Éric");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("bob"), "bob");
        assert_eq!(reverse("ripley"), "yelpir");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(reverse("noël"), "lëon");
    }
}
