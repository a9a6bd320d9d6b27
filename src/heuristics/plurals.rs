/// Singular and plural spellings of a word under the regular `+s` rule
///
/// A word ending in `s` is taken as the plural and its singular is the word
/// without that `s`; any other word is the singular and gains an `s`.
/// Irregular plurals ("child"/"children") are not handled.
pub fn regular_forms(word: &str) -> (String, String) {
    match word.strip_suffix('s') {
        Some(singular) => (singular.to_string(), word.to_string()),
        None => (word.to_string(), format!("{}s", word)),
    }
}

/// Which form survives a merge, as `(removed, added)`
///
/// The plural wins ties.
pub fn pick_canonical<'a>(
    singular: &'a str,
    singular_count: u64,
    plural: &'a str,
    plural_count: u64,
) -> (&'a str, &'a str) {
    if plural_count >= singular_count {
        (singular, plural)
    } else {
        (plural, singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_forms() {
        assert_eq!(regular_forms("movie"), ("movie".into(), "movies".into()));
        assert_eq!(regular_forms("movies"), ("movie".into(), "movies".into()));
        // a bare "s" has an empty singular, which never appears as a token
        assert_eq!(regular_forms("s"), ("".into(), "s".into()));
    }

    #[test]
    fn test_plural_wins_tie() {
        assert_eq!(pick_canonical("cat", 2, "cats", 2), ("cat", "cats"));
        assert_eq!(pick_canonical("cat", 3, "cats", 2), ("cats", "cat"));
        assert_eq!(pick_canonical("cat", 1, "cats", 5), ("cat", "cats"));
    }
}
