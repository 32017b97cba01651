//! Fixed table of informal English contractions and their expansions.

/// Contraction → expansion pairs. Lookup is exact and case-sensitive, so
/// `"Don't"` is not expanded while `"don't"` is.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'm", "i am"),
    ("can't", "cannot"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("how'd", "how did"),
    ("he'll", "he will"),
    ("aren't", "are not"),
    ("how'll", "how will"),
    ("i'll", "i will"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("might've", "might have"),
    ("must've", "must have"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("who'll", "who will"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("y'all", "you all"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
];

/// Look up the expansion of a contraction.
///
/// # Examples
/// ```
/// use cadence_core::text::expand_contraction;
///
/// assert_eq!(expand_contraction("y'all"), Some("you all"));
/// assert_eq!(expand_contraction("ain't"), None);
/// ```
pub fn expand_contraction(token: &str) -> Option<&'static str> {
    CONTRACTIONS
        .iter()
        .find(|(contraction, _)| *contraction == token)
        .map(|(_, expansion)| *expansion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_unique_keys() {
        let keys: HashSet<_> = CONTRACTIONS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), CONTRACTIONS.len());
        assert_eq!(CONTRACTIONS.len(), 52);
    }

    #[test]
    fn test_every_key_has_apostrophe() {
        assert!(CONTRACTIONS.iter().all(|(k, _)| k.contains('\'')));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(expand_contraction("don't"), Some("do not"));
        assert_eq!(expand_contraction("Don't"), None);
        assert_eq!(expand_contraction("can't"), Some("cannot"));
    }
}
