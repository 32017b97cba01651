//! # Lyric Tokenizer
//!
//! Splits raw text on whitespace and normalizes contractions and
//! dangling hyphens. No case folding or punctuation stripping is applied,
//! so the vocabulary is exactly the surface tokens produced here.

use super::contractions::expand_contraction;

/// Tokenizer for lyric text.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into an ordered sequence of word tokens.
    ///
    /// Tokens with an apostrophe are first looked up in the contraction
    /// table; a hit replaces the token with the words of its expansion and
    /// nothing else is applied. Every other token has one leading and then
    /// one trailing `-` removed, leaving interior hyphens alone.
    ///
    /// # Examples
    /// ```
    /// use cadence_core::text::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new();
    /// assert_eq!(tokenizer.tokenize("don't -stop-"), vec!["do", "not", "stop"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for raw in text.split_whitespace() {
            if raw.contains('\'') {
                if let Some(expanded) = expand_contraction(raw) {
                    tokens.extend(expanded.split_whitespace().map(str::to_string));
                    continue;
                }
            }

            tokens.push(self.trim_hyphens(raw).to_string());
        }

        tokens
    }

    /// Drop a single leading and a single trailing hyphen.
    fn trim_hyphens<'a>(&self, token: &'a str) -> &'a str {
        if !token.contains('-') {
            return token;
        }
        let token = token.strip_prefix('-').unwrap_or(token);
        token.strip_suffix('-').unwrap_or(token)
    }
}

/// Tokenize with a default [`Tokenizer`].
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contraction_expands() {
        assert_eq!(tokenize("don't"), vec!["do", "not"]);
        assert_eq!(tokenize("y'all"), vec!["you", "all"]);
    }

    #[test]
    fn test_single_word_expansion() {
        assert_eq!(tokenize("can't stop"), vec!["cannot", "stop"]);
    }

    #[test]
    fn test_outer_hyphens_trimmed() {
        assert_eq!(tokenize("-hyphen-"), vec!["hyphen"]);
        assert_eq!(tokenize("-lead"), vec!["lead"]);
        assert_eq!(tokenize("trail-"), vec!["trail"]);
    }

    #[test]
    fn test_only_one_hyphen_trimmed_per_side() {
        assert_eq!(tokenize("--double--"), vec!["-double-"]);
    }

    #[test]
    fn test_interior_hyphen_preserved() {
        assert_eq!(tokenize("well-known"), vec!["well-known"]);
    }

    #[test]
    fn test_contraction_wins_over_hyphen_rule() {
        // "it's-fine" is not in the table, so it falls through to the hyphen rule
        assert_eq!(tokenize("it's-fine"), vec!["it's-fine"]);
        assert_eq!(tokenize("it's -fine-"), vec!["it", "is", "fine"]);
    }

    #[test]
    fn test_unknown_apostrophe_token_gets_hyphen_rule() {
        assert_eq!(tokenize("-rock'n'roll-"), vec!["rock'n'roll"]);
        assert_eq!(tokenize("ain't"), vec!["ain't"]);
    }

    #[test]
    fn test_lone_hyphen_becomes_empty_token() {
        assert_eq!(tokenize("a - b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_no_case_folding_or_punctuation_stripping() {
        assert_eq!(tokenize("Love, love!"), vec!["Love,", "love!"]);
        assert_eq!(tokenize("Don't"), vec!["Don't"]);
    }

    #[test]
    fn test_whitespace_runs_and_order() {
        assert_eq!(
            tokenize("  one\ttwo\n\nthree  "),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "we're gonna -rock- all night, don't you know";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
