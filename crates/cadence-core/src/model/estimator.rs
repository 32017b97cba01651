//! # Probability Estimator
//!
//! Turns corpus counts into class priors and Laplace-smoothed conditional
//! word probabilities.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use super::config::OovFallback;
use crate::corpus::CorpusIndex;
use crate::error::{CadenceError, Result};

/// A trained multinomial naive Bayes model.
///
/// Immutable once estimated. Every label-keyed map is ordered by label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    priors: BTreeMap<String, f64>,
    conditional: BTreeMap<String, BTreeMap<String, f64>>,
    word_totals: BTreeMap<String, u64>,
    vocab_size: usize,
}

impl Model {
    /// Class priors, ordered by label.
    pub fn priors(&self) -> &BTreeMap<String, f64> {
        &self.priors
    }

    /// Prior probability of `label`.
    #[must_use]
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.priors.get(label).copied()
    }

    /// Conditional table of `label` over the whole vocabulary.
    #[must_use]
    pub fn conditional(&self, label: &str) -> Option<&BTreeMap<String, f64>> {
        self.conditional.get(label)
    }

    /// `P(token | label)`, or `None` if `token` is outside the vocabulary.
    #[must_use]
    pub fn probability(&self, label: &str, token: &str) -> Option<f64> {
        self.conditional.get(label)?.get(token).copied()
    }

    /// Probability assigned to a token never seen in training.
    ///
    /// # Errors
    ///
    /// `UnknownLabel` if `label` is not in the model, `EmptyVocabulary` if the
    /// fallback denominator is zero.
    pub fn oov_probability(&self, label: &str, fallback: OovFallback) -> Result<f64> {
        let mass = match fallback {
            OovFallback::ProbabilitySum => self
                .conditional
                .get(label)
                .map(|table| table.values().sum::<f64>()),
            OovFallback::CountSum => self.word_totals.get(label).map(|total| *total as f64),
        }
        .ok_or_else(|| CadenceError::UnknownLabel(label.to_string()))?;

        let denominator = mass + self.vocab_size as f64;
        if denominator == 0.0 {
            return Err(CadenceError::EmptyVocabulary);
        }
        Ok(1.0 / denominator)
    }

    /// Labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.priors.keys().map(String::as_str)
    }

    /// Number of distinct training tokens.
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }
}

/// Estimates a [`Model`] from an indexed training corpus.
///
/// # Errors
///
/// Returns `CadenceError::EmptyTrainingSet` if the index holds no documents.
pub fn estimate(index: &CorpusIndex) -> Result<Model> {
    let total_docs = index.total_docs();
    if total_docs == 0 {
        return Err(CadenceError::EmptyTrainingSet);
    }

    let vocab_size = index.vocabulary.len();
    let mut priors = BTreeMap::new();
    let mut conditional = BTreeMap::new();
    let mut word_totals = BTreeMap::new();

    for label in index.frequencies.labels() {
        let docs = index.doc_counts.get(label).copied().unwrap_or(0);
        priors.insert(label.to_string(), docs as f64 / total_docs as f64);

        let num_words = index.frequencies.total_words(label);
        let denominator = (num_words + vocab_size as u64) as f64;
        let table: BTreeMap<String, f64> = index
            .vocabulary
            .iter()
            .map(|token| {
                let count = index.frequencies.count(label, token);
                (token.to_string(), (count + 1) as f64 / denominator)
            })
            .collect();

        conditional.insert(label.to_string(), table);
        word_totals.insert(label.to_string(), num_words);
    }

    info!(
        labels = priors.len(),
        documents = total_docs,
        vocab_size,
        "estimated naive Bayes model"
    );

    Ok(Model {
        priors,
        conditional,
        word_totals,
        vocab_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;

    fn toy_index() -> CorpusIndex {
        CorpusIndex::build(&[
            Document::new("a0", "love love dance"),
            Document::new("b0", "pain pain cry"),
        ])
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_empty_training_set_fails() {
        let err = estimate(&CorpusIndex::default()).unwrap_err();
        assert!(matches!(err, CadenceError::EmptyTrainingSet));
    }

    #[test]
    fn test_toy_probabilities() {
        let model = estimate(&toy_index()).unwrap();

        assert_eq!(model.vocab_size(), 4);
        assert_eq!(model.prior("a"), Some(0.5));
        assert_eq!(model.prior("b"), Some(0.5));
        assert_close(model.probability("a", "love").unwrap(), 3.0 / 7.0);
        assert_close(model.probability("a", "cry").unwrap(), 1.0 / 7.0);
        assert_close(model.probability("b", "pain").unwrap(), 3.0 / 7.0);
        assert_eq!(model.probability("a", "unseen"), None);
    }

    #[test]
    fn test_tables_cover_full_vocabulary() {
        let model = estimate(&toy_index()).unwrap();
        for label in model.labels() {
            assert_eq!(model.conditional(label).unwrap().len(), 4);
        }
    }

    #[test]
    fn test_distributions_normalize() {
        let model = estimate(&toy_index()).unwrap();
        assert_close(model.priors().values().sum(), 1.0);
        for label in model.labels() {
            assert_close(model.conditional(label).unwrap().values().sum(), 1.0);
        }
    }

    #[test]
    fn test_uneven_priors() {
        let index = CorpusIndex::build(&[
            Document::new("a0", "x"),
            Document::new("a1", "y"),
            Document::new("a2", "z"),
            Document::new("b0", "x"),
        ])
        .unwrap();
        let model = estimate(&index).unwrap();
        assert_eq!(model.prior("a"), Some(0.75));
        assert_eq!(model.prior("b"), Some(0.25));
    }

    #[test]
    fn test_oov_fallbacks() {
        let model = estimate(&toy_index()).unwrap();

        // Σ conditional ≈ 1.0, so 1 / (1 + 4)
        assert_close(
            model.oov_probability("a", OovFallback::ProbabilitySum).unwrap(),
            0.2,
        );
        // 3 words + 4 vocab
        assert_close(
            model.oov_probability("a", OovFallback::CountSum).unwrap(),
            1.0 / 7.0,
        );
    }

    #[test]
    fn test_oov_unknown_label() {
        let model = estimate(&toy_index()).unwrap();
        let err = model
            .oov_probability("zzz", OovFallback::ProbabilitySum)
            .unwrap_err();
        assert!(matches!(err, CadenceError::UnknownLabel(_)));
    }

    #[test]
    fn test_oov_with_empty_vocabulary() {
        let index = CorpusIndex::build(&[Document::new("a0", "")]).unwrap();
        let model = estimate(&index).unwrap();
        let err = model
            .oov_probability("a", OovFallback::CountSum)
            .unwrap_err();
        assert!(matches!(err, CadenceError::EmptyVocabulary));
    }
}
