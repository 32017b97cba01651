//! # Naive Bayes Classifier
//!
//! Scores a token sequence against every label of a [`Model`] and picks
//! the maximum a posteriori label.

use tracing::debug;

use super::config::{ClassifierConfig, Scoring};
use super::estimator::{estimate, Model};
use crate::corpus::{CorpusIndex, Document};
use crate::error::{CadenceError, Result};

/// Score of one label for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    /// A probability product, or its natural log under `Scoring::LogSpace`.
    pub score: f64,
}

/// Scores `tokens` against every label, in label order.
///
/// Tokens inside the vocabulary use their conditional probability; all
/// others use [`Model::oov_probability`] with the configured policy.
pub fn score(
    tokens: &[String],
    model: &Model,
    config: &ClassifierConfig,
) -> Result<Vec<LabelScore>> {
    let mut scores = Vec::with_capacity(model.priors().len());

    for (label, prior) in model.priors() {
        let table = model
            .conditional(label)
            .ok_or_else(|| CadenceError::UnknownLabel(label.clone()))?;
        let fallback = if tokens.iter().any(|t| !table.contains_key(t)) {
            model.oov_probability(label, config.oov_fallback)?
        } else {
            0.0
        };

        let mut acc = match config.scoring {
            Scoring::Product => *prior,
            Scoring::LogSpace => prior.ln(),
        };
        for token in tokens {
            let p = table.get(token).copied().unwrap_or(fallback);
            match config.scoring {
                Scoring::Product => acc *= p,
                Scoring::LogSpace => acc += p.ln(),
            }
        }

        scores.push(LabelScore {
            label: label.clone(),
            score: acc,
        });
    }

    Ok(scores)
}

/// Classifies `tokens` with an explicit configuration.
///
/// Ties go to the first label in label order, i.e. the lexicographically
/// smallest among the maxima.
pub fn classify_with(
    tokens: &[String],
    model: &Model,
    config: &ClassifierConfig,
) -> Result<String> {
    let mut best: Option<LabelScore> = None;
    for candidate in score(tokens, model, config)? {
        let is_better = best
            .as_ref()
            .is_none_or(|current| candidate.score > current.score);
        if is_better {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(CadenceError::EmptyTrainingSet)?;
    debug!(label = %best.label, score = best.score, tokens = tokens.len(), "classified document");
    Ok(best.label)
}

/// Classifies `tokens` with the default configuration.
pub fn classify(tokens: &[String], model: &Model) -> Result<String> {
    classify_with(tokens, model, &ClassifierConfig::default())
}

/// Trainable classifier holding an optional fitted model.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayes {
    config: ClassifierConfig,
    model: Option<Model>,
}

impl NaiveBayes {
    /// Creates an untrained classifier.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            model: None,
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Trains on labelled documents, replacing any previous model.
    ///
    /// # Errors
    ///
    /// Indexing errors for malformed identifiers, or `EmptyTrainingSet`.
    pub fn fit(&mut self, documents: &[Document]) -> Result<&Model> {
        let index = CorpusIndex::build(documents)?;
        let model = estimate(&index)?;
        Ok(self.model.insert(model))
    }

    /// The fitted model.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::MissingModel` before [`NaiveBayes::fit`] succeeds.
    pub fn model(&self) -> Result<&Model> {
        self.model.as_ref().ok_or(CadenceError::MissingModel)
    }

    /// Predicts the label of a token sequence.
    pub fn predict(&self, tokens: &[String]) -> Result<String> {
        classify_with(tokens, self.model()?, &self.config)
    }

    /// Predicts the label of a document.
    pub fn predict_document(&self, document: &Document) -> Result<String> {
        self.predict(&document.tokens)
    }
}
