//! # Corpus Indexer
//!
//! Groups training documents by label and accumulates per-label token
//! counts and the global vocabulary.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::document::{Document, LabelExtractor};
use crate::error::{CadenceError, Result};

/// Distinct tokens observed across all training documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    tokens: BTreeSet<String>,
}

impl Vocabulary {
    /// Adds a token, returning `true` if it was not present yet.
    pub fn insert(&mut self, token: &str) -> bool {
        if self.tokens.contains(token) {
            return false;
        }
        self.tokens.insert(token.to_string())
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Per-label token occurrence counts.
///
/// A token missing from a label's table has an implicit count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFrequencyTable {
    counts: BTreeMap<String, BTreeMap<String, u64>>,
}

impl ClassFrequencyTable {
    /// Increments `label`'s count for `token`, inserting it at 1 if absent.
    pub fn increment(&mut self, label: &str, token: &str) {
        self.add(label, token, 1);
    }

    fn add(&mut self, label: &str, token: &str, by: u64) {
        *self
            .counts
            .entry(label.to_string())
            .or_default()
            .entry(token.to_string())
            .or_insert(0) += by;
    }

    /// Ensures `label` has a (possibly empty) table.
    fn touch(&mut self, label: &str) {
        if !self.counts.contains_key(label) {
            self.counts.insert(label.to_string(), BTreeMap::new());
        }
    }

    /// Count of `token` under `label`, zero when never seen.
    #[must_use]
    pub fn count(&self, label: &str, token: &str) -> u64 {
        self.counts
            .get(label)
            .and_then(|table| table.get(token))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all token counts under `label`.
    #[must_use]
    pub fn total_words(&self, label: &str) -> u64 {
        self.counts
            .get(label)
            .map(|table| table.values().sum())
            .unwrap_or(0)
    }

    /// Labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

/// Everything the estimator needs from one training pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusIndex {
    pub vocabulary: Vocabulary,
    pub frequencies: ClassFrequencyTable,
    /// Number of training documents per label.
    pub doc_counts: BTreeMap<String, u64>,
}

impl CorpusIndex {
    /// Indexes a labelled training collection.
    ///
    /// Labels come from document identifiers (see [`LabelExtractor`]). A
    /// document whose explicit label disagrees with its identifier is
    /// rejected.
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` or `LabelMismatch` for the first offending document.
    pub fn build(documents: &[Document]) -> Result<Self> {
        let extractor = LabelExtractor::new()?;
        let mut index = Self::default();

        for doc in documents {
            let label = extractor.extract(&doc.id)?;
            if let Some(given) = &doc.label {
                if *given != label {
                    return Err(CadenceError::LabelMismatch {
                        id: doc.id.clone(),
                        given: given.clone(),
                        derived: label,
                    });
                }
            }
            index.insert(&label, &doc.tokens);
        }

        debug!(
            documents = documents.len(),
            labels = index.doc_counts.len(),
            vocab_size = index.vocabulary.len(),
            "indexed training corpus"
        );
        Ok(index)
    }

    /// Records one document's tokens under `label`.
    pub fn insert(&mut self, label: &str, tokens: &[String]) {
        *self.doc_counts.entry(label.to_string()).or_insert(0) += 1;
        self.frequencies.touch(label);
        for token in tokens {
            self.vocabulary.insert(token);
            self.frequencies.increment(label, token);
        }
    }

    /// Folds another partial index into this one by summation.
    pub fn merge(&mut self, other: CorpusIndex) {
        for token in other.vocabulary.iter() {
            self.vocabulary.insert(token);
        }
        for (label, table) in other.frequencies.counts {
            self.frequencies.touch(&label);
            for (token, count) in table {
                self.frequencies.add(&label, &token, count);
            }
        }
        for (label, count) in other.doc_counts {
            *self.doc_counts.entry(label).or_insert(0) += count;
        }
    }

    /// Total number of indexed documents.
    #[must_use]
    pub fn total_docs(&self) -> u64 {
        self.doc_counts.values().sum()
    }
}
