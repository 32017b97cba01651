//! # Cadence Core
//!
//! Multinomial naive Bayes authorship classification for short texts such
//! as song lyrics: tokenization, corpus indexing, Laplace-smoothed
//! estimation and maximum a posteriori classification.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadence_core::{ClassifierConfig, Document, NaiveBayes};
//!
//! let mut classifier = NaiveBayes::new(ClassifierConfig::default());
//! classifier
//!     .fit(&[
//!         Document::new("A0", "love love dance"),
//!         Document::new("B0", "pain pain cry"),
//!     ])
//!     .unwrap();
//!
//! let doc = Document::new("A1", "love love");
//! assert_eq!(classifier.predict_document(&doc).unwrap(), "A");
//! ```
pub mod corpus;
pub mod error;
pub mod eval;
pub mod model;
pub mod text;

// Re-export primary API
pub use corpus::{extract_label, ClassFrequencyTable, CorpusIndex, Document, LabelExtractor, Vocabulary};
pub use error::{CadenceError, Result};
pub use eval::Accuracy;
pub use model::{
    classify, classify_with, estimate, score, ClassifierConfig, LabelScore, Model, NaiveBayes,
    OovFallback, Scoring,
};
pub use text::{tokenize, Tokenizer};

/// Indexes and estimates a model from labelled training documents.
pub fn train(documents: &[Document]) -> Result<Model> {
    estimate(&CorpusIndex::build(documents)?)
}
