//! # Cadence
//!
//! Naive Bayes authorship classification for song lyrics.
//!
//! This crate re-exports the classification core and the
//! ingestion/reporting layer.
pub use cadence_core::{
    classify, tokenize, train, CadenceError, ClassifierConfig, Document, Model, NaiveBayes,
};
pub use cadence_trainer::{run, PipelineConfig, Report, SplitSource};
