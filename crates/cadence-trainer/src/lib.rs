//! # Cadence Trainer
//!
//! Ingestion and reporting around the Cadence core: loads `[lyric, artist]`
//! JSON corpora, optionally materializes them as per-document text files,
//! trains a naive Bayes model, classifies a test split and writes a report.
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod report;

pub use error::IngestError;
pub use ingest::{entries_to_documents, load_directory, load_json_corpus, materialize, CorpusEntry};
pub use pipeline::{evaluate, run, train_split, write_report, PipelineConfig, ReportFormat, SplitSource};
pub use report::{Prediction, Report, REPORT_HEADER};
