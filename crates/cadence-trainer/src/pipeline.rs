//! End-to-end train → classify → report pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cadence_core::{ClassifierConfig, Document, NaiveBayes};
use tracing::{info, warn};

use crate::ingest::{entries_to_documents, load_directory, load_json_corpus, materialize};
use crate::report::{Prediction, Report};

/// Output format of the written report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Where one data split comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSource {
    /// JSON corpus of `[lyric, artist]` pairs.
    pub corpus: PathBuf,
    /// If set, documents are materialized here as text files and read back.
    pub dir: Option<PathBuf>,
}

impl SplitSource {
    pub fn new(corpus: impl Into<PathBuf>) -> Self {
        Self {
            corpus: corpus.into(),
            dir: None,
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Loads the split as labelled documents.
    pub fn load(&self) -> Result<Vec<Document>> {
        let entries = load_json_corpus(&self.corpus)
            .with_context(|| format!("Failed to load corpus {}", self.corpus.display()))?;

        match &self.dir {
            Some(dir) => {
                materialize(&entries, dir)?;
                Ok(load_directory(dir)?)
            }
            None => Ok(entries_to_documents(&entries)?),
        }
    }
}

/// Configuration for a full evaluation run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub train: SplitSource,
    pub test: SplitSource,
    /// Report destination; `None` skips writing.
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
    pub classifier: ClassifierConfig,
}

impl PipelineConfig {
    /// Create a configuration with default classifier settings and no output file.
    pub fn new(train: SplitSource, test: SplitSource) -> Self {
        Self {
            train,
            test,
            output: None,
            format: ReportFormat::default(),
            classifier: ClassifierConfig::default(),
        }
    }

    /// Set the report destination.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the report format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the classifier configuration.
    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }
}

/// Trains a classifier from a single split.
pub fn train_split(source: &SplitSource, config: ClassifierConfig) -> Result<NaiveBayes> {
    let documents = source.load()?;
    let mut classifier = NaiveBayes::new(config);
    classifier
        .fit(&documents)
        .context("Failed to train naive Bayes model")?;
    Ok(classifier)
}

/// Classifies every labelled document and tallies the results.
pub fn evaluate(classifier: &NaiveBayes, documents: &[Document]) -> Result<Report> {
    let mut report = Report::new();

    for doc in documents {
        let Some(true_label) = doc.label.clone() else {
            warn!(id = %doc.id, "test document has no label, skipping");
            continue;
        };
        let predicted_label = classifier
            .predict(&doc.tokens)
            .with_context(|| format!("Failed to classify {}", doc.id))?;
        report.push(Prediction {
            id: doc.id.clone(),
            true_label,
            predicted_label,
            text: doc.tokens.join(" "),
        });
    }

    Ok(report)
}

/// Writes `report` to `path` in the given format.
pub fn write_report(report: &Report, path: &Path, format: ReportFormat) -> Result<()> {
    let body = match format {
        ReportFormat::Text => report.render(),
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
    };
    fs::write(path, body).with_context(|| format!("Failed to write report {}", path.display()))
}

/// Runs training, evaluation and reporting.
pub fn run(config: &PipelineConfig) -> Result<Report> {
    let classifier = train_split(&config.train, config.classifier.clone())?;

    let test_docs = config.test.load()?;
    if test_docs.is_empty() {
        warn!("test split is empty");
    }

    let report = evaluate(&classifier, &test_docs)?;
    info!(
        correct = report.accuracy.correct,
        total = report.accuracy.total,
        accuracy = ?report.accuracy.ratio(),
        "evaluation complete"
    );

    if let Some(output) = &config.output {
        write_report(&report, output, config.format)?;
        info!(path = %output.display(), "report written");
    }

    Ok(report)
}
