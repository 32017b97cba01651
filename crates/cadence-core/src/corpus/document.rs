use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CadenceError, Result};
use crate::text::tokenize;

/// Suffix the ingestion layer appends to per-document files.
pub const TEXT_FILE_SUFFIX: &str = ".txt";

/// A tokenized document.
///
/// Tokens are produced once at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier shaped as `<label><ordinal>`, e.g. `"adele12"`.
    pub id: String,

    /// Raw, untokenized text.
    pub raw_text: String,

    /// Tokenizer output for `raw_text`.
    pub tokens: Vec<String>,

    /// Ground-truth label, absent at inference time.
    pub label: Option<String>,
}

impl Document {
    /// Creates an unlabelled document, tokenizing `raw_text`.
    #[must_use]
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let tokens = tokenize(&raw_text);
        Self {
            id: id.into(),
            raw_text,
            tokens,
            label: None,
        }
    }

    /// Attaches a ground-truth label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Derives a label from a document identifier.
///
/// The label is everything before the trailing run of digits, with an
/// optional [`TEXT_FILE_SUFFIX`] after the digits.
pub struct LabelExtractor {
    re_identifier: Regex,
}

impl LabelExtractor {
    /// Constructs an extractor with the pre-compiled identifier pattern.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::RegexError` if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_identifier: Regex::new(r"^(?P<label>.*?)\d+(?:\.txt)?$")?,
        })
    }

    /// Extracts the label of `id`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::MalformedIdentifier` when `id` has no trailing
    /// ordinal or nothing precedes it.
    pub fn extract(&self, id: &str) -> Result<String> {
        self.re_identifier
            .captures(id)
            .and_then(|caps| caps.name("label"))
            .map(|m| m.as_str())
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CadenceError::MalformedIdentifier { id: id.to_string() })
    }
}

/// Extracts the label of a single identifier.
///
/// Compiles the pattern on every call; use [`LabelExtractor`] in loops.
pub fn extract_label(id: &str) -> Result<String> {
    LabelExtractor::new()?.extract(id)
}
