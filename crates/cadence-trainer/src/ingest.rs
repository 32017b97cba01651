//! Corpus ingestion: JSON corpora, per-document text files and the
//! conversion of both into tokenized [`Document`]s.
//!
//! A document that cannot be written, read or labelled is logged and
//! skipped; errors on the corpus as a whole are returned.

use std::fs;
use std::path::{Path, PathBuf};

use cadence_core::corpus::TEXT_FILE_SUFFIX;
use cadence_core::{Document, LabelExtractor};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

/// One `[lyric, artist]` entry of a JSON corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct CorpusEntry {
    pub lyric: String,
    pub artist: String,
}

impl From<(String, String)> for CorpusEntry {
    fn from((lyric, artist): (String, String)) -> Self {
        Self { lyric, artist }
    }
}

impl From<CorpusEntry> for (String, String) {
    fn from(entry: CorpusEntry) -> Self {
        (entry.lyric, entry.artist)
    }
}

impl CorpusEntry {
    /// Identifier of the entry at position `ordinal`: `<artist><ordinal>`.
    #[must_use]
    pub fn document_id(&self, ordinal: usize) -> String {
        format!("{}{}", self.artist, ordinal)
    }
}

/// Reads a JSON array of `[lyric, artist]` pairs.
pub fn load_json_corpus(path: impl AsRef<Path>) -> Result<Vec<CorpusEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let entries: Vec<CorpusEntry> =
        serde_json::from_str(&content).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), entries = entries.len(), "loaded JSON corpus");
    Ok(entries)
}

/// Converts corpus entries into labelled documents.
///
/// The label is derived from the generated identifier, exactly as
/// [`load_directory`] derives it from a file stem. An artist name ending
/// in digits (`"U2"`) therefore becomes a truncated label (`"U"`).
pub fn entries_to_documents(entries: &[CorpusEntry]) -> Result<Vec<Document>> {
    let extractor = LabelExtractor::new()?;
    let mut documents = Vec::with_capacity(entries.len());

    for (ordinal, entry) in entries.iter().enumerate() {
        let id = entry.document_id(ordinal);
        match extractor.extract(&id) {
            Ok(label) => {
                if label != entry.artist {
                    warn!(
                        %id,
                        artist = %entry.artist,
                        %label,
                        "identifier does not round-trip the artist, using derived label"
                    );
                }
                documents.push(Document::new(id, entry.lyric.as_str()).with_label(label));
            }
            Err(e) => warn!(%id, error = %e, "skipping entry"),
        }
    }

    Ok(documents)
}

/// Writes each entry to `<dir>/<artist><ordinal>.txt`.
///
/// Does nothing if `dir` already exists. Returns the number of files written.
pub fn materialize(entries: &[CorpusEntry], dir: impl AsRef<Path>) -> Result<usize> {
    let dir = dir.as_ref();
    if dir.exists() {
        info!(dir = %dir.display(), "corpus directory exists, not rewriting");
        return Ok(0);
    }
    fs::create_dir_all(dir).map_err(|e| IngestError::io(dir, e))?;

    let mut written = 0;
    for (ordinal, entry) in entries.iter().enumerate() {
        let path = dir.join(format!("{}{}", entry.document_id(ordinal), TEXT_FILE_SUFFIX));
        match fs::write(&path, &entry.lyric) {
            Ok(()) => written += 1,
            Err(e) => warn!(path = %path.display(), error = %e, "failed to write document, skipping"),
        }
    }

    info!(dir = %dir.display(), written, "materialized corpus");
    Ok(written)
}

/// Loads every `*.txt` file in `dir`, sorted by file name.
///
/// The file stem is the document identifier and the label is derived
/// from it.
pub fn load_directory(dir: impl AsRef<Path>) -> Result<Vec<Document>> {
    let dir = dir.as_ref();
    let extractor = LabelExtractor::new()?;

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| IngestError::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "non UTF-8 file name, skipping");
            continue;
        };
        let label = match extractor.extract(id) {
            Ok(label) => label,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping document");
                continue;
            }
        };
        match fs::read_to_string(&path) {
            Ok(text) => documents.push(Document::new(id, text).with_label(label)),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to read document, skipping"),
        }
    }

    debug!(dir = %dir.display(), documents = documents.len(), "loaded corpus directory");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lyric: &str, artist: &str) -> CorpusEntry {
        CorpusEntry {
            lyric: lyric.into(),
            artist: artist.into(),
        }
    }

    #[test]
    fn test_entry_from_json_pair() {
        let entries: Vec<CorpusEntry> =
            serde_json::from_str(r#"[["hello it's me", "adele"], ["hotline bling", "drake"]]"#)
                .unwrap();
        assert_eq!(entries[0], entry("hello it's me", "adele"));
        assert_eq!(entries[1].artist, "drake");
    }

    #[test]
    fn test_document_ids_use_position() {
        let docs = entries_to_documents(&[entry("a", "adele"), entry("b", "drake")]).unwrap();
        assert_eq!(docs[0].id, "adele0");
        assert_eq!(docs[1].id, "drake1");
        assert_eq!(docs[1].label.as_deref(), Some("drake"));
        assert_eq!(docs[0].tokens, vec!["a"]);
    }

    #[test]
    fn test_artist_ending_in_digits_uses_derived_label() {
        let docs = entries_to_documents(&[entry("x", "blink-182"), entry("y", "U2")]).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "blink-1820");
        assert_eq!(docs[0].label.as_deref(), Some("blink-"));
        assert_eq!(docs[1].id, "U21");
        assert_eq!(docs[1].label.as_deref(), Some("U"));
    }

    #[test]
    fn test_empty_artist_is_skipped() {
        let docs = entries_to_documents(&[entry("x", "")]).unwrap();
        assert!(docs.is_empty());
    }
}
