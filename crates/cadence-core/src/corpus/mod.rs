pub mod document;
pub mod index;

pub use document::{extract_label, Document, LabelExtractor, TEXT_FILE_SUFFIX};
pub use index::{ClassFrequencyTable, CorpusIndex, Vocabulary};
