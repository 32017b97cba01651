pub mod contractions;
pub mod tokenizer;

pub use contractions::{expand_contraction, CONTRACTIONS};
pub use tokenizer::{tokenize, Tokenizer};
