pub mod classifier;
pub mod config;
pub mod estimator;

pub use classifier::{classify, classify_with, score, LabelScore, NaiveBayes};
pub use config::{ClassifierConfig, OovFallback, Scoring};
pub use estimator::{estimate, Model};
