use serde::{Deserialize, Serialize};

/// How per-label scores are accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scoring {
    /// Multiply raw probabilities. Long documents can underflow to `0.0`,
    /// after which every label ties.
    #[default]
    Product,
    /// Sum natural logarithms. Same winner as `Product` whenever the
    /// product does not underflow.
    LogSpace,
}

/// Probability used for tokens that never appeared in training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OovFallback {
    /// `1 / (Σ conditional[label] + vocab_size)`.
    ///
    /// The sum runs over probabilities, so it is ~1.0 for every label and
    /// the fallback does not match the scale of the training-time
    /// smoothing denominator.
    #[default]
    ProbabilitySum,
    /// `1 / (total_words_in_label + vocab_size)`, the add-one estimate of
    /// a zero-count token.
    CountSum,
}

impl std::fmt::Display for Scoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::LogSpace => write!(f, "log-space"),
        }
    }
}

impl std::fmt::Display for OovFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProbabilitySum => write!(f, "probability-sum"),
            Self::CountSum => write!(f, "count-sum"),
        }
    }
}

/// Configuration for the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Score accumulation mode.
    pub scoring: Scoring,
    /// Unseen-token probability policy.
    pub oov_fallback: OovFallback,
}

impl ClassifierConfig {
    /// Create a new classifier configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scoring mode.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the unseen-token fallback policy.
    pub fn with_oov_fallback(mut self, oov_fallback: OovFallback) -> Self {
        self.oov_fallback = oov_fallback;
        self
    }
}
