use serde::{Deserialize, Serialize};

/// Running tally of correct predictions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accuracy {
    pub correct: usize,
    pub total: usize,
}

impl Accuracy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one prediction.
    pub fn record(&mut self, predicted: &str, actual: &str) {
        self.total += 1;
        if predicted == actual {
            self.correct += 1;
        }
    }

    /// `correct / total`, or `None` when nothing was recorded.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.correct as f64 / self.total as f64)
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ratio() {
            Some(ratio) => write!(f, "{}/{} ({ratio})", self.correct, self.total),
            None => write!(f, "0/0"),
        }
    }
}
