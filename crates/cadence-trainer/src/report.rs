//! Evaluation report for a classified test split.

use std::fmt::Write as _;

use cadence_core::Accuracy;
use serde::{Deserialize, Serialize};

/// Header line of the text report.
pub const REPORT_HEADER: &str = "[Real Artist] | [Predicted Artist] | [Accuracy] | [Lyric]";

/// Outcome for a single test document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub true_label: String,
    pub predicted_label: String,
    /// Tokenized text joined by single spaces.
    pub text: String,
}

impl Prediction {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.true_label == self.predicted_label
    }
}

/// All predictions of a run plus their accuracy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub predictions: Vec<Prediction>,
    pub accuracy: Accuracy,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a prediction and updates the tally.
    pub fn push(&mut self, prediction: Prediction) {
        self.accuracy
            .record(&prediction.predicted_label, &prediction.true_label);
        self.predictions.push(prediction);
    }

    /// Renders the pipe-separated text report.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{REPORT_HEADER}\n");

        for p in &self.predictions {
            let verdict = if p.is_correct() { "True" } else { "False" };
            let _ = writeln!(
                out,
                "{} | {} | {} | {} ",
                p.true_label, p.predicted_label, verdict, p.text
            );
        }

        match self.accuracy.ratio() {
            Some(ratio) => {
                let _ = writeln!(out, "\nAccuracy: {ratio:?}");
            }
            None => {
                let _ = writeln!(out, "\nAccuracy: n/a");
            }
        }
        let _ = writeln!(out, "Correct Predictions: {}", self.accuracy.correct);
        let _ = writeln!(out, "Total Predictions: {}", self.accuracy.total);
        out
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
