//! Cadence CLI
//!
//! Trains a naive Bayes authorship model from a JSON lyric corpus and
//! either evaluates it on a test corpus or classifies a single text.

use std::path::PathBuf;

use anyhow::Result;
use cadence_core::{tokenize, ClassifierConfig, OovFallback, Scoring};
use cadence_trainer::{run, train_split, PipelineConfig, ReportFormat, SplitSource};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

/// CLI arguments
#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Naive Bayes authorship classification for song lyrics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    model: ModelArgs,
}

#[derive(Args)]
struct ModelArgs {
    /// Sum log-probabilities instead of multiplying probabilities
    #[arg(long, global = true)]
    log_space: bool,

    /// Probability used for tokens never seen in training
    #[arg(
        long,
        global = true,
        env = "CADENCE_OOV_FALLBACK",
        value_enum,
        default_value_t = FallbackArg::ProbabilitySum
    )]
    oov_fallback: FallbackArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum FallbackArg {
    ProbabilitySum,
    CountSum,
}

impl ModelArgs {
    fn classifier_config(&self) -> ClassifierConfig {
        let scoring = if self.log_space {
            Scoring::LogSpace
        } else {
            Scoring::Product
        };
        let oov_fallback = match self.oov_fallback {
            FallbackArg::ProbabilitySum => OovFallback::ProbabilitySum,
            FallbackArg::CountSum => OovFallback::CountSum,
        };
        ClassifierConfig::new()
            .with_scoring(scoring)
            .with_oov_fallback(oov_fallback)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Train on one corpus, evaluate on another and write a report
    Run {
        /// Training corpus (JSON array of [lyric, artist])
        #[arg(long, env = "CADENCE_TRAIN", default_value = "trainfile-2.json")]
        train: PathBuf,

        /// Test corpus (JSON array of [lyric, artist])
        #[arg(long, env = "CADENCE_TEST", default_value = "testfile-2.json")]
        test: PathBuf,

        /// Materialize training documents into this directory
        #[arg(long, env = "CADENCE_TRAIN_DIR")]
        train_dir: Option<PathBuf>,

        /// Materialize test documents into this directory
        #[arg(long, env = "CADENCE_TEST_DIR")]
        test_dir: Option<PathBuf>,

        /// Report destination
        #[arg(short, long, env = "CADENCE_OUTPUT", default_value = "naivebayes.output")]
        output: PathBuf,

        /// Write the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Predict the artist of a single text
    Classify {
        /// Training corpus (JSON array of [lyric, artist])
        #[arg(long, env = "CADENCE_TRAIN", default_value = "trainfile-2.json")]
        train: PathBuf,

        /// Text to classify
        text: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let classifier_config = cli.model.classifier_config();

    match cli.command {
        Commands::Run {
            train,
            test,
            train_dir,
            test_dir,
            output,
            json,
        } => {
            let mut train_source = SplitSource::new(train);
            if let Some(dir) = train_dir {
                train_source = train_source.with_dir(dir);
            }
            let mut test_source = SplitSource::new(test);
            if let Some(dir) = test_dir {
                test_source = test_source.with_dir(dir);
            }
            let format = if json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            };

            let config = PipelineConfig::new(train_source, test_source)
                .with_output(output)
                .with_format(format)
                .with_classifier(classifier_config);
            let report = run(&config)?;
            println!("Accuracy: {}", report.accuracy);
        }
        Commands::Classify { train, text } => {
            let classifier = train_split(&SplitSource::new(train), classifier_config)?;
            info!(
                scoring = %classifier.config().scoring,
                oov_fallback = %classifier.config().oov_fallback,
                "model ready"
            );
            println!("{}", classifier.predict(&tokenize(&text))?);
        }
    }

    Ok(())
}
