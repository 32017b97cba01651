use thiserror::Error;

/// Errors that can occur while training or applying a Cadence model.
#[derive(Debug, Error)]
pub enum CadenceError {
    /// No training documents were supplied, so priors cannot be normalized.
    #[error("cannot estimate a model from an empty training set")]
    EmptyTrainingSet,

    /// Classification was requested before any model was fitted.
    #[error("no model has been trained yet")]
    MissingModel,

    /// A document identifier is not shaped as `<label><ordinal>`.
    #[error("malformed document identifier {id:?}: expected <label><ordinal>")]
    MalformedIdentifier {
        /// The offending identifier.
        id: String,
    },

    /// A document carries an explicit label that disagrees with its identifier.
    #[error("document {id:?} is labelled {given:?} but its identifier implies {derived:?}")]
    LabelMismatch {
        /// The document identifier.
        id: String,
        /// Label attached to the document.
        given: String,
        /// Label derived from the identifier.
        derived: String,
    },

    /// The model has no vocabulary, so unseen tokens have no defined probability.
    #[error("model vocabulary is empty; unseen tokens cannot be scored")]
    EmptyVocabulary,

    /// The label is not part of the trained model.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// The identifier pattern failed to compile (should not happen with the static pattern).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for Cadence operations.
pub type Result<T> = std::result::Result<T, CadenceError>;
