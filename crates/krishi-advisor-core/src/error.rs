use thiserror::Error;

/// Errors raised while loading or mutating the knowledge base.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Knowledge data could not be parsed: {0}")]
    DataLoad(#[from] serde_json::Error),

    #[error("Knowledge entry '{0}' has no keywords")]
    EmptyKeywords(String),

    #[error("Knowledge entry '{id}' has confidence {confidence} outside [0, 1]")]
    InvalidConfidence { id: String, confidence: f64 },
}

/// Errors raised while assembling a response.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Query is empty")]
    InvalidQuery,

    #[error("Response assembly failed: {0}")]
    Assembly(String),
}

/// Errors raised by the presentational formatter.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("HTML conversion failed: {0}")]
    Markup(String),
}
