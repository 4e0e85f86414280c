use thiserror::Error;

/// An error raised while reading a SPARQL query results JSON document.
#[derive(Debug, Error)]
pub enum QueryResultsParseError {
    /// The document is not syntactically valid JSON or a member has the
    /// wrong shape.
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),
    /// The document carries neither a `boolean` nor a `results` member.
    #[error("the JSON document contains neither a boolean nor a results member")]
    MissingResults,
}
