use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for edge list loading operations.
/// This error type is used to represent various errors that can occur
/// while reading and deserializing the CSV edge table.
#[derive(Error, Debug)]
pub enum EdgeLoaderError {
    /// Error when opening or reading the edge file.
    #[error("Failed to read edge file '{0}': {1}")]
    ReadCsv(String, csv::Error),

    /// Error when a required column is absent from the CSV header.
    #[error("Edge file '{0}' is missing required column '{1}'")]
    MissingColumn(String, String),

    /// Error when a row cannot be deserialized into an edge record.
    #[error("Failed to parse edge record in '{0}': {1}")]
    ParseRecord(String, csv::Error),

    /// Error when the edge file contains no data rows.
    #[error("No edges found in file '{0}'")]
    NoEdgesFound(String),
}
