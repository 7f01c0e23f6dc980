use thiserror::Error;

/// All errors produced by the bikeshare data pipeline.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The requested city is not in the dataset catalog.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A row's timestamp or numeric field could not be parsed. The whole
    /// load is aborted since a partial dataset would silently skew every
    /// statistic downstream.
    #[error("Malformed record at row {row}: {raw:?}")]
    MalformedRecord { row: usize, raw: String },

    /// A statistic was requested over zero rows. Callers render this as
    /// "no data for this filter" rather than crashing.
    #[error("No rows to compute {statistic} over")]
    EmptyTable { statistic: &'static str },

    /// Pass-through for CSV reader errors (missing headers, bad fields).
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Pass-through for raw I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExplorerError>;
