use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error reading an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// The source table does not match the declared schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Error from date parsing or date arithmetic
    #[error("Date error: {0}")]
    Date(String),

    /// Error loading or querying the model artifact
    #[error("Model error: {0}")]
    Model(String),
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        let compute_error = match error {
            polars::error::PolarsError::SchemaMismatch(_)
            | polars::error::PolarsError::ColumnNotFound(_) => {
                let err = ComputeError::Schema(format!("{}", error));
                error!(?err, "DataFrame error: schema mismatch");
                err
            }
            _ => {
                let err = ComputeError::DataFrame(format!("{}", error));
                error!(?err, "DataFrame error");
                err
            }
        };
        compute_error
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
