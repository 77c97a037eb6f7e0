use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Statement(#[from] StatementError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Shape violations detected before any fragment is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("spatial index on table `{table}` has no index name")]
    MissingIndexName { table: String },
    #[error("spatial index `{index}` has no table name")]
    MissingTableName { index: String },
    #[error("spatial index `{index}` on table `{table}` has no columns")]
    EmptyColumns { index: String, table: String },
    #[error("spatial index `{index}` on table `{table}` has a blank column at position {position}")]
    BlankColumn {
        index: String,
        table: String,
        position: usize,
    },
    #[error(
        "spatial index `{index}` on table `{table}` sets {present} without {missing}; \
         z bounds must be supplied together"
    )]
    PartialZBounds {
        index: String,
        table: String,
        present: &'static str,
        missing: &'static str,
    },
    #[error("spatial index `{index}` on table `{table}` has bounding coordinates but no tolerance")]
    MissingTolerance { index: String, table: String },
    #[error("invalid decimal for {field}: `{value}`")]
    InvalidDecimal { field: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(
        "unsupported dialect for spatial index creation: {dialect} (index `{index}` on table `{table}`)"
    )]
    UnsupportedDialect {
        dialect: String,
        index: String,
        table: String,
    },
}
