use thiserror::Error;

/// Failure modes surfaced by this layer. Storage failures carry the engine's
/// message verbatim; the other kinds are produced before a statement ever
/// reaches the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A column reference does not belong to the record type's declared set.
    #[error("column `{column}` does not belong to table `{table}`")]
    MalformedDescriptor { table: String, column: String },
    /// A non-nullable, non-generated column was left unset on a write.
    #[error("column `{column}` of table `{table}` requires a value")]
    MissingRequiredValue { table: String, column: String },
    /// A value cannot be converted into the requested type.
    #[error("cannot convert {value} into `{target}`")]
    TypeMismatch {
        value: String,
        target: &'static str,
    },
    /// Opaque failure reported by the storage engine. Treat the operation as
    /// not durably completed.
    #[error("storage engine failure: {0}")]
    StorageFailure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
