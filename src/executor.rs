use crate::{
    Result, RowLabeled, Statement,
    stream::Stream,
    writer::{GenericSqlWriter, SqlWriter},
};
use std::future::Future;

/// Boundary to the storage engine. Implementations run rendered statements;
/// this layer never retries, classifies or masks their failures, it only
/// surfaces them as [`StorageFailure`](crate::Error::StorageFailure).
pub trait Executor: Send {
    /// Dialect used to render statements for this engine.
    fn sql_writer(&self) -> &dyn SqlWriter {
        static WRITER: GenericSqlWriter = GenericSqlWriter::new();
        &WRITER
    }

    /// Run a statement and return the number of affected rows.
    fn execute(&mut self, statement: Statement) -> impl Future<Output = Result<u64>> + Send;

    /// Run a statement and stream the resulting rows. The stream is finite
    /// and single pass; running the same statement again re-executes it and
    /// may observe different rows if storage changed concurrently.
    fn query(&mut self, statement: Statement) -> impl Stream<Item = Result<RowLabeled>> + Send;

    /// Key generated by the most recent insert on this connection context.
    /// Callers sharing the connection across threads must serialize the
    /// insert / read-back pair so no other insert intervenes.
    fn last_inserted_key(&mut self) -> impl Future<Output = Result<i64>> + Send;
}
