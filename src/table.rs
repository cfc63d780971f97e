use crate::{
    Clauses, ColumnRef, Executor, Operation, Record, Result, RowLabeled, TableRef, Value,
    from_record, stream::Stream, to_record,
};
use async_stream::try_stream;
use futures::StreamExt;
use std::{borrow::Cow, marker::PhantomData, pin::pin};

/// Binds a record type to a table name so operations can be invoked without
/// repeating either. Holds no connection and no further state; cheap to
/// clone and safe to share across any number of operations.
pub struct Table<R: Record> {
    table_ref: TableRef,
    record: PhantomData<R>,
}

impl<R: Record> Table<R> {
    /// Handle over `name`, which may differ from the record's declared
    /// table.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            table_ref: TableRef::new(name),
            record: PhantomData,
        }
    }

    pub fn table_ref(&self) -> &TableRef {
        &self.table_ref
    }

    async fn insert_record<E: Executor>(
        &self,
        executor: &mut E,
        subset: Option<&[ColumnRef]>,
        record: &mut R,
        replace: bool,
    ) -> Result<()> {
        let mut columns = R::resolve_columns(subset)?;
        // An unset generated key is omitted entirely so the engine assigns it.
        let generated =
            R::primary_key().filter(|pk| pk.auto_increment && !record.value_of(pk).is_set());
        if let Some(pk) = generated {
            columns.retain(|column| column.column_ref != pk.column_ref);
        }
        let row = from_record(record, &columns)?;
        let statement = Operation::Insert {
            table: &self.table_ref,
            columns,
            row,
            replace,
        }
        .render(executor.sql_writer());
        log::debug!("{}", statement);
        executor.execute(statement).await?;
        if let Some(pk) = generated {
            let key = executor.last_inserted_key().await?;
            record.set_value(pk, Value::Integer(Some(key)))?;
        }
        Ok(())
    }

    /// Insert one record, writing the listed properties (`None` writes every
    /// declared property). When the key property is engine generated and
    /// unset, the assigned key is written back into `record`.
    pub async fn insert_one<E: Executor>(
        &self,
        executor: &mut E,
        columns: Option<&[ColumnRef]>,
        record: &mut R,
    ) -> Result<()> {
        self.insert_record(executor, columns, record, false).await
    }

    /// Insert records one statement at a time so generated keys propagate
    /// back into each of them.
    pub async fn insert_many<E: Executor>(
        &self,
        executor: &mut E,
        columns: Option<&[ColumnRef]>,
        records: &mut [R],
    ) -> Result<()> {
        for record in records.iter_mut() {
            self.insert_record(executor, columns, record, false).await?;
        }
        Ok(())
    }

    /// Insert overwriting any existing row whose key collides: the old row
    /// is replaced, not merged.
    pub async fn replace_one<E: Executor>(
        &self,
        executor: &mut E,
        columns: Option<&[ColumnRef]>,
        record: &mut R,
    ) -> Result<()> {
        self.insert_record(executor, columns, record, true).await
    }

    pub async fn replace_many<E: Executor>(
        &self,
        executor: &mut E,
        columns: Option<&[ColumnRef]>,
        records: &mut [R],
    ) -> Result<()> {
        for record in records.iter_mut() {
            self.insert_record(executor, columns, record, true).await?;
        }
        Ok(())
    }

    /// Stream matching records. Properties outside the requested subset stay
    /// unset on every returned record.
    pub fn select_many<'a, E: Executor>(
        &'a self,
        executor: &'a mut E,
        columns: Option<&'a [ColumnRef]>,
        clauses: Clauses<'a>,
    ) -> impl Stream<Item = Result<R>> + 'a {
        try_stream! {
            let columns = R::resolve_columns(columns)?;
            let statement = Operation::Select {
                table: &self.table_ref,
                columns: columns.clone(),
                clauses,
            }
            .render(executor.sql_writer());
            log::debug!("{}", statement);
            let rows = executor.query(statement);
            for await row in rows {
                let row = row?;
                yield to_record::<R>(&columns, &row.values)?;
            }
        }
    }

    /// First matching record, if any. A limit of one is applied on top of
    /// the caller's clauses.
    pub async fn select_one<E: Executor>(
        &self,
        executor: &mut E,
        columns: Option<&[ColumnRef]>,
        clauses: Clauses<'_>,
    ) -> Result<Option<R>> {
        let stream = self.select_many(executor, columns, clauses.limit(1));
        let mut stream = pin!(stream);
        stream.next().await.transpose()
    }

    /// Stream matching rows as raw tabular data, for callers that do not
    /// want full records.
    pub fn select_rows<'a, E: Executor>(
        &'a self,
        executor: &'a mut E,
        columns: Option<&'a [ColumnRef]>,
        clauses: Clauses<'a>,
    ) -> impl Stream<Item = Result<RowLabeled>> + 'a {
        try_stream! {
            let columns = R::resolve_columns(columns)?;
            let statement = Operation::Select {
                table: &self.table_ref,
                columns,
                clauses,
            }
            .render(executor.sql_writer());
            log::debug!("{}", statement);
            let rows = executor.query(statement);
            for await row in rows {
                yield row?;
            }
        }
    }

    /// Write the listed properties of `record` into every matching row and
    /// return the affected count. Ordering and windowing clauses narrow
    /// which rows are touched on engines built with update limit support.
    pub async fn update<E: Executor>(
        &self,
        executor: &mut E,
        columns: &[ColumnRef],
        record: &R,
        clauses: Clauses<'_>,
    ) -> Result<u64> {
        let columns = R::resolve_columns(Some(columns))?;
        let row = from_record(record, &columns)?;
        let assignments = columns.into_iter().zip(row.into_vec()).collect::<Vec<_>>();
        let statement = Operation::Update {
            table: &self.table_ref,
            assignments,
            clauses,
        }
        .render(executor.sql_writer());
        log::debug!("{}", statement);
        executor.execute(statement).await
    }

    /// Delete every matching row and return the affected count.
    pub async fn delete<E: Executor>(&self, executor: &mut E, clauses: Clauses<'_>) -> Result<u64> {
        let statement = Operation::Delete {
            table: &self.table_ref,
            clauses,
        }
        .render(executor.sql_writer());
        log::debug!("{}", statement);
        executor.execute(statement).await
    }
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new(R::table_name())
    }
}

impl<R: Record> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            table_ref: self.table_ref.clone(),
            record: PhantomData,
        }
    }
}
