use crate::{ColumnDef, Error, Passive, Record, Result, Row};

/// Build a record from a row positionally aligned to `columns`. Exactly the
/// listed properties are assigned; every other property stays unset so
/// callers can tell a partial fetch from a full one.
pub fn to_record<R: Record>(columns: &[&'static ColumnDef], row: &Row) -> Result<R> {
    if columns.len() != row.len() {
        return Err(Error::StorageFailure(format!(
            "row of {} values does not match the {} requested columns",
            row.len(),
            columns.len(),
        )));
    }
    let mut record = R::default();
    for (column, value) in columns.iter().zip(row.iter()) {
        record.set_value(column, value.clone())?;
    }
    Ok(record)
}

/// Read the listed properties out of a record, producing a row in the same
/// order. An unset nullable or engine-generated property becomes a typed
/// null; an unset required property is an error.
pub fn from_record<R: Record>(record: &R, columns: &[&'static ColumnDef]) -> Result<Row> {
    columns
        .iter()
        .map(|column| match record.value_of(column) {
            Passive::Set(value) => Ok(value),
            Passive::NotSet if column.nullable || column.auto_increment => {
                Ok(column.value.clone())
            }
            Passive::NotSet => Err(Error::MissingRequiredValue {
                table: column.table().into(),
                column: column.name().into(),
            }),
        })
        .collect()
}
