use crate::{ColumnDef, ColumnRef, Error, Passive, Result, TableRef, Value};

/// Capability contract every persistable model provides: an ordered property
/// list plus value access by column. Implementations are per-model
/// boilerplate, written by hand or generated; the engine relies on nothing
/// else about the type.
pub trait Record: Default + Send + Sync {
    /// Table the record maps to when the caller does not name one.
    fn table_name() -> &'static str;

    /// Declared properties, in declaration order.
    fn columns() -> &'static [ColumnDef];

    /// Current value of the property behind `column`. `NotSet` means the
    /// property was never fetched or assigned; an explicit null reads as a
    /// set typed null.
    fn value_of(&self, column: &ColumnDef) -> Passive<Value>;

    /// Assign `value` to the property behind `column`.
    fn set_value(&mut self, column: &ColumnDef, value: Value) -> Result<()>;

    fn table_ref() -> TableRef {
        TableRef::new(Self::table_name())
    }

    /// Resolve a caller supplied column subset against the declared set,
    /// `None` meaning every declared property in declaration order.
    fn resolve_columns(subset: Option<&[ColumnRef]>) -> Result<Vec<&'static ColumnDef>> {
        let Some(subset) = subset else {
            return Ok(Self::columns().iter().collect());
        };
        subset
            .iter()
            .map(|column| {
                Self::columns()
                    .iter()
                    .find(|def| def.column_ref == *column)
                    .ok_or_else(|| Error::MalformedDescriptor {
                        table: Self::table_name().into(),
                        column: column.name.into(),
                    })
            })
            .collect()
    }

    /// The primary key definition, when the model declares one.
    fn primary_key() -> Option<&'static ColumnDef> {
        Self::columns().iter().find(|def| def.primary_key)
    }
}
