#![allow(dead_code)]

use silo::{AsValue, ColumnDef, ColumnRef, Error, Passive, Record, Result, Value};

/// Row keyed by a caller supplied text code, so the key column is required
/// on every insert.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Badge {
    pub code: Passive<String>,
    pub label: Passive<Option<String>>,
}

pub const CODE: ColumnRef = ColumnRef {
    name: "code",
    table: "badge",
};
pub const LABEL: ColumnRef = ColumnRef {
    name: "label",
    table: "badge",
};

static COLUMNS: [ColumnDef; 2] = [
    ColumnDef {
        column_ref: CODE,
        value: Value::Text(None),
        nullable: false,
        primary_key: true,
        auto_increment: false,
    },
    ColumnDef {
        column_ref: LABEL,
        value: Value::Text(None),
        nullable: true,
        primary_key: false,
        auto_increment: false,
    },
];

impl Record for Badge {
    fn table_name() -> &'static str {
        "badge"
    }
    fn columns() -> &'static [ColumnDef] {
        &COLUMNS
    }
    fn value_of(&self, column: &ColumnDef) -> Passive<Value> {
        match column.name() {
            "code" => self.code.to_value(),
            "label" => self.label.to_value(),
            _ => Passive::NotSet,
        }
    }
    fn set_value(&mut self, column: &ColumnDef, value: Value) -> Result<()> {
        match column.name() {
            "code" => self.code = AsValue::try_from_value(value)?,
            "label" => self.label = AsValue::try_from_value(value)?,
            _ => {
                return Err(Error::MalformedDescriptor {
                    table: Self::table_name().into(),
                    column: column.name().into(),
                });
            }
        }
        Ok(())
    }
}
