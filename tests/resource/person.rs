#![allow(dead_code)]

use silo::{AsValue, ColumnDef, ColumnRef, Error, Passive, Record, Result, Value};

/// Row with an engine generated integer key and two nullable payload
/// columns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub id: Passive<i64>,
    pub name: Passive<Option<String>>,
    pub age: Passive<Option<i64>>,
}

pub const ID: ColumnRef = ColumnRef {
    name: "id",
    table: "person",
};
pub const NAME: ColumnRef = ColumnRef {
    name: "name",
    table: "person",
};
pub const AGE: ColumnRef = ColumnRef {
    name: "age",
    table: "person",
};

static COLUMNS: [ColumnDef; 3] = [
    ColumnDef {
        column_ref: ID,
        value: Value::Integer(None),
        nullable: false,
        primary_key: true,
        auto_increment: true,
    },
    ColumnDef {
        column_ref: NAME,
        value: Value::Text(None),
        nullable: true,
        primary_key: false,
        auto_increment: false,
    },
    ColumnDef {
        column_ref: AGE,
        value: Value::Integer(None),
        nullable: true,
        primary_key: false,
        auto_increment: false,
    },
];

impl Record for Person {
    fn table_name() -> &'static str {
        "person"
    }
    fn columns() -> &'static [ColumnDef] {
        &COLUMNS
    }
    fn value_of(&self, column: &ColumnDef) -> Passive<Value> {
        match column.name() {
            "id" => self.id.to_value(),
            "name" => self.name.to_value(),
            "age" => self.age.to_value(),
            _ => Passive::NotSet,
        }
    }
    fn set_value(&mut self, column: &ColumnDef, value: Value) -> Result<()> {
        match column.name() {
            "id" => self.id = AsValue::try_from_value(value)?,
            "name" => self.name = AsValue::try_from_value(value)?,
            "age" => self.age = AsValue::try_from_value(value)?,
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
