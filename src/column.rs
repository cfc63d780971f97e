use crate::{
    BinaryOp, BinaryOpType, Expression, OpPrecedence, Operand, Order, Ordered, TableRef,
    Value,
    writer::{Context, SqlWriter},
};

/// Typed handle naming one column of one record type. Created once per model
/// inside its [`ColumnDef`] and reused across all operations.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: &'static str,
    pub table: &'static str,
}

impl ColumnRef {
    pub fn table_ref(&self) -> TableRef {
        TableRef::new(self.table)
    }

    fn compare(self, op: BinaryOpType, value: impl Into<Value>) -> BinaryOp<ColumnRef, Operand> {
        BinaryOp {
            op,
            lhs: self,
            rhs: Operand::Variable(value.into()),
        }
    }
    pub fn eq(self, value: impl Into<Value>) -> BinaryOp<ColumnRef, Operand> {
        self.compare(BinaryOpType::Equal, value)
    }
    pub fn ne(self, value: impl Into<Value>) -> BinaryOp<ColumnRef, Operand> {
        self.compare(BinaryOpType::NotEqual, value)
    }
    pub fn lt(self, value: impl Into<Value>) -> BinaryOp<ColumnRef, Operand> {
        self.compare(BinaryOpType::Less, value)
    }
    pub fn le(self, value: impl Into<Value>) -> BinaryOp<ColumnRef, Operand> {
        self.compare(BinaryOpType::LessEqual, value)
    }
    pub fn gt(self, value: impl Into<Value>) -> BinaryOp<ColumnRef, Operand> {
        self.compare(BinaryOpType::Greater, value)
    }
    pub fn ge(self, value: impl Into<Value>) -> BinaryOp<ColumnRef, Operand> {
        self.compare(BinaryOpType::GreaterEqual, value)
    }

    pub fn asc(self) -> Ordered<ColumnRef> {
        Ordered {
            order: Order::Asc,
            expression: self,
        }
    }
    pub fn desc(self) -> Ordered<ColumnRef> {
        Ordered {
            order: Order::Desc,
            expression: self,
        }
    }
}

/// Declarative specification of a table column.
#[derive(Default, Debug, Clone)]
pub struct ColumnDef {
    /// Column identity.
    pub column_ref: ColumnRef,
    /// Declared kind, as a typed null marker.
    pub value: Value,
    /// Nullability flag.
    pub nullable: bool,
    /// Single column primary key.
    pub primary_key: bool,
    /// The engine assigns the key when the column is left out of an insert.
    pub auto_increment: bool,
}

impl ColumnDef {
    pub fn name(&self) -> &'static str {
        self.column_ref.name
    }
    pub fn table(&self) -> &'static str {
        self.column_ref.table
    }
}

impl<'a> From<&'a ColumnDef> for &'a ColumnRef {
    fn from(value: &'a ColumnDef) -> Self {
        &value.column_ref
    }
}

impl OpPrecedence for ColumnRef {
    fn precedence(&self, _writer: &dyn SqlWriter) -> i32 {
        1_000_000
    }
}

impl Expression for ColumnRef {
    fn write_query(&self, writer: &dyn SqlWriter, _context: &mut Context, out: &mut String) {
        writer.write_column_ref(out, self);
    }
}

impl OpPrecedence for ColumnDef {
    fn precedence(&self, _writer: &dyn SqlWriter) -> i32 {
        1_000_000
    }
}

impl Expression for ColumnDef {
    fn write_query(&self, writer: &dyn SqlWriter, _context: &mut Context, out: &mut String) {
        writer.write_column_ref(out, &self.column_ref);
    }
}
