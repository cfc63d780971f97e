use crate::{
    ColumnRef, Expression, OpPrecedence, Value,
    writer::{Context, SqlWriter},
};

/// Leaf of an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(ColumnRef),
    /// A literal, always bound as a positional parameter.
    Variable(Value),
    Null,
    Asterisk,
}

impl OpPrecedence for Operand {
    fn precedence(&self, _writer: &dyn SqlWriter) -> i32 {
        1_000_000_000
    }
}

impl Expression for Operand {
    fn write_query(&self, writer: &dyn SqlWriter, context: &mut Context, out: &mut String) {
        writer.write_expression_operand(context, out, self);
    }
}
