use crate::{
    BinaryOp, BinaryOpType, Clauses, ColumnDef, ColumnRef, Expression, Operand, Order, Ordered,
    Row, TableRef, UnaryOp, UnaryOpType, Value, possibly_parenthesized, separated_by,
    writer::Context,
};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Renders operations into statement text. Every datum goes through
/// [`write_value`](SqlWriter::write_value) and becomes a positional
/// parameter; the text itself only ever contains identifiers, keywords and
/// placeholders. Engine dialects override the methods they disagree with.
pub trait SqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter;

    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
    }

    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', r#""""#);
        out.push('"');
    }

    fn write_table_ref(&self, out: &mut String, value: &TableRef) {
        self.write_identifier_quoted(out, &value.name);
    }

    fn write_column_ref(&self, out: &mut String, value: &ColumnRef) {
        self.write_identifier_quoted(out, value.name);
    }

    /// Emit a placeholder and hand the datum to the context.
    fn write_value(&self, context: &mut Context, out: &mut String, value: &Value) {
        out.push('?');
        context.push_param(value.clone());
    }

    fn write_null(&self, out: &mut String) {
        out.push_str("NULL");
    }

    fn expression_unary_op_precedence(&self, value: &UnaryOpType) -> i32 {
        match value {
            UnaryOpType::Not => 250,
        }
    }

    fn expression_binary_op_precedence(&self, value: &BinaryOpType) -> i32 {
        match value {
            BinaryOpType::Or => 100,
            BinaryOpType::And => 200,
            BinaryOpType::Equal => 300,
            BinaryOpType::NotEqual => 300,
            BinaryOpType::Less => 300,
            BinaryOpType::Greater => 300,
            BinaryOpType::LessEqual => 300,
            BinaryOpType::GreaterEqual => 300,
        }
    }

    fn write_expression_operand(&self, context: &mut Context, out: &mut String, value: &Operand) {
        match value {
            Operand::Column(v) => self.write_column_ref(out, v),
            Operand::Variable(v) => self.write_value(context, out, v),
            Operand::Null => self.write_null(out),
            Operand::Asterisk => out.push('*'),
        }
    }

    fn write_expression_unary_op(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &UnaryOp<&dyn Expression>,
    ) {
        match value.op {
            UnaryOpType::Not => out.push_str("NOT "),
        }
        possibly_parenthesized!(
            out,
            value.v.precedence(self.as_dyn()) <= self.expression_unary_op_precedence(&value.op),
            value.v.write_query(self.as_dyn(), context, out)
        );
    }

    fn write_expression_binary_op(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &BinaryOp<&dyn Expression, &dyn Expression>,
    ) {
        let infix = match value.op {
            BinaryOpType::Equal => " = ",
            BinaryOpType::NotEqual => " != ",
            BinaryOpType::Less => " < ",
            BinaryOpType::LessEqual => " <= ",
            BinaryOpType::Greater => " > ",
            BinaryOpType::GreaterEqual => " >= ",
            BinaryOpType::And => " AND ",
            BinaryOpType::Or => " OR ",
        };
        let precedence = self.expression_binary_op_precedence(&value.op);
        possibly_parenthesized!(
            out,
            value.lhs.precedence(self.as_dyn()) < precedence,
            value.lhs.write_query(self.as_dyn(), context, out)
        );
        out.push_str(infix);
        possibly_parenthesized!(
            out,
            value.rhs.precedence(self.as_dyn()) <= precedence,
            value.rhs.write_query(self.as_dyn(), context, out)
        );
    }

    fn write_where(&self, context: &mut Context, out: &mut String, filter: Option<&dyn Expression>) {
        if let Some(filter) = filter {
            out.push_str("\nWHERE ");
            filter.write_query(self.as_dyn(), context, out);
        }
    }

    fn write_order_by(&self, out: &mut String, order: &[Ordered<ColumnRef>]) {
        if order.is_empty() {
            return;
        }
        out.push_str("\nORDER BY ");
        separated_by(
            out,
            order,
            |out, v| {
                self.write_column_ref(out, &v.expression);
                out.push_str(match v.order {
                    Order::Asc => " ASC",
                    Order::Desc => " DESC",
                });
            },
            ", ",
        );
    }

    /// Limit and offset toggle independently. Offset with no limit renders
    /// the engine's "no limit" sentinel so every remaining row flows.
    fn write_limit_offset(&self, out: &mut String, limit: Option<u32>, offset: Option<u32>) {
        if limit.is_none() && offset.is_none() {
            return;
        }
        out.push_str("\nLIMIT ");
        match limit {
            Some(limit) => write_integer!(out, limit),
            None => out.push_str("-1"),
        }
        if let Some(offset) = offset {
            out.push_str(" OFFSET ");
            write_integer!(out, offset);
        }
    }

    fn write_clauses(&self, context: &mut Context, out: &mut String, clauses: &Clauses) {
        self.write_where(context, out, clauses.filter);
        self.write_order_by(out, clauses.order);
        self.write_limit_offset(out, clauses.limit, clauses.offset);
    }

    fn write_select(
        &self,
        context: &mut Context,
        out: &mut String,
        table: &TableRef,
        columns: &[&'static ColumnDef],
        clauses: &Clauses,
    ) {
        out.push_str("SELECT ");
        separated_by(
            out,
            columns,
            |out, v| self.write_column_ref(out, &v.column_ref),
            ", ",
        );
        out.push_str("\nFROM ");
        self.write_table_ref(out, table);
        self.write_clauses(context, out, clauses);
        out.push(';');
    }

    /// `replace` switches the conflict policy from reject to overwrite.
    fn write_insert_command(&self, out: &mut String, replace: bool) {
        out.push_str(if replace {
            "INSERT OR REPLACE INTO "
        } else {
            "INSERT INTO "
        });
    }

    fn write_insert(
        &self,
        context: &mut Context,
        out: &mut String,
        table: &TableRef,
        columns: &[&'static ColumnDef],
        row: &Row,
        replace: bool,
    ) {
        self.write_insert_command(out, replace);
        self.write_table_ref(out, table);
        out.push_str(" (");
        separated_by(
            out,
            columns,
            |out, v| self.write_column_ref(out, &v.column_ref),
            ", ",
        );
        out.push_str(") VALUES\n(");
        separated_by(
            out,
            row.iter(),
            |out, v| self.write_value(context, out, v),
            ", ",
        );
        out.push_str(");");
    }

    fn write_update(
        &self,
        context: &mut Context,
        out: &mut String,
        table: &TableRef,
        assignments: &[(&'static ColumnDef, Value)],
        clauses: &Clauses,
    ) {
        out.push_str("UPDATE ");
        self.write_table_ref(out, table);
        out.push_str("\nSET ");
        separated_by(
            out,
            assignments,
            |out, (column, value)| {
                self.write_column_ref(out, &column.column_ref);
                out.push_str(" = ");
                self.write_value(context, out, value);
            },
            ", ",
        );
        self.write_clauses(context, out, clauses);
        out.push(';');
    }

    fn write_delete(
        &self,
        context: &mut Context,
        out: &mut String,
        table: &TableRef,
        clauses: &Clauses,
    ) {
        out.push_str("DELETE FROM ");
        self.write_table_ref(out, table);
        self.write_clauses(context, out, clauses);
        out.push(';');
    }
}

pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
}
