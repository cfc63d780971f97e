use crate::{
    ColumnDef, ColumnRef, Expression, Ordered, Row, Statement, TableRef, Value,
    writer::{Context, SqlWriter},
};

/// The optional filter / ordering / windowing bundle shared by select,
/// update and delete operations.
///
/// `offset` without any `order` leaves the row order engine defined; supply
/// an ordering whenever offset arithmetic must be deterministic.
#[derive(Default, Debug, Clone, Copy)]
pub struct Clauses<'a> {
    pub filter: Option<&'a dyn Expression>,
    pub order: &'a [Ordered<ColumnRef>],
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl<'a> Clauses<'a> {
    pub fn filter(mut self, filter: &'a dyn Expression) -> Self {
        self.filter = Some(filter);
        self
    }
    pub fn order(mut self, order: &'a [Ordered<ColumnRef>]) -> Self {
        self.order = order;
        self
    }
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Declarative description of one CRUD request, carrying its resolved column
/// definitions. Rendering lowers the descriptor into a parameterized
/// [`Statement`] through a [`SqlWriter`].
#[derive(Debug)]
pub enum Operation<'a> {
    Insert {
        table: &'a TableRef,
        columns: Vec<&'static ColumnDef>,
        row: Row,
        /// Overwrite the colliding row instead of rejecting the insert.
        replace: bool,
    },
    Select {
        table: &'a TableRef,
        columns: Vec<&'static ColumnDef>,
        clauses: Clauses<'a>,
    },
    Update {
        table: &'a TableRef,
        assignments: Vec<(&'static ColumnDef, Value)>,
        clauses: Clauses<'a>,
    },
    Delete {
        table: &'a TableRef,
        clauses: Clauses<'a>,
    },
}

impl Operation<'_> {
    /// Lower the descriptor into statement text plus its ordered parameters.
    pub fn render(&self, writer: &dyn SqlWriter) -> Statement {
        let mut sql = String::with_capacity(256);
        let mut context = Context::new();
        match self {
            Operation::Insert {
                table,
                columns,
                row,
                replace,
            } => writer.write_insert(&mut context, &mut sql, table, columns, row, *replace),
            Operation::Select {
                table,
                columns,
                clauses,
            } => writer.write_select(&mut context, &mut sql, table, columns, clauses),
            Operation::Update {
                table,
                assignments,
                clauses,
            } => writer.write_update(&mut context, &mut sql, table, assignments, clauses),
            Operation::Delete { table, clauses } => {
                writer.write_delete(&mut context, &mut sql, table, clauses)
            }
        }
        Statement {
            sql,
            params: context.params,
        }
    }
}
