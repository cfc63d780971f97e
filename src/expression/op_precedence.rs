use crate::{Expression, Value, writer::SqlWriter};

/// Numeric precedence for expressions, allowing sql writers to insert
/// parentheses only where nesting requires them.
pub trait OpPrecedence {
    /// Lower numbers bind weaker; writers parenthesize when a child's
    /// precedence does not exceed the parent operator's.
    fn precedence(&self, writer: &dyn SqlWriter) -> i32;
}

impl<T: OpPrecedence> OpPrecedence for &T {
    fn precedence(&self, writer: &dyn SqlWriter) -> i32 {
        (*self).precedence(writer)
    }
}

impl OpPrecedence for &dyn Expression {
    fn precedence(&self, writer: &dyn SqlWriter) -> i32 {
        (*self).precedence(writer)
    }
}

impl OpPrecedence for Value {
    fn precedence(&self, _writer: &dyn SqlWriter) -> i32 {
        1_000_000_000
    }
}
