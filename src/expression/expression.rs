use crate::{
    BinaryOp, BinaryOpType, OpPrecedence, UnaryOp, UnaryOpType, Value,
    writer::{Context, SqlWriter},
};
use std::fmt::Debug;

/// A renderable predicate node. Rendering appends to the statement text and
/// binds every literal through the context as a positional parameter.
pub trait Expression: OpPrecedence + Send + Sync + Debug {
    /// Serialize the expression into the output string using the sql writer.
    fn write_query(&self, writer: &dyn SqlWriter, context: &mut Context, out: &mut String);
}

impl<T: Expression> Expression for &T {
    fn write_query(&self, writer: &dyn SqlWriter, context: &mut Context, out: &mut String) {
        (*self).write_query(writer, context, out);
    }
}

impl Expression for &dyn Expression {
    fn write_query(&self, writer: &dyn SqlWriter, context: &mut Context, out: &mut String) {
        (*self).write_query(writer, context, out);
    }
}

impl Expression for Value {
    fn write_query(&self, writer: &dyn SqlWriter, context: &mut Context, out: &mut String) {
        writer.write_value(context, out, self);
    }
}

impl<'a, T: Expression> From<&'a T> for &'a dyn Expression {
    fn from(value: &'a T) -> Self {
        value as &'a dyn Expression
    }
}

/// Logical combinators available on every expression.
pub trait ExpressionExt: Expression + Sized {
    fn and<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        BinaryOp {
            op: BinaryOpType::And,
            lhs: self,
            rhs,
        }
    }
    fn or<R: Expression>(self, rhs: R) -> BinaryOp<Self, R> {
        BinaryOp {
            op: BinaryOpType::Or,
            lhs: self,
            rhs,
        }
    }
    fn not(self) -> UnaryOp<Self> {
        UnaryOp {
            op: UnaryOpType::Not,
            v: self,
        }
    }
}

impl<T: Expression + Sized> ExpressionExt for T {}
