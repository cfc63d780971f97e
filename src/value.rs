/// An engine level scalar. A variant holding `None` is a typed null: it
/// carries the declared kind of a column without holding a datum, which is
/// how declared kinds and null bindings keep their type information.
#[derive(Default, Debug, Clone)]
pub enum Value {
    #[default]
    Null,
    Integer(Option<i64>),
    Float(Option<f64>),
    Text(Option<String>),
    Blob(Option<Box<[u8]>>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Float(l), Self::Float(r)) => l == r,
            (Self::Text(l), Self::Text(r)) => l == r,
            (Self::Blob(l), Self::Blob(r)) => l == r,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Value {
    pub fn same_type(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// True for `Null` and for every typed null.
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Integer(None)
                | Value::Float(None)
                | Value::Text(None)
                | Value::Blob(None)
        )
    }
}
