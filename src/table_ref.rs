use std::borrow::Cow;

/// Names the table an operation targets. Record types declare a default
/// table; a [`Table`](crate::Table) handle may bind the same record type to
/// any other name.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: Cow<'static, str>,
}

impl TableRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&'static str> for TableRef {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TableRef {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
