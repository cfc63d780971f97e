use crate::Value;

/// Accumulates the positional parameters produced while rendering one
/// statement. Binding order matches placeholder order in the text.
#[derive(Debug, Default)]
pub struct Context {
    pub params: Vec<Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the next positional parameter.
    pub fn push_param(&mut self, value: Value) {
        self.params.push(value);
    }
}
