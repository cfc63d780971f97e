use crate::{AsValue, Value};

/// Three state field wrapper. A property can hold a value, hold an explicit
/// null (through an inner `Option`), or be left out entirely: `NotSet` means
/// "not fetched" on reads and "not provided" on writes, which is distinct
/// from storing a null.
#[derive(Debug, Default)]
pub enum Passive<T> {
    Set(T),
    #[default]
    NotSet,
}

impl<T> Passive<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(..))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Set(v) => Some(v),
            Self::NotSet => None,
        }
    }
}

impl<T: AsValue + Clone> Passive<T> {
    /// Engine representation of the field, preserving the unset state.
    pub fn to_value(&self) -> Passive<Value> {
        match self {
            Self::Set(v) => Passive::Set(v.clone().as_value()),
            Self::NotSet => Passive::NotSet,
        }
    }
}

impl<T: PartialEq> PartialEq for Passive<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Set(lhs), Self::Set(rhs)) => lhs == rhs,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl<T> Clone for Passive<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Set(v) => Self::Set(v.clone()),
            Self::NotSet => Self::NotSet,
        }
    }
}

impl<T> From<T> for Passive<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}
