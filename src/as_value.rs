use crate::{Error, Passive, Result, Value};
use atoi::FromRadix10Signed;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use std::{any, borrow::Cow, str::FromStr};
use time::{Date, PrimitiveDateTime, Time, macros::format_description};
use uuid::Uuid;

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// representation that backs statement parameters and row decoding.
///
/// `try_from_value` accepts the canonical variant for the type and the
/// coercions the engine itself performs (numeric widening with range checks,
/// text parsed into numbers). Anything else is a
/// [`TypeMismatch`](Error::TypeMismatch) naming both sides.
pub trait AsValue {
    /// Typed null for this type. Used for declared column kinds and when
    /// binding an absent optional datum.
    fn as_empty_value() -> Value;
    /// Convert into the owned engine representation.
    fn as_value(self) -> Value;
    /// Attempt to convert an engine value back into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

fn mismatch<T>(value: &Value) -> Error {
    Error::TypeMismatch {
        value: format!("{:?}", value),
        target: any::type_name::<T>(),
    }
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(Some(value.into()))
    }
}

impl AsValue for i64 {
    fn as_empty_value() -> Value {
        Value::Integer(None)
    }
    fn as_value(self) -> Value {
        Value::Integer(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(Some(v)) => Ok(v),
            Value::Float(Some(v))
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 =>
            {
                Ok(v as i64)
            }
            Value::Text(Some(ref v)) => {
                let (parsed, used) = i64::from_radix_10_signed(v.as_bytes());
                if used > 0 && used == v.len() {
                    Ok(parsed)
                } else {
                    Err(mismatch::<i64>(&value))
                }
            }
            _ => Err(mismatch::<i64>(&value)),
        }
    }
}

macro_rules! impl_as_value_int {
    ($source:ty) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                Value::Integer(None)
            }
            fn as_value(self) -> Value {
                Value::Integer(Some(self as i64))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                let Ok(v) = i64::try_from_value(value.clone()) else {
                    return Err(mismatch::<$source>(&value));
                };
                <$source>::try_from(v).map_err(|_| mismatch::<$source>(&value))
            }
        }
    };
}
impl_as_value_int!(i8);
impl_as_value_int!(i16);
impl_as_value_int!(i32);
impl_as_value_int!(u8);
impl_as_value_int!(u16);
impl_as_value_int!(u32);

impl AsValue for bool {
    fn as_empty_value() -> Value {
        Value::Integer(None)
    }
    fn as_value(self) -> Value {
        Value::Integer(Some(self as i64))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let Ok(v) = i64::try_from_value(value.clone()) else {
            return Err(mismatch::<bool>(&value));
        };
        Ok(v != 0)
    }
}

impl AsValue for f64 {
    fn as_empty_value() -> Value {
        Value::Float(None)
    }
    fn as_value(self) -> Value {
        Value::Float(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float(Some(v)) => Ok(v),
            Value::Integer(Some(v)) => Ok(v as f64),
            Value::Text(Some(ref v)) => {
                fast_float::parse(v).map_err(|_| mismatch::<f64>(&value))
            }
            _ => Err(mismatch::<f64>(&value)),
        }
    }
}

impl AsValue for f32 {
    fn as_empty_value() -> Value {
        Value::Float(None)
    }
    fn as_value(self) -> Value {
        Value::Float(Some(self as f64))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let Ok(v) = f64::try_from_value(value.clone()) else {
            return Err(mismatch::<f32>(&value));
        };
        Ok(v as f32)
    }
}

impl AsValue for String {
    fn as_empty_value() -> Value {
        Value::Text(None)
    }
    fn as_value(self) -> Value {
        Value::Text(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(Some(v)) => Ok(v),
            Value::Integer(Some(v)) => Ok(v.to_string()),
            Value::Float(Some(v)) => Ok(v.to_string()),
            _ => Err(mismatch::<String>(&value)),
        }
    }
}

impl AsValue for Cow<'static, str> {
    fn as_empty_value() -> Value {
        Value::Text(None)
    }
    fn as_value(self) -> Value {
        Value::Text(Some(self.into_owned()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(Cow::Owned(String::try_from_value(value)?))
    }
}

impl AsValue for Box<[u8]> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(v)) => Ok(v),
            Value::Text(Some(v)) => Ok(v.into_bytes().into()),
            _ => Err(mismatch::<Box<[u8]>>(&value)),
        }
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(Box::<[u8]>::try_from_value(value)?.into_vec())
    }
}

impl AsValue for Date {
    fn as_empty_value() -> Value {
        Value::Text(None)
    }
    fn as_value(self) -> Value {
        Value::Text(Some(format!(
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month() as u8,
            self.day()
        )))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let Value::Text(Some(ref v)) = value else {
            return Err(mismatch::<Date>(&value));
        };
        Date::parse(v, format_description!("[year]-[month]-[day]"))
            .map_err(|_| mismatch::<Date>(&value))
    }
}

fn format_time(value: &Time) -> String {
    let mut subsecond = value.nanosecond();
    let mut width = 9;
    while width > 1 && subsecond % 10 == 0 {
        subsecond /= 10;
        width -= 1;
    }
    format!(
        "{:02}:{:02}:{:02}.{:0width$}",
        value.hour(),
        value.minute(),
        value.second(),
        subsecond
    )
}

impl AsValue for Time {
    fn as_empty_value() -> Value {
        Value::Text(None)
    }
    fn as_value(self) -> Value {
        Value::Text(Some(format_time(&self)))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let Value::Text(Some(ref v)) = value else {
            return Err(mismatch::<Time>(&value));
        };
        let formats = [
            format_description!("[hour]:[minute]:[second].[subsecond]"),
            format_description!("[hour]:[minute]:[second]"),
        ];
        for format in formats {
            if let Ok(parsed) = Time::parse(v, format) {
                return Ok(parsed);
            }
        }
        Err(mismatch::<Time>(&value))
    }
}

impl AsValue for PrimitiveDateTime {
    fn as_empty_value() -> Value {
        Value::Text(None)
    }
    fn as_value(self) -> Value {
        let date = self.date();
        Value::Text(Some(format!(
            "{:04}-{:02}-{:02}T{}",
            date.year(),
            date.month() as u8,
            date.day(),
            format_time(&self.time())
        )))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let Value::Text(Some(ref v)) = value else {
            return Err(mismatch::<PrimitiveDateTime>(&value));
        };
        let formats = [
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        ];
        for format in formats {
            if let Ok(parsed) = PrimitiveDateTime::parse(v, format) {
                return Ok(parsed);
            }
        }
        Err(mismatch::<PrimitiveDateTime>(&value))
    }
}

impl AsValue for Uuid {
    fn as_empty_value() -> Value {
        Value::Text(None)
    }
    fn as_value(self) -> Value {
        Value::Text(Some(self.to_string()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(Some(ref v)) => Uuid::parse_str(v).map_err(|_| mismatch::<Uuid>(&value)),
            Value::Blob(Some(ref v)) => Uuid::from_slice(v).map_err(|_| mismatch::<Uuid>(&value)),
            _ => Err(mismatch::<Uuid>(&value)),
        }
    }
}

impl AsValue for Decimal {
    fn as_empty_value() -> Value {
        Value::Text(None)
    }
    fn as_value(self) -> Value {
        Value::Text(Some(self.to_string()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(Some(ref v)) => {
                Decimal::from_str(v).map_err(|_| mismatch::<Decimal>(&value))
            }
            Value::Integer(Some(v)) => Decimal::from_i64(v).ok_or_else(|| mismatch::<Decimal>(&value)),
            Value::Float(Some(v)) => Decimal::from_f64(v).ok_or_else(|| mismatch::<Decimal>(&value)),
            _ => Err(mismatch::<Decimal>(&value)),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::try_from_value(value)?))
        }
    }
}

impl<T: AsValue> AsValue for Box<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        (*self).as_value()
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(Box::new(T::try_from_value(value)?))
    }
}

impl<T: AsValue> AsValue for Passive<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Passive::Set(v) => v.as_value(),
            Passive::NotSet => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(Passive::Set(T::try_from_value(value)?))
    }
}
