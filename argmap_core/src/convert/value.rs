use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use url::Url;
use uuid::Uuid;

use crate::model::{ScalarKind, TypeKind, Value};

/// Behaviour for a scalar type `T` that may be mapped from a single Cli value.
///
/// Implemented for the primitive and semantic types listed in [`ScalarKind`].
/// Enumerations implement it via `#[derive(ArgEnum)]`, or by hand:
///
/// ```
/// # use argmap_core as argmap;
/// use argmap::{OptionValue, ScalarKind, ScalarValue, TypeKind, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Level {
///     Low = 1,
///     High = 2,
/// }
///
/// impl ScalarValue for Level {
///     fn kind() -> ScalarKind {
///         ScalarKind::Enum(&[("Low", 1), ("High", 2)])
///     }
///
///     fn from_value(value: Value) -> Option<Self> {
///         match value {
///             Value::Enum { ordinal: 1, .. } => Some(Level::Low),
///             Value::Enum { ordinal: 2, .. } => Some(Level::High),
///             _ => None,
///         }
///     }
///
///     fn into_value(self) -> Value {
///         match self {
///             Level::Low => Value::Enum { ordinal: 1, name: "Low" },
///             Level::High => Value::Enum { ordinal: 2, name: "High" },
///         }
///     }
///
///     fn zero() -> Option<Self> {
///         None
///     }
/// }
///
/// impl OptionValue for Level {
///     fn type_kind() -> TypeKind {
///         TypeKind::Scalar(<Level as ScalarValue>::kind())
///     }
///
///     fn from_value(value: Value) -> Option<Self> {
///         <Level as ScalarValue>::from_value(value)
///     }
///
///     fn into_value(self) -> Value {
///         <Level as ScalarValue>::into_value(self)
///     }
///
///     fn zero() -> Option<Self> {
///         <Level as ScalarValue>::zero()
///     }
/// }
/// ```
pub trait ScalarValue: Sized + Send + Sync + 'static {
    /// The scalar kind used to convert Cli values into this type.
    fn kind() -> ScalarKind;

    /// Extract the typed value (`None` when `value` is of another kind).
    fn from_value(value: Value) -> Option<Self>;

    /// Wrap the typed value.
    fn into_value(self) -> Value;

    /// The zero value, assigned to an option that receives neither a value nor a default.
    /// `None` when the type has no natural zero.
    fn zero() -> Option<Self>;
}

/// Behaviour for any type an option may be declared as: `T`, `Option<T>`, or `Vec<T>`.
pub trait OptionValue: Sized + Send + Sync + 'static {
    /// The declared type, including its wrapping.
    fn type_kind() -> TypeKind;

    /// Extract the typed value (`None` when `value` is of another kind).
    fn from_value(value: Value) -> Option<Self>;

    /// Wrap the typed value.
    fn into_value(self) -> Value;

    /// The zero value, see [`ScalarValue::zero`].
    fn zero() -> Option<Self>;
}

macro_rules! scalar_value {
    ($t:ty, $variant:ident, $zero:expr) => {
        impl ScalarValue for $t {
            fn kind() -> ScalarKind {
                ScalarKind::$variant
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn zero() -> Option<Self> {
                $zero
            }
        }

        impl OptionValue for $t {
            fn type_kind() -> TypeKind {
                TypeKind::Scalar(<$t as ScalarValue>::kind())
            }

            fn from_value(value: Value) -> Option<Self> {
                <$t as ScalarValue>::from_value(value)
            }

            fn into_value(self) -> Value {
                <$t as ScalarValue>::into_value(self)
            }

            fn zero() -> Option<Self> {
                <$t as ScalarValue>::zero()
            }
        }
    };
}

scalar_value!(bool, Bool, Some(false));
scalar_value!(char, Char, Some('\0'));
scalar_value!(i8, I8, Some(0));
scalar_value!(i16, I16, Some(0));
scalar_value!(i32, I32, Some(0));
scalar_value!(i64, I64, Some(0));
scalar_value!(isize, Isize, Some(0));
scalar_value!(u8, U8, Some(0));
scalar_value!(u16, U16, Some(0));
scalar_value!(u32, U32, Some(0));
scalar_value!(u64, U64, Some(0));
scalar_value!(usize, Usize, Some(0));
scalar_value!(f32, F32, Some(0.0));
scalar_value!(f64, F64, Some(0.0));
scalar_value!(Decimal, Decimal, Some(Decimal::ZERO));
scalar_value!(String, String, Some(String::default()));
scalar_value!(Uuid, Guid, Some(Uuid::nil()));
scalar_value!(TimeDelta, TimeSpan, Some(TimeDelta::zero()));
scalar_value!(
    NaiveDateTime,
    DateTime,
    NaiveDate::from_ymd_opt(1, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
);
scalar_value!(Url, Uri, None);

impl<T: ScalarValue> OptionValue for Option<T> {
    fn type_kind() -> TypeKind {
        TypeKind::Nullable(T::kind())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            value => T::from_value(value).map(Some),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }

    fn zero() -> Option<Self> {
        Some(None)
    }
}

impl<T: ScalarValue> OptionValue for Vec<T> {
    fn type_kind() -> TypeKind {
        TypeKind::List(T::kind())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(values) => values.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(T::into_value).collect())
    }

    fn zero() -> Option<Self> {
        Some(Vec::default())
    }
}
