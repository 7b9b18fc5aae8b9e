use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use url::Url;
use uuid::Uuid;

/// The scalar kinds which may be mapped from the Cli.
///
/// Each kind has precisely one string conversion, selected in [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// `bool`: `1`/`0`, `on`/`off`, `true`/`false` (case-insensitive).
    Bool,
    /// `char`: precisely one character.
    Char,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `rust_decimal::Decimal`
    Decimal,
    /// `String`: taken verbatim.
    String,
    /// `uuid::Uuid`
    Guid,
    /// `chrono::TimeDelta`: `[-][d.]hh:mm[:ss[.fffffff]]` or a whole number of days.
    TimeSpan,
    /// `chrono::NaiveDateTime`: any of the [`crate::Culture`] date-time or date formats.
    DateTime,
    /// `url::Url`: an absolute uri.
    Uri,
    /// An enumeration, described by its `(name, ordinal)` variants.
    Enum(&'static [(&'static str, i64)]),
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Char => "char",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::Isize => "isize",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::Usize => "usize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Decimal => "decimal",
            ScalarKind::String => "string",
            ScalarKind::Guid => "guid",
            ScalarKind::TimeSpan => "timespan",
            ScalarKind::DateTime => "datetime",
            ScalarKind::Uri => "uri",
            ScalarKind::Enum(_) => "enum",
        };
        write!(f, "{name}")
    }
}

/// The declared type of an option: a scalar, optionally wrapped as nullable or as a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A plain scalar `T`.
    Scalar(ScalarKind),
    /// `Option<T>`
    Nullable(ScalarKind),
    /// `Vec<T>`
    List(ScalarKind),
}

impl TypeKind {
    /// The underlying scalar kind, ignoring the wrapping.
    pub fn base(&self) -> ScalarKind {
        match self {
            TypeKind::Scalar(kind) | TypeKind::Nullable(kind) | TypeKind::List(kind) => *kind,
        }
    }

    /// Whether this type collects multiple values.
    pub fn is_list(&self) -> bool {
        matches!(self, TypeKind::List(_))
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeKind::Scalar(kind) => write!(f, "{kind}"),
            TypeKind::Nullable(kind) => write!(f, "{kind}?"),
            TypeKind::List(kind) => write!(f, "[{kind}]"),
        }
    }
}

/// A converted value, ready to be bound onto a model.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The "no value" state of a nullable type.
    Null,
    #[allow(missing_docs)]
    Bool(bool),
    #[allow(missing_docs)]
    Char(char),
    #[allow(missing_docs)]
    I8(i8),
    #[allow(missing_docs)]
    I16(i16),
    #[allow(missing_docs)]
    I32(i32),
    #[allow(missing_docs)]
    I64(i64),
    #[allow(missing_docs)]
    Isize(isize),
    #[allow(missing_docs)]
    U8(u8),
    #[allow(missing_docs)]
    U16(u16),
    #[allow(missing_docs)]
    U32(u32),
    #[allow(missing_docs)]
    U64(u64),
    #[allow(missing_docs)]
    Usize(usize),
    #[allow(missing_docs)]
    F32(f32),
    #[allow(missing_docs)]
    F64(f64),
    #[allow(missing_docs)]
    Decimal(Decimal),
    #[allow(missing_docs)]
    String(String),
    #[allow(missing_docs)]
    Guid(Uuid),
    #[allow(missing_docs)]
    TimeSpan(TimeDelta),
    #[allow(missing_docs)]
    DateTime(NaiveDateTime),
    #[allow(missing_docs)]
    Uri(Url),
    /// An enumeration variant.
    Enum {
        /// The variant's ordinal (discriminant).
        ordinal: i64,
        /// The variant's name.
        name: &'static str,
    },
    /// The values of a list type, in order.
    List(Vec<Value>),
}
