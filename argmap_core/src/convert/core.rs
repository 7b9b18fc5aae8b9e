use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::convert::Culture;
use crate::model::{ScalarKind, TypeKind, Value};

/// The reason a raw Cli value could not be converted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The value does not have the expected textual form.
    #[error("cannot convert '{token}' to {kind}.")]
    InvalidFormat {
        #[allow(missing_docs)]
        token: String,
        #[allow(missing_docs)]
        kind: ScalarKind,
    },

    /// The value is well formed, but too large/small for the target.
    #[error("'{token}' is out of range for {kind}.")]
    OutOfRange {
        #[allow(missing_docs)]
        token: String,
        #[allow(missing_docs)]
        kind: ScalarKind,
    },

    /// The value names no variant of the target enumeration.
    #[error("'{token}' is not one of {{{variants}}}.")]
    UnknownVariant {
        #[allow(missing_docs)]
        token: String,
        #[allow(missing_docs)]
        variants: String,
    },

    /// A non-boolean scalar received no value at all.
    #[error("a value is required for {kind}.")]
    MissingValue {
        #[allow(missing_docs)]
        kind: ScalarKind,
    },
}

type Converter = fn(&str, &Culture) -> Result<Value, ConvertError>;

// Enumerations carry their variants, so they are handled outside of the table.
fn scalar_converter(kind: ScalarKind) -> Option<Converter> {
    let converter: Converter = match kind {
        ScalarKind::Bool => convert_bool,
        ScalarKind::Char => convert_char,
        ScalarKind::I8 => |t, _| integer(t, ScalarKind::I8).map(Value::I8),
        ScalarKind::I16 => |t, _| integer(t, ScalarKind::I16).map(Value::I16),
        ScalarKind::I32 => |t, _| integer(t, ScalarKind::I32).map(Value::I32),
        ScalarKind::I64 => |t, _| integer(t, ScalarKind::I64).map(Value::I64),
        ScalarKind::Isize => |t, _| integer(t, ScalarKind::Isize).map(Value::Isize),
        ScalarKind::U8 => |t, _| integer(t, ScalarKind::U8).map(Value::U8),
        ScalarKind::U16 => |t, _| integer(t, ScalarKind::U16).map(Value::U16),
        ScalarKind::U32 => |t, _| integer(t, ScalarKind::U32).map(Value::U32),
        ScalarKind::U64 => |t, _| integer(t, ScalarKind::U64).map(Value::U64),
        ScalarKind::Usize => |t, _| integer(t, ScalarKind::Usize).map(Value::Usize),
        ScalarKind::F32 => |t, c| float(t, c, ScalarKind::F32).map(Value::F32),
        ScalarKind::F64 => |t, c| float(t, c, ScalarKind::F64).map(Value::F64),
        ScalarKind::Decimal => convert_decimal,
        ScalarKind::String => |t, _| Ok(Value::String(t.to_string())),
        ScalarKind::Guid => convert_guid,
        ScalarKind::TimeSpan => convert_time_span,
        ScalarKind::DateTime => convert_date_time,
        ScalarKind::Uri => convert_uri,
        ScalarKind::Enum(_) => return None,
    };
    Some(converter)
}

/// Convert the raw Cli values into a [`Value`] of the type `kind`.
///
/// * Lists convert every value, in order (no values make an empty list).
/// * Nullables produce [`Value::Null`] when there are no values, or the final value is empty.
/// * Scalars convert the final value; a `bool` without any values is `true`.
///
/// ### Example
/// ```
/// # use argmap_core as argmap;
/// use argmap::{convert, Culture, ScalarKind, TypeKind, Value};
///
/// let culture = Culture::invariant();
/// let values = vec!["1".to_string(), "2".to_string()];
///
/// assert_eq!(
///     convert(&values, TypeKind::Scalar(ScalarKind::U8), &culture).unwrap(),
///     Value::U8(2),
/// );
/// assert_eq!(
///     convert(&values, TypeKind::List(ScalarKind::U8), &culture).unwrap(),
///     Value::List(vec![Value::U8(1), Value::U8(2)]),
/// );
/// ```
pub fn convert(
    values: &[String],
    kind: TypeKind,
    culture: &Culture,
) -> Result<Value, ConvertError> {
    match kind {
        TypeKind::List(base) => values
            .iter()
            .map(|value| convert_scalar(value, base, culture))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        TypeKind::Nullable(base) => match values.last() {
            None => Ok(Value::Null),
            Some(value) if value.is_empty() => Ok(Value::Null),
            Some(value) => convert_scalar(value, base, culture),
        },
        TypeKind::Scalar(ScalarKind::Bool) if values.is_empty() => Ok(Value::Bool(true)),
        TypeKind::Scalar(base) => match values.last() {
            Some(value) => convert_scalar(value, base, culture),
            None => Err(ConvertError::MissingValue { kind: base }),
        },
    }
}

/// Convert a single raw Cli value into a scalar [`Value`].
pub fn convert_scalar(
    token: &str,
    kind: ScalarKind,
    culture: &Culture,
) -> Result<Value, ConvertError> {
    match scalar_converter(kind) {
        Some(converter) => converter(token, culture),
        None => match kind {
            ScalarKind::Enum(variants) => convert_enum(token, variants),
            _ => unreachable!("internal error - every non-enum kind has a converter"),
        },
    }
}

/// Whether `kind` can be converted from the Cli.
pub fn is_supported_base_type(kind: &ScalarKind) -> bool {
    match kind {
        ScalarKind::Enum(variants) => !variants.is_empty(),
        kind => scalar_converter(*kind).is_some(),
    }
}

/// Whether the wrapped type `kind` can be converted from the Cli.
pub fn is_supported_type(kind: &TypeKind) -> bool {
    is_supported_base_type(&kind.base())
}

/// Render `value` in the textual form accepted by [`convert`].
///
/// ### Example
/// ```
/// # use argmap_core as argmap;
/// use argmap::{format_value, Culture, Value};
///
/// let culture = Culture::new("de-DE").decimal_separator(',').group_separator('.');
/// assert_eq!(format_value(&Value::F64(1.5), &culture), "1,5");
/// ```
pub fn format_value(value: &Value, culture: &Culture) -> String {
    match value {
        Value::Null => String::default(),
        Value::Bool(v) => v.to_string(),
        Value::Char(v) => v.to_string(),
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::Isize(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::Usize(v) => v.to_string(),
        Value::F32(v) => culture.localize_number(&v.to_string()),
        Value::F64(v) => culture.localize_number(&v.to_string()),
        Value::Decimal(v) => culture.localize_number(&v.to_string()),
        Value::String(v) => v.clone(),
        Value::Guid(v) => v.hyphenated().to_string(),
        Value::TimeSpan(v) => format_time_span(v),
        Value::DateTime(v) => match culture.get_date_time_formats().first() {
            Some(format) => v.format(format).to_string(),
            None => v.to_string(),
        },
        Value::Uri(v) => v.as_str().to_string(),
        Value::Enum { name, .. } => name.to_string(),
        Value::List(values) => values
            .iter()
            .map(|v| format_value(v, culture))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn convert_bool(token: &str, _culture: &Culture) -> Result<Value, ConvertError> {
    match token.trim().to_lowercase().as_str() {
        "1" | "on" | "true" => Ok(Value::Bool(true)),
        "0" | "off" | "false" => Ok(Value::Bool(false)),
        _ => Err(invalid(token, ScalarKind::Bool)),
    }
}

fn convert_char(token: &str, _culture: &Culture) -> Result<Value, ConvertError> {
    let mut chars = token.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Value::Char(c)),
        _ => Err(invalid(token, ScalarKind::Char)),
    }
}

fn integer<T>(token: &str, kind: ScalarKind) -> Result<T, ConvertError>
where
    T: FromStr<Err = ParseIntError>,
{
    token.trim().parse::<T>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertError::OutOfRange {
            token: token.to_string(),
            kind,
        },
        _ => invalid(token, kind),
    })
}

fn float<T: FromStr>(token: &str, culture: &Culture, kind: ScalarKind) -> Result<T, ConvertError> {
    culture
        .normalize_number(token)
        .parse::<T>()
        .map_err(|_| invalid(token, kind))
}

fn convert_decimal(token: &str, culture: &Culture) -> Result<Value, ConvertError> {
    Decimal::from_str(&culture.normalize_number(token))
        .map(Value::Decimal)
        .map_err(|_| invalid(token, ScalarKind::Decimal))
}

fn convert_guid(token: &str, _culture: &Culture) -> Result<Value, ConvertError> {
    Uuid::parse_str(token.trim())
        .map(Value::Guid)
        .map_err(|_| invalid(token, ScalarKind::Guid))
}

fn convert_uri(token: &str, _culture: &Culture) -> Result<Value, ConvertError> {
    Url::parse(token.trim())
        .map(Value::Uri)
        .map_err(|_| invalid(token, ScalarKind::Uri))
}

fn convert_date_time(token: &str, culture: &Culture) -> Result<Value, ConvertError> {
    let trimmed = token.trim();

    for format in culture.get_date_time_formats() {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Value::DateTime(date_time));
        }
    }

    for format in culture.get_date_formats() {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            if let Some(date_time) = date.and_hms_opt(0, 0, 0) {
                return Ok(Value::DateTime(date_time));
            }
        }
    }

    Err(invalid(token, ScalarKind::DateTime))
}

fn convert_enum(
    token: &str,
    variants: &'static [(&'static str, i64)],
) -> Result<Value, ConvertError> {
    let trimmed = token.trim();
    let lowered = trimmed.to_lowercase();

    if let Some((name, ordinal)) = variants
        .iter()
        .find(|(name, _)| name.to_lowercase() == lowered)
    {
        return Ok(Value::Enum {
            ordinal: *ordinal,
            name: *name,
        });
    }

    if let Ok(target) = trimmed.parse::<i64>() {
        if let Some((name, ordinal)) = variants.iter().find(|(_, ordinal)| *ordinal == target) {
            return Ok(Value::Enum {
                ordinal: *ordinal,
                name: *name,
            });
        }
    }

    Err(ConvertError::UnknownVariant {
        token: token.to_string(),
        variants: variants
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

const SECONDS_PER_DAY: i64 = 86_400;

// Accepts `d`, `[-][d.]hh:mm`, and `[-][d.]hh:mm:ss[.fffffffff]`.
fn convert_time_span(token: &str, culture: &Culture) -> Result<Value, ConvertError> {
    let kind = ScalarKind::TimeSpan;
    let trimmed = token.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if body.is_empty() || body.starts_with('-') {
        return Err(invalid(token, kind));
    }

    let (days, clock) = match body.split_once(':') {
        None => (parse_component(body, token, i64::MAX)?, None),
        Some((head, _)) => match head.split_once('.') {
            Some((days, _)) => (
                parse_component(days, token, i64::MAX)?,
                Some(&body[days.len() + 1..]),
            ),
            None => (0, Some(body)),
        },
    };

    let (seconds, nanos) = match clock {
        None => (0, 0),
        Some(clock) => {
            let parts: Vec<&str> = clock.split(':').collect();

            let (hours, minutes, seconds, fraction) = match parts.as_slice() {
                [hours, minutes] => (*hours, *minutes, "0", None),
                [hours, minutes, seconds] => {
                    match seconds.split_once(['.', culture.get_decimal_separator()]) {
                        Some((whole, fraction)) => (*hours, *minutes, whole, Some(fraction)),
                        None => (*hours, *minutes, *seconds, None),
                    }
                }
                _ => return Err(invalid(token, kind)),
            };

            let hours = parse_component(hours, token, 23)?;
            let minutes = parse_component(minutes, token, 59)?;
            let seconds = parse_component(seconds, token, 59)?;
            let nanos = match fraction {
                Some(fraction) => parse_fraction(fraction, token)?,
                None => 0,
            };

            (hours * 3_600 + minutes * 60 + seconds, nanos)
        }
    };

    let total = days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|d| d.checked_add(seconds))
        .ok_or_else(|| out_of_range(token, kind))?;
    let delta = TimeDelta::try_seconds(total)
        .and_then(|delta| delta.checked_add(&TimeDelta::nanoseconds(nanos)))
        .ok_or_else(|| out_of_range(token, kind))?;

    Ok(Value::TimeSpan(if negative { -delta } else { delta }))
}

fn parse_component(component: &str, token: &str, maximum: i64) -> Result<i64, ConvertError> {
    if component.is_empty() || !component.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(token, ScalarKind::TimeSpan));
    }

    match component.parse::<i64>() {
        Ok(value) if value <= maximum => Ok(value),
        _ => Err(out_of_range(token, ScalarKind::TimeSpan)),
    }
}

fn parse_fraction(fraction: &str, token: &str) -> Result<i64, ConvertError> {
    if fraction.is_empty() || fraction.len() > 9 || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid(token, ScalarKind::TimeSpan));
    }

    let padded = format!("{fraction:0<9}");
    padded
        .parse::<i64>()
        .map_err(|_| invalid(token, ScalarKind::TimeSpan))
}

fn format_time_span(delta: &TimeDelta) -> String {
    let (sign, magnitude) = if *delta < TimeDelta::zero() {
        ("-", -*delta)
    } else {
        ("", *delta)
    };
    let total = magnitude.num_seconds();
    let nanos = magnitude.subsec_nanos();
    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    let mut out = String::from(sign);

    if days > 0 {
        out.push_str(&format!("{days}."));
    }

    out.push_str(&format!("{hours:02}:{minutes:02}:{seconds:02}"));

    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    out
}

fn invalid(token: &str, kind: ScalarKind) -> ConvertError {
    ConvertError::InvalidFormat {
        token: token.to_string(),
        kind,
    }
}

fn out_of_range(token: &str, kind: ScalarKind) -> ConvertError {
    ConvertError::OutOfRange {
        token: token.to_string(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    const COLOURS: &[(&str, i64)] = &[("Red", 0), ("Green", 1), ("Blue", 4)];

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn comma_culture() -> Culture {
        Culture::new("de-DE")
            .decimal_separator(',')
            .group_separator('.')
            .date_time_formats(["%d.%m.%Y %H:%M:%S%.f"])
            .date_formats(["%d.%m.%Y"])
    }

    #[rstest]
    #[case("1", true)]
    #[case("0", false)]
    #[case("on", true)]
    #[case("OFF", false)]
    #[case("True", true)]
    #[case("false", false)]
    #[case(" on ", true)]
    fn bool_accepted(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(
            convert_scalar(token, ScalarKind::Bool, &Culture::invariant()).unwrap(),
            Value::Bool(expected)
        );
    }

    #[rstest]
    #[case("yes")]
    #[case("2")]
    #[case("")]
    fn bool_rejected(#[case] token: &str) {
        assert_matches!(
            convert_scalar(token, ScalarKind::Bool, &Culture::invariant()),
            Err(ConvertError::InvalidFormat { .. })
        );
    }

    #[test]
    fn bool_flag() {
        assert_eq!(
            convert(&[], TypeKind::Scalar(ScalarKind::Bool), &Culture::invariant()).unwrap(),
            Value::Bool(true)
        );
    }

    #[rstest]
    #[case("a", Some('a'))]
    #[case("é", Some('é'))]
    #[case("ab", None)]
    #[case("", None)]
    fn char_conversion(#[case] token: &str, #[case] expected: Option<char>) {
        let result = convert_scalar(token, ScalarKind::Char, &Culture::invariant());
        match expected {
            Some(c) => assert_eq!(result.unwrap(), Value::Char(c)),
            None => assert_matches!(result, Err(ConvertError::InvalidFormat { .. })),
        }
    }

    #[rstest]
    #[case("127", ScalarKind::I8, Value::I8(127))]
    #[case("-128", ScalarKind::I8, Value::I8(-128))]
    #[case(" 42 ", ScalarKind::I32, Value::I32(42))]
    #[case("+7", ScalarKind::I64, Value::I64(7))]
    #[case("65535", ScalarKind::U16, Value::U16(65535))]
    #[case("18446744073709551615", ScalarKind::U64, Value::U64(u64::MAX))]
    #[case("3", ScalarKind::Usize, Value::Usize(3))]
    #[case("-3", ScalarKind::Isize, Value::Isize(-3))]
    fn integer_accepted(#[case] token: &str, #[case] kind: ScalarKind, #[case] expected: Value) {
        assert_eq!(
            convert_scalar(token, kind, &Culture::invariant()).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case("128", ScalarKind::I8)]
    #[case("-129", ScalarKind::I8)]
    #[case("256", ScalarKind::U8)]
    #[case("99999999999", ScalarKind::I32)]
    fn integer_out_of_range(#[case] token: &str, #[case] kind: ScalarKind) {
        assert_eq!(
            convert_scalar(token, kind, &Culture::invariant()).unwrap_err(),
            ConvertError::OutOfRange {
                token: token.to_string(),
                kind,
            }
        );
    }

    #[rstest]
    #[case("-1", ScalarKind::U32)]
    #[case("1.5", ScalarKind::I32)]
    #[case("1,000", ScalarKind::I32)]
    #[case("abc", ScalarKind::U8)]
    fn integer_invalid(#[case] token: &str, #[case] kind: ScalarKind) {
        assert_matches!(
            convert_scalar(token, kind, &Culture::invariant()),
            Err(ConvertError::InvalidFormat { .. })
        );
    }

    #[rstest]
    #[case("1.5", Culture::invariant(), 1.5)]
    #[case("1,000.25", Culture::invariant(), 1000.25)]
    #[case("1,5", comma_culture(), 1.5)]
    #[case("1.000,25", comma_culture(), 1000.25)]
    #[case("-0,5", comma_culture(), -0.5)]
    fn float_culture(#[case] token: &str, #[case] culture: Culture, #[case] expected: f64) {
        assert_eq!(
            convert_scalar(token, ScalarKind::F64, &culture).unwrap(),
            Value::F64(expected)
        );
    }

    #[test]
    fn decimal_culture() {
        assert_eq!(
            convert_scalar("12,34", ScalarKind::Decimal, &comma_culture()).unwrap(),
            Value::Decimal(Decimal::new(1234, 2))
        );
        assert_matches!(
            convert_scalar("12x", ScalarKind::Decimal, &Culture::invariant()),
            Err(ConvertError::InvalidFormat { .. })
        );
    }

    #[test]
    fn string_verbatim() {
        assert_eq!(
            convert_scalar("\"-x y\"", ScalarKind::String, &Culture::invariant()).unwrap(),
            Value::String("\"-x y\"".to_string())
        );
    }

    #[rstest]
    #[case("67e55044-10b1-426f-9247-bb680e5fe0c8")]
    #[case("67E55044-10B1-426F-9247-BB680E5FE0C8")]
    #[case("67e5504410b1426f9247bb680e5fe0c8")]
    #[case("{67e55044-10b1-426f-9247-bb680e5fe0c8}")]
    fn guid_accepted(#[case] token: &str) {
        assert_eq!(
            convert_scalar(token, ScalarKind::Guid, &Culture::invariant()).unwrap(),
            Value::Guid(Uuid::from_u128(0x67e55044_10b1_426f_9247_bb680e5fe0c8))
        );
    }

    #[rstest]
    #[case("1", TimeDelta::days(1))]
    #[case("01:02", TimeDelta::hours(1) + TimeDelta::minutes(2))]
    #[case("01:02:03", TimeDelta::seconds(3_723))]
    #[case("2.01:02:03", TimeDelta::seconds(2 * 86_400 + 3_723))]
    #[case("00:00:01.5", TimeDelta::milliseconds(1_500))]
    #[case("-00:00:01.25", TimeDelta::milliseconds(-1_250))]
    fn time_span_accepted(#[case] token: &str, #[case] expected: TimeDelta) {
        assert_eq!(
            convert_scalar(token, ScalarKind::TimeSpan, &Culture::invariant()).unwrap(),
            Value::TimeSpan(expected)
        );
    }

    #[test]
    fn time_span_culture_fraction() {
        assert_eq!(
            convert_scalar("00:00:01,5", ScalarKind::TimeSpan, &comma_culture()).unwrap(),
            Value::TimeSpan(TimeDelta::milliseconds(1_500))
        );
    }

    #[rstest]
    #[case("24:00")]
    #[case("00:60")]
    #[case("00:00:60")]
    fn time_span_out_of_range(#[case] token: &str) {
        assert_matches!(
            convert_scalar(token, ScalarKind::TimeSpan, &Culture::invariant()),
            Err(ConvertError::OutOfRange { .. })
        );
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1:2:3:4")]
    #[case("--1")]
    #[case("00:00:01.1234567891")]
    fn time_span_invalid(#[case] token: &str) {
        assert_matches!(
            convert_scalar(token, ScalarKind::TimeSpan, &Culture::invariant()),
            Err(ConvertError::InvalidFormat { .. })
        );
    }

    #[rstest]
    #[case("2024-02-29T13:14:15", Culture::invariant())]
    #[case("2024-02-29 13:14:15", Culture::invariant())]
    #[case("02/29/2024 13:14:15", Culture::invariant())]
    #[case("29.02.2024 13:14:15", comma_culture())]
    fn date_time_accepted(#[case] token: &str, #[case] culture: Culture) {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 14, 15)
            .unwrap();
        assert_eq!(
            convert_scalar(token, ScalarKind::DateTime, &culture).unwrap(),
            Value::DateTime(expected)
        );
    }

    #[test]
    fn date_time_date_only() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            convert_scalar("2023-01-05", ScalarKind::DateTime, &Culture::invariant()).unwrap(),
            Value::DateTime(expected)
        );
        assert_matches!(
            convert_scalar("05.01.2023", ScalarKind::DateTime, &Culture::invariant()),
            Err(ConvertError::InvalidFormat { .. })
        );
    }

    #[rstest]
    #[case("https://example.com/path?q=1", true)]
    #[case("file:///tmp/x", true)]
    #[case("relative/path", false)]
    fn uri(#[case] token: &str, #[case] ok: bool) {
        let result = convert_scalar(token, ScalarKind::Uri, &Culture::invariant());
        if ok {
            assert_eq!(result.unwrap(), Value::Uri(Url::parse(token).unwrap()));
        } else {
            assert_matches!(result, Err(ConvertError::InvalidFormat { .. }));
        }
    }

    #[rstest]
    #[case("Red", 0, "Red")]
    #[case("green", 1, "Green")]
    #[case("BLUE", 4, "Blue")]
    #[case("4", 4, "Blue")]
    #[case("0", 0, "Red")]
    fn enum_accepted(#[case] token: &str, #[case] ordinal: i64, #[case] name: &'static str) {
        assert_eq!(
            convert_scalar(token, ScalarKind::Enum(COLOURS), &Culture::invariant()).unwrap(),
            Value::Enum { ordinal, name }
        );
    }

    #[rstest]
    #[case("Purple")]
    #[case("2")]
    fn enum_rejected(#[case] token: &str) {
        assert_eq!(
            convert_scalar(token, ScalarKind::Enum(COLOURS), &Culture::invariant()).unwrap_err(),
            ConvertError::UnknownVariant {
                token: token.to_string(),
                variants: "Red, Green, Blue".to_string(),
            }
        );
    }

    #[test]
    fn list_conversion() {
        let culture = Culture::invariant();
        assert_eq!(
            convert(&strings(&["1", "2", "3"]), TypeKind::List(ScalarKind::I32), &culture)
                .unwrap(),
            Value::List(vec![Value::I32(1), Value::I32(2), Value::I32(3)])
        );
        assert_eq!(
            convert(&[], TypeKind::List(ScalarKind::I32), &culture).unwrap(),
            Value::List(vec![])
        );
        assert_matches!(
            convert(&strings(&["1", "x"]), TypeKind::List(ScalarKind::I32), &culture),
            Err(ConvertError::InvalidFormat { .. })
        );
    }

    #[rstest]
    #[case(vec![], Value::Null)]
    #[case(vec![""], Value::Null)]
    #[case(vec!["5"], Value::U8(5))]
    #[case(vec!["5", ""], Value::Null)]
    #[case(vec!["", "6"], Value::U8(6))]
    fn nullable_conversion(#[case] values: Vec<&str>, #[case] expected: Value) {
        assert_eq!(
            convert(
                &strings(&values),
                TypeKind::Nullable(ScalarKind::U8),
                &Culture::invariant()
            )
            .unwrap(),
            expected
        );
    }

    #[test]
    fn scalar_last_value() {
        assert_eq!(
            convert(
                &strings(&["x", "1", "2"]),
                TypeKind::Scalar(ScalarKind::I16),
                &Culture::invariant()
            )
            .unwrap(),
            Value::I16(2)
        );
        assert_eq!(
            convert(&[], TypeKind::Scalar(ScalarKind::I16), &Culture::invariant()).unwrap_err(),
            ConvertError::MissingValue {
                kind: ScalarKind::I16
            }
        );
    }

    #[test]
    fn supported() {
        assert!(is_supported_base_type(&ScalarKind::Uri));
        assert!(is_supported_base_type(&ScalarKind::Enum(COLOURS)));
        assert!(!is_supported_base_type(&ScalarKind::Enum(&[])));
        assert!(is_supported_type(&TypeKind::List(ScalarKind::Guid)));
        assert!(!is_supported_type(&TypeKind::Nullable(ScalarKind::Enum(&[]))));
    }

    fn round_trip(value: Value, kind: ScalarKind, culture: &Culture) {
        let text = format_value(&value, culture);
        assert_eq!(
            convert_scalar(&text, kind, culture).unwrap(),
            value,
            "round trip through '{text}'"
        );
    }

    #[test]
    fn round_trip_random() {
        let cultures = [Culture::invariant(), comma_culture()];

        for _ in 0..100 {
            for culture in &cultures {
                round_trip(Value::Bool(thread_rng().gen()), ScalarKind::Bool, culture);
                round_trip(Value::Char(thread_rng().gen()), ScalarKind::Char, culture);
                round_trip(Value::I8(thread_rng().gen()), ScalarKind::I8, culture);
                round_trip(Value::I16(thread_rng().gen()), ScalarKind::I16, culture);
                round_trip(Value::I32(thread_rng().gen()), ScalarKind::I32, culture);
                round_trip(Value::I64(thread_rng().gen()), ScalarKind::I64, culture);
                round_trip(Value::U8(thread_rng().gen()), ScalarKind::U8, culture);
                round_trip(Value::U16(thread_rng().gen()), ScalarKind::U16, culture);
                round_trip(Value::U32(thread_rng().gen()), ScalarKind::U32, culture);
                round_trip(Value::U64(thread_rng().gen()), ScalarKind::U64, culture);
                round_trip(
                    Value::F32(thread_rng().gen_range(-1e6..1e6)),
                    ScalarKind::F32,
                    culture,
                );
                round_trip(
                    Value::F64(thread_rng().gen_range(-1e12..1e12)),
                    ScalarKind::F64,
                    culture,
                );
                round_trip(
                    Value::Decimal(Decimal::new(thread_rng().gen(), thread_rng().gen_range(0..10))),
                    ScalarKind::Decimal,
                    culture,
                );
                round_trip(
                    Value::Guid(Uuid::from_u128(thread_rng().gen())),
                    ScalarKind::Guid,
                    culture,
                );
                round_trip(
                    Value::TimeSpan(TimeDelta::nanoseconds(
                        thread_rng().gen_range(-1_000_000_000_000_000..1_000_000_000_000_000),
                    )),
                    ScalarKind::TimeSpan,
                    culture,
                );
                let date_time = NaiveDate::from_ymd_opt(
                    thread_rng().gen_range(1..9999),
                    thread_rng().gen_range(1..=12),
                    thread_rng().gen_range(1..=28),
                )
                .unwrap()
                .and_hms_nano_opt(
                    thread_rng().gen_range(0..24),
                    thread_rng().gen_range(0..60),
                    thread_rng().gen_range(0..60),
                    thread_rng().gen_range(0..1_000) * 1_000_000,
                )
                .unwrap();
                round_trip(Value::DateTime(date_time), ScalarKind::DateTime, culture);
            }
        }
    }

    #[test]
    fn round_trip_fixed() {
        let culture = Culture::invariant();
        round_trip(
            Value::Uri(Url::parse("https://example.com/a?b=c").unwrap()),
            ScalarKind::Uri,
            &culture,
        );
        round_trip(
            Value::Enum {
                ordinal: 4,
                name: "Blue",
            },
            ScalarKind::Enum(COLOURS),
            &culture,
        );
        round_trip(
            Value::String("with spaces".to_string()),
            ScalarKind::String,
            &culture,
        );
        assert_eq!(
            format_value(&Value::TimeSpan(TimeDelta::seconds(90_061)), &culture),
            "1.01:01:01"
        );
        assert_eq!(
            format_value(&Value::TimeSpan(TimeDelta::milliseconds(-1_500)), &culture),
            "-00:00:01.5"
        );
    }
}
