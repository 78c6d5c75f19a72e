//! Parameter kinds and their text conversion rules.
//!
//! Every accessor in this crate is generic over a [`ParamKind`]. The trait
//! acts as the kind descriptor table: it names the kind, fixes its width
//! policy, and says whether the kind needs special handling on the path or
//! query side.
//!
//! | Kind | Rust type | Width policy |
//! |------|-----------|--------------|
//! | `string` | [`String`] | verbatim |
//! | `int` | [`isize`] | platform width |
//! | `int8`..`int64` | [`i8`]..[`i64`] | own width |
//! | `uint` | [`usize`] | always 32-bit |
//! | `uint8`..`uint64` | [`u8`]..[`u64`] | own width |
//! | `bool` | [`bool`] | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | `float32`, `float64` | [`f32`], [`f64`] | own width, finite overflow rejected |
//!
//! Signed integers take an optional `+` or `-`; unsigned integers take no sign.

use std::num::IntErrorKind;
use thiserror::Error;

/// Error produced when raw parameter text cannot be converted to a kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The text is not a literal of the target kind.
    #[error("invalid {kind} literal {value:?}")]
    Invalid {
        /// Name of the target kind.
        kind: &'static str,
        /// The rejected text.
        value: String,
    },

    /// The text is a well-formed literal outside the target width.
    #[error("{kind} value {value:?} out of range")]
    OutOfRange {
        /// Name of the target kind.
        kind: &'static str,
        /// The rejected text.
        value: String,
    },
}

impl ConversionError {
    fn invalid(kind: &'static str, value: &str) -> Self {
        Self::Invalid {
            kind,
            value: value.to_owned(),
        }
    }

    fn out_of_range(kind: &'static str, value: &str) -> Self {
        Self::OutOfRange {
            kind,
            value: value.to_owned(),
        }
    }

    /// Returns the name of the kind the conversion targeted.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Invalid { kind, .. } | Self::OutOfRange { kind, .. } => kind,
        }
    }

    /// Returns the rejected text.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Invalid { value, .. } | Self::OutOfRange { value, .. } => value,
        }
    }
}

/// A type that path and query parameters can be converted into.
///
/// Implemented for the fourteen supported kinds listed in the
/// [module documentation](self).
///
/// # Example
///
/// ```rust
/// use paramkit::ParamKind;
///
/// assert_eq!(<u8 as ParamKind>::convert("255"), Ok(255));
/// assert!(<u8 as ParamKind>::convert("256").is_err());
/// assert_eq!(<bool as ParamKind>::convert("T"), Ok(true));
/// ```
pub trait ParamKind: Sized {
    /// Kind name used in errors and log fields.
    const NAME: &'static str;

    /// Whether an empty path binding means the parameter is missing.
    ///
    /// Only the string kind sets this; every other kind hands the empty
    /// text to [`convert`](Self::convert) and fails there.
    const EMPTY_PATH_IS_MISSING: bool = false;

    /// Whether a query value needs its first space turned back into `+`
    /// when the query decoder maps `+` to space.
    const RESTORES_PLUS: bool = false;

    /// Converts raw parameter text into this kind.
    fn convert(raw: &str) -> Result<Self, ConversionError>;
}

impl ParamKind for String {
    const NAME: &'static str = "string";
    const EMPTY_PATH_IS_MISSING: bool = true;

    fn convert(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_owned())
    }
}

impl ParamKind for bool {
    const NAME: &'static str = "bool";

    fn convert(raw: &str) -> Result<Self, ConversionError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ConversionError::invalid(Self::NAME, raw)),
        }
    }
}

fn int_error(kind: &'static str, raw: &str, err: &std::num::ParseIntError) -> ConversionError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ConversionError::out_of_range(kind, raw)
        }
        _ => ConversionError::invalid(kind, raw),
    }
}

// Unsigned literals carry no sign at all; `str::parse` would take a `+`.
fn unsigned_digits<'a>(kind: &'static str, raw: &'a str) -> Result<&'a str, ConversionError> {
    if raw.starts_with('+') {
        return Err(ConversionError::invalid(kind, raw));
    }
    Ok(raw)
}

macro_rules! signed_kinds {
    ($($ty:ty => $name:literal),* $(,)?) => ($(
        impl ParamKind for $ty {
            const NAME: &'static str = $name;

            fn convert(raw: &str) -> Result<Self, ConversionError> {
                raw.parse::<$ty>().map_err(|e| int_error(Self::NAME, raw, &e))
            }
        }
    )*)
}

macro_rules! unsigned_kinds {
    ($($ty:ty => $name:literal),* $(,)?) => ($(
        impl ParamKind for $ty {
            const NAME: &'static str = $name;

            fn convert(raw: &str) -> Result<Self, ConversionError> {
                unsigned_digits(Self::NAME, raw)?
                    .parse::<$ty>()
                    .map_err(|e| int_error(Self::NAME, raw, &e))
            }
        }
    )*)
}

signed_kinds! {
    isize => "int",
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
}

unsigned_kinds! {
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
}

// `uint` keeps a 32-bit ceiling on every platform.
impl ParamKind for usize {
    const NAME: &'static str = "uint";

    fn convert(raw: &str) -> Result<Self, ConversionError> {
        let value = unsigned_digits(Self::NAME, raw)?
            .parse::<u32>()
            .map_err(|e| int_error(Self::NAME, raw, &e))?;
        usize::try_from(value).map_err(|_| ConversionError::out_of_range(Self::NAME, raw))
    }
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix('+')
        .or_else(|| raw.strip_prefix('-'))
        .unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! float_kinds {
    ($($ty:ty => $name:literal),* $(,)?) => ($(
        impl ParamKind for $ty {
            const NAME: &'static str = $name;
            const RESTORES_PLUS: bool = true;

            fn convert(raw: &str) -> Result<Self, ConversionError> {
                let value = raw
                    .parse::<$ty>()
                    .map_err(|_| ConversionError::invalid(Self::NAME, raw))?;

                // The parser saturates to infinity on overflow.
                if value.is_infinite() && !is_infinity_literal(raw) {
                    return Err(ConversionError::out_of_range(Self::NAME, raw));
                }

                Ok(value)
            }
        }
    )*)
}

float_kinds! {
    f32 => "float32",
    f64 => "float64",
}
