//! Built-in string to value coercion.
//!
//! The set of [`Coerce`] impls is the coercion table: one entry per supported
//! kind, fixed at compile time. Supported kinds:
//!
//! | Kind | Types | Accepted text |
//! |------|-------|---------------|
//! | text | `String` | anything |
//! | boolean | `bool` | `1 t T TRUE true True 0 f F FALSE false False` |
//! | integer | `i8`..`i128`, `isize`, `u8`..`u128`, `usize` | base 10, optional sign, in range |
//! | float | `f32`, `f64` | decimal or exponent notation in range, `inf`, `NaN` |
//! | bytes | `Vec<u8>` | the value's UTF-8 bytes |
//! | code points | `Vec<char>` | the value's chars |
//!
//! `Option<T>` and `Box<T>` of any kind above add one level of indirection;
//! the inner value is allocated on a successful parse.

use crate::error::EnvError;

mod sealed {
    pub trait Sealed {}

    /// Kinds that may sit behind one level of indirection.
    pub trait Direct {}
}

/// Types the walker can build directly from a raw string.
///
/// This trait is sealed; custom types implement
/// [`UnmarshalEnv`](crate::UnmarshalEnv) instead.
pub trait Coerce: sealed::Sealed + Sized {
    /// Convert `raw` into a value, or fail without side effects.
    fn coerce(raw: &str) -> Result<Self, EnvError>;
}

impl sealed::Sealed for String {}
impl sealed::Direct for String {}

impl Coerce for String {
    fn coerce(raw: &str) -> Result<Self, EnvError> {
        Ok(raw.to_string())
    }
}

impl sealed::Sealed for bool {}
impl sealed::Direct for bool {}

impl Coerce for bool {
    fn coerce(raw: &str) -> Result<Self, EnvError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(EnvError::parse_error::<bool>(
                raw,
                "expected one of 1, t, true, 0, f, false",
            )),
        }
    }
}

macro_rules! impl_coerce_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl sealed::Direct for $ty {}

            impl Coerce for $ty {
                fn coerce(raw: &str) -> Result<Self, EnvError> {
                    raw.parse::<$ty>()
                        .map_err(|e| EnvError::parse_error::<$ty>(raw, e))
                }
            }
        )*
    };
}

impl_coerce_from_str!(i8, i16, i32, i64, i128, isize);
impl_coerce_from_str!(u8, u16, u32, u64, u128, usize);

/// Explicit infinity literals, as accepted by `str::parse` for floats.
fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_coerce_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl sealed::Direct for $ty {}

            impl Coerce for $ty {
                fn coerce(raw: &str) -> Result<Self, EnvError> {
                    let value = raw
                        .parse::<$ty>()
                        .map_err(|e| EnvError::parse_error::<$ty>(raw, e))?;
                    // Finite input too large for the width parses as infinity.
                    if value.is_infinite() && !is_infinity_literal(raw) {
                        return Err(EnvError::parse_error::<$ty>(raw, "value out of range"));
                    }
                    Ok(value)
                }
            }
        )*
    };
}

impl_coerce_float!(f32, f64);

impl sealed::Sealed for Vec<u8> {}
impl sealed::Direct for Vec<u8> {}

impl Coerce for Vec<u8> {
    fn coerce(raw: &str) -> Result<Self, EnvError> {
        Ok(raw.as_bytes().to_vec())
    }
}

impl sealed::Sealed for Vec<char> {}
impl sealed::Direct for Vec<char> {}

impl Coerce for Vec<char> {
    fn coerce(raw: &str) -> Result<Self, EnvError> {
        Ok(raw.chars().collect())
    }
}

impl<T: Coerce + sealed::Direct> sealed::Sealed for Option<T> {}

impl<T: Coerce + sealed::Direct> Coerce for Option<T> {
    fn coerce(raw: &str) -> Result<Self, EnvError> {
        T::coerce(raw).map(Some)
    }
}

impl<T: Coerce + sealed::Direct> sealed::Sealed for Box<T> {}

impl<T: Coerce + sealed::Direct> Coerce for Box<T> {
    fn coerce(raw: &str) -> Result<Self, EnvError> {
        T::coerce(raw).map(Box::new)
    }
}
