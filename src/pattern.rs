//! Argument patterns: fitting untyped argument values to static types.
//!
//! A pattern answers "does this [`ArgumentValue`] fit type `T`, and if so,
//! what is the `T`?". Fitting is exact: no numeric widening or narrowing, an
//! enum constant only fits its own enum type, and `null` only fits nullable
//! patterns.
//!
//! Patterns are built with the factory functions in this module and composed
//! with [`nullable`] and [`array`]:
//!
//! ```
//! use attribute_parser::base::ArgumentValue;
//! use attribute_parser::pattern::{self, ArgumentPattern};
//!
//! let sequence = pattern::array(pattern::i32());
//! let value = ArgumentValue::array([ArgumentValue::I32(0), ArgumentValue::I32(1)]);
//! assert_eq!(sequence.try_fit(&value), Ok(vec![0, 1]));
//! ```

mod combinators;
mod enumeration;
mod primitive;
mod reference;

pub use combinators::{ArrayPattern, NullablePattern};
pub use enumeration::{ArgumentEnum, EnumPattern};
pub use primitive::{Primitive, PrimitivePattern};
pub use reference::{ObjectPattern, StringPattern, TypePattern};

use thiserror::Error;

use crate::base::ArgumentValue;

/// The argument did not fit the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ArgumentMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

impl ArgumentMismatch {
    pub fn new(expected: &'static str, argument: &ArgumentValue) -> Self {
        Self {
            expected,
            found: argument.kind(),
        }
    }
}

/// Fits an argument value to a statically known type.
///
/// Implementations are stateless: the same argument always yields the same
/// result.
pub trait ArgumentPattern: Send + Sync {
    type Output;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<Self::Output, ArgumentMismatch>;
}

impl<P: ArgumentPattern + ?Sized> ArgumentPattern for &P {
    type Output = P::Output;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<Self::Output, ArgumentMismatch> {
        (**self).try_fit(argument)
    }
}

// ============================================================================
// FACTORY
// ============================================================================

pub fn bool() -> PrimitivePattern<bool> {
    PrimitivePattern::new()
}

pub fn char() -> PrimitivePattern<char> {
    PrimitivePattern::new()
}

pub fn u8() -> PrimitivePattern<u8> {
    PrimitivePattern::new()
}

pub fn i8() -> PrimitivePattern<i8> {
    PrimitivePattern::new()
}

pub fn i16() -> PrimitivePattern<i16> {
    PrimitivePattern::new()
}

pub fn u16() -> PrimitivePattern<u16> {
    PrimitivePattern::new()
}

pub fn i32() -> PrimitivePattern<i32> {
    PrimitivePattern::new()
}

pub fn u32() -> PrimitivePattern<u32> {
    PrimitivePattern::new()
}

pub fn i64() -> PrimitivePattern<i64> {
    PrimitivePattern::new()
}

pub fn u64() -> PrimitivePattern<u64> {
    PrimitivePattern::new()
}

pub fn f32() -> PrimitivePattern<f32> {
    PrimitivePattern::new()
}

pub fn f64() -> PrimitivePattern<f64> {
    PrimitivePattern::new()
}

/// Non-null string.
pub fn string() -> StringPattern {
    StringPattern
}

/// Non-null `typeof(..)` argument.
pub fn type_symbol() -> TypePattern {
    TypePattern
}

/// Any non-null value, unconverted.
pub fn object() -> ObjectPattern {
    ObjectPattern
}

/// A constant of exactly the enum type `E`.
pub fn enumeration<E: ArgumentEnum>() -> EnumPattern<E> {
    EnumPattern::new()
}

/// `null` or a value fitting `pattern`.
pub fn nullable<P: ArgumentPattern>(pattern: P) -> NullablePattern<P> {
    NullablePattern::new(pattern)
}

/// A non-null array whose every element fits `element`.
pub fn array<P: ArgumentPattern>(element: P) -> ArrayPattern<P> {
    ArrayPattern::new(element)
}

/// `null` or an array whose every element fits `element`.
pub fn nullable_array<P: ArgumentPattern>(element: P) -> NullablePattern<ArrayPattern<P>> {
    nullable(array(element))
}

pub fn nullable_string() -> NullablePattern<StringPattern> {
    nullable(string())
}

pub fn nullable_type_symbol() -> NullablePattern<TypePattern> {
    nullable(type_symbol())
}

pub fn nullable_object() -> NullablePattern<ObjectPattern> {
    nullable(object())
}
