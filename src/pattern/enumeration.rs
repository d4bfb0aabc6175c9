use std::marker::PhantomData;

use crate::base::ArgumentValue;

use super::{ArgumentMismatch, ArgumentPattern};

/// An enum that attribute arguments can be fitted to.
///
/// ```
/// use attribute_parser::pattern::ArgumentEnum;
///
/// #[derive(Debug, PartialEq)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// impl ArgumentEnum for Color {
///     const TYPE_NAME: &'static str = "Example.Color";
///
///     fn from_underlying(value: i64) -> Option<Self> {
///         match value {
///             0 => Some(Color::Red),
///             1 => Some(Color::Green),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ArgumentEnum: Sized + Send + Sync + 'static {
    /// Fully qualified name the host uses for this enum type.
    const TYPE_NAME: &'static str;

    /// Convert an underlying value; `None` if no variant has that value.
    fn from_underlying(value: i64) -> Option<Self>;
}

/// Pattern matching constants of exactly the enum type `E`.
///
/// A constant of a different enum type, or a bare integer, does not fit.
#[derive(Debug)]
pub struct EnumPattern<E>(PhantomData<fn() -> E>);

impl<E> EnumPattern<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for EnumPattern<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumPattern<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumPattern<E> {}

impl<E: ArgumentEnum> ArgumentPattern for EnumPattern<E> {
    type Output = E;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<E, ArgumentMismatch> {
        match argument {
            ArgumentValue::Enum(constant)
                if constant.enum_type.qualified_name() == E::TYPE_NAME =>
            {
                E::from_underlying(constant.value)
                    .ok_or_else(|| ArgumentMismatch::new(E::TYPE_NAME, argument))
            }
            _ => Err(ArgumentMismatch::new(E::TYPE_NAME, argument)),
        }
    }
}
