use std::marker::PhantomData;

use crate::base::ArgumentValue;

use super::{ArgumentMismatch, ArgumentPattern};

/// A primitive type an argument value can be fitted to.
///
/// Only the variant carrying exactly `Self` converts.
pub trait Primitive: Copy + Send + Sync + 'static {
    const NAME: &'static str;

    fn from_argument(argument: &ArgumentValue) -> Option<Self>;
}

macro_rules! primitive {
    ($ty:ty, $variant:ident) => {
        impl Primitive for $ty {
            const NAME: &'static str = stringify!($ty);

            fn from_argument(argument: &ArgumentValue) -> Option<Self> {
                match argument {
                    ArgumentValue::$variant(value) => Some(*value),
                    _ => None,
                }
            }
        }
    };
}

primitive!(bool, Bool);
primitive!(char, Char);
primitive!(u8, U8);
primitive!(i8, I8);
primitive!(i16, I16);
primitive!(u16, U16);
primitive!(i32, I32);
primitive!(u32, U32);
primitive!(i64, I64);
primitive!(u64, U64);
primitive!(f32, F32);
primitive!(f64, F64);

/// Pattern matching exactly one primitive type.
#[derive(Debug)]
pub struct PrimitivePattern<T>(PhantomData<fn() -> T>);

impl<T> PrimitivePattern<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for PrimitivePattern<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PrimitivePattern<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PrimitivePattern<T> {}

impl<T: Primitive> ArgumentPattern for PrimitivePattern<T> {
    type Output = T;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<T, ArgumentMismatch> {
        T::from_argument(argument).ok_or_else(|| ArgumentMismatch::new(T::NAME, argument))
    }
}
