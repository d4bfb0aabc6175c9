use crate::base::ArgumentValue;

use super::{ArgumentMismatch, ArgumentPattern};

/// Accepts `null` as an absent value, otherwise defers to the inner pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullablePattern<P> {
    inner: P,
}

impl<P> NullablePattern<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: ArgumentPattern> ArgumentPattern for NullablePattern<P> {
    type Output = Option<P::Output>;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<Self::Output, ArgumentMismatch> {
        match argument {
            ArgumentValue::Null => Ok(None),
            _ => self.inner.try_fit(argument).map(Some),
        }
    }
}

/// Fits a non-null array element by element; one misfit rejects the whole array.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayPattern<P> {
    element: P,
}

impl<P> ArrayPattern<P> {
    pub fn new(element: P) -> Self {
        Self { element }
    }
}

impl<P: ArgumentPattern> ArgumentPattern for ArrayPattern<P> {
    type Output = Vec<P::Output>;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<Self::Output, ArgumentMismatch> {
        match argument {
            ArgumentValue::Array(elements) => elements
                .iter()
                .map(|element| self.element.try_fit(element))
                .collect(),
            _ => Err(ArgumentMismatch::new("array", argument)),
        }
    }
}
