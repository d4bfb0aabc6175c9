use crate::base::{ArgumentValue, TypeRef};

use super::{ArgumentMismatch, ArgumentPattern};

/// Non-null string argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringPattern;

impl ArgumentPattern for StringPattern {
    type Output = String;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<String, ArgumentMismatch> {
        match argument {
            ArgumentValue::String(value) => Ok(value.to_string()),
            _ => Err(ArgumentMismatch::new("string", argument)),
        }
    }
}

/// Non-null type argument, e.g. `typeof(int)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypePattern;

impl ArgumentPattern for TypePattern {
    type Output = TypeRef;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<TypeRef, ArgumentMismatch> {
        match argument {
            ArgumentValue::Type(ty) => Ok(ty.clone()),
            _ => Err(ArgumentMismatch::new("type", argument)),
        }
    }
}

/// Any non-null argument, passed through as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectPattern;

impl ArgumentPattern for ObjectPattern {
    type Output = ArgumentValue;

    fn try_fit(&self, argument: &ArgumentValue) -> Result<ArgumentValue, ArgumentMismatch> {
        match argument {
            ArgumentValue::Null => Err(ArgumentMismatch::new("object", argument)),
            _ => Ok(argument.clone()),
        }
    }
}
