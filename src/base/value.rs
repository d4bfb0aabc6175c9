//! Compile-time constant values bound to attribute arguments.

use smol_str::SmolStr;

use super::symbols::TypeRef;

/// A constant of an enum type, carried with its underlying integral value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumConstant {
    pub enum_type: TypeRef,
    pub value: i64,
}

impl EnumConstant {
    pub fn new(enum_type: impl Into<TypeRef>, value: i64) -> Self {
        Self {
            enum_type: enum_type.into(),
            value,
        }
    }
}

/// A bound argument value, as evaluated by the host compiler.
///
/// The variant is the runtime type of the constant. Patterns match on the
/// variant exactly; an `I16` never stands in for an `I32`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Null,
    Bool(bool),
    Char(char),
    U8(u8),
    I8(i8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    String(SmolStr),
    Type(TypeRef),
    Enum(EnumConstant),
    Array(Vec<ArgumentValue>),
}

impl ArgumentValue {
    /// Name of the runtime type of this value, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ArgumentValue::Null => "null",
            ArgumentValue::Bool(_) => "bool",
            ArgumentValue::Char(_) => "char",
            ArgumentValue::U8(_) => "u8",
            ArgumentValue::I8(_) => "i8",
            ArgumentValue::I16(_) => "i16",
            ArgumentValue::U16(_) => "u16",
            ArgumentValue::I32(_) => "i32",
            ArgumentValue::U32(_) => "u32",
            ArgumentValue::I64(_) => "i64",
            ArgumentValue::U64(_) => "u64",
            ArgumentValue::F32(_) => "f32",
            ArgumentValue::F64(_) => "f64",
            ArgumentValue::String(_) => "string",
            ArgumentValue::Type(_) => "type",
            ArgumentValue::Enum(_) => "enum",
            ArgumentValue::Array(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ArgumentValue::Null)
    }

    pub fn string(value: impl Into<SmolStr>) -> Self {
        ArgumentValue::String(value.into())
    }

    pub fn type_of(ty: impl Into<TypeRef>) -> Self {
        ArgumentValue::Type(ty.into())
    }

    pub fn array(elements: impl IntoIterator<Item = ArgumentValue>) -> Self {
        ArgumentValue::Array(elements.into_iter().collect())
    }
}
