//! Symbol identities supplied by the host compiler.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

/// Opaque identity of a type, as the host names it.
///
/// Two `TypeRef`s are equal when the host gave them the same fully qualified
/// name. Cloning is a reference count increment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(Arc<str>);

impl TypeRef {
    pub fn new(qualified_name: impl Into<Arc<str>>) -> Self {
        Self(qualified_name.into())
    }

    /// The fully qualified name of the type.
    pub fn qualified_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A type parameter of the attribute class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParameter {
    pub name: SmolStr,
    /// Zero-based position in the type parameter list
    pub ordinal: usize,
}

impl TypeParameter {
    pub fn new(name: impl Into<SmolStr>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }
}

/// How a constructor parameter accepts its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterKind {
    /// Must be supplied at the call site
    #[default]
    Normal,
    /// `params` array; takes any number of trailing arguments
    Params,
    /// Has a default value and may be omitted
    Optional,
}

/// A parameter of the attribute constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: SmolStr,
    pub ordinal: usize,
    pub kind: ParameterKind,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ordinal,
            kind: ParameterKind::Normal,
        }
    }

    pub fn params(name: impl Into<SmolStr>, ordinal: usize) -> Self {
        Self {
            kind: ParameterKind::Params,
            ..Self::new(name, ordinal)
        }
    }

    pub fn optional(name: impl Into<SmolStr>, ordinal: usize) -> Self {
        Self {
            kind: ParameterKind::Optional,
            ..Self::new(name, ordinal)
        }
    }

    pub fn is_params(&self) -> bool {
        self.kind == ParameterKind::Params
    }

    pub fn is_optional(&self) -> bool {
        self.kind == ParameterKind::Optional
    }
}
