//! One attribute application, as seen by the semantic and syntactic passes.

use smol_str::SmolStr;
use text_size::TextRange;

use super::symbols::{Parameter, TypeParameter, TypeRef};
use super::syntax::ExpressionSyntax;
use super::value::ArgumentValue;

/// The attribute class the application resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeClass {
    pub name: TypeRef,
    pub type_parameters: Vec<TypeParameter>,
    /// Bound type arguments, one per type parameter
    pub type_arguments: Vec<TypeRef>,
}

/// The constructor chosen by overload resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeConstructor {
    pub parameters: Vec<Parameter>,
}

/// A `Name = value` argument after binding.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArgument {
    pub name: SmolStr,
    pub value: ArgumentValue,
}

impl NamedArgument {
    pub fn new(name: impl Into<SmolStr>, value: ArgumentValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Semantic view of an attribute application.
///
/// `constructor_arguments` holds one value per constructor parameter:
/// `params` arguments are collapsed into a single array and omitted optional
/// arguments carry their default value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeData {
    /// `None` when the attribute class did not resolve
    pub attribute_class: Option<AttributeClass>,
    /// `None` when no constructor was selected
    pub constructor: Option<AttributeConstructor>,
    pub constructor_arguments: Vec<ArgumentValue>,
    /// Named arguments in source order
    pub named_arguments: Vec<NamedArgument>,
}

/// One argument in the attribute's argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeArgumentSyntax {
    /// `name:` label targeting a constructor parameter
    pub name_colon: Option<SmolStr>,
    /// `Name =` label targeting a named parameter
    pub name_equals: Option<SmolStr>,
    pub expression: ExpressionSyntax,
}

impl AttributeArgumentSyntax {
    pub fn positional(expression: ExpressionSyntax) -> Self {
        Self {
            name_colon: None,
            name_equals: None,
            expression,
        }
    }

    pub fn labelled(name: impl Into<SmolStr>, expression: ExpressionSyntax) -> Self {
        Self {
            name_colon: Some(name.into()),
            name_equals: None,
            expression,
        }
    }

    pub fn named(name: impl Into<SmolStr>, expression: ExpressionSyntax) -> Self {
        Self {
            name_colon: None,
            name_equals: Some(name.into()),
            expression,
        }
    }

    /// Whether this argument binds to the constructor (positionally or by label).
    pub fn is_constructor_argument(&self) -> bool {
        self.name_equals.is_none()
    }
}

/// Syntactic view of an attribute application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSyntax {
    /// Type argument syntax of the attribute name, e.g. `Example<Type>`
    pub type_arguments: Vec<ExpressionSyntax>,
    pub arguments: Vec<AttributeArgumentSyntax>,
    pub range: TextRange,
}
