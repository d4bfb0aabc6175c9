//! Foundation types shared by every layer.
//!
//! This module models what the host compiler hands to the parsers:
//! - [`TypeRef`], [`TypeParameter`], [`Parameter`] - Symbol identities
//! - [`ArgumentValue`], [`EnumConstant`] - Bound compile-time constants
//! - [`ExpressionSyntax`], [`ExpressionKind`] - Argument expressions with source ranges
//! - [`AttributeData`], [`AttributeSyntax`] - One attribute application, semantic and syntactic
//!
//! This module has NO dependencies on other crate modules.

mod attribute;
mod symbols;
mod syntax;
mod value;

pub use attribute::{
    AttributeArgumentSyntax, AttributeClass, AttributeConstructor, AttributeData,
    AttributeSyntax, NamedArgument,
};
pub use symbols::{Parameter, ParameterKind, TypeParameter, TypeRef};
pub use syntax::{ExpressionKind, ExpressionSyntax, InitializerSyntax};
pub use value::{ArgumentValue, EnumConstant};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
