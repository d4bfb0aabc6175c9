//! Recording arguments into caller-owned data records.
//!
//! - [`SemanticRecorder`], [`SyntacticRecorder`], [`CombinedRecorder`] - What
//!   the parsers feed, one call per argument
//! - [`DetachedRecorder`], [`DetachedCombinedRecorder`] - Callbacks registered
//!   per parameter, not yet bound to a record
//! - [`AttachedRecorder`], [`AttachedCombinedRecorder`] - The same, bound to
//!   one record
//! - [`SemanticRecorders`], [`SyntacticRecorders`], [`CombinedRecorders`],
//!   [`SplitRecorders`] - Factories for detached recorders from patterns and
//!   plain callbacks

mod combined;
mod detached;
mod semantic;
mod split;
mod syntactic;

pub use combined::CombinedRecorders;
pub use detached::{
    AttachedCombinedRecorder, AttachedRecorder, DetachedCombinedRecorder, DetachedRecorder,
};
pub use semantic::SemanticRecorders;
pub use split::{
    SplitConstructorRecorder, SplitNamedRecorder, SplitRecorderProvider, SplitRecorders,
    SplitTypeRecorder,
};
pub use syntactic::SyntacticRecorders;

use crate::base::{ArgumentValue, ExpressionSyntax, Parameter, TypeParameter, TypeRef};

// ============================================================================
// ARGUMENT SYNTAX
// ============================================================================

/// Syntax of one constructor argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorArgumentSyntax {
    /// A single expression, including an explicit array passed to `params`
    Normal(ExpressionSyntax),
    /// `params` elements given one by one; possibly empty
    Params(Vec<ExpressionSyntax>),
    /// Omitted; the parameter's default value was used
    Default,
}

// ============================================================================
// PARSER-FACING RECORDERS
// ============================================================================

/// Receives bound argument values from the semantic pass.
///
/// Each method returns `false` to reject the argument, which fails the parse.
pub trait SemanticRecorder {
    fn record_type_argument(&mut self, parameter: &TypeParameter, argument: &TypeRef) -> bool;

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        argument: &ArgumentValue,
    ) -> bool;

    fn record_named_argument(&mut self, name: &str, argument: &ArgumentValue) -> bool;
}

/// Receives argument syntax from the syntactic pass.
pub trait SyntacticRecorder {
    fn record_type_argument(&mut self, parameter: &TypeParameter, syntax: &ExpressionSyntax)
    -> bool;

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        syntax: &ConstructorArgumentSyntax,
    ) -> bool;

    fn record_named_argument(&mut self, name: &str, syntax: &ExpressionSyntax) -> bool;
}

/// Receives each argument's value together with its syntax.
pub trait CombinedRecorder {
    fn record_type_argument(
        &mut self,
        parameter: &TypeParameter,
        argument: &TypeRef,
        syntax: &ExpressionSyntax,
    ) -> bool;

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        argument: &ArgumentValue,
        syntax: &ConstructorArgumentSyntax,
    ) -> bool;

    fn record_named_argument(
        &mut self,
        name: &str,
        argument: &ArgumentValue,
        syntax: &ExpressionSyntax,
    ) -> bool;
}

// ============================================================================
// DETACHED RECORDER SHAPES
// ============================================================================

pub type SemanticTypeRecorder<R> = DetachedRecorder<R, TypeRef>;
pub type SemanticArgumentRecorder<R> = DetachedRecorder<R, ArgumentValue>;
pub type SyntacticExpressionRecorder<R> = DetachedRecorder<R, ExpressionSyntax>;
pub type SyntacticConstructorRecorder<R> = DetachedRecorder<R, ConstructorArgumentSyntax>;
pub type CombinedTypeRecorder<R> = DetachedCombinedRecorder<R, TypeRef, ExpressionSyntax>;
pub type CombinedConstructorRecorder<R> =
    DetachedCombinedRecorder<R, ArgumentValue, ConstructorArgumentSyntax>;
pub type CombinedNamedRecorder<R> = DetachedCombinedRecorder<R, ArgumentValue, ExpressionSyntax>;
