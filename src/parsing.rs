//! Parsing: feeding one attribute application to recorders.
//!
//! ```text
//!                 ┌─► SemanticParser  ─► (TypeParameter, TypeRef)
//! AttributeData ──┤                     (Parameter, ArgumentValue)
//!                 │                     (name, ArgumentValue)
//! AttributeSyntax ┴─► SyntacticParser ─► (TypeParameter, ExpressionSyntax)
//!                                       (Parameter, ConstructorArgumentSyntax)
//!                                       (name, ExpressionSyntax)
//!
//! CombinedParser: both passes → count check → positional merge
//!                 → CombinedRecorder
//! ```
//!
//! Type and constructor arguments are visited in declaration order, named
//! arguments in source order. A pass returns `false` on the first structural
//! problem or rejected argument and reports why through its
//! [`DiagnosticSink`].

mod combined;
mod diagnostics;
mod semantic;
mod syntactic;

pub use combined::CombinedParser;
pub use diagnostics::{
    ArgumentCategory, DiagnosticCollector, DiagnosticSink, ParseDiagnostic, Severity,
    TracingDiagnostics,
};
pub use semantic::SemanticParser;
pub use syntactic::SyntacticParser;

use crate::base::{AttributeData, AttributeSyntax};
use crate::recording::{SemanticRecorder, SyntacticRecorder};

/// A pass over the bound values of an attribute application.
pub trait SemanticPass: Send + Sync {
    fn try_parse(&self, recorder: &mut dyn SemanticRecorder, data: &AttributeData) -> bool;
}

/// A pass over the source syntax of an attribute application.
///
/// `data` supplies the resolved class and constructor the syntax binds to.
pub trait SyntacticPass: Send + Sync {
    fn try_parse(
        &self,
        recorder: &mut dyn SyntacticRecorder,
        data: &AttributeData,
        syntax: &AttributeSyntax,
    ) -> bool;
}
