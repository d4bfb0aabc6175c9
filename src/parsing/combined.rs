use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{
    ArgumentValue, AttributeData, AttributeSyntax, ExpressionSyntax, Parameter, TypeParameter,
    TypeRef,
};
use crate::recording::{
    CombinedRecorder, ConstructorArgumentSyntax, SemanticRecorder, SyntacticRecorder,
};

use super::{
    ArgumentCategory, DiagnosticSink, ParseDiagnostic, SemanticParser, SemanticPass,
    SyntacticParser, SyntacticPass, TracingDiagnostics,
};

/// Runs a semantic and a syntactic pass over the same attribute application
/// and hands each argument to a [`CombinedRecorder`] with both its value and
/// its syntax.
///
/// Both passes must report the same number of arguments per category; the
/// Nth semantic argument is paired with the Nth syntactic one.
pub struct CombinedParser<S = SemanticParser, Y = SyntacticParser> {
    semantic: S,
    syntactic: Y,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl CombinedParser {
    /// Default passes, reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingDiagnostics))
    }

    /// Default passes, all reporting to `diagnostics`.
    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self::from_passes(
            SemanticParser::with_diagnostics(diagnostics.clone()),
            SyntacticParser::with_diagnostics(diagnostics.clone()),
            diagnostics,
        )
    }
}

impl Default for CombinedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SemanticPass, Y: SyntacticPass> CombinedParser<S, Y> {
    pub fn from_passes(semantic: S, syntactic: Y, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            semantic,
            syntactic,
            diagnostics,
        }
    }

    pub fn try_parse(
        &self,
        recorder: &mut dyn CombinedRecorder,
        data: &AttributeData,
        syntax: &AttributeSyntax,
    ) -> bool {
        let mut semantic = SemanticArguments::default();
        if !self.semantic.try_parse(&mut semantic, data) {
            return self.fail(ParseDiagnostic::SemanticPassFailed);
        }

        let mut syntactic = SyntacticArguments::default();
        if !self.syntactic.try_parse(&mut syntactic, data, syntax) {
            return self.fail(ParseDiagnostic::SyntacticPassFailed);
        }

        let counts = [
            (
                ArgumentCategory::Type,
                semantic.type_arguments.len(),
                syntactic.type_arguments.len(),
            ),
            (
                ArgumentCategory::Constructor,
                semantic.constructor_arguments.len(),
                syntactic.constructor_arguments.len(),
            ),
            (
                ArgumentCategory::Named,
                semantic.named_arguments.len(),
                syntactic.named_arguments.len(),
            ),
        ];
        if let Some(&(category, semantic, syntactic)) =
            counts.iter().find(|(_, semantic, syntactic)| semantic != syntactic)
        {
            return self.fail(ParseDiagnostic::CountMismatch {
                category,
                semantic,
                syntactic,
            });
        }

        for ((parameter, argument), syntax) in
            semantic.type_arguments.iter().zip(&syntactic.type_arguments)
        {
            if !recorder.record_type_argument(parameter, argument, syntax) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Type,
                    parameter: parameter.name.clone(),
                });
            }
        }

        for ((parameter, argument), syntax) in semantic
            .constructor_arguments
            .iter()
            .zip(&syntactic.constructor_arguments)
        {
            if !recorder.record_constructor_argument(parameter, argument, syntax) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Constructor,
                    parameter: parameter.name.clone(),
                });
            }
        }

        for ((name, argument), syntax) in semantic
            .named_arguments
            .iter()
            .zip(&syntactic.named_arguments)
        {
            if !recorder.record_named_argument(name, argument, syntax) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Named,
                    parameter: name.clone(),
                });
            }
        }

        true
    }

    fn fail(&self, diagnostic: ParseDiagnostic) -> bool {
        self.diagnostics.report(diagnostic);
        false
    }
}

impl<S, Y> fmt::Debug for CombinedParser<S, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedParser").finish_non_exhaustive()
    }
}

// ============================================================================
// PASS BUFFERS
// ============================================================================

#[derive(Default)]
struct SemanticArguments {
    type_arguments: Vec<(TypeParameter, TypeRef)>,
    constructor_arguments: Vec<(Parameter, ArgumentValue)>,
    named_arguments: Vec<(SmolStr, ArgumentValue)>,
}

impl SemanticRecorder for SemanticArguments {
    fn record_type_argument(&mut self, parameter: &TypeParameter, argument: &TypeRef) -> bool {
        self.type_arguments.push((parameter.clone(), argument.clone()));
        true
    }

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        argument: &ArgumentValue,
    ) -> bool {
        self.constructor_arguments.push((parameter.clone(), argument.clone()));
        true
    }

    fn record_named_argument(&mut self, name: &str, argument: &ArgumentValue) -> bool {
        self.named_arguments.push((SmolStr::new(name), argument.clone()));
        true
    }
}

#[derive(Default)]
struct SyntacticArguments {
    type_arguments: Vec<ExpressionSyntax>,
    constructor_arguments: Vec<ConstructorArgumentSyntax>,
    named_arguments: Vec<ExpressionSyntax>,
}

impl SyntacticRecorder for SyntacticArguments {
    fn record_type_argument(
        &mut self,
        _parameter: &TypeParameter,
        syntax: &ExpressionSyntax,
    ) -> bool {
        self.type_arguments.push(syntax.clone());
        true
    }

    fn record_constructor_argument(
        &mut self,
        _parameter: &Parameter,
        syntax: &ConstructorArgumentSyntax,
    ) -> bool {
        self.constructor_arguments.push(syntax.clone());
        true
    }

    fn record_named_argument(&mut self, _name: &str, syntax: &ExpressionSyntax) -> bool {
        self.named_arguments.push(syntax.clone());
        true
    }
}
