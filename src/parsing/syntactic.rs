use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::base::{
    AttributeArgumentSyntax, AttributeData, AttributeSyntax, ExpressionSyntax, Parameter,
};
use crate::recording::{ConstructorArgumentSyntax, SyntacticRecorder};

use super::{
    ArgumentCategory, DiagnosticSink, ParseDiagnostic, SyntacticPass, TracingDiagnostics,
};

/// Feeds the source syntax of an attribute application to a
/// [`SyntacticRecorder`], binding constructor arguments to parameters the
/// way the compiler did.
#[derive(Clone)]
pub struct SyntacticParser {
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl SyntacticParser {
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self { diagnostics }
    }

    /// The syntax bound to each of `parameters`, in declaration order.
    ///
    /// A `name:` label binds its parameter directly and may appear once per
    /// parameter. The remaining
    /// parameters take positional arguments in order; a `params` parameter
    /// takes all that are left.
    pub fn bind_constructor_arguments(
        &self,
        parameters: &[Parameter],
        arguments: &[AttributeArgumentSyntax],
    ) -> Option<Vec<ConstructorArgumentSyntax>> {
        let mut labelled: FxHashMap<&str, &ExpressionSyntax> = FxHashMap::default();
        let mut positional = Vec::new();
        for argument in arguments.iter().filter(|a| a.is_constructor_argument()) {
            match &argument.name_colon {
                Some(label) => {
                    if !parameters.iter().any(|p| p.name == *label) {
                        self.diagnostics.report(ParseDiagnostic::UnknownParameterLabel {
                            label: label.clone(),
                        });
                        return None;
                    }
                    if labelled.insert(label.as_str(), &argument.expression).is_some() {
                        self.diagnostics.report(ParseDiagnostic::DuplicateParameterLabel {
                            label: label.clone(),
                        });
                        return None;
                    }
                }
                None => positional.push(&argument.expression),
            }
        }

        let mut positional = positional.into_iter();
        let mut bound = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            if let Some(expression) = labelled.get(parameter.name.as_str()) {
                bound.push(ConstructorArgumentSyntax::Normal((*expression).clone()));
            } else if parameter.is_params() {
                let rest: Vec<ExpressionSyntax> = positional.by_ref().cloned().collect();
                bound.push(match rest.as_slice() {
                    [single] if single.is_array_like() => {
                        ConstructorArgumentSyntax::Normal(single.clone())
                    }
                    _ => ConstructorArgumentSyntax::Params(rest),
                });
            } else if let Some(expression) = positional.next() {
                bound.push(ConstructorArgumentSyntax::Normal(expression.clone()));
            } else if parameter.is_optional() {
                bound.push(ConstructorArgumentSyntax::Default);
            } else {
                self.diagnostics.report(ParseDiagnostic::MissingRequiredArgument {
                    parameter: parameter.name.clone(),
                });
                return None;
            }
        }

        let excess = positional.count();
        if excess > 0 {
            self.diagnostics
                .report(ParseDiagnostic::ExcessPositionalArguments { count: excess });
            return None;
        }
        Some(bound)
    }

    fn fail(&self, diagnostic: ParseDiagnostic) -> bool {
        self.diagnostics.report(diagnostic);
        false
    }
}

impl SyntacticPass for SyntacticParser {
    fn try_parse(
        &self,
        recorder: &mut dyn SyntacticRecorder,
        data: &AttributeData,
        syntax: &AttributeSyntax,
    ) -> bool {
        let Some(class) = &data.attribute_class else {
            return self.fail(ParseDiagnostic::UnresolvedAttributeClass);
        };
        if syntax.type_arguments.len() != class.type_parameters.len() {
            return self.fail(ParseDiagnostic::SyntaxTypeArgumentCount {
                parameters: class.type_parameters.len(),
                arguments: syntax.type_arguments.len(),
            });
        }
        let Some(constructor) = &data.constructor else {
            return self.fail(ParseDiagnostic::MissingConstructor);
        };
        let Some(constructor_arguments) =
            self.bind_constructor_arguments(&constructor.parameters, &syntax.arguments)
        else {
            return false;
        };

        for (parameter, argument) in class.type_parameters.iter().zip(&syntax.type_arguments) {
            if !recorder.record_type_argument(parameter, argument) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Type,
                    parameter: parameter.name.clone(),
                });
            }
        }

        for (parameter, argument) in constructor.parameters.iter().zip(&constructor_arguments) {
            if !recorder.record_constructor_argument(parameter, argument) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Constructor,
                    parameter: parameter.name.clone(),
                });
            }
        }

        let mut named_arguments = 0;
        for argument in &syntax.arguments {
            let Some(name) = &argument.name_equals else {
                continue;
            };
            if !recorder.record_named_argument(name, &argument.expression) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Named,
                    parameter: name.clone(),
                });
            }
            named_arguments += 1;
        }

        tracing::trace!(
            attribute = %class.name,
            type_arguments = syntax.type_arguments.len(),
            constructor_arguments = constructor_arguments.len(),
            named_arguments,
            "syntactic pass complete"
        );
        true
    }
}

impl Default for SyntacticParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SyntacticParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntacticParser").finish_non_exhaustive()
    }
}
