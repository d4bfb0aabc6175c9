use std::fmt;
use std::sync::Arc;

use crate::base::AttributeData;
use crate::recording::SemanticRecorder;

use super::{ArgumentCategory, DiagnosticSink, ParseDiagnostic, SemanticPass, TracingDiagnostics};

/// Feeds the bound type arguments, constructor arguments and named arguments
/// of an [`AttributeData`] to a [`SemanticRecorder`].
#[derive(Clone)]
pub struct SemanticParser {
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl SemanticParser {
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self { diagnostics }
    }

    fn fail(&self, diagnostic: ParseDiagnostic) -> bool {
        self.diagnostics.report(diagnostic);
        false
    }
}

impl SemanticPass for SemanticParser {
    fn try_parse(&self, recorder: &mut dyn SemanticRecorder, data: &AttributeData) -> bool {
        let Some(class) = &data.attribute_class else {
            return self.fail(ParseDiagnostic::UnresolvedAttributeClass);
        };
        if class.type_arguments.len() != class.type_parameters.len() {
            return self.fail(ParseDiagnostic::TypeArgumentCount {
                parameters: class.type_parameters.len(),
                arguments: class.type_arguments.len(),
            });
        }
        let Some(constructor) = &data.constructor else {
            return self.fail(ParseDiagnostic::MissingConstructor);
        };
        if data.constructor_arguments.len() != constructor.parameters.len() {
            return self.fail(ParseDiagnostic::ConstructorArgumentCount {
                parameters: constructor.parameters.len(),
                arguments: data.constructor_arguments.len(),
            });
        }

        for (parameter, argument) in class.type_parameters.iter().zip(&class.type_arguments) {
            if !recorder.record_type_argument(parameter, argument) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Type,
                    parameter: parameter.name.clone(),
                });
            }
        }

        for (parameter, argument) in constructor
            .parameters
            .iter()
            .zip(&data.constructor_arguments)
        {
            if !recorder.record_constructor_argument(parameter, argument) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Constructor,
                    parameter: parameter.name.clone(),
                });
            }
        }

        for argument in &data.named_arguments {
            if !recorder.record_named_argument(&argument.name, &argument.value) {
                return self.fail(ParseDiagnostic::ArgumentRejected {
                    category: ArgumentCategory::Named,
                    parameter: argument.name.clone(),
                });
            }
        }

        tracing::trace!(
            attribute = %class.name,
            type_arguments = class.type_arguments.len(),
            constructor_arguments = data.constructor_arguments.len(),
            named_arguments = data.named_arguments.len(),
            "semantic pass complete"
        );
        true
    }
}

impl Default for SemanticParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SemanticParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticParser").finish_non_exhaustive()
    }
}
