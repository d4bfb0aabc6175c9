//! Parse diagnostics and where they are reported.

use std::fmt;

use parking_lot::Mutex;
use smol_str::SmolStr;
use thiserror::Error;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The argument list a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentCategory {
    Type,
    Constructor,
    Named,
}

impl fmt::Display for ArgumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgumentCategory::Type => "type",
            ArgumentCategory::Constructor => "constructor",
            ArgumentCategory::Named => "named",
        })
    }
}

/// A condition that made a parse pass fail, or that a pass noticed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseDiagnostic {
    #[error("attribute class did not resolve")]
    UnresolvedAttributeClass,

    #[error("attribute has {arguments} type arguments for {parameters} type parameters")]
    TypeArgumentCount { parameters: usize, arguments: usize },

    #[error("no attribute constructor was selected")]
    MissingConstructor,

    #[error("constructor has {parameters} parameters but {arguments} arguments were bound")]
    ConstructorArgumentCount { parameters: usize, arguments: usize },

    #[error("attribute syntax has {arguments} type arguments for {parameters} type parameters")]
    SyntaxTypeArgumentCount { parameters: usize, arguments: usize },

    #[error("no argument for required constructor parameter `{parameter}`")]
    MissingRequiredArgument { parameter: SmolStr },

    #[error("no constructor parameter named `{label}`")]
    UnknownParameterLabel { label: SmolStr },

    #[error("constructor parameter `{label}` is labelled more than once")]
    DuplicateParameterLabel { label: SmolStr },

    #[error("{count} positional arguments left over after binding the constructor")]
    ExcessPositionalArguments { count: usize },

    #[error("{category} argument `{parameter}` was not recorded")]
    ArgumentRejected {
        category: ArgumentCategory,
        parameter: SmolStr,
    },

    #[error("semantic pass failed")]
    SemanticPassFailed,

    #[error("syntactic pass failed")]
    SyntacticPassFailed,

    #[error("{category} argument count mismatch: {semantic} semantic, {syntactic} syntactic")]
    CountMismatch {
        category: ArgumentCategory,
        semantic: usize,
        syntactic: usize,
    },
}

impl ParseDiagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            ParseDiagnostic::ArgumentRejected { .. } => Severity::Warning,
            ParseDiagnostic::SemanticPassFailed | ParseDiagnostic::SyntacticPassFailed => {
                Severity::Info
            }
            _ => Severity::Error,
        }
    }
}

// ============================================================================
// SINKS
// ============================================================================

/// Receives the diagnostics of a parser.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: ParseDiagnostic);
}

/// Emits diagnostics as `tracing` events. The default sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, diagnostic: ParseDiagnostic) {
        match diagnostic.severity() {
            Severity::Error => tracing::warn!(%diagnostic, "attribute parse error"),
            Severity::Warning => tracing::debug!(%diagnostic, "attribute parse warning"),
            Severity::Info => tracing::trace!(%diagnostic, "attribute parse note"),
        }
    }
}

/// Collects diagnostics for later inspection.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Mutex<Vec<ParseDiagnostic>>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all diagnostics, in report order.
    pub fn diagnostics(&self) -> Vec<ParseDiagnostic> {
        self.diagnostics.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Number of diagnostics equal to `diagnostic`.
    pub fn count_of(&self, diagnostic: &ParseDiagnostic) -> usize {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| *d == diagnostic)
            .count()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Drain all diagnostics.
    pub fn take(&self) -> Vec<ParseDiagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, diagnostic: ParseDiagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}
