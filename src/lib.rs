//! # attribute-parser
//!
//! Extracts the arguments of attribute applications into typed records.
//!
//! A consumer registers, per attribute parameter, a recorder that fits the
//! bound value to a typed pattern and stores it. The parsers then feed one
//! application's type arguments, constructor arguments and named arguments
//! to those recorders, either by value (semantic), by source location
//! (syntactic), or both at once (combined).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parsing      → SemanticParser, SyntacticParser, CombinedParser, diagnostics
//!   ↓
//! mappers      → Mapper (semantic/syntactic/split/combined), mapped recorders
//!   ↓
//! repositories → Type/Named mapping repositories, comparers, build snapshots
//!   ↓
//! recording    → Recorder traits, detached/attached recorders, factories
//!   ↓
//! pattern      → ArgumentPattern and the pattern constructors
//!   ↓
//! location     → Location, CollectionLocation, ArgumentLocator
//!   ↓
//! base         → Host model: symbols, constant values, expression syntax
//! ```

// ============================================================================
// MODULES (dependency order: base → location → pattern → recording →
//          repositories → mappers → parsing)
// ============================================================================

/// Host model: TypeRef, Parameter, ArgumentValue, ExpressionSyntax
pub mod base;

/// Source locations of arguments and argument collections
pub mod location;

/// Typed patterns that bound argument values are fitted to
pub mod pattern;

/// Recorder traits and the factories building detached recorders
pub mod recording;

/// Parameter-to-recorder mapping repositories
pub mod repositories;

/// Lazily initialized mappers serving recorders per parameter
pub mod mappers;

/// Semantic, syntactic and combined attribute parsers
pub mod parsing;

// Re-export the types most consumers touch
pub use base::{
    ArgumentValue, AttributeData, AttributeSyntax, ExpressionSyntax, Parameter, TypeParameter,
    TypeRef,
};
pub use location::{CollectionLocation, Location};
pub use mappers::{
    CombinedMapper, MapperError, MapperOptions, Mappings, SemanticMapper, SplitMapper,
    SyntacticMapper,
};
pub use parsing::{
    CombinedParser, DiagnosticCollector, DiagnosticSink, ParseDiagnostic, SemanticParser,
    SyntacticParser,
};
pub use pattern::{ArgumentEnum, ArgumentMismatch, ArgumentPattern};
pub use recording::{
    CombinedRecorder, ConstructorArgumentSyntax, SemanticRecorder, SyntacticRecorder,
};
pub use repositories::{ParameterComparer, RepositoryError};
