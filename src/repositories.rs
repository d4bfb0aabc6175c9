//! Mapping repositories: which recorder handles which parameter.
//!
//! A repository is appendable until built. Building snapshots the mappings
//! into an immutable view that the mappers look parameters up in.
//!
//! ```text
//! MappingRepository<U>                  (appendable, one per mapper)
//!   ├── type_parameters:        TypeMappingRepository   (indexed XOR named)
//!   ├── constructor_parameters: NamedMappingRepository
//!   └── named_parameters:       NamedMappingRepository
//!        │ build()
//!        ▼
//! BuiltMappingRepository<U>             (immutable snapshot)
//! ```
//!
//! The use case `U` ([`Semantic`], [`Syntactic`], [`Split`], [`Combined`])
//! fixes the recorder type stored per category and the recorder factory
//! handed to the `*_with` registration methods.

mod comparer;
mod error;
mod named_mapping;
mod type_mapping;
mod use_case;

pub use comparer::{NameComparer, Ordinal, OrdinalIgnoreCase, ParameterComparer};
pub use error::RepositoryError;
pub use named_mapping::{BuiltNamedMappings, NamedMappingRepository};
pub use type_mapping::{BuiltTypeMappings, TypeMappingRepository};
pub use use_case::{Combined, MappingUseCase, Semantic, Split, Syntactic};

use std::fmt;

use crate::base::{Parameter, TypeParameter};

/// Appendable mappings for all three parameter categories.
pub struct MappingRepository<U: MappingUseCase> {
    pub type_parameters: TypeMappingRepository<U::TypeRecorder, U::Recorders>,
    pub constructor_parameters: NamedMappingRepository<U::ConstructorRecorder, U::Recorders>,
    pub named_parameters: NamedMappingRepository<U::NamedRecorder, U::Recorders>,
}

impl<U: MappingUseCase> MappingRepository<U> {
    pub fn new(comparer: &ParameterComparer, throw_on_multiple_builds: bool) -> Self {
        Self {
            type_parameters: TypeMappingRepository::new(
                comparer.type_parameter.clone(),
                U::recorders(),
                throw_on_multiple_builds,
            ),
            constructor_parameters: NamedMappingRepository::new(
                comparer.constructor_parameter.clone(),
                U::recorders(),
                throw_on_multiple_builds,
            ),
            named_parameters: NamedMappingRepository::new(
                comparer.named_parameter.clone(),
                U::recorders(),
                throw_on_multiple_builds,
            ),
        }
    }

    /// Snapshot all three categories.
    pub fn build(&mut self) -> Result<BuiltMappingRepository<U>, RepositoryError> {
        Ok(BuiltMappingRepository {
            type_parameters: self.type_parameters.build()?,
            constructor_parameters: self.constructor_parameters.build()?,
            named_parameters: self.named_parameters.build()?,
        })
    }
}

impl<U: MappingUseCase> fmt::Debug for MappingRepository<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingRepository")
            .field("type_parameters", &self.type_parameters)
            .field("constructor_parameters", &self.constructor_parameters)
            .field("named_parameters", &self.named_parameters)
            .finish()
    }
}

/// Immutable mappings for all three parameter categories.
pub struct BuiltMappingRepository<U: MappingUseCase> {
    pub type_parameters: BuiltTypeMappings<U::TypeRecorder>,
    pub constructor_parameters: BuiltNamedMappings<U::ConstructorRecorder>,
    pub named_parameters: BuiltNamedMappings<U::NamedRecorder>,
}

impl<U: MappingUseCase> BuiltMappingRepository<U> {
    /// The recorder mapped to `parameter`, if any.
    pub fn type_recorder(&self, parameter: &TypeParameter) -> Option<&U::TypeRecorder> {
        let found = self.type_parameters.get(parameter);
        if found.is_none() {
            tracing::debug!(
                parameter = %parameter.name,
                ordinal = parameter.ordinal,
                "type parameter is not mapped"
            );
        }
        found
    }

    pub fn constructor_recorder(&self, parameter: &Parameter) -> Option<&U::ConstructorRecorder> {
        unmapped_if_none(
            self.constructor_parameters.get(&parameter.name),
            "constructor",
            &parameter.name,
        )
    }

    pub fn named_recorder(&self, name: &str) -> Option<&U::NamedRecorder> {
        unmapped_if_none(self.named_parameters.get(name), "named", name)
    }
}

fn unmapped_if_none<T>(found: Option<T>, category: &'static str, name: &str) -> Option<T> {
    if found.is_none() {
        tracing::debug!(category, parameter = name, "parameter is not mapped");
    }
    found
}

impl<U: MappingUseCase> Clone for BuiltMappingRepository<U> {
    fn clone(&self) -> Self {
        Self {
            type_parameters: self.type_parameters.clone(),
            constructor_parameters: self.constructor_parameters.clone(),
            named_parameters: self.named_parameters.clone(),
        }
    }
}

impl<U: MappingUseCase> fmt::Debug for BuiltMappingRepository<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltMappingRepository")
            .field("type_parameters", &self.type_parameters)
            .field("constructor_parameters", &self.constructor_parameters)
            .field("named_parameters", &self.named_parameters)
            .finish()
    }
}

pub type SemanticMappingRepository<R> = MappingRepository<Semantic<R>>;
pub type SyntacticMappingRepository<R> = MappingRepository<Syntactic<R>>;
pub type SplitMappingRepository<S, Y> = MappingRepository<Split<S, Y>>;
pub type CombinedMappingRepository<R> = MappingRepository<Combined<R>>;
