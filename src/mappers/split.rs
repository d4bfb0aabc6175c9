use std::sync::Arc;

use crate::base::{ArgumentValue, ExpressionSyntax, Parameter, TypeParameter, TypeRef};
use crate::recording::{
    AttachedRecorder, ConstructorArgumentSyntax, SemanticRecorder, SyntacticRecorder,
};
use crate::repositories::{BuiltMappingRepository, Split};

use super::{MapperError, Mappings, SplitMapper};

/// A split mapper registers one provider per parameter and hands out its
/// semantic half for the semantic record `S` and its syntactic half for the
/// syntactic record `Y`.
impl<S: 'static, Y: 'static, M: Mappings<Split<S, Y>>> SplitMapper<S, Y, M> {
    pub fn try_map_semantic_type_parameter<'r>(
        &self,
        parameter: &TypeParameter,
        record: &'r mut S,
    ) -> Result<Option<AttachedRecorder<'r, S, TypeRef>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.type_recorder(parameter).map(|provider| provider.semantic.attach(record)))
    }

    pub fn try_map_semantic_constructor_parameter<'r>(
        &self,
        parameter: &Parameter,
        record: &'r mut S,
    ) -> Result<Option<AttachedRecorder<'r, S, ArgumentValue>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository
            .constructor_recorder(parameter)
            .map(|provider| provider.semantic.attach(record)))
    }

    pub fn try_map_semantic_named_parameter<'r>(
        &self,
        name: &str,
        record: &'r mut S,
    ) -> Result<Option<AttachedRecorder<'r, S, ArgumentValue>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.named_recorder(name).map(|provider| provider.semantic.attach(record)))
    }

    pub fn try_map_syntactic_type_parameter<'r>(
        &self,
        parameter: &TypeParameter,
        record: &'r mut Y,
    ) -> Result<Option<AttachedRecorder<'r, Y, ExpressionSyntax>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.type_recorder(parameter).map(|provider| provider.syntactic.attach(record)))
    }

    pub fn try_map_syntactic_constructor_parameter<'r>(
        &self,
        parameter: &Parameter,
        record: &'r mut Y,
    ) -> Result<Option<AttachedRecorder<'r, Y, ConstructorArgumentSyntax>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository
            .constructor_recorder(parameter)
            .map(|provider| provider.syntactic.attach(record)))
    }

    pub fn try_map_syntactic_named_parameter<'r>(
        &self,
        name: &str,
        record: &'r mut Y,
    ) -> Result<Option<AttachedRecorder<'r, Y, ExpressionSyntax>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.named_recorder(name).map(|provider| provider.syntactic.attach(record)))
    }

    pub fn semantic_recorder<'r>(
        &self,
        record: &'r mut S,
    ) -> Result<MappedSplitSemanticRecorder<'r, S, Y>, MapperError> {
        Ok(MappedSplitSemanticRecorder {
            repository: self.repository()?,
            record,
        })
    }

    pub fn syntactic_recorder<'r>(
        &self,
        record: &'r mut Y,
    ) -> Result<MappedSplitSyntacticRecorder<'r, S, Y>, MapperError> {
        Ok(MappedSplitSyntacticRecorder {
            repository: self.repository()?,
            record,
        })
    }
}

/// The semantic half of a split mapper, as a [`SemanticRecorder`].
pub struct MappedSplitSemanticRecorder<'r, S: 'static, Y: 'static> {
    repository: Arc<BuiltMappingRepository<Split<S, Y>>>,
    record: &'r mut S,
}

impl<S: 'static, Y: 'static> SemanticRecorder for MappedSplitSemanticRecorder<'_, S, Y> {
    fn record_type_argument(&mut self, parameter: &TypeParameter, argument: &TypeRef) -> bool {
        self.repository
            .type_recorder(parameter)
            .is_none_or(|provider| provider.semantic.try_record(self.record, argument))
    }

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        argument: &ArgumentValue,
    ) -> bool {
        self.repository
            .constructor_recorder(parameter)
            .is_none_or(|provider| provider.semantic.try_record(self.record, argument))
    }

    fn record_named_argument(&mut self, name: &str, argument: &ArgumentValue) -> bool {
        self.repository
            .named_recorder(name)
            .is_none_or(|provider| provider.semantic.try_record(self.record, argument))
    }
}

/// The syntactic half of a split mapper, as a [`SyntacticRecorder`].
pub struct MappedSplitSyntacticRecorder<'r, S: 'static, Y: 'static> {
    repository: Arc<BuiltMappingRepository<Split<S, Y>>>,
    record: &'r mut Y,
}

impl<S: 'static, Y: 'static> SyntacticRecorder for MappedSplitSyntacticRecorder<'_, S, Y> {
    fn record_type_argument(
        &mut self,
        parameter: &TypeParameter,
        syntax: &ExpressionSyntax,
    ) -> bool {
        self.repository
            .type_recorder(parameter)
            .is_none_or(|provider| provider.syntactic.try_record(self.record, syntax))
    }

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        syntax: &ConstructorArgumentSyntax,
    ) -> bool {
        self.repository
            .constructor_recorder(parameter)
            .is_none_or(|provider| provider.syntactic.try_record(self.record, syntax))
    }

    fn record_named_argument(&mut self, name: &str, syntax: &ExpressionSyntax) -> bool {
        self.repository
            .named_recorder(name)
            .is_none_or(|provider| provider.syntactic.try_record(self.record, syntax))
    }
}
