use std::sync::Arc;

use crate::base::{ExpressionSyntax, Parameter, TypeParameter};
use crate::recording::{AttachedRecorder, ConstructorArgumentSyntax, SyntacticRecorder};
use crate::repositories::{BuiltMappingRepository, Syntactic};

use super::{MapperError, Mappings, SyntacticMapper};

impl<R: 'static, M: Mappings<Syntactic<R>>> SyntacticMapper<R, M> {
    pub fn try_map_type_parameter<'r>(
        &self,
        parameter: &TypeParameter,
        record: &'r mut R,
    ) -> Result<Option<AttachedRecorder<'r, R, ExpressionSyntax>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.type_recorder(parameter).map(|recorder| recorder.attach(record)))
    }

    pub fn try_map_constructor_parameter<'r>(
        &self,
        parameter: &Parameter,
        record: &'r mut R,
    ) -> Result<Option<AttachedRecorder<'r, R, ConstructorArgumentSyntax>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.constructor_recorder(parameter).map(|recorder| recorder.attach(record)))
    }

    pub fn try_map_named_parameter<'r>(
        &self,
        name: &str,
        record: &'r mut R,
    ) -> Result<Option<AttachedRecorder<'r, R, ExpressionSyntax>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.named_recorder(name).map(|recorder| recorder.attach(record)))
    }

    /// A [`SyntacticRecorder`] writing into `record` through this mapper.
    pub fn recorder<'r>(
        &self,
        record: &'r mut R,
    ) -> Result<MappedSyntacticRecorder<'r, R>, MapperError> {
        Ok(MappedSyntacticRecorder {
            repository: self.repository()?,
            record,
        })
    }
}

/// Feeds argument syntax to the recorders a mapper registered.
pub struct MappedSyntacticRecorder<'r, R: 'static> {
    repository: Arc<BuiltMappingRepository<Syntactic<R>>>,
    record: &'r mut R,
}

impl<R: 'static> SyntacticRecorder for MappedSyntacticRecorder<'_, R> {
    fn record_type_argument(
        &mut self,
        parameter: &TypeParameter,
        syntax: &ExpressionSyntax,
    ) -> bool {
        self.repository
            .type_recorder(parameter)
            .is_none_or(|recorder| recorder.try_record(self.record, syntax))
    }

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        syntax: &ConstructorArgumentSyntax,
    ) -> bool {
        self.repository
            .constructor_recorder(parameter)
            .is_none_or(|recorder| recorder.try_record(self.record, syntax))
    }

    fn record_named_argument(&mut self, name: &str, syntax: &ExpressionSyntax) -> bool {
        self.repository
            .named_recorder(name)
            .is_none_or(|recorder| recorder.try_record(self.record, syntax))
    }
}
