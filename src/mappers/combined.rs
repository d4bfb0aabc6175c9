use std::sync::Arc;

use crate::base::{ArgumentValue, ExpressionSyntax, Parameter, TypeParameter, TypeRef};
use crate::recording::{AttachedCombinedRecorder, CombinedRecorder, ConstructorArgumentSyntax};
use crate::repositories::{BuiltMappingRepository, Combined};

use super::{CombinedMapper, MapperError, Mappings};

impl<R: 'static, M: Mappings<Combined<R>>> CombinedMapper<R, M> {
    pub fn try_map_type_parameter<'r>(
        &self,
        parameter: &TypeParameter,
        record: &'r mut R,
    ) -> Result<Option<AttachedCombinedRecorder<'r, R, TypeRef, ExpressionSyntax>>, MapperError>
    {
        let repository = self.repository()?;
        Ok(repository.type_recorder(parameter).map(|recorder| recorder.attach(record)))
    }

    pub fn try_map_constructor_parameter<'r>(
        &self,
        parameter: &Parameter,
        record: &'r mut R,
    ) -> Result<
        Option<AttachedCombinedRecorder<'r, R, ArgumentValue, ConstructorArgumentSyntax>>,
        MapperError,
    > {
        let repository = self.repository()?;
        Ok(repository.constructor_recorder(parameter).map(|recorder| recorder.attach(record)))
    }

    pub fn try_map_named_parameter<'r>(
        &self,
        name: &str,
        record: &'r mut R,
    ) -> Result<
        Option<AttachedCombinedRecorder<'r, R, ArgumentValue, ExpressionSyntax>>,
        MapperError,
    > {
        let repository = self.repository()?;
        Ok(repository.named_recorder(name).map(|recorder| recorder.attach(record)))
    }

    /// A [`CombinedRecorder`] writing into `record` through this mapper.
    pub fn recorder<'r>(
        &self,
        record: &'r mut R,
    ) -> Result<MappedCombinedRecorder<'r, R>, MapperError> {
        Ok(MappedCombinedRecorder {
            repository: self.repository()?,
            record,
        })
    }
}

/// Feeds merged arguments to the recorders a mapper registered.
pub struct MappedCombinedRecorder<'r, R: 'static> {
    repository: Arc<BuiltMappingRepository<Combined<R>>>,
    record: &'r mut R,
}

impl<R: 'static> CombinedRecorder for MappedCombinedRecorder<'_, R> {
    fn record_type_argument(
        &mut self,
        parameter: &TypeParameter,
        argument: &TypeRef,
        syntax: &ExpressionSyntax,
    ) -> bool {
        self.repository
            .type_recorder(parameter)
            .is_none_or(|recorder| recorder.try_record(self.record, argument, syntax))
    }

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        argument: &ArgumentValue,
        syntax: &ConstructorArgumentSyntax,
    ) -> bool {
        self.repository
            .constructor_recorder(parameter)
            .is_none_or(|recorder| recorder.try_record(self.record, argument, syntax))
    }

    fn record_named_argument(
        &mut self,
        name: &str,
        argument: &ArgumentValue,
        syntax: &ExpressionSyntax,
    ) -> bool {
        self.repository
            .named_recorder(name)
            .is_none_or(|recorder| recorder.try_record(self.record, argument, syntax))
    }
}
