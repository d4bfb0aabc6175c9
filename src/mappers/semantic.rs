use std::sync::Arc;

use crate::base::{ArgumentValue, Parameter, TypeParameter, TypeRef};
use crate::recording::{AttachedRecorder, SemanticRecorder};
use crate::repositories::{BuiltMappingRepository, Semantic};

use super::{MapperError, Mappings, SemanticMapper};

impl<R: 'static, M: Mappings<Semantic<R>>> SemanticMapper<R, M> {
    /// The recorder mapped to `parameter`, bound to `record`; `None` if unmapped.
    pub fn try_map_type_parameter<'r>(
        &self,
        parameter: &TypeParameter,
        record: &'r mut R,
    ) -> Result<Option<AttachedRecorder<'r, R, TypeRef>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.type_recorder(parameter).map(|recorder| recorder.attach(record)))
    }

    pub fn try_map_constructor_parameter<'r>(
        &self,
        parameter: &Parameter,
        record: &'r mut R,
    ) -> Result<Option<AttachedRecorder<'r, R, ArgumentValue>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.constructor_recorder(parameter).map(|recorder| recorder.attach(record)))
    }

    pub fn try_map_named_parameter<'r>(
        &self,
        name: &str,
        record: &'r mut R,
    ) -> Result<Option<AttachedRecorder<'r, R, ArgumentValue>>, MapperError> {
        let repository = self.repository()?;
        Ok(repository.named_recorder(name).map(|recorder| recorder.attach(record)))
    }

    /// A [`SemanticRecorder`] writing into `record` through this mapper.
    pub fn recorder<'r>(
        &self,
        record: &'r mut R,
    ) -> Result<MappedSemanticRecorder<'r, R>, MapperError> {
        Ok(MappedSemanticRecorder {
            repository: self.repository()?,
            record,
        })
    }
}

/// Feeds semantic arguments to the recorders a mapper registered.
///
/// Unmapped parameters are skipped and count as recorded.
pub struct MappedSemanticRecorder<'r, R: 'static> {
    repository: Arc<BuiltMappingRepository<Semantic<R>>>,
    record: &'r mut R,
}

impl<R: 'static> SemanticRecorder for MappedSemanticRecorder<'_, R> {
    fn record_type_argument(&mut self, parameter: &TypeParameter, argument: &TypeRef) -> bool {
        self.repository
            .type_recorder(parameter)
            .is_none_or(|recorder| recorder.try_record(self.record, argument))
    }

    fn record_constructor_argument(
        &mut self,
        parameter: &Parameter,
        argument: &ArgumentValue,
    ) -> bool {
        self.repository
            .constructor_recorder(parameter)
            .is_none_or(|recorder| recorder.try_record(self.record, argument))
    }

    fn record_named_argument(&mut self, name: &str, argument: &ArgumentValue) -> bool {
        self.repository
            .named_recorder(name)
            .is_none_or(|recorder| recorder.try_record(self.record, argument))
    }
}
