use std::fmt;
use std::sync::Arc;

use crate::repositories::{BuiltMappingRepository, MappingRepository, MappingUseCase};

use super::latch::RepositoryLatch;
use super::{MapperError, MapperOptions, Mappings};

/// Lazily builds one mapping repository from a [`Mappings`] hook and serves
/// lookups from it.
///
/// The lookup operations live on the use-case specific aliases, e.g.
/// [`SemanticMapper`](super::SemanticMapper).
pub struct Mapper<U: MappingUseCase, M> {
    mappings: M,
    options: MapperOptions,
    latch: RepositoryLatch<U>,
}

impl<U: MappingUseCase, M: Mappings<U>> Mapper<U, M> {
    pub fn new(mappings: M) -> Self {
        Self::with_options(mappings, MapperOptions::default())
    }

    pub fn with_options(mappings: M, options: MapperOptions) -> Self {
        Self {
            mappings,
            options,
            latch: RepositoryLatch::new(),
        }
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Whether the repository has been built.
    pub fn is_initialized(&self) -> bool {
        self.latch.is_initialized()
    }

    /// The built repository, running the mapping hook on first call.
    pub fn repository(&self) -> Result<Arc<BuiltMappingRepository<U>>, MapperError> {
        self.latch.get_or_init(|| {
            let mut repository = MappingRepository::<U>::new(
                &self.options.comparer,
                self.options.throw_on_multiple_builds,
            );
            self.mappings.add_mappings(&mut repository)?;
            let built = repository.build()?;

            tracing::debug!(
                type_parameters = built.type_parameters.indexed().len()
                    + built.type_parameters.named().len(),
                constructor_parameters = built.constructor_parameters.named().len(),
                named_parameters = built.named_parameters.named().len(),
                "built mapping repository"
            );
            Ok(built)
        })
    }
}

impl<U: MappingUseCase, M> fmt::Debug for Mapper<U, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("options", &self.options)
            .field("initialized", &self.latch.is_initialized())
            .finish_non_exhaustive()
    }
}
