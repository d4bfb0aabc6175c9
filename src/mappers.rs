//! Mappers: lazily built repositories serving per-parameter recorders.
//!
//! A [`Mapper`] owns a [`Mappings`] hook. On the first lookup it creates an
//! appendable [`MappingRepository`], lets the hook register recorders, and
//! builds it. Every later lookup reads the built snapshot.
//!
//! ```text
//! try_map_*(parameter, record)
//!     │  first call only
//!     ├──────────────► add_mappings(&mut repository) ─► build()
//!     ▼
//! lookup (type: name, then ordinal; constructor/named: name)
//!     │
//!     ├─ mapped   ─► Some(attached recorder)
//!     └─ unmapped ─► None   (logged; the argument is skipped)
//! ```
//!
//! Four flavours share the machinery: [`SemanticMapper`], [`SyntacticMapper`],
//! [`SplitMapper`] (separate semantic and syntactic records) and
//! [`CombinedMapper`] (one record receiving value and syntax together).

mod combined;
mod latch;
mod mapper;
mod semantic;
mod split;
mod syntactic;

pub use combined::MappedCombinedRecorder;
pub use mapper::Mapper;
pub use semantic::MappedSemanticRecorder;
pub use split::{MappedSplitSemanticRecorder, MappedSplitSyntacticRecorder};
pub use syntactic::MappedSyntacticRecorder;

use thiserror::Error;

use crate::repositories::{
    Combined, MappingRepository, MappingUseCase, ParameterComparer, RepositoryError, Semantic,
    Split, Syntactic,
};

pub type SemanticMapper<R, M> = Mapper<Semantic<R>, M>;
pub type SyntacticMapper<R, M> = Mapper<Syntactic<R>, M>;
pub type SplitMapper<S, Y, M> = Mapper<Split<S, Y>, M>;
pub type CombinedMapper<R, M> = Mapper<Combined<R>, M>;

/// Registers a mapper's recorders.
///
/// Called at most once per mapper, on first use. Closures of the right
/// shape implement this trait.
pub trait Mappings<U: MappingUseCase>: Send + Sync {
    fn add_mappings(&self, repository: &mut MappingRepository<U>) -> Result<(), RepositoryError>;
}

impl<U, F> Mappings<U> for F
where
    U: MappingUseCase,
    F: Fn(&mut MappingRepository<U>) -> Result<(), RepositoryError> + Send + Sync,
{
    fn add_mappings(&self, repository: &mut MappingRepository<U>) -> Result<(), RepositoryError> {
        self(repository)
    }
}

/// Mapper configuration.
#[derive(Debug, Clone)]
pub struct MapperOptions {
    /// Name comparison per parameter category
    pub comparer: ParameterComparer,
    /// Whether the repository rejects a second `build()`
    pub throw_on_multiple_builds: bool,
}

impl MapperOptions {
    pub fn with_comparer(mut self, comparer: ParameterComparer) -> Self {
        self.comparer = comparer;
        self
    }

    pub fn allow_multiple_builds(mut self) -> Self {
        self.throw_on_multiple_builds = false;
        self
    }
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            comparer: ParameterComparer::default(),
            throw_on_multiple_builds: true,
        }
    }
}

/// The mapper could not provide its repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
    /// The mapping hook registered an invalid mapping. Reported on every
    /// lookup; the hook is not run again.
    #[error("failed to initialize mappings: {0}")]
    Initialization(#[from] RepositoryError),

    /// A lookup was made while the mapping hook was still running on this
    /// thread, or after the hook panicked.
    #[error("mapping repository requested during its own initialization")]
    ReentrantInitialization,
}
