use smol_str::SmolStr;
use thiserror::Error;

/// A mapping registration or build violated a repository invariant.
///
/// These are programming errors in the mapping setup and are reported by
/// the call that commits them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("the repository has already been built")]
    AlreadyBuilt,

    #[error("index {0} is already mapped")]
    DuplicateIndex(usize),

    #[error("parameter '{0}' is already mapped")]
    DuplicateName(SmolStr),

    /// Type parameters are mapped either by index or by name, never both.
    #[error("cannot map index {0}: the repository already holds named mappings")]
    IndexedAfterNamed(usize),

    #[error("cannot map '{0}': the repository already holds indexed mappings")]
    NamedAfterIndexed(SmolStr),
}
