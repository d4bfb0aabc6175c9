use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::{NameComparer, RepositoryError};

/// Appendable mappings keyed by parameter name.
///
/// Used for constructor parameters and named parameters.
pub struct NamedMappingRepository<Rec, F> {
    named: IndexMap<SmolStr, Rec>,
    comparer: Arc<dyn NameComparer>,
    recorders: F,
    built: bool,
    throw_on_multiple_builds: bool,
}

impl<Rec: Clone, F> NamedMappingRepository<Rec, F> {
    pub fn new(
        comparer: Arc<dyn NameComparer>,
        recorders: F,
        throw_on_multiple_builds: bool,
    ) -> Self {
        Self {
            named: IndexMap::new(),
            comparer,
            recorders,
            built: false,
            throw_on_multiple_builds,
        }
    }

    pub fn add_named_mapping(&mut self, name: &str, recorder: Rec) -> Result<(), RepositoryError> {
        let key = self.check_named(name)?;
        self.named.insert(key, recorder);
        Ok(())
    }

    /// Map `name` to a recorder built from the recorder factory.
    pub fn add_named_mapping_with(
        &mut self,
        name: &str,
        create: impl FnOnce(&F) -> Rec,
    ) -> Result<(), RepositoryError> {
        let key = self.check_named(name)?;
        let recorder = create(&self.recorders);
        self.named.insert(key, recorder);
        Ok(())
    }

    pub fn build(&mut self) -> Result<BuiltNamedMappings<Rec>, RepositoryError> {
        if self.built && self.throw_on_multiple_builds {
            return Err(RepositoryError::AlreadyBuilt);
        }
        self.built = true;

        Ok(BuiltNamedMappings {
            named: Arc::new(self.named.clone()),
            comparer: self.comparer.clone(),
        })
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    fn check_named(&self, name: &str) -> Result<SmolStr, RepositoryError> {
        if self.built {
            return Err(RepositoryError::AlreadyBuilt);
        }
        let key = SmolStr::new(self.comparer.key(name));
        if self.named.contains_key(&key) {
            return Err(RepositoryError::DuplicateName(name.into()));
        }
        Ok(key)
    }
}

impl<Rec, F> fmt::Debug for NamedMappingRepository<Rec, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedMappingRepository")
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .field("built", &self.built)
            .finish_non_exhaustive()
    }
}

/// Immutable snapshot of name-keyed mappings.
pub struct BuiltNamedMappings<Rec> {
    named: Arc<IndexMap<SmolStr, Rec>>,
    comparer: Arc<dyn NameComparer>,
}

impl<Rec> BuiltNamedMappings<Rec> {
    /// Mappings keyed by the comparer's key for each name.
    pub fn named(&self) -> &IndexMap<SmolStr, Rec> {
        &self.named
    }

    pub fn get(&self, name: &str) -> Option<&Rec> {
        self.named.get(&*self.comparer.key(name))
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}

impl<Rec> Clone for BuiltNamedMappings<Rec> {
    fn clone(&self) -> Self {
        Self {
            named: Arc::clone(&self.named),
            comparer: Arc::clone(&self.comparer),
        }
    }
}

impl<Rec> fmt::Debug for BuiltNamedMappings<Rec> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltNamedMappings")
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .finish()
    }
}
