use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::TypeParameter;

use super::{NameComparer, RepositoryError};

/// Appendable type parameter mappings, by index or by name.
///
/// Index and name mappings are mutually exclusive: once either kind holds an
/// entry, registering the other kind fails.
pub struct TypeMappingRepository<Rec, F> {
    indexed: FxHashMap<usize, Rec>,
    /// Keyed by the comparer's key, in registration order
    named: IndexMap<SmolStr, Rec>,
    comparer: Arc<dyn NameComparer>,
    recorders: F,
    built: bool,
    throw_on_multiple_builds: bool,
}

impl<Rec: Clone, F> TypeMappingRepository<Rec, F> {
    pub fn new(
        comparer: Arc<dyn NameComparer>,
        recorders: F,
        throw_on_multiple_builds: bool,
    ) -> Self {
        Self {
            indexed: FxHashMap::default(),
            named: IndexMap::new(),
            comparer,
            recorders,
            built: false,
            throw_on_multiple_builds,
        }
    }

    /// Map the type parameter at `index` to `recorder`.
    pub fn add_indexed_mapping(&mut self, index: usize, recorder: Rec) -> Result<(), RepositoryError> {
        self.check_indexed(index)?;
        self.indexed.insert(index, recorder);
        Ok(())
    }

    /// Map the type parameter at `index` to a recorder built from the
    /// recorder factory.
    pub fn add_indexed_mapping_with(
        &mut self,
        index: usize,
        create: impl FnOnce(&F) -> Rec,
    ) -> Result<(), RepositoryError> {
        self.check_indexed(index)?;
        let recorder = create(&self.recorders);
        self.indexed.insert(index, recorder);
        Ok(())
    }

    /// Map the type parameter called `name` to `recorder`.
    pub fn add_named_mapping(&mut self, name: &str, recorder: Rec) -> Result<(), RepositoryError> {
        let key = self.check_named(name)?;
        self.named.insert(key, recorder);
        Ok(())
    }

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

    /// Snapshot the current mappings.
    ///
    /// Fails if already built and multiple builds are disallowed.
    pub fn build(&mut self) -> Result<BuiltTypeMappings<Rec>, RepositoryError> {
        if self.built && self.throw_on_multiple_builds {
            return Err(RepositoryError::AlreadyBuilt);
        }
        self.built = true;

        Ok(BuiltTypeMappings {
            indexed: Arc::new(self.indexed.clone()),
            named: Arc::new(self.named.clone()),
            comparer: self.comparer.clone(),
        })
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    fn check_indexed(&self, index: usize) -> Result<(), RepositoryError> {
        if self.built {
            return Err(RepositoryError::AlreadyBuilt);
        }
        if !self.named.is_empty() {
            return Err(RepositoryError::IndexedAfterNamed(index));
        }
        if self.indexed.contains_key(&index) {
            return Err(RepositoryError::DuplicateIndex(index));
        }
        Ok(())
    }

    fn check_named(&self, name: &str) -> Result<SmolStr, RepositoryError> {
        if self.built {
            return Err(RepositoryError::AlreadyBuilt);
        }
        if !self.indexed.is_empty() {
            return Err(RepositoryError::NamedAfterIndexed(name.into()));
        }
        let key = SmolStr::new(self.comparer.key(name));
        if self.named.contains_key(&key) {
            return Err(RepositoryError::DuplicateName(name.into()));
        }
        Ok(key)
    }
}

impl<Rec, F> fmt::Debug for TypeMappingRepository<Rec, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMappingRepository")
            .field("indexed", &self.indexed.len())
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .field("built", &self.built)
            .finish_non_exhaustive()
    }
}

/// Immutable snapshot of type parameter mappings.
pub struct BuiltTypeMappings<Rec> {
    indexed: Arc<FxHashMap<usize, Rec>>,
    named: Arc<IndexMap<SmolStr, Rec>>,
    comparer: Arc<dyn NameComparer>,
}

impl<Rec> BuiltTypeMappings<Rec> {
    pub fn indexed(&self) -> &FxHashMap<usize, Rec> {
        &self.indexed
    }

    /// Named mappings, keyed by the comparer's key for each name.
    pub fn named(&self) -> &IndexMap<SmolStr, Rec> {
        &self.named
    }

    pub fn get_indexed(&self, index: usize) -> Option<&Rec> {
        self.indexed.get(&index)
    }

    pub fn get_named(&self, name: &str) -> Option<&Rec> {
        self.named.get(&*self.comparer.key(name))
    }

    /// The recorder for `parameter`: by name if mapped by name, else by ordinal.
    pub fn get(&self, parameter: &TypeParameter) -> Option<&Rec> {
        self.get_named(&parameter.name)
            .or_else(|| self.get_indexed(parameter.ordinal))
    }

    pub fn is_empty(&self) -> bool {
        self.indexed.is_empty() && self.named.is_empty()
    }
}

impl<Rec> Clone for BuiltTypeMappings<Rec> {
    fn clone(&self) -> Self {
        Self {
            indexed: Arc::clone(&self.indexed),
            named: Arc::clone(&self.named),
            comparer: Arc::clone(&self.comparer),
        }
    }
}

impl<Rec> fmt::Debug for BuiltTypeMappings<Rec> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltTypeMappings")
            .field("indexed", &self.indexed.keys().collect::<Vec<_>>())
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .finish()
    }
}
