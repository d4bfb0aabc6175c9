use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Equality of parameter names, expressed as a canonical key.
///
/// Two names are equal iff their keys are equal.
pub trait NameComparer: fmt::Debug + Send + Sync {
    fn key<'a>(&self, name: &'a str) -> Cow<'a, str>;

    fn equals(&self, a: &str, b: &str) -> bool {
        self.key(a) == self.key(b)
    }
}

/// Exact, case-sensitive comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordinal;

impl NameComparer for Ordinal {
    fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(name)
    }
}

/// Case-insensitive comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalIgnoreCase;

impl NameComparer for OrdinalIgnoreCase {
    fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        // Titlecase letters such as `ǅ` are not uppercase but still lowercase.
        if name.chars().flat_map(char::to_lowercase).eq(name.chars()) {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_lowercase())
        }
    }
}

/// Name comparers per parameter category.
#[derive(Debug, Clone)]
pub struct ParameterComparer {
    pub type_parameter: Arc<dyn NameComparer>,
    pub constructor_parameter: Arc<dyn NameComparer>,
    pub named_parameter: Arc<dyn NameComparer>,
}

impl ParameterComparer {
    /// Use `comparer` for every category.
    pub fn uniform(comparer: Arc<dyn NameComparer>) -> Self {
        Self {
            type_parameter: comparer.clone(),
            constructor_parameter: comparer.clone(),
            named_parameter: comparer,
        }
    }

    pub fn case_insensitive() -> Self {
        Self::uniform(Arc::new(OrdinalIgnoreCase))
    }
}

impl Default for ParameterComparer {
    fn default() -> Self {
        Self::uniform(Arc::new(Ordinal))
    }
}
