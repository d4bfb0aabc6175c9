use std::fmt;
use std::marker::PhantomData;

use crate::base::{ArgumentValue, TypeRef};
use crate::pattern::ArgumentPattern;

use super::{DetachedRecorder, SemanticArgumentRecorder, SemanticTypeRecorder};

/// Builds detached recorders for the semantic pass.
pub struct SemanticRecorders<R>(PhantomData<fn(&mut R)>);

impl<R: 'static> SemanticRecorders<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }

    /// Type argument recorder from a callback that may reject the type.
    pub fn type_argument(
        &self,
        record: impl Fn(&mut R, &TypeRef) -> bool + Send + Sync + 'static,
    ) -> SemanticTypeRecorder<R> {
        DetachedRecorder::new(record)
    }

    /// Type argument recorder that always accepts.
    pub fn assign_type_argument(
        &self,
        assign: impl Fn(&mut R, TypeRef) + Send + Sync + 'static,
    ) -> SemanticTypeRecorder<R> {
        DetachedRecorder::new(move |record, argument: &TypeRef| {
            assign(record, argument.clone());
            true
        })
    }

    /// Argument recorder receiving the raw value.
    pub fn argument(
        &self,
        record: impl Fn(&mut R, &ArgumentValue) -> bool + Send + Sync + 'static,
    ) -> SemanticArgumentRecorder<R> {
        DetachedRecorder::new(record)
    }

    /// Argument recorder fitting the value to `pattern` first.
    ///
    /// A value that does not fit is rejected without calling `record`.
    pub fn fitted<P>(
        &self,
        pattern: P,
        record: impl Fn(&mut R, P::Output) -> bool + Send + Sync + 'static,
    ) -> SemanticArgumentRecorder<R>
    where
        P: ArgumentPattern + 'static,
    {
        DetachedRecorder::new(move |data, argument: &ArgumentValue| {
            match pattern.try_fit(argument) {
                Ok(value) => record(data, value),
                Err(mismatch) => {
                    tracing::debug!(%mismatch, "semantic argument did not fit pattern");
                    false
                }
            }
        })
    }

    /// Argument recorder fitting the value to `pattern` and storing it.
    pub fn assign<P>(
        &self,
        pattern: P,
        assign: impl Fn(&mut R, P::Output) + Send + Sync + 'static,
    ) -> SemanticArgumentRecorder<R>
    where
        P: ArgumentPattern + 'static,
    {
        self.fitted(pattern, move |record, value| {
            assign(record, value);
            true
        })
    }
}

impl<R: 'static> Default for SemanticRecorders<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for SemanticRecorders<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SemanticRecorders")
    }
}
