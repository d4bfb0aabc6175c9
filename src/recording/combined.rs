use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::base::{ArgumentValue, ExpressionSyntax, TypeRef};
use crate::location::{ArgumentLocator, CollectionLocation, Location};
use crate::pattern::ArgumentPattern;

use super::{
    CombinedConstructorRecorder, CombinedNamedRecorder, CombinedTypeRecorder,
    ConstructorArgumentSyntax, DetachedCombinedRecorder,
};

/// Builds detached recorders that receive an argument value and its syntax
/// in one call.
pub struct CombinedRecorders<R> {
    locator: ArgumentLocator,
    _record: PhantomData<fn(&mut R)>,
}

impl<R: 'static> CombinedRecorders<R> {
    pub fn new() -> Self {
        Self {
            locator: ArgumentLocator::new(),
            _record: PhantomData,
        }
    }

    pub fn type_argument(
        &self,
        record: impl Fn(&mut R, &TypeRef, &ExpressionSyntax) -> bool + Send + Sync + 'static,
    ) -> CombinedTypeRecorder<R> {
        DetachedCombinedRecorder::new(record)
    }

    pub fn assign_type_argument(
        &self,
        assign: impl Fn(&mut R, TypeRef, Location) + Send + Sync + 'static,
    ) -> CombinedTypeRecorder<R> {
        let locator = self.locator;
        DetachedCombinedRecorder::new(
            move |record, argument: &TypeRef, syntax: &ExpressionSyntax| {
                assign(record, argument.clone(), locator.locate(syntax));
                true
            },
        )
    }

    /// Constructor argument recorder receiving the raw value and syntax.
    pub fn constructor(
        &self,
        record: impl Fn(&mut R, &ArgumentValue, &ConstructorArgumentSyntax) -> bool
        + Send
        + Sync
        + 'static,
    ) -> CombinedConstructorRecorder<R> {
        DetachedCombinedRecorder::new(record)
    }

    /// Non-`params` constructor argument fitted to `pattern`, with its location.
    ///
    /// A defaulted argument is located at [`Location::NONE`]; element-wise
    /// `params` syntax is rejected.
    pub fn assign_constructor<P>(
        &self,
        pattern: P,
        assign: impl Fn(&mut R, P::Output, Location) + Send + Sync + 'static,
    ) -> CombinedConstructorRecorder<R>
    where
        P: ArgumentPattern + 'static,
    {
        let locator = self.locator;
        DetachedCombinedRecorder::new(
            move |record, argument: &ArgumentValue, syntax: &ConstructorArgumentSyntax| {
                let location = match syntax {
                    ConstructorArgumentSyntax::Normal(expression) => locator.locate(expression),
                    ConstructorArgumentSyntax::Default => Location::NONE,
                    ConstructorArgumentSyntax::Params(elements) => {
                        tracing::debug!(
                            elements = elements.len(),
                            "params syntax given to a single-valued constructor recorder"
                        );
                        return false;
                    }
                };
                match pattern.try_fit(argument) {
                    Ok(value) => {
                        assign(record, value, location);
                        true
                    }
                    Err(mismatch) => {
                        tracing::debug!(%mismatch, "constructor argument did not fit pattern");
                        false
                    }
                }
            },
        )
    }

    /// Array-valued constructor argument fitted to `pattern`, with the
    /// location of the collection and its elements.
    pub fn assign_collection<P>(
        &self,
        pattern: P,
        assign: impl Fn(&mut R, P::Output, Arc<CollectionLocation>) + Send + Sync + 'static,
    ) -> CombinedConstructorRecorder<R>
    where
        P: ArgumentPattern + 'static,
    {
        let locator = self.locator;
        DetachedCombinedRecorder::new(
            move |record, argument: &ArgumentValue, syntax: &ConstructorArgumentSyntax| {
                match pattern.try_fit(argument) {
                    Ok(value) => {
                        assign(record, value, locator.locate_constructor_argument(syntax));
                        true
                    }
                    Err(mismatch) => {
                        tracing::debug!(%mismatch, "constructor argument did not fit pattern");
                        false
                    }
                }
            },
        )
    }

    /// Named argument recorder receiving the raw value and expression.
    pub fn named(
        &self,
        record: impl Fn(&mut R, &ArgumentValue, &ExpressionSyntax) -> bool + Send + Sync + 'static,
    ) -> CombinedNamedRecorder<R> {
        DetachedCombinedRecorder::new(record)
    }

    /// Named argument fitted to `pattern`, with its location.
    pub fn assign_named<P>(
        &self,
        pattern: P,
        assign: impl Fn(&mut R, P::Output, Location) + Send + Sync + 'static,
    ) -> CombinedNamedRecorder<R>
    where
        P: ArgumentPattern + 'static,
    {
        let locator = self.locator;
        DetachedCombinedRecorder::new(
            move |record, argument: &ArgumentValue, syntax: &ExpressionSyntax| {
                match pattern.try_fit(argument) {
                    Ok(value) => {
                        assign(record, value, locator.locate(syntax));
                        true
                    }
                    Err(mismatch) => {
                        tracing::debug!(%mismatch, "named argument did not fit pattern");
                        false
                    }
                }
            },
        )
    }
}

impl<R: 'static> Default for CombinedRecorders<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for CombinedRecorders<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CombinedRecorders")
    }
}
