use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::base::ExpressionSyntax;
use crate::location::{ArgumentLocator, CollectionLocation, Location};

use super::{
    ConstructorArgumentSyntax, DetachedRecorder, SyntacticConstructorRecorder,
    SyntacticExpressionRecorder,
};

/// Builds detached recorders for the syntactic pass.
///
/// The `assign_*` builders convert syntax to [`Location`]s with an
/// [`ArgumentLocator`] before handing it over.
pub struct SyntacticRecorders<R> {
    locator: ArgumentLocator,
    _record: PhantomData<fn(&mut R)>,
}

impl<R: 'static> SyntacticRecorders<R> {
    pub fn new() -> Self {
        Self {
            locator: ArgumentLocator::new(),
            _record: PhantomData,
        }
    }

    /// Recorder for type arguments and named arguments, receiving the expression.
    pub fn expression(
        &self,
        record: impl Fn(&mut R, &ExpressionSyntax) -> bool + Send + Sync + 'static,
    ) -> SyntacticExpressionRecorder<R> {
        DetachedRecorder::new(record)
    }

    /// Recorder for type arguments and named arguments, receiving the location.
    pub fn assign_location(
        &self,
        assign: impl Fn(&mut R, Location) + Send + Sync + 'static,
    ) -> SyntacticExpressionRecorder<R> {
        let locator = self.locator;
        DetachedRecorder::new(move |record, syntax: &ExpressionSyntax| {
            assign(record, locator.locate(syntax));
            true
        })
    }

    /// Constructor argument recorder receiving the syntax in any shape.
    pub fn constructor(
        &self,
        record: impl Fn(&mut R, &ConstructorArgumentSyntax) -> bool + Send + Sync + 'static,
    ) -> SyntacticConstructorRecorder<R> {
        DetachedRecorder::new(record)
    }

    /// Recorder for a non-`params` constructor argument.
    ///
    /// A defaulted argument is recorded as [`Location::NONE`]; element-wise
    /// `params` syntax is rejected.
    pub fn assign_constructor_location(
        &self,
        assign: impl Fn(&mut R, Location) + Send + Sync + 'static,
    ) -> SyntacticConstructorRecorder<R> {
        let locator = self.locator;
        DetachedRecorder::new(move |record, syntax: &ConstructorArgumentSyntax| {
            match syntax {
                ConstructorArgumentSyntax::Normal(expression) => {
                    assign(record, locator.locate(expression))
                }
                ConstructorArgumentSyntax::Default => assign(record, Location::NONE),
                ConstructorArgumentSyntax::Params(elements) => {
                    tracing::debug!(
                        elements = elements.len(),
                        "params syntax given to a single-valued constructor recorder"
                    );
                    return false;
                }
            }
            true
        })
    }

    /// Recorder for an array-valued (typically `params`) constructor argument.
    pub fn assign_collection_location(
        &self,
        assign: impl Fn(&mut R, Arc<CollectionLocation>) + Send + Sync + 'static,
    ) -> SyntacticConstructorRecorder<R> {
        let locator = self.locator;
        DetachedRecorder::new(move |record, syntax: &ConstructorArgumentSyntax| {
            assign(record, locator.locate_constructor_argument(syntax));
            true
        })
    }
}

impl<R: 'static> Default for SyntacticRecorders<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for SyntacticRecorders<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SyntacticRecorders")
    }
}
