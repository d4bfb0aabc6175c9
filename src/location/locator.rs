use std::sync::Arc;

use crate::base::{ExpressionKind, ExpressionSyntax};
use crate::recording::ConstructorArgumentSyntax;

use super::{CollectionLocation, Location};

/// Computes argument locations from argument syntax.
///
/// Parentheses and casts around a collection argument are transparent: the
/// location of `((object[])new object[] { .. })` is that of its initializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentLocator;

impl ArgumentLocator {
    pub fn new() -> Self {
        Self
    }

    /// Location of a single-valued argument.
    pub fn locate(&self, expression: &ExpressionSyntax) -> Location {
        Location::Source(expression.range)
    }

    /// Location of an array-valued argument passed as one expression.
    pub fn locate_collection(&self, expression: &ExpressionSyntax) -> Arc<CollectionLocation> {
        let stripped = expression.stripped();

        match &stripped.kind {
            ExpressionKind::ArrayCreation {
                initializer: Some(initializer),
            } => CollectionLocation::new(
                Location::Source(initializer.range),
                self.locate_all(&initializer.elements),
            ),
            ExpressionKind::Collection { elements } => CollectionLocation::new(
                Location::Source(stripped.range),
                self.locate_all(elements),
            ),
            _ => CollectionLocation::new(Location::Source(stripped.range), Vec::new()),
        }
    }

    /// Location of a `params` argument given element by element.
    pub fn locate_params(&self, elements: &[ExpressionSyntax]) -> Arc<CollectionLocation> {
        CollectionLocation::new(Location::None, self.locate_all(elements))
    }

    /// Collection location of a constructor argument of any shape.
    pub fn locate_constructor_argument(
        &self,
        syntax: &ConstructorArgumentSyntax,
    ) -> Arc<CollectionLocation> {
        match syntax {
            ConstructorArgumentSyntax::Normal(expression) => self.locate_collection(expression),
            ConstructorArgumentSyntax::Params(elements) => self.locate_params(elements),
            ConstructorArgumentSyntax::Default => CollectionLocation::none(),
        }
    }

    fn locate_all(&self, elements: &[ExpressionSyntax]) -> Vec<Location> {
        elements.iter().map(|element| self.locate(element)).collect()
    }
}
