//! Source locations of recorded arguments.
//!
//! - [`Location`] - Where a single argument appears
//! - [`CollectionLocation`] - Where an array argument appears, plus each element
//! - [`ArgumentLocator`] - Computes both from argument syntax

mod collection;
mod locator;

pub use collection::CollectionLocation;
pub use locator::ArgumentLocator;

use text_size::TextRange;

/// The location of an argument in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    /// No source location, e.g. for a defaulted argument
    #[default]
    None,
    Source(TextRange),
}

impl Location {
    pub const NONE: Location = Location::None;

    pub fn range(&self) -> Option<TextRange> {
        match self {
            Location::None => None,
            Location::Source(range) => Some(*range),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Location::None)
    }
}

impl From<TextRange> for Location {
    fn from(range: TextRange) -> Self {
        Location::Source(range)
    }
}
