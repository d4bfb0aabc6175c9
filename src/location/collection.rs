use std::sync::{Arc, LazyLock};

use super::Location;

static NONE: LazyLock<Arc<CollectionLocation>> = LazyLock::new(|| {
    Arc::new(CollectionLocation {
        collection: Location::None,
        elements: Vec::new(),
    })
});

/// The location of a collection argument and of each of its elements.
///
/// Always handed out behind an `Arc`. A location with no collection and no
/// elements is the shared [`CollectionLocation::none`] instance.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CollectionLocation {
    collection: Location,
    elements: Vec<Location>,
}

impl CollectionLocation {
    /// Create a collection location, returning the shared empty instance
    /// when there is nothing to locate.
    pub fn new(collection: Location, elements: Vec<Location>) -> Arc<Self> {
        if collection.is_none() && elements.is_empty() {
            return Self::none();
        }
        Arc::new(Self {
            collection,
            elements,
        })
    }

    /// The shared empty collection location.
    pub fn none() -> Arc<Self> {
        Arc::clone(&NONE)
    }

    /// Location of the collection expression as a whole.
    pub fn collection(&self) -> Location {
        self.collection
    }

    /// Locations of the elements, in order.
    pub fn elements(&self) -> &[Location] {
        &self.elements
    }

    /// Whether this is the shared empty instance (identity, not equality).
    pub fn is_none(self: &Arc<Self>) -> bool {
        Arc::ptr_eq(self, &NONE)
    }
}
