//! Core traits shared across layers.

/// Trait for entities whose identifier is assigned by the backend.
///
/// An entity without an id has never been persisted.
pub trait Entity {
    /// The identifier type.
    type Id: Copy;

    /// Returns the entity's identifier, if it has been persisted.
    fn id(&self) -> Option<Self::Id>;

    /// Returns true once the backend has assigned an identifier.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
