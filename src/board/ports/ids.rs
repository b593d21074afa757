//! Identifier generation port.

/// Source of globally unique identifiers.
///
/// The store does not handle collisions beyond rejecting a duplicate id,
/// so implementations must not repeat values.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn generate(&self) -> String;
}
