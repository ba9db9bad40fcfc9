//! Repository seam: find entities by their business identifier.

/// An entity addressed by a single string identifier column.
pub trait Identifiable {
    /// Name of the identifier column in canonicalized rows (e.g. "sku").
    fn identifier_property() -> &'static str;

    /// The entity's identifier value.
    fn identifier(&self) -> &str;
}

/// Read access keyed by business identifier.
pub trait IdentifiableObjectRepository<T>: Send + Sync {
    /// Name of the identifier column for the stored entity type.
    fn identifier_property(&self) -> &'static str;

    fn find_one_by_identifier(&self, identifier: &str) -> Option<T>;
}
