//! Core item identity and the dimension-value seam.

/// Stable identifier assigned when the content is authored.
///
/// Ids are unique within a collection and never change; the lightbox tracks
/// focus by id so it survives visible-set recomputation.
pub type ItemId = u32;

/// A record that can be filtered along named dimensions.
///
/// A dimension value is a plain string drawn from a small vocabulary
/// (`"2024"`, `"Events"`, `"2022-2026"`). A record that does not carry the
/// named dimension returns `None` and matches only the wildcard selection.
pub trait Faceted {
    /// Stable id of this record.
    fn id(&self) -> ItemId;

    /// Value of this record on the named dimension, if it carries one.
    fn dimension_value(&self, dimension: &str) -> Option<&str>;
}

impl<T: Faceted> Faceted for &T {
    fn id(&self) -> ItemId {
        T::id(*self)
    }

    fn dimension_value(&self, dimension: &str) -> Option<&str> {
        T::dimension_value(*self, dimension)
    }
}
