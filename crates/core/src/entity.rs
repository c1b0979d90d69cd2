//! Mapping from schema types to store collection names.
//!
//! Collection names are declared per type rather than derived mechanically
//! from the type name. A lowering rule ("lowercase the type name") breaks as
//! soon as one collection has an irregular name - a `BlogPost` type living in
//! a `blogs` collection, for example - so the mapping is data, not logic.

/// A schema type persisted in a named store collection.
///
/// Each implementor declares the collection its documents live in. The store
/// adapter uses this constant for every insert and query, so there is exactly
/// one place where a type's collection name is defined.
///
/// # Example
///
/// ```
/// use campus_market_core::Entity;
///
/// struct BlogPost;
///
/// impl Entity for BlogPost {
///     // Irregular plural: the override is just data.
///     const COLLECTION: &'static str = "blogs";
/// }
///
/// assert_eq!(BlogPost::COLLECTION, "blogs");
/// ```
pub trait Entity {
    /// Name of the store collection holding documents of this type.
    const COLLECTION: &'static str;
}
