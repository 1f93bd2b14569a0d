//! Entity traits defining the core abstraction for persisted and fetched records

use crate::core::field::FieldValue;

/// Base trait for all records in the system.
///
/// Records are keyed by a string identifier carried in one of their own
/// fields (`itemId`, `restaurantId`, ...). `id_field` names that field on the
/// wire so storage backends can query by it.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The collection name used by storage backends (e.g., "menuitems")
    fn resource_name() -> &'static str;

    /// The singular record name (e.g., "menuItem")
    fn resource_name_singular() -> &'static str;

    /// Wire name of the identifier field
    fn id_field() -> &'static str;

    /// Get the identifier for this record instance
    fn id(&self) -> &str;
}

/// Trait for records that carry a display name and searchable fields.
pub trait Data: Entity {
    /// Get the display name of this record
    fn name(&self) -> &str;

    /// List of fields that can be searched
    fn indexed_fields() -> &'static [&'static str];

    /// Get the value of a specific field by its wire name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
