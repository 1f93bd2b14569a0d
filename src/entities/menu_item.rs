//! Persisted menu-item records

use crate::core::{Data, DataService, Entity, FieldValue, StoreResult};
use serde::{Deserialize, Serialize};

/// A menu item belonging to a restaurant.
///
/// Every field except the key is optional: the persisted shape only promises
/// that a field holds its declared type when it is present. `restaurant_id`
/// is a plain reference with no integrity checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub item_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
}

impl MenuItem {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            name: None,
            price: None,
            description: None,
            restaurant_id: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn for_restaurant(mut self, restaurant_id: impl Into<String>) -> Self {
        self.restaurant_id = Some(restaurant_id.into());
        self
    }
}

impl Entity for MenuItem {
    fn resource_name() -> &'static str {
        "menuitems"
    }

    fn resource_name_singular() -> &'static str {
        "menuItem"
    }

    fn id_field() -> &'static str {
        "itemId"
    }

    fn id(&self) -> &str {
        &self.item_id
    }
}

impl Data for MenuItem {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    fn indexed_fields() -> &'static [&'static str] {
        &["name", "price", "description", "restaurantId"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "itemId" => Some(FieldValue::from(self.item_id.as_str())),
            "name" => Some(FieldValue::from(self.name.as_deref())),
            "price" => Some(FieldValue::from(self.price)),
            "description" => Some(FieldValue::from(self.description.as_deref())),
            "restaurantId" => Some(FieldValue::from(self.restaurant_id.as_deref())),
            _ => None,
        }
    }
}

/// All menu items that reference the given restaurant, in store order.
pub async fn menu_items_for_restaurant<S>(store: &S, restaurant_id: &str) -> StoreResult<Vec<MenuItem>>
where
    S: DataService<MenuItem> + ?Sized,
{
    store.search("restaurantId", restaurant_id).await
}
