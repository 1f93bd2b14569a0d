//! Restaurant records as served by the directory service

use crate::core::{Data, Entity, FieldValue};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a restaurant, unique within one fetched collection.
///
/// The directory sends either a JSON string or a JSON number; both are kept
/// as text so the id can be used as a render key and in URLs unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RestaurantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for RestaurantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(number_text(&n)),
        })
    }
}

// Integral floats are written without a fraction, so `1.0` keys and links
// the same as `1`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

/// Accept any JSON value for an optional text field; only a non-empty
/// string is kept.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// A restaurant as returned by the directory service.
///
/// Only the fields the listing uses are typed; everything else the service
/// sends is kept in `extra` so the record serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub restaurant_id: RestaurantId,

    pub name: String,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Restaurant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            restaurant_id: RestaurantId::new(id),
            name: name.into(),
            description: None,
            image: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The restaurant's own image URL, if it has a usable one.
    ///
    /// An empty string counts as no image.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Navigation target for this restaurant's menu page
    pub fn menu_path(&self) -> String {
        format!("/user/restaurants/{}/menu", self.restaurant_id)
    }
}

impl Entity for Restaurant {
    fn resource_name() -> &'static str {
        "restaurants"
    }

    fn resource_name_singular() -> &'static str {
        "restaurant"
    }

    fn id_field() -> &'static str {
        "restaurantId"
    }

    fn id(&self) -> &str {
        self.restaurant_id.as_str()
    }
}

impl Data for Restaurant {
    fn name(&self) -> &str {
        &self.name
    }

    fn indexed_fields() -> &'static [&'static str] {
        &["name"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "restaurantId" => Some(FieldValue::from(self.restaurant_id.as_str())),
            "name" => Some(FieldValue::from(self.name.as_str())),
            "description" => Some(FieldValue::from(self.description())),
            "image" => Some(FieldValue::from(self.image())),
            _ => None,
        }
    }
}
