use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a sellable item belonging to a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the application service on save
    pub id: i32,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Units in stock
    pub quantity: i32,
    /// Id of the category this product belongs to. Referential integrity
    /// is the application service's concern, not this layer's.
    pub category_id: i32,
}

/// Inbound payload for creating or editing a product.
///
/// Every field carries a serde default so a missing field surfaces as a
/// field-level validation error rather than a body rejection.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductData {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub category_id: i32,
}

/// Which payload fields an edit applies to an existing product.
///
/// The catalog API historically rebuilt an edited product from the
/// identifier, name, and description alone; quantity and category id
/// were not taken from the payload. `AllFields` forwards the complete
/// payload instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UpdatePolicy {
    /// Apply only the name and description from the payload
    #[default]
    NameDescription,
    /// Apply every payload field, including quantity and category id
    AllFields,
}

impl Product {
    /// Build an unsaved entity from the inbound payload. The application
    /// service assigns the definitive id on save.
    pub fn from_data(data: ProductData) -> Self {
        Self {
            id: 0,
            name: data.name,
            description: data.description,
            quantity: data.quantity,
            category_id: data.category_id,
        }
    }

    /// Build an entity carrying an externally supplied id and every
    /// payload field.
    pub fn from_data_with_id(id: i32, data: ProductData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            quantity: data.quantity,
            category_id: data.category_id,
        }
    }

    /// Partial rebuild used by the historical edit path: quantity and
    /// category id are left at their defaults rather than taken from the
    /// payload.
    pub fn from_edit_data(id: i32, data: ProductData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            quantity: 0,
            category_id: 0,
        }
    }
}
